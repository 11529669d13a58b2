//! Adapter around the Markdown collaborator: parses README markdown with
//! pulldown-cmark and maps the event stream onto styled terminal lines. The
//! parsing itself is entirely the library's; this module only decides how each
//! construct looks in a terminal cell grid.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub fn to_lines(markdown: &str) -> Vec<Line<'static>> {
    let parser = Parser::new_ext(markdown, Options::empty());

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut heading: Option<u8> = None;
    let mut bold = 0usize;
    let mut italic = 0usize;
    let mut in_code_block = false;
    let mut list_depth = 0usize;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush(&mut lines, &mut spans);
                push_blank(&mut lines);
                heading = Some(heading_depth(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                flush(&mut lines, &mut spans);
                heading = None;
                push_blank(&mut lines);
            }
            Event::End(TagEnd::Paragraph) => {
                flush(&mut lines, &mut spans);
                push_blank(&mut lines);
            }
            Event::Start(Tag::List(_)) => {
                flush(&mut lines, &mut spans);
                list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    push_blank(&mut lines);
                }
            }
            Event::Start(Tag::Item) => {
                flush(&mut lines, &mut spans);
                let indent = "  ".repeat(list_depth.saturating_sub(1));
                spans.push(Span::raw(format!("{}• ", indent)));
            }
            Event::End(TagEnd::Item) => {
                flush(&mut lines, &mut spans);
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut lines, &mut spans);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                push_blank(&mut lines);
            }
            Event::Start(Tag::Strong) => bold += 1,
            Event::End(TagEnd::Strong) => bold = bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => italic += 1,
            Event::End(TagEnd::Emphasis) => italic = italic.saturating_sub(1),
            Event::Text(text) => {
                if in_code_block {
                    for code_line in text.lines() {
                        lines.push(Line::from(Span::styled(
                            format!("  {}", code_line),
                            Style::default().fg(Color::Gray),
                        )));
                    }
                } else {
                    spans.push(Span::styled(
                        text.into_string(),
                        text_style(heading, bold > 0, italic > 0),
                    ));
                }
            }
            Event::Code(code) => {
                spans.push(Span::styled(
                    code.into_string(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            Event::SoftBreak => spans.push(Span::raw(" ")),
            Event::HardBreak => flush(&mut lines, &mut spans),
            Event::Rule => {
                flush(&mut lines, &mut spans);
                lines.push(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                push_blank(&mut lines);
            }
            _ => {}
        }
    }

    flush(&mut lines, &mut spans);
    lines
}

fn flush(lines: &mut Vec<Line<'static>>, spans: &mut Vec<Span<'static>>) {
    if !spans.is_empty() {
        lines.push(Line::from(std::mem::take(spans)));
    }
}

// Collapse consecutive structural breaks into a single blank line.
fn push_blank(lines: &mut Vec<Line<'static>>) {
    if lines.last().is_some_and(|l| !l.spans.is_empty()) {
        lines.push(Line::from(""));
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        _ => 3,
    }
}

fn text_style(heading: Option<u8>, bold: bool, italic: bool) -> Style {
    let mut style = Style::default();
    match heading {
        Some(1) => {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        Some(2) => {
            style = style.fg(Color::Cyan);
        }
        Some(_) => {
            style = style.add_modifier(Modifier::BOLD);
        }
        None => {}
    }
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}
