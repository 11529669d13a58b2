//! Frame drawing. Pure view of the `App` state: a fixed nav bar and help
//! footer frame a scrolled column of sections, with the menu and README
//! overlays drawn last.

use crate::app::App;
use crate::fx::RevealPhase;
use crate::layout::{self, CARD_HEIGHT, HELP_HEIGHT, NAV_HEIGHT};
use crate::markdown;
use crate::modal::{ModalState, ReadmeBody, LOADING_MESSAGE, NO_README_MESSAGE};
use crate::models::Project;
use crate::nav::Section;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use std::time::Instant;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    if area.width < 20 || area.height < 8 {
        let message = Paragraph::new("Terminal too small")
            .style(Style::default().fg(Color::Red))
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(message, area);
        return;
    }

    let nav_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: NAV_HEIGHT,
    };
    let help_area = Rect {
        x: area.x,
        y: area.y + area.height - HELP_HEIGHT,
        width: area.width,
        height: HELP_HEIGHT,
    };
    let content_area = Rect {
        x: area.x,
        y: area.y + NAV_HEIGHT,
        width: area.width,
        height: area.height - NAV_HEIGHT - HELP_HEIGHT,
    };

    render_background(f, content_area, app);
    render_sections(f, content_area, app);
    render_nav(f, nav_area, app);
    render_help(f, help_area, app);

    if app.nav.menu_open {
        render_menu(f, area, app);
    }
    if app.modal.is_open() {
        render_modal(f, area, app);
    }
}

fn render_background(f: &mut Frame, area: Rect, app: &App) {
    let Some(background) = &app.background else {
        return;
    };
    if !background.show_dots() {
        return;
    }
    let buf = f.buffer_mut();
    let style = Style::default().fg(Color::DarkGray);
    for (x, y) in background.positions() {
        let px = area.x + x % area.width.max(1);
        let py = area.y + y % area.height.max(1);
        if px < area.right() && py < area.bottom() {
            buf.set_string(px, py, "·", style);
        }
    }
}

fn render_nav(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " GITFOLIO ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
    ];

    if app.is_compact() {
        spans.push(Span::styled(
            format!("☰ {}  ", app.nav.active.title()),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            "(m for menu)",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        for section in Section::ALL {
            let style = if section == app.nav.active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("{}  ", section.title()), style));
        }
    }

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(nav, area);
}

fn render_sections(f: &mut Frame, area: Rect, app: &App) {
    let page = app.page_layout();

    for bounds in &page.bounds {
        let top = bounds.top as i32 - app.scroll as i32;
        let bottom = top + bounds.height as i32;
        if bottom <= 0 || top >= area.height as i32 {
            continue;
        }

        match bounds.section {
            Section::Home => {
                render_text_section(f, area, top, bounds.height, home_lines(app));
            }
            Section::About => {
                render_text_section(f, area, top, bounds.height, about_lines(app));
            }
            Section::Projects => render_projects(f, area, top, app, &page),
            Section::Contact => {
                render_text_section(f, area, top, bounds.height, contact_lines(app));
            }
        }
    }
}

/// Draw a block of section lines at a page offset, clipping at the viewport
/// edges via paragraph scroll.
fn render_text_section(
    f: &mut Frame,
    area: Rect,
    top: i32,
    height: u16,
    lines: Vec<Line<'static>>,
) {
    let clip_top = (-top).max(0) as u16;
    let y = top.max(0) as u16;
    if clip_top >= height || y >= area.height {
        return;
    }
    let visible = (height - clip_top).min(area.height - y);
    if visible == 0 {
        return;
    }

    let rect = Rect {
        x: area.x,
        y: area.y + y,
        width: area.width,
        height: visible,
    };
    let paragraph = Paragraph::new(Text::from(lines)).scroll((clip_top, 0));
    f.render_widget(paragraph, rect);
}

fn home_lines(app: &App) -> Vec<Line<'static>> {
    let title = app.username.replace(['-', '_'], " ");
    vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  I build "),
            Span::styled(
                app.typewriter.text(),
                Style::default().fg(Color::Green),
            ),
            Span::styled("▌", Style::default().fg(Color::Green)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to my terminal portfolio.",
            Style::default().fg(Color::Gray),
        )),
    ]
}

fn about_lines(_app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "  About",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Backend-leaning engineer with a taste for resilient systems,"),
        Line::from("  clean APIs and automation. The projects below are pulled live"),
        Line::from("  from GitHub; open any card to read its documentation without"),
        Line::from("  leaving the terminal."),
    ]
}

fn contact_lines(app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Contact",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                app.profile_url.clone(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(Span::styled(
            "  press o on a card to open its page in the browser",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn render_projects(f: &mut Frame, area: Rect, top: i32, app: &App, page: &layout::PageLayout) {
    let mut header = vec![Line::from(Span::styled(
        "  Projects",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if app.projects_loading {
        header.push(Line::from(Span::styled(
            "  Loading repositories...",
            Style::default().fg(Color::Gray),
        )));
    } else if let Some(status) = &app.status {
        header.push(Line::from(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::Yellow),
        )));
    } else {
        header.push(Line::from(""));
    }
    render_text_section(f, area, top, 2, header);

    let now = Instant::now();
    for (index, project) in app.display.projects.iter().enumerate() {
        let page_rect = layout::card_page_rect(index, page, area.width);
        let card_top = page_rect.y as i32 - app.scroll as i32;
        // Cards pop in whole; a partially scrolled card is simply not drawn.
        if card_top < 0 || card_top + CARD_HEIGHT as i32 > area.height as i32 {
            continue;
        }

        let phase = app.reveal.phase(index, now);
        if phase == RevealPhase::Hidden {
            continue;
        }

        let rect = Rect {
            x: area.x + page_rect.x,
            y: area.y + card_top as u16,
            width: page_rect.width,
            height: page_rect.height,
        };
        render_card(
            f,
            rect,
            project,
            app,
            index == app.selected_card,
            phase == RevealPhase::Settling,
        );
    }
}

fn render_card(
    f: &mut Frame,
    rect: Rect,
    project: &Project,
    app: &App,
    focused: bool,
    settling: bool,
) {
    let dim = if settling {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style.patch(dim))
        .title(Span::styled(
            format!(" ▸ {} ", project.display_title()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
                .patch(dim),
        ));
    if focused {
        if let Some(tilt) = &app.tilt {
            block = block.style(tilt.focus_style());
        }
    }

    let inner = block.inner(rect);
    f.render_widget(block, rect);
    if inner.height < 4 {
        return;
    }

    let description_area = Rect {
        x: inner.x,
        y: inner.y,
        width: inner.width,
        height: 2,
    };
    let description = Paragraph::new(project.description_text().to_string())
        .style(Style::default().fg(Color::Gray).patch(dim))
        .wrap(Wrap { trim: true });
    f.render_widget(description, description_area);

    let mut badge_spans: Vec<Span> = Vec::new();
    for topic in project.badges() {
        badge_spans.push(Span::styled(
            format!("#{} ", topic),
            Style::default().fg(Color::Cyan).patch(dim),
        ));
    }

    let action = if app.display.is_live() {
        "[Enter] View Architecture"
    } else {
        "[Enter] View Source"
    };
    let footer = Paragraph::new(vec![
        Line::from(badge_spans),
        Line::from(Span::styled(
            action,
            Style::default().fg(Color::Green).patch(dim),
        )),
    ]);
    let footer_area = Rect {
        x: inner.x,
        y: inner.y + inner.height - 2,
        width: inner.width,
        height: 2,
    };
    f.render_widget(footer, footer_area);
}

fn render_menu(f: &mut Frame, area: Rect, app: &App) {
    let overlay = layout::menu_rect(area);
    f.render_widget(Clear, overlay);

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let style = if i == app.nav.cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Span::styled(format!(" {} ", section.title()), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Navigation "),
    );
    f.render_widget(list, overlay);
}

fn render_modal(f: &mut Frame, area: Rect, app: &App) {
    let overlay = layout::modal_rect(area);
    f.render_widget(Clear, overlay);

    let title = match app.modal.repo() {
        Some(repo) => format!(" {} / README ", repo),
        None => " README ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);
    if inner.height < 2 {
        return;
    }

    let body_area = Rect {
        x: inner.x,
        y: inner.y,
        width: inner.width,
        height: inner.height - 1,
    };
    let hint_area = Rect {
        x: inner.x,
        y: inner.y + inner.height - 1,
        width: inner.width,
        height: 1,
    };

    let body = match app.modal.state() {
        ModalState::Loading { .. } => Paragraph::new(Span::styled(
            LOADING_MESSAGE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
        )),
        ModalState::Loaded { body, .. } => match body {
            ReadmeBody::Markdown(markdown) => {
                Paragraph::new(Text::from(markdown::to_lines(markdown)))
                    .scroll((app.modal.scroll, 0))
                    .wrap(Wrap { trim: false })
            }
            ReadmeBody::Empty => Paragraph::new(NO_README_MESSAGE),
        },
        ModalState::Error { message, .. } => {
            Paragraph::new(Span::styled(message.clone(), Style::default().fg(Color::Red)))
        }
        ModalState::Closed => return,
    };
    f.render_widget(body, body_area);

    let hint = Paragraph::new(Span::styled(
        " j/k scroll | Esc or click outside to close",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(hint, hint_area);
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let text = if let Some(note) = &app.rate_limit_note {
        format!(" q quit | r refresh | {}", note)
    } else {
        " q quit | r refresh | m menu | Tab section | h/l cards | Enter open | o browser".to_string()
    };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
