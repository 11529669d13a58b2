//! Responsive page geometry. The portfolio renders as a virtual column of
//! sections scrolled behind a fixed nav bar and help footer; everything here
//! is pure arithmetic so the app state and the renderer agree on where things
//! are.

use crate::nav::{Section, SectionBounds};
use ratatui::layout::Rect;

/// Viewports narrower than this are "compact": single-column cards, collapsed
/// nav, reduced decoration.
pub const COMPACT_MAX_WIDTH: u16 = 100;

pub const NAV_HEIGHT: u16 = 2;
pub const HELP_HEIGHT: u16 = 1;
pub const CARD_HEIGHT: u16 = 7;

const HOME_HEIGHT: u16 = 10;
const ABOUT_HEIGHT: u16 = 9;
const CONTACT_HEIGHT: u16 = 7;
const PROJECTS_HEADER: u16 = 2;

pub fn is_compact(width: u16) -> bool {
    width < COMPACT_MAX_WIDTH
}

pub fn grid_columns(width: u16) -> u16 {
    if is_compact(width) {
        1
    } else {
        2
    }
}

/// Rows available to the scrolled section column.
pub fn content_height(viewport_height: u16) -> u16 {
    viewport_height.saturating_sub(NAV_HEIGHT + HELP_HEIGHT)
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    pub bounds: [SectionBounds; 4],
    pub total_height: u16,
    pub columns: u16,
}

pub fn page_layout(card_count: usize, width: u16) -> PageLayout {
    let columns = grid_columns(width);
    let rows = if card_count == 0 {
        1
    } else {
        (card_count as u16).div_ceil(columns)
    };
    let projects_height = PROJECTS_HEADER + rows * CARD_HEIGHT;

    let heights = [HOME_HEIGHT, ABOUT_HEIGHT, projects_height, CONTACT_HEIGHT];
    let mut top = 0u16;
    let mut bounds = [SectionBounds {
        section: Section::Home,
        top: 0,
        height: 0,
    }; 4];
    for (i, section) in Section::ALL.iter().enumerate() {
        bounds[i] = SectionBounds {
            section: *section,
            top,
            height: heights[i],
        };
        top = top.saturating_add(heights[i]);
    }

    PageLayout {
        bounds,
        total_height: top,
        columns,
    }
}

pub fn max_scroll(layout: &PageLayout, viewport_height: u16) -> u16 {
    layout
        .total_height
        .saturating_sub(content_height(viewport_height))
}

/// Rect of a card in page coordinates (y counts page rows, not screen rows).
pub fn card_page_rect(index: usize, layout: &PageLayout, width: u16) -> Rect {
    let columns = layout.columns.max(1);
    let col = index as u16 % columns;
    let row = index as u16 / columns;
    let card_width = width / columns;
    let projects_top = layout.bounds[Section::Projects.index()].top;

    Rect {
        x: col * card_width,
        y: projects_top + PROJECTS_HEADER + row * CARD_HEIGHT,
        width: card_width,
        height: CARD_HEIGHT,
    }
}

/// Cards fully inside the visible page window. Drives the reveal effect and
/// clipping: partially scrolled cards are simply not drawn yet.
pub fn visible_cards(
    card_count: usize,
    layout: &PageLayout,
    width: u16,
    scroll: u16,
    viewport_height: u16,
) -> Vec<usize> {
    let view_top = scroll;
    let view_bottom = scroll.saturating_add(content_height(viewport_height));

    (0..card_count)
        .filter(|i| {
            let rect = card_page_rect(*i, layout, width);
            rect.y >= view_top && rect.y + rect.height <= view_bottom
        })
        .collect()
}

/// Centered overlay rect for the README modal.
pub fn modal_rect(area: Rect) -> Rect {
    let width = (area.width as u32 * 4 / 5) as u16;
    let height = (area.height as u32 * 4 / 5) as u16;
    let width = width.clamp(20.min(area.width), area.width);
    let height = height.clamp(8.min(area.height), area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Centered overlay rect for the collapsed navigation menu.
pub fn menu_rect(area: Rect) -> Rect {
    let width = 24.min(area.width);
    let height = (Section::ALL.len() as u16 + 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 3,
        width,
        height,
    }
}
