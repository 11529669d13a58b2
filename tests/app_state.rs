mod common;

use common::repo;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use gitfolio::app::{App, Command};
use gitfolio::error::PortfolioError;
use gitfolio::models::{DataSource, RateLimitState};
use gitfolio::nav::{scroll_spy, Section, SectionBounds};
use gitfolio::select::FEATURED_TOPIC;

const PROFILE: &str = "https://github.com/octocat";

fn wide_app() -> App {
    App::new(
        "octocat".to_string(),
        PROFILE.to_string(),
        FEATURED_TOPIC.to_string(),
        (120, 40),
    )
}

fn compact_app() -> App {
    App::new(
        "octocat".to_string(),
        PROFILE.to_string(),
        FEATURED_TOPIC.to_string(),
        (80, 24),
    )
}

fn key(app: &mut App, code: KeyCode) -> Command {
    app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn click(app: &mut App, column: u16, row: u16) -> Command {
    app.handle_event(&Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

/// Drive the app through a successful live fetch.
fn load_live(app: &mut App) {
    let Command::FetchProjects { generation } = app.begin_initial_fetch() else {
        panic!("initial fetch should request the repository list");
    };
    let repos = vec![
        repo("terminal-kit", Some("tui widgets"), &[FEATURED_TOPIC], false),
        repo("wire-proto", Some("codec"), &[FEATURED_TOPIC, "rust"], false),
    ];
    app.apply_repos(generation, Ok((repos, RateLimitState::default())));
}

#[test]
fn menu_toggle_locks_background_scroll() {
    let mut app = wide_app();
    assert!(!app.scroll_locked());

    key(&mut app, KeyCode::Char('m'));
    assert!(app.nav.menu_open);
    assert!(app.scroll_locked());

    key(&mut app, KeyCode::Char('m'));
    assert!(!app.nav.menu_open);
    assert!(!app.scroll_locked());
}

#[test]
fn menu_selection_navigates_and_dismisses() {
    let mut app = wide_app();
    key(&mut app, KeyCode::Char('m'));

    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Enter);

    assert!(!app.nav.menu_open);
    assert_eq!(app.nav.active, Section::Projects);
}

#[test]
fn live_card_activation_opens_the_modal() {
    let mut app = wide_app();
    load_live(&mut app);
    assert!(app.display.is_live());

    let command = key(&mut app, KeyCode::Enter);

    match command {
        Command::FetchReadme { repo, generation } => {
            assert_eq!(repo, "terminal-kit");
            assert_eq!(generation, 1);
        }
        other => panic!("expected a README fetch, got {:?}", other),
    }
    assert!(app.modal.is_open());
    assert!(app.scroll_locked());
}

#[test]
fn fallback_cards_open_external_links_never_the_modal() {
    let mut app = wide_app();
    let Command::FetchProjects { generation } = app.begin_initial_fetch() else {
        panic!("expected fetch command");
    };
    app.apply_repos(
        generation,
        Err(PortfolioError::ApiError("boom".to_string())),
    );

    assert_eq!(app.display.source, DataSource::Fallback);
    assert_eq!(app.display.projects.len(), 3);

    let command = key(&mut app, KeyCode::Enter);
    match command {
        Command::OpenExternal { url } => assert_eq!(url, PROFILE),
        other => panic!("expected an external link, got {:?}", other),
    }
    assert!(!app.modal.is_open());
}

#[test]
fn rate_limited_fetch_falls_back_with_a_note() {
    let mut app = wide_app();
    let Command::FetchProjects { generation } = app.begin_initial_fetch() else {
        panic!("expected fetch command");
    };

    app.apply_repos(
        generation,
        Err(PortfolioError::RateLimitExceeded(
            "API rate limit exceeded".to_string(),
        )),
    );

    assert_eq!(app.display.source, DataSource::Fallback);
    assert_eq!(app.display.projects.len(), 3);
    assert!(app.rate_limit_note.is_some());
    assert!(app.status.as_deref().unwrap().contains("rate limit"));
}

#[test]
fn stale_repository_responses_are_dropped() {
    let mut app = wide_app();
    let Command::FetchProjects { generation: first } = app.begin_initial_fetch() else {
        panic!("expected fetch command");
    };
    let Command::FetchProjects { generation: second } = app.refresh() else {
        panic!("expected fetch command");
    };
    assert_ne!(first, second);

    // The superseded fetch completes late and must not render.
    app.apply_repos(
        first,
        Ok((
            vec![repo("old", Some("stale"), &[FEATURED_TOPIC], false)],
            RateLimitState::default(),
        )),
    );
    assert!(app.projects_loading);
    assert!(app.display.projects.is_empty());

    app.apply_repos(
        second,
        Ok((
            vec![repo("new", Some("fresh"), &[FEATURED_TOPIC], false)],
            RateLimitState::default(),
        )),
    );
    assert!(!app.projects_loading);
    assert_eq!(app.display.projects[0].name, "new");
}

#[test]
fn reopened_modal_shows_the_second_repository() {
    let mut app = wide_app();
    load_live(&mut app);

    let Command::FetchReadme { generation: first, .. } = key(&mut app, KeyCode::Enter) else {
        panic!("expected README fetch");
    };
    key(&mut app, KeyCode::Esc);
    assert!(!app.modal.is_open());

    key(&mut app, KeyCode::Right);
    let Command::FetchReadme { repo, generation: second } = key(&mut app, KeyCode::Enter) else {
        panic!("expected README fetch");
    };
    assert_eq!(repo, "wire-proto");

    // First repository's fetch lands late; the overlay must keep waiting for
    // the second one.
    app.apply_readme(first, "terminal-kit", Ok(Some("FIRST".to_string())));
    assert_eq!(app.modal.repo(), Some("wire-proto"));

    app.apply_readme(second, "wire-proto", Ok(Some("SECOND".to_string())));
    assert_eq!(app.modal.repo(), Some("wire-proto"));
}

#[test]
fn backdrop_click_closes_the_modal() {
    let mut app = wide_app();
    load_live(&mut app);
    key(&mut app, KeyCode::Enter);
    assert!(app.modal.is_open());

    // Top-left corner is well outside the centered overlay.
    click(&mut app, 0, 0);
    assert!(!app.modal.is_open());
    assert!(!app.scroll_locked());

    // Closing an already-closed overlay is a no-op.
    click(&mut app, 0, 0);
    assert!(!app.modal.is_open());
}

#[test]
fn click_inside_the_modal_keeps_it_open() {
    let mut app = wide_app();
    load_live(&mut app);
    key(&mut app, KeyCode::Enter);

    // Dead center of the viewport is inside the overlay.
    click(&mut app, 60, 20);
    assert!(app.modal.is_open());
}

#[test]
fn compact_viewport_skips_tilt_and_reduces_particles() {
    let app = compact_app();
    assert!(app.is_compact());
    assert!(app.tilt.is_none());
    assert_eq!(app.background.as_ref().unwrap().point_count(), 5);

    let app = wide_app();
    assert!(!app.is_compact());
    assert!(app.tilt.is_some());
    assert_eq!(app.background.as_ref().unwrap().point_count(), 10);
}

#[test]
fn resize_across_the_breakpoint_reinitializes_effects() {
    let mut app = wide_app();
    assert!(app.tilt.is_some());

    app.handle_event(&Event::Resize(80, 24));
    assert!(app.tilt.is_none());
    assert_eq!(app.background.as_ref().unwrap().point_count(), 5);
}

#[test]
fn scroll_spy_prefers_the_topmost_qualifying_section() {
    // Two sections clear the 30% threshold at once; the topmost wins
    // deterministically.
    let bounds = [
        SectionBounds {
            section: Section::Home,
            top: 0,
            height: 10,
        },
        SectionBounds {
            section: Section::About,
            top: 10,
            height: 10,
        },
    ];

    assert_eq!(scroll_spy(&bounds, 0, 20), Some(Section::Home));
    assert_eq!(scroll_spy(&bounds, 5, 20), Some(Section::Home));
}

#[test]
fn scroll_spy_skips_sections_below_the_threshold() {
    let bounds = [
        SectionBounds {
            section: Section::Home,
            top: 0,
            height: 10,
        },
        SectionBounds {
            section: Section::About,
            top: 10,
            height: 10,
        },
    ];

    // Viewport shows 2 of Home's 10 rows (20%) and all of About.
    assert_eq!(scroll_spy(&bounds, 8, 12), Some(Section::About));
}

#[test]
fn scroll_spy_reports_nothing_when_no_section_qualifies() {
    let bounds = [SectionBounds {
        section: Section::Home,
        top: 0,
        height: 100,
    }];

    assert_eq!(scroll_spy(&bounds, 90, 10), None);
}

#[test]
fn section_keys_navigate_directly() {
    // Compact viewport: the page is taller than the terminal, so navigation
    // actually has to scroll.
    let mut app = compact_app();
    key(&mut app, KeyCode::Char('4'));
    assert_eq!(app.nav.active, Section::Contact);
    assert!(app.scroll > 0);

    key(&mut app, KeyCode::Char('1'));
    assert_eq!(app.nav.active, Section::Home);
    assert_eq!(app.scroll, 0);
}
