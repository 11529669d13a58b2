//! The application state object. Everything the UI knows lives here and is
//! passed by reference to the renderer and the event loop; there are no
//! module-level mutable singletons.

use crate::error::{PortfolioError, Result};
use crate::fetch::FetchEvent;
use crate::fx::{BackgroundConfig, BackgroundFx, RevealState, TiltConfig, TiltFx};
use crate::layout::{self, PageLayout};
use crate::modal::Modal;
use crate::models::{fallback_projects, DataSource, DisplayList, RateLimitState};
use crate::nav::{self, NavState, Section};
use crate::select;
use crate::typewriter::Typewriter;
use crate::types::RepoDescriptor;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// UI animation tick.
pub const TICK: Duration = Duration::from_millis(50);

/// Side effects requested by state transitions; the event loop executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    FetchProjects { generation: u64 },
    FetchReadme { repo: String, generation: u64 },
    OpenExternal { url: String },
}

pub struct App {
    pub username: String,
    pub profile_url: String,
    pub featured_topic: String,

    pub display: DisplayList,
    pub projects_loading: bool,
    pub rate_limit_note: Option<String>,

    pub selected_card: usize,
    pub scroll: u16,
    pub viewport: (u16, u16),

    pub nav: NavState,
    pub modal: Modal,
    pub typewriter: Typewriter,
    pub background: Option<BackgroundFx>,
    pub tilt: Option<TiltFx>,
    pub reveal: RevealState,

    pub should_quit: bool,
    pub status: Option<String>,

    background_config: BackgroundConfig,
    tilt_config: TiltConfig,
    repo_generation: u64,
    readme_generation: u64,
    type_deadline: Instant,
}

impl App {
    pub fn new(
        username: String,
        profile_url: String,
        featured_topic: String,
        viewport: (u16, u16),
    ) -> Self {
        let background_config = BackgroundConfig::default();
        let tilt_config = TiltConfig::default();

        let background = BackgroundFx::new(
            &background_config,
            viewport.0,
            layout::content_height(viewport.1),
        );
        if background.is_none() {
            // Decoration only; the page renders fine on a plain backdrop.
            debug!("background effect unavailable, using plain backdrop");
        }
        let tilt = TiltFx::init(tilt_config.clone(), viewport.0);

        App {
            username,
            profile_url,
            featured_topic,
            display: DisplayList::empty(),
            projects_loading: false,
            rate_limit_note: None,
            selected_card: 0,
            scroll: 0,
            viewport,
            nav: NavState::new(),
            modal: Modal::new(),
            typewriter: Typewriter::default(),
            background,
            tilt,
            reveal: RevealState::default(),
            should_quit: false,
            status: None,
            background_config,
            tilt_config,
            repo_generation: 0,
            readme_generation: 0,
            type_deadline: Instant::now(),
        }
    }

    pub fn is_compact(&self) -> bool {
        layout::is_compact(self.viewport.0)
    }

    /// Background scroll is locked while either overlay is up.
    pub fn scroll_locked(&self) -> bool {
        self.modal.is_open() || self.nav.menu_open
    }

    pub fn page_layout(&self) -> PageLayout {
        layout::page_layout(self.display.projects.len(), self.viewport.0)
    }

    /// Page-load trigger: one fetch populates the card grid.
    pub fn begin_initial_fetch(&mut self) -> Command {
        self.projects_loading = true;
        self.repo_generation += 1;
        Command::FetchProjects {
            generation: self.repo_generation,
        }
    }

    /// Manual refresh under a new generation; a completion from the previous
    /// generation that is still in flight will be dropped.
    pub fn refresh(&mut self) -> Command {
        self.projects_loading = true;
        self.repo_generation += 1;
        self.status = Some("Refreshing repositories...".to_string());
        Command::FetchProjects {
            generation: self.repo_generation,
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Command {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(width, height) => {
                self.resize(*width, *height);
                Command::None
            }
            _ => Command::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command {
        if key.kind != KeyEventKind::Press {
            return Command::None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Command::None;
        }

        // Overlay first: while the modal is up, input scrolls or dismisses it.
        if self.modal.is_open() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.modal.close(),
                KeyCode::Down | KeyCode::Char('j') => self.modal.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => self.modal.scroll_up(1),
                KeyCode::PageDown => self.modal.scroll_down(10),
                KeyCode::PageUp => self.modal.scroll_up(10),
                _ => {}
            }
            return Command::None;
        }

        if self.nav.menu_open {
            match key.code {
                KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => self.nav.close_menu(),
                KeyCode::Down | KeyCode::Char('j') => self.nav.cursor_next(),
                KeyCode::Up | KeyCode::Char('k') => self.nav.cursor_prev(),
                KeyCode::Enter => {
                    let section = self.nav.activate_cursor();
                    self.navigate_to(section);
                }
                _ => {}
            }
            return Command::None;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('m') => self.nav.toggle_menu(),
            KeyCode::Char('r') => return self.refresh(),
            KeyCode::Char('o') => return self.open_selected_external(),
            KeyCode::Enter => return self.activate_selected(),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(2),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-2),
            KeyCode::PageDown => {
                self.scroll_by(layout::content_height(self.viewport.1) as i32)
            }
            KeyCode::PageUp => {
                self.scroll_by(-(layout::content_height(self.viewport.1) as i32))
            }
            KeyCode::Char('g') => self.scroll = 0,
            KeyCode::Char('G') => {
                self.scroll = layout::max_scroll(&self.page_layout(), self.viewport.1)
            }
            KeyCode::Tab => {
                let next = Section::ALL[(self.nav.active.index() + 1) % Section::ALL.len()];
                self.navigate_to(next);
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.navigate_to(Section::ALL[index]);
            }
            _ => {}
        }
        Command::None
    }

    /// The only mouse interaction: a click on the backdrop (outside the modal
    /// content) dismisses the overlay.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Command {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Command::None;
        }
        if self.modal.is_open() {
            let overlay =
                layout::modal_rect(Rect::new(0, 0, self.viewport.0, self.viewport.1));
            if !overlay.contains(Position::new(mouse.column, mouse.row)) {
                self.modal.close();
            }
        }
        Command::None
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.background = BackgroundFx::new(
            &self.background_config,
            width,
            layout::content_height(height),
        );
        self.tilt = TiltFx::init(self.tilt_config.clone(), width);
        let max = layout::max_scroll(&self.page_layout(), height);
        self.scroll = self.scroll.min(max);
    }

    pub fn navigate_to(&mut self, section: Section) {
        self.nav.active = section;
        let page = self.page_layout();
        let top = page.bounds[section.index()].top;
        self.scroll = top.min(layout::max_scroll(&page, self.viewport.1));
    }

    fn scroll_by(&mut self, delta: i32) {
        if self.scroll_locked() {
            return;
        }
        let max = layout::max_scroll(&self.page_layout(), self.viewport.1) as i32;
        let next = (self.scroll as i32 + delta).clamp(0, max);
        self.scroll = next as u16;
    }

    fn move_selection(&mut self, delta: i32) {
        let count = self.display.projects.len();
        if count == 0 {
            return;
        }
        let next = (self.selected_card as i32 + delta).rem_euclid(count as i32) as usize;
        if next != self.selected_card {
            self.selected_card = next;
            if let Some(tilt) = &mut self.tilt {
                tilt.on_focus_change();
            }
            self.ensure_selected_visible();
        }
    }

    fn ensure_selected_visible(&mut self) {
        let page = self.page_layout();
        let rect = layout::card_page_rect(self.selected_card, &page, self.viewport.0);
        let view_height = layout::content_height(self.viewport.1);
        if rect.y < self.scroll {
            self.scroll = rect.y;
        } else if rect.y + rect.height > self.scroll + view_height {
            self.scroll = (rect.y + rect.height).saturating_sub(view_height);
        }
    }

    /// Card action. Live cards open the README overlay; fallback cards only
    /// ever open the external profile link.
    fn activate_selected(&mut self) -> Command {
        let Some(project) = self.display.projects.get(self.selected_card) else {
            return Command::None;
        };
        if self.display.is_live() {
            self.readme_generation += 1;
            self.modal.open(project.name.clone(), self.readme_generation);
            Command::FetchReadme {
                repo: project.name.clone(),
                generation: self.readme_generation,
            }
        } else {
            Command::OpenExternal {
                url: project.html_url.clone(),
            }
        }
    }

    fn open_selected_external(&mut self) -> Command {
        let Some(project) = self.display.projects.get(self.selected_card) else {
            return Command::None;
        };
        self.status = Some(format!("Opening {}", project.html_url));
        Command::OpenExternal {
            url: project.html_url.clone(),
        }
    }

    pub fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Repos {
                generation,
                outcome,
            } => self.apply_repos(generation, outcome),
            FetchEvent::Readme {
                generation,
                repo,
                outcome,
            } => self.apply_readme(generation, &repo, outcome),
        }
    }

    /// Apply a repository-list completion. The card container is rebuilt
    /// atomically: the previous list is replaced in one assignment, never
    /// partially.
    pub fn apply_repos(
        &mut self,
        generation: u64,
        outcome: Result<(Vec<RepoDescriptor>, RateLimitState)>,
    ) {
        if generation != self.repo_generation {
            debug!(
                generation,
                current = self.repo_generation,
                "dropping stale repository response"
            );
            return;
        }
        self.projects_loading = false;

        match outcome {
            Ok((repos, rate_limit)) => {
                self.rate_limit_note = rate_limit
                    .is_limited
                    .then(|| format!("rate limit resets {}", rate_limit.reset_time.format("%H:%M UTC")));
                self.display =
                    select::select_projects(repos, &self.featured_topic, &self.profile_url);
                self.status = match self.display.source {
                    DataSource::Live => None,
                    DataSource::Fallback => {
                        Some("No qualifying repositories, showing sample projects".to_string())
                    }
                };
            }
            Err(error) => {
                warn!(%error, "GitHub fetch failed, using fallback data");
                if let PortfolioError::RateLimitExceeded(detail) = &error {
                    self.rate_limit_note = Some(detail.clone());
                    self.status =
                        Some("GitHub rate limit hit, showing sample projects".to_string());
                } else {
                    self.status = Some("GitHub unreachable, showing sample projects".to_string());
                }
                self.display = DisplayList {
                    projects: fallback_projects(&self.profile_url),
                    source: DataSource::Fallback,
                };
            }
        }

        self.selected_card = 0;
        self.reveal.reset();
        let max = layout::max_scroll(&self.page_layout(), self.viewport.1);
        self.scroll = self.scroll.min(max);
    }

    pub fn apply_readme(&mut self, generation: u64, repo: &str, outcome: Result<Option<String>>) {
        if generation != self.readme_generation {
            debug!(generation, repo, "dropping stale README response");
            return;
        }
        self.modal.resolve(generation, outcome);
    }

    /// Animation tick: typewriter cadence, decoration drift, reveal tracking,
    /// and scroll-spy.
    pub fn tick(&mut self, now: Instant) {
        if now >= self.type_deadline {
            let delay = self.typewriter.step();
            self.type_deadline = now + delay;
        }

        if let Some(background) = &mut self.background {
            background.advance();
        }
        if let Some(tilt) = &mut self.tilt {
            tilt.advance(TICK);
        }

        let page = self.page_layout();
        let visible = layout::visible_cards(
            self.display.projects.len(),
            &page,
            self.viewport.0,
            self.scroll,
            self.viewport.1,
        );
        self.reveal.observe(&visible, now);

        if !self.scroll_locked() {
            if let Some(active) = nav::scroll_spy(
                &page.bounds,
                self.scroll,
                layout::content_height(self.viewport.1),
            ) {
                self.nav.active = active;
            }
        }
    }
}
