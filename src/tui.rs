//! Terminal lifecycle and the main event loop: draw a frame, then wait on
//! whichever fires first of a terminal event, a fetch completion, or the
//! animation tick.

use crate::app::{App, Command, TICK};
use crate::error::Result;
use crate::fetch::{self, FetchEvent};
use crate::github::GitHubClient;
use crate::render;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::process::{Command as ProcessCommand, Stdio};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::warn;

pub async fn run(mut app: App, client: GitHubClient) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, Arc::new(client)).await;

    // Restore the terminal regardless of how the loop ended.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: Arc<GitHubClient>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Page-load trigger: a single fetch populates the card grid.
    dispatch(app.begin_initial_fetch(), &client, &tx);

    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        terminal.draw(|f| render::draw(f, app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let command = app.handle_event(&event);
                        dispatch(command, &client, &tx);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            Some(fetch_event) = rx.recv() => {
                app.apply(fetch_event);
            }
            _ = ticker.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn dispatch(command: Command, client: &Arc<GitHubClient>, tx: &UnboundedSender<FetchEvent>) {
    match command {
        Command::None => {}
        Command::FetchProjects { generation } => {
            fetch::spawn_repo_fetch(client.clone(), tx.clone(), generation);
        }
        Command::FetchReadme { repo, generation } => {
            fetch::spawn_readme_fetch(client.clone(), repo, tx.clone(), generation);
        }
        Command::OpenExternal { url } => {
            if let Err(error) = open_external(&url) {
                warn!(%error, %url, "failed to open external link");
            }
        }
    }
}

/// Open a URL in the system browser, detached from the TUI.
pub fn open_external(url: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = ProcessCommand::new("open");
        c.arg(url);
        c
    };
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = ProcessCommand::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = ProcessCommand::new("xdg-open");
        c.arg(url);
        c
    };

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
