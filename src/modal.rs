use crate::error::PortfolioError;
use tracing::warn;

pub const LOADING_MESSAGE: &str = "> Fetching Documentation...";
pub const NO_README_MESSAGE: &str = "No README.md found in repository.";
pub const ERROR_MESSAGE: &str =
    "Error retrieving documentation. This is usually an API rate limit; try again later.";

/// Decoded README outcome for a loaded modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeBody {
    Markdown(String),
    /// Well-formed response without a content field. A displayable state, not
    /// an error.
    Empty,
}

/// Overlay lifecycle. Transitions happen only on user action or fetch
/// completion; an error keeps the overlay open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Loading { repo: String, generation: u64 },
    Loaded { repo: String, body: ReadmeBody },
    Error { repo: String, message: String },
}

/// The single process-wide README overlay. Each open is stamped with a
/// request generation; a completion mutates the modal only while it is still
/// the latest request, which closes the stale-overwrite race between a slow
/// fetch and a reopen.
#[derive(Debug, Clone)]
pub struct Modal {
    state: ModalState,
    pub scroll: u16,
}

impl Modal {
    pub fn new() -> Self {
        Modal {
            state: ModalState::Closed,
            scroll: 0,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    /// Repository the overlay currently concerns, if any.
    pub fn repo(&self) -> Option<&str> {
        match &self.state {
            ModalState::Closed => None,
            ModalState::Loading { repo, .. }
            | ModalState::Loaded { repo, .. }
            | ModalState::Error { repo, .. } => Some(repo),
        }
    }

    pub fn open(&mut self, repo: String, generation: u64) {
        self.scroll = 0;
        self.state = ModalState::Loading { repo, generation };
    }

    /// Apply a fetch completion. Dropped when the modal has been closed or
    /// reopened for a different request since the fetch started.
    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: Result<Option<String>, PortfolioError>,
    ) {
        let ModalState::Loading {
            repo,
            generation: current,
        } = &self.state
        else {
            return;
        };
        if *current != generation {
            return;
        }

        let repo = repo.clone();
        self.state = match outcome {
            Ok(Some(markdown)) => ModalState::Loaded {
                repo,
                body: ReadmeBody::Markdown(markdown),
            },
            Ok(None) => ModalState::Loaded {
                repo,
                body: ReadmeBody::Empty,
            },
            Err(error) => {
                warn!(%repo, %error, "README fetch failed");
                ModalState::Error {
                    repo,
                    message: ERROR_MESSAGE.to_string(),
                }
            }
        };
    }

    /// Idempotent: closing an already-closed overlay is a no-op.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }
}

impl Default for Modal {
    fn default() -> Self {
        Modal::new()
    }
}
