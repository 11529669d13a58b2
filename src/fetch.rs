//! Fire-and-forget fetch tasks. Each task is stamped with a request
//! generation and posts its completion back to the event loop; the app state
//! decides whether the completion is still current before applying it.

use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::RateLimitState;
use crate::readme;
use crate::types::RepoDescriptor;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

#[derive(Debug)]
pub enum FetchEvent {
    Repos {
        generation: u64,
        outcome: Result<(Vec<RepoDescriptor>, RateLimitState)>,
    },
    Readme {
        generation: u64,
        repo: String,
        /// Decoded README text; None when the response had no content field.
        outcome: Result<Option<String>>,
    },
}

pub fn spawn_repo_fetch(
    client: Arc<GitHubClient>,
    tx: UnboundedSender<FetchEvent>,
    generation: u64,
) {
    tokio::spawn(async move {
        debug!(generation, "fetching repository list");
        let outcome = client.list_repos().await;
        let _ = tx.send(FetchEvent::Repos {
            generation,
            outcome,
        });
    });
}

pub fn spawn_readme_fetch(
    client: Arc<GitHubClient>,
    repo: String,
    tx: UnboundedSender<FetchEvent>,
    generation: u64,
) {
    tokio::spawn(async move {
        debug!(generation, %repo, "fetching README");
        // Decode failures deliberately share the network-failure path; the
        // modal shows one fixed error message for both.
        let outcome = match client.get_readme(&repo).await {
            Ok(payload) => match payload.content {
                Some(content) => readme::decode_readme(&content).map(Some),
                None => Ok(None),
            },
            Err(e) => Err(e),
        };
        let _ = tx.send(FetchEvent::Readme {
            generation,
            repo,
            outcome,
        });
    });
}
