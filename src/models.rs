use crate::types::RepoDescriptor;
use chrono::{DateTime, Utc};

/// Generic description substituted when a repository has none.
pub const DEFAULT_DESCRIPTION: &str = "Architectural implementation of backend logic.";

/// Cards render at most this many topic badges.
pub const MAX_BADGES: usize = 3;

/// A repository selected for display, either live from the API or from the
/// static fallback list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub html_url: String,
    pub fork: bool,
}

impl Project {
    /// User-facing title: separator characters in the repository name become
    /// spaces.
    pub fn display_title(&self) -> String {
        self.name.replace(['-', '_'], " ")
    }

    pub fn description_text(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => DEFAULT_DESCRIPTION,
        }
    }

    /// First topics, capped for badge rendering. Zero topics is fine.
    pub fn badges(&self) -> &[String] {
        &self.topics[..self.topics.len().min(MAX_BADGES)]
    }
}

impl From<RepoDescriptor> for Project {
    fn from(repo: RepoDescriptor) -> Self {
        Project {
            name: repo.name,
            description: repo.description,
            topics: repo.topics,
            html_url: repo.html_url,
            fork: repo.fork,
        }
    }
}

/// Where a render pass's projects came from. Never mixed within one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fallback,
}

/// Ordered projects selected for rendering plus their provenance. The click
/// action per card depends on the source: live cards open the README modal,
/// fallback cards open an external link.
#[derive(Debug, Clone)]
pub struct DisplayList {
    pub projects: Vec<Project>,
    pub source: DataSource,
}

impl DisplayList {
    pub fn empty() -> Self {
        DisplayList {
            projects: Vec::new(),
            source: DataSource::Fallback,
        }
    }

    pub fn is_live(&self) -> bool {
        self.source == DataSource::Live
    }
}

/// Fixed illustrative projects shown when the live source is unavailable or
/// insufficiently populated. Their URL is the owner's profile link.
pub fn fallback_projects(profile_url: &str) -> Vec<Project> {
    vec![
        Project {
            name: "JARVIS-Personal-Assistant".to_string(),
            description: Some(
                "An automated voice-command assistant utilizing Python scripts for daily \
                 workflow optimization and deep work enforcement."
                    .to_string(),
            ),
            topics: vec![
                "automation".to_string(),
                "voice-recognition".to_string(),
                "productivity".to_string(),
            ],
            html_url: profile_url.to_string(),
            fork: false,
        },
        Project {
            name: "Real-Time-Chat-Engine".to_string(),
            description: Some(
                "High-performance chat architecture using WebSockets for instant \
                 bidirectional communication."
                    .to_string(),
            ),
            topics: vec![
                "websockets".to_string(),
                "async".to_string(),
                "backend".to_string(),
            ],
            html_url: profile_url.to_string(),
            fork: false,
        },
        Project {
            name: "Neural-Net-Optimizer".to_string(),
            description: Some(
                "Custom implementation of backpropagation algorithms to test math-heavy \
                 optimization theories."
                    .to_string(),
            ),
            topics: vec![
                "ai".to_string(),
                "math".to_string(),
                "tensorflow".to_string(),
            ],
            html_url: profile_url.to_string(),
            fork: false,
        },
    ]
}

/// Rate limit state parsed from API response headers.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: DateTime<Utc>,
    pub is_limited: bool,
}

impl Default for RateLimitState {
    fn default() -> Self {
        RateLimitState {
            // Anonymous core limit; authenticated requests report their own.
            remaining: 60,
            limit: 60,
            reset_time: Utc::now() + chrono::Duration::hours(1),
            is_limited: false,
        }
    }
}
