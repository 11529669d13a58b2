//! Gitfolio: an interactive terminal portfolio backed by the GitHub API.
//!
//! On start the app fetches a user's repositories (falling back to a fixed
//! sample list when the API is unavailable), renders them as project cards
//! inside a scrollable page of portfolio sections, and opens per-repository
//! README overlays fetched and decoded on demand.

pub mod app;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod fx;
pub mod github;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod models;
pub mod nav;
pub mod readme;
pub mod render;
pub mod select;
pub mod tui;
pub mod typewriter;
pub mod types;
