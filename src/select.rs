use crate::models::{fallback_projects, DataSource, DisplayList, Project};
use crate::types::RepoDescriptor;

/// Topic tag that marks a repository as featured.
pub const FEATURED_TOPIC: &str = "portfolio-featured";

/// Cap on curated (non-featured) repositories shown per render pass.
pub const MAX_CURATED: usize = 6;

/// Selection policy, applied in order:
/// 1. repositories tagged with the featured topic;
/// 2. otherwise non-fork repositories with a non-empty description, capped;
/// 3. otherwise the static fallback list.
///
/// API response order is preserved; the result is entirely live or entirely
/// fallback, never mixed.
pub fn select_projects(
    repos: Vec<RepoDescriptor>,
    featured_topic: &str,
    profile_url: &str,
) -> DisplayList {
    let mut featured = Vec::new();
    let mut curated = Vec::new();

    for repo in repos {
        if repo.topics.iter().any(|t| t == featured_topic) {
            featured.push(repo);
        } else if !repo.fork
            && repo
                .description
                .as_deref()
                .is_some_and(|d| !d.trim().is_empty())
            && curated.len() < MAX_CURATED
        {
            curated.push(repo);
        }
    }

    if !featured.is_empty() {
        DisplayList {
            projects: featured.into_iter().map(Project::from).collect(),
            source: DataSource::Live,
        }
    } else if !curated.is_empty() {
        DisplayList {
            projects: curated.into_iter().map(Project::from).collect(),
            source: DataSource::Live,
        }
    } else {
        DisplayList {
            projects: fallback_projects(profile_url),
            source: DataSource::Fallback,
        }
    }
}
