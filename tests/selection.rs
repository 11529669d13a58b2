mod common;

use common::repo;
use gitfolio::models::DataSource;
use gitfolio::select::{select_projects, FEATURED_TOPIC, MAX_CURATED};

const PROFILE: &str = "https://github.com/octocat";

#[test]
fn featured_repos_are_always_selected() {
    // Featured status trumps missing descriptions and fork status.
    let repos = vec![
        repo("plain", Some("a tool"), &[], false),
        repo("starred", None, &[FEATURED_TOPIC], true),
    ];

    let display = select_projects(repos, FEATURED_TOPIC, PROFILE);

    assert_eq!(display.source, DataSource::Live);
    assert_eq!(display.projects.len(), 1);
    assert_eq!(display.projects[0].name, "starred");
}

#[test]
fn featured_selection_excludes_unfeatured_repos() {
    let repos = vec![
        repo("starred", Some("x"), &["rust", FEATURED_TOPIC], false),
        repo("described", Some("well documented"), &["rust"], false),
    ];

    let display = select_projects(repos, FEATURED_TOPIC, PROFILE);

    assert_eq!(display.projects.len(), 1);
    assert_eq!(display.projects[0].name, "starred");
}

#[test]
fn curated_selection_excludes_forks_and_blank_descriptions() {
    let repos = vec![
        repo("forked", Some("looks fine"), &[], true),
        repo("undocumented", None, &[], false),
        repo("blank", Some("   "), &[], false),
        repo("keeper", Some("a real project"), &[], false),
    ];

    let display = select_projects(repos, FEATURED_TOPIC, PROFILE);

    assert_eq!(display.source, DataSource::Live);
    assert_eq!(display.projects.len(), 1);
    assert_eq!(display.projects[0].name, "keeper");
}

#[test]
fn curated_selection_is_capped() {
    let repos: Vec<_> = (0..10)
        .map(|i| repo(&format!("repo-{}", i), Some("described"), &[], false))
        .collect();

    let display = select_projects(repos, FEATURED_TOPIC, PROFILE);

    assert_eq!(display.projects.len(), MAX_CURATED);
    // Insertion order from the API response is preserved, no re-sorting.
    for (i, project) in display.projects.iter().enumerate() {
        assert_eq!(project.name, format!("repo-{}", i));
    }
}

#[test]
fn fallback_when_nothing_qualifies() {
    let repos = vec![
        repo("forked", Some("desc"), &[], true),
        repo("undocumented", None, &[], false),
    ];

    let display = select_projects(repos, FEATURED_TOPIC, PROFILE);

    assert_eq!(display.source, DataSource::Fallback);
    assert_eq!(display.projects.len(), 3);
    for project in &display.projects {
        assert_eq!(project.html_url, PROFILE);
    }
}

#[test]
fn empty_response_uses_fallback() {
    let display = select_projects(Vec::new(), FEATURED_TOPIC, PROFILE);

    assert_eq!(display.source, DataSource::Fallback);
    assert_eq!(display.projects.len(), 3);
}

#[test]
fn sources_are_never_mixed() {
    // One featured repo next to plenty of curatable ones: only the featured
    // set renders.
    let mut repos = vec![repo("starred", None, &[FEATURED_TOPIC], false)];
    for i in 0..4 {
        repos.push(repo(&format!("solid-{}", i), Some("described"), &[], false));
    }

    let display = select_projects(repos, FEATURED_TOPIC, PROFILE);

    assert!(display.is_live());
    assert_eq!(display.projects.len(), 1);
}

#[test]
fn custom_featured_topic_is_honored() {
    let repos = vec![
        repo("a", None, &["showcase"], false),
        repo("b", Some("described"), &[FEATURED_TOPIC], false),
    ];

    let display = select_projects(repos, "showcase", PROFILE);

    assert_eq!(display.projects.len(), 1);
    assert_eq!(display.projects[0].name, "a");
}
