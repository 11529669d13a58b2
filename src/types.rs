use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct RepoDescriptor {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub html_url: String,
    #[serde(default)]
    pub fork: bool,
}

/// README endpoint payload. `content` is Base64 text with embedded newlines;
/// it is absent when the repository has no README.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeResponse {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}
