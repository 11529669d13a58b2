use crate::select::FEATURED_TOPIC;
use clap::Parser;

#[derive(Parser)]
#[command(name = "gitfolio")]
#[command(about = "Interactive terminal portfolio - renders a developer's GitHub projects")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub username whose repositories populate the project grid
    #[arg(long, env = "GITHUB_USERNAME")]
    pub username: String,

    /// Optional API token for authenticated (higher rate limit) requests
    #[arg(long, env = "GITHUB_TOKEN")]
    pub token: Option<String>,

    /// Topic marking a repository as featured
    #[arg(long, env = "GITFOLIO_FEATURED_TOPIC", default_value = FEATURED_TOPIC)]
    pub featured_topic: String,

    /// GitHub API base URL
    #[arg(long, env = "GITFOLIO_API_URL", default_value = crate::github::DEFAULT_API_URL)]
    pub api_url: String,
}
