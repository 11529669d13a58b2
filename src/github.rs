use crate::error::{PortfolioError, Result};
use crate::models::RateLimitState;
use crate::types::{ReadmeResponse, RepoDescriptor};
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: Url,
    username: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(username: String, token: Option<String>) -> Result<Self> {
        Self::with_base_url(username, token, DEFAULT_API_URL)
    }

    pub fn with_base_url(username: String, token: Option<String>, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent("gitfolio/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: Url::parse(base_url)?,
            username,
            token,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Profile link used by fallback cards.
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.username)
    }

    /// Single-attempt request. Failures collapse to fallback data or a fixed
    /// modal message upstream, so there is no retry loop here.
    async fn make_request(&self, url: Url) -> Result<Response> {
        let mut request = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;
        let rate_limit = Self::rate_limit_state(&response);

        match response.status() {
            reqwest::StatusCode::OK => Ok(response),
            reqwest::StatusCode::NOT_FOUND => Err(PortfolioError::NotFound(format!(
                "Resource not found: {}",
                url
            ))),
            reqwest::StatusCode::FORBIDDEN if rate_limit.remaining == 0 => {
                Err(PortfolioError::RateLimitExceeded(format!(
                    "API rate limit exceeded. Resets at {}",
                    rate_limit.reset_time.format("%H:%M:%S UTC")
                )))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(PortfolioError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status,
                    error_message(&body)
                )))
            }
        }
    }

    /// Parse rate limit headers from a response.
    pub fn rate_limit_state(response: &Response) -> RateLimitState {
        let headers = response.headers();

        let remaining = headers
            .get("X-RateLimit-Remaining")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(0);

        let limit = headers
            .get("X-RateLimit-Limit")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(60);

        let reset = headers
            .get("X-RateLimit-Reset")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<i64>().ok())
            .map(|timestamp| DateTime::from_timestamp(timestamp, 0).unwrap_or_else(Utc::now))
            .unwrap_or_else(|| Utc::now() + chrono::Duration::hours(1));

        RateLimitState {
            remaining,
            limit,
            reset_time: reset,
            is_limited: remaining == 0,
        }
    }

    /// List the user's repositories, most recently updated first, up to one
    /// page of 100.
    pub async fn list_repos(&self) -> Result<(Vec<RepoDescriptor>, RateLimitState)> {
        let mut url = self
            .base_url
            .join(&format!("users/{}/repos", self.username))?;
        url.set_query(Some(&format!("sort=updated&per_page={}", PER_PAGE)));

        let response = self.make_request(url).await?;
        let rate_limit = Self::rate_limit_state(&response);
        let repos: Vec<RepoDescriptor> = response.json().await?;

        Ok((repos, rate_limit))
    }

    /// Fetch the README descriptor for one of the user's repositories.
    pub async fn get_readme(&self, repo: &str) -> Result<ReadmeResponse> {
        let url = self
            .base_url
            .join(&format!("repos/{}/{}/readme", self.username, repo))?;

        let response = self.make_request(url).await?;
        let readme: ReadmeResponse = response.json().await?;

        Ok(readme)
    }
}

/// GitHub error bodies are JSON with a `message` field; fall back to the raw
/// body when they are not.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
