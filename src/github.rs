use crate::error::{CarouselError, Result};
use crate::types::SearchResult;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const ORGANIZATION: &str = "takenet";
pub const PER_PAGE: u32 = 5;
/// GitHub rejects anonymous requests without a User-Agent.
pub const USER_AGENT: &str = "DotNet-API";

const SEARCH_PATH: &str = "search/repositories";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_options(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_options(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        // Url::join drops the last segment unless the base ends with '/'
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(GitHubClient { client, base_url })
    }

    /// Search URL for the oldest repositories of `language` in the organization.
    ///
    /// The language is percent-encoded, so values such as `c++` or `f#`
    /// reach the API intact.
    pub fn search_url(&self, language: &str) -> Result<Url> {
        let mut url = self.base_url.join(SEARCH_PATH)?;
        url.query_pairs_mut()
            .append_pair("q", &format!("language:{} org:{}", language, ORGANIZATION))
            .append_pair("sort", "created")
            .append_pair("order", "asc")
            .append_pair("per_page", &PER_PAGE.to_string());
        Ok(url)
    }

    /// Run the search and deserialize the envelope.
    ///
    /// Returns `Ok(None)` when the API answers with a JSON `null` body.
    pub async fn search_oldest_repositories(&self, language: &str) -> Result<Option<SearchResult>> {
        let url = self.search_url(language)?;
        debug!("Querying GitHub search: {}", url);

        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("GitHub search for language '{}' failed with status {}", language, status);
            return Err(CarouselError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let result: Option<SearchResult> = serde_json::from_str(&body)?;
        Ok(result)
    }
}
