//! HTTP client for the photo search endpoint.

use std::time::Duration;

use url::Url;

use crate::{
    query::SearchQuery,
    types::{PhotoPage, SearchResponse},
    user_agent::get_user_agent,
    Error,
};

/// HTTP client for the photo search REST endpoint.
///
/// Sends requests with a browser-like randomized user agent. Each request
/// builds a fresh `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// Base URL for the REST endpoint.
    base_api_url: String,
    /// API key appended to every request.
    api_key: String,
}

impl Client {
    /// Creates a new client pointing at the production search endpoint.
    pub fn new(api_key: &str) -> Self {
        Self {
            base_api_url: "https://api.flickr.com/services/rest/".to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn get_url(&self, query: &SearchQuery) -> Result<Url, Error> {
        let url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut()
            .append_pair("method", "flickr.photos.search")
            .append_pair("api_key", &self.api_key)
            .append_pair("format", "json")
            .append_pair("nojsoncallback", "1");
        Ok(url)
    }

    /// Runs a photo search and returns one page of results.
    ///
    /// An API-level failure (`stat: "fail"`) is returned as [`Error::ApiFail`]
    /// with the server's message intact.
    pub async fn search(&self, query: &SearchQuery) -> Result<PhotoPage, Error> {
        let url = self.get_url(query)?;
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<SearchResponse>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        match parsed {
            SearchResponse::Ok { photos } => Ok(photos),
            SearchResponse::Fail { message, code } => {
                tracing::error!("API reported failure (code {}): {}", code, message);
                Err(Error::ApiFail { message })
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
