//! TFE HTTP client for API interactions

use reqwest::Client;

use crate::config::api;
use crate::tfe::credentials::Credentials;

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    url: String,
}

impl TfeClient {
    /// Create a new TFE client with library-default connection settings
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            token: credentials.token,
            url: credentials.url,
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), api::BASE_PATH)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/vnd.api+json")
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(Credentials {
            token: "test-token".to_string(),
            url: base_url.to_string(),
        })
    }
}
