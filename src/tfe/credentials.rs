//! Credential resolution from CLI flags and environment variables

use log::debug;

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// API credentials, resolved once per invocation and immutable afterward
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token: String,
    pub url: String,
}

impl Credentials {
    /// Resolve token and URL with fallback logic:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (TFE_TOKEN / TFE_URL)
    ///
    /// Fails with a message identifying the missing value when neither
    /// source supplies one.
    pub fn resolve(cli_token: Option<&str>, cli_url: Option<&str>) -> Result<Self> {
        let token = Self::resolve_token(cli_token)?;
        let url = Self::resolve_url(cli_url)?;
        Ok(Self { token, url })
    }

    fn resolve_token(cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        if let Ok(token) = std::env::var(credentials::TOKEN_ENV_VAR) {
            debug!(
                "Using token from {} environment variable",
                credentials::TOKEN_ENV_VAR
            );
            return Ok(token);
        }

        Err(TfeError::TokenNotFound(Self::token_not_found_message()))
    }

    fn resolve_url(cli_url: Option<&str>) -> Result<String> {
        if let Some(url) = cli_url {
            debug!("Using URL from CLI argument");
            return Ok(url.to_string());
        }

        if let Ok(url) = std::env::var(credentials::URL_ENV_VAR) {
            debug!(
                "Using URL from {} environment variable",
                credentials::URL_ENV_VAR
            );
            return Ok(url);
        }

        Err(TfeError::UrlNotFound(Self::url_not_found_message()))
    }

    /// Generate helpful error message when no token is found
    fn token_not_found_message() -> String {
        format!(
            "No API token found. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      tfe-ws-manager --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>",
            credentials::TOKEN_ENV_VAR
        )
    }

    /// Generate helpful error message when no URL is found
    fn url_not_found_message() -> String {
        format!(
            "No TFE URL found. Please provide a URL using one of:\n\
             \n\
             1. CLI argument:      tfe-ws-manager --url <URL>\n\
             2. Environment var:   export {}=<URL>",
            credentials::URL_ENV_VAR
        )
    }
}
