use std::fmt;

/// Custom error type for TFE operations
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// API token not found in any source
    TokenNotFound(String),
    /// TFE URL not found in any source
    UrlNotFound(String),
    /// OAuth token ID required but not found in any source
    OauthTokenNotFound(String),
}

impl TfeError {
    /// Process exit code reported for this error
    ///
    /// Missing credentials (token or URL) exit with 1, a missing OAuth
    /// token ID when VCS settings were requested exits with 2, and
    /// everything else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            TfeError::OauthTokenNotFound(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfeError::TokenNotFound(msg) => write!(f, "{}", msg),
            TfeError::UrlNotFound(msg) => write!(f, "{}", msg),
            TfeError::OauthTokenNotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

/// Result type alias for TFE operations
pub type Result<T> = std::result::Result<T, TfeError>;
