/// Configuration constants for the TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Workspace variables endpoint
    pub const VARS: &str = "vars";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable consulted when --token is not given
    pub const TOKEN_ENV_VAR: &str = "TFE_TOKEN";

    /// Environment variable consulted when --url is not given
    pub const URL_ENV_VAR: &str = "TFE_URL";

    /// Environment variable consulted when --oauth is not given
    pub const OAUTH_TOKEN_ENV_VAR: &str = "TFE_OAUTH_TOKEN_ID";
}

/// Configuration constants for the Vault token variable
pub mod vault {
    /// Key of the sensitive variable created on new workspaces
    pub const VAR_KEY: &str = "VAULT_TOKEN";

    /// Environment variable consulted when --vault_token is not given
    pub const TOKEN_ENV_VAR: &str = "VAULT_TOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
