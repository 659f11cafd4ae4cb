//! Create command arguments

use clap::{Parser, ValueEnum};

use crate::config::{credentials, vault};

/// Arguments for the 'create' subcommand
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Organisation name
    pub organisation: String,

    /// Workspace name
    pub workspace: String,

    /// Execution mode for runs in the new workspace
    #[arg(short = 'x', long, value_enum, default_value_t = ExecutionMode::Remote)]
    pub execution: ExecutionMode,

    /// Terraform version to pin (service default when omitted)
    #[arg(long = "terraform_version", visible_alias = "tv")]
    pub terraform_version: Option<String>,

    /// Working directory for Terraform operations, relative to the repository root
    #[arg(long = "working_directory", visible_alias = "wd")]
    pub working_directory: Option<String>,

    /// Trigger runs only when files under this path change
    #[arg(short = 'p', long)]
    pub path: Option<String>,

    /// Whether VCS changes queue runs automatically (true/false)
    #[arg(long = "auto_trigger")]
    pub auto_trigger: Option<bool>,

    /// VCS repository identifier (e.g. myorg/myrepo)
    #[arg(long)]
    pub repo: Option<String>,

    /// VCS branch to track (requires --repo)
    #[arg(long)]
    pub branch: Option<String>,

    /// OAuth token ID of the VCS connection (required with --repo)
    #[arg(long, env = credentials::OAUTH_TOKEN_ENV_VAR)]
    pub oauth: Option<String>,

    /// Vault token stored on the new workspace as a sensitive variable
    #[arg(long = "vault_token", env = vault::TOKEN_ENV_VAR, hide_env_values = true)]
    pub vault_token: Option<String>,
}

/// Workspace execution mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExecutionMode {
    /// Runs execute on the service's infrastructure (default)
    Remote,
    /// Runs execute on the operator's machine
    Local,
    /// Runs execute on self-hosted agents
    Agent,
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionMode::Remote => write!(f, "remote"),
            ExecutionMode::Local => write!(f, "local"),
            ExecutionMode::Agent => write!(f, "agent"),
        }
    }
}
