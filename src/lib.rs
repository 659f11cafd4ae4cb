//! tfe-ws-manager - Manage Terraform Enterprise workspaces
//!
//! A CLI tool to create and delete TFE workspaces.
//!
//! # Features
//!
//! - Create workspaces with execution mode, Terraform version, working
//!   directory, and VCS repository settings
//! - Store a Vault token on new workspaces as a sensitive variable
//! - Delete workspaces by name
//! - Credentials from CLI flags or environment variables
//!
//! # Example
//!
//! ```bash
//! # Create a workspace
//! tfe-ws-manager create my-org my-workspace -t <TOKEN> -u https://tfe.example.com
//!
//! # Create a workspace bound to a VCS repository
//! tfe-ws-manager create my-org my-workspace --repo myorg/myrepo --branch main --oauth ot-abc123
//!
//! # Pin the Terraform version and working directory
//! tfe-ws-manager create my-org my-workspace --tv 1.6.2 --wd environments/prod
//!
//! # Delete a workspace
//! tfe-ws-manager delete my-org my-workspace
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod tfe;

pub use cli::{Cli, Command, CreateArgs, DeleteArgs, ExecutionMode, ModifyArgs};
pub use error::{Result, TfeError};
pub use tfe::{
    run_create_command, run_delete_command, run_modify_command, Credentials, TfeClient, Workspace,
    WorkspaceOptions,
};
