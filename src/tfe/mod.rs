//! TFE API client module
//!
//! This module provides functionality to interact with the Terraform
//! Enterprise API.

mod client;
mod credentials;
pub mod variables;
pub mod workspaces;

pub use client::TfeClient;
pub use credentials::Credentials;
pub use variables::{CreateVariableRequest, Variable, VariableCategory};
pub use workspaces::{
    run_create_command, run_delete_command, run_modify_command, Workspace, WorkspaceOptions,
};
