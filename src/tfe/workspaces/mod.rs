//! Workspace module

mod api;
mod commands;
mod models;

pub use commands::{run_create_command, run_delete_command, run_modify_command};
pub use models::{
    CreateWorkspaceRequest, VcsRepo, Workspace, WorkspaceAttributes, WorkspaceOptions,
};
