//! Modify command arguments

use clap::Parser;

/// Arguments for the 'modify' subcommand
#[derive(Parser, Debug)]
pub struct ModifyArgs {
    /// Organisation name
    pub organisation: String,

    /// Workspace name
    pub workspace: String,
}
