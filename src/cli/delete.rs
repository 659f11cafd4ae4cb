//! Delete command arguments

use clap::Parser;

/// Arguments for the 'delete' subcommand
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Organisation name
    pub organisation: String,

    /// Workspace name
    pub workspace: String,
}
