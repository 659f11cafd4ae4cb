//! TFE Workspace Manager - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use tfe_ws_manager::error::Result;
use tfe_ws_manager::{
    run_create_command, run_delete_command, run_modify_command, Cli, Command, Credentials,
    TfeClient,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!(
        "Starting TFE workspace manager v{}",
        env!("CARGO_PKG_VERSION")
    );

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let credentials = Credentials::resolve(cli.token.as_deref(), cli.url.as_deref())?;
    debug!("Using TFE at {}", credentials.url);

    let client = TfeClient::new(credentials);

    match &cli.command {
        Command::Create(args) => run_create_command(&client, args).await,
        Command::Modify(args) => run_modify_command(args),
        Command::Delete(args) => run_delete_command(&client, args).await,
    }
}
