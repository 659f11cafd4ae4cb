//! CLI argument parsing

pub mod create;
pub mod delete;
pub mod modify;

use clap::{Parser, Subcommand};

pub use create::{CreateArgs, ExecutionMode};
pub use delete::DeleteArgs;
pub use modify::ModifyArgs;

use crate::config::defaults;

/// TFE Workspace Manager CLI
#[derive(Parser, Debug)]
#[command(name = "tfe-ws-manager")]
#[command(version = "0.3.2")]
#[command(about = "Create and delete TFE workspaces", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API token (overrides the TFE_TOKEN env var)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// TFE base URL (overrides the TFE_URL env var)
    #[arg(short = 'u', long, global = true)]
    pub url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long = "log_level", default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,
}

/// Available actions
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a workspace and provision its Vault token variable
    Create(CreateArgs),

    /// Modify a workspace (not implemented yet)
    Modify(ModifyArgs),

    /// Delete a workspace
    Delete(DeleteArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_create_defaults() {
        let cli = Cli::parse_from(["tfe-ws-manager", "create", "acme", "infra"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(cli.token.is_none());
        assert!(cli.url.is_none());

        let Command::Create(args) = cli.command else {
            panic!("expected create command");
        };
        assert_eq!(args.organisation, "acme");
        assert_eq!(args.workspace, "infra");
        assert_eq!(args.execution, ExecutionMode::Remote);
        assert!(args.terraform_version.is_none());
        assert!(args.working_directory.is_none());
        assert!(args.path.is_none());
        assert!(args.auto_trigger.is_none());
        assert!(args.repo.is_none());
        assert!(args.branch.is_none());
    }

    #[test]
    fn test_cli_create_with_execution_mode() {
        let cli = Cli::parse_from(["tfe-ws-manager", "create", "acme", "infra", "-x", "local"]);
        let Command::Create(args) = cli.command else {
            panic!("expected create command");
        };
        assert_eq!(args.execution, ExecutionMode::Local);
    }

    #[test]
    fn test_cli_create_with_vcs_options() {
        let cli = Cli::parse_from([
            "tfe-ws-manager",
            "create",
            "acme",
            "infra",
            "--repo",
            "myorg/myrepo",
            "--branch",
            "main",
            "--oauth",
            "oauth-123",
        ]);
        let Command::Create(args) = cli.command else {
            panic!("expected create command");
        };
        assert_eq!(args.repo, Some("myorg/myrepo".to_string()));
        assert_eq!(args.branch, Some("main".to_string()));
        assert_eq!(args.oauth, Some("oauth-123".to_string()));
    }

    #[test]
    fn test_cli_create_long_flag_aliases() {
        let cli = Cli::parse_from([
            "tfe-ws-manager",
            "create",
            "acme",
            "infra",
            "--tv",
            "1.6.2",
            "--wd",
            "environments/prod",
        ]);
        let Command::Create(args) = cli.command else {
            panic!("expected create command");
        };
        assert_eq!(args.terraform_version, Some("1.6.2".to_string()));
        assert_eq!(args.working_directory, Some("environments/prod".to_string()));
    }

    #[test]
    fn test_cli_create_auto_trigger_values() {
        let cli = Cli::parse_from([
            "tfe-ws-manager",
            "create",
            "acme",
            "infra",
            "--auto_trigger",
            "true",
        ]);
        let Command::Create(args) = cli.command else {
            panic!("expected create command");
        };
        assert_eq!(args.auto_trigger, Some(true));

        let cli = Cli::parse_from([
            "tfe-ws-manager",
            "create",
            "acme",
            "infra",
            "--auto_trigger",
            "false",
        ]);
        let Command::Create(args) = cli.command else {
            panic!("expected create command");
        };
        assert_eq!(args.auto_trigger, Some(false));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "tfe-ws-manager",
            "delete",
            "acme",
            "infra",
            "-t",
            "secret-token",
            "-u",
            "https://tfe.example.com",
        ]);
        assert_eq!(cli.token, Some("secret-token".to_string()));
        assert_eq!(cli.url, Some("https://tfe.example.com".to_string()));

        let Command::Delete(args) = cli.command else {
            panic!("expected delete command");
        };
        assert_eq!(args.organisation, "acme");
        assert_eq!(args.workspace, "infra");
    }

    #[test]
    fn test_cli_modify_command() {
        let cli = Cli::parse_from(["tfe-ws-manager", "modify", "acme", "infra"]);
        assert!(matches!(cli.command, Command::Modify(_)));
    }

    #[test]
    fn test_cli_rejects_invalid_execution_mode() {
        let result =
            Cli::try_parse_from(["tfe-ws-manager", "create", "acme", "infra", "-x", "cloud"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_action() {
        let result = Cli::try_parse_from(["tfe-ws-manager"]);
        assert!(result.is_err());
    }
}
