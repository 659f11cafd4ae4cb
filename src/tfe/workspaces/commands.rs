//! Workspace command handlers

use log::debug;

use crate::cli::{CreateArgs, DeleteArgs, ModifyArgs};
use crate::config::vault;
use crate::error::Result;
use crate::tfe::variables::{CreateVariableRequest, VariableCategory};
use crate::tfe::TfeClient;

use super::models::WorkspaceOptions;

/// Run the create command
///
/// Creates the workspace, then stores the Vault token on it as a sensitive
/// environment variable. The token value falls back to an empty string when
/// no source provides one, so the variable always exists on the workspace.
pub async fn run_create_command(client: &TfeClient, args: &CreateArgs) -> Result<()> {
    let options = WorkspaceOptions {
        name: args.workspace.clone(),
        execution_mode: args.execution.to_string(),
        terraform_version: args.terraform_version.clone(),
        working_directory: args.working_directory.clone(),
        trigger_path: args.path.clone(),
        auto_trigger: args.auto_trigger,
        repo: args.repo.clone(),
        branch: args.branch.clone(),
        oauth_token_id: args.oauth.clone(),
    };

    let workspace = client.create_workspace(&args.organisation, &options).await?;

    println!(
        "✓ Created workspace '{}' (ID: {})",
        workspace.name(),
        workspace.id
    );

    let vault_token = args.vault_token.clone().unwrap_or_default();
    if args.vault_token.is_none() {
        debug!("No Vault token given, storing an empty value");
    }

    let request =
        CreateVariableRequest::sensitive(vault::VAR_KEY, &vault_token, VariableCategory::Env);
    let variable = client.create_workspace_variable(&workspace.id, &request).await?;

    println!(
        "✓ Created sensitive variable '{}' (ID: {})",
        variable.key(),
        variable.id
    );

    Ok(())
}

/// Run the delete command
///
/// Prints the status reported by the service without classifying it.
pub async fn run_delete_command(client: &TfeClient, args: &DeleteArgs) -> Result<()> {
    let status = client
        .delete_workspace(&args.organisation, &args.workspace)
        .await?;

    println!("{}", status);

    Ok(())
}

/// Run the modify command
pub fn run_modify_command(args: &ModifyArgs) -> Result<()> {
    debug!(
        "Modify requested for workspace {} in organization {}",
        args.workspace, args.organisation
    );

    println!("modify not implemented yet");

    Ok(())
}
