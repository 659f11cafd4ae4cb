//! Workspace data models

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// Workspace configuration collected from the CLI, immutable once built
#[derive(Debug, Clone, Default)]
pub struct WorkspaceOptions {
    pub name: String,
    pub execution_mode: String,
    pub terraform_version: Option<String>,
    pub working_directory: Option<String>,
    pub trigger_path: Option<String>,
    pub auto_trigger: Option<bool>,
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub oauth_token_id: Option<String>,
}

/// Request payload for creating a workspace
#[derive(Serialize, Debug)]
pub struct CreateWorkspaceRequest {
    pub data: CreateWorkspaceData,
}

/// Data part of workspace creation request
#[derive(Serialize, Debug)]
pub struct CreateWorkspaceData {
    #[serde(rename = "type")]
    pub data_type: String,
    pub attributes: CreateWorkspaceAttributes,
}

/// Attributes for workspace creation request
///
/// Optional attributes are omitted from the payload entirely when unset,
/// leaving the choice of defaults to the service.
#[derive(Serialize, Debug)]
pub struct CreateWorkspaceAttributes {
    pub name: String,
    #[serde(rename = "execution-mode")]
    pub execution_mode: String,
    #[serde(rename = "terraform-version", skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(rename = "working-directory", skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(
        rename = "file-triggers-enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_triggers_enabled: Option<bool>,
    #[serde(rename = "trigger-prefixes", skip_serializing_if = "Option::is_none")]
    pub trigger_prefixes: Option<Vec<String>>,
    #[serde(rename = "vcs-repo", skip_serializing_if = "Option::is_none")]
    pub vcs_repo: Option<VcsRepo>,
}

/// VCS repository binding for a workspace
#[derive(Serialize, Debug)]
pub struct VcsRepo {
    #[serde(rename = "oauth-token-id")]
    pub oauth_token_id: String,
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl CreateWorkspaceRequest {
    /// Build a workspace creation request from resolved options
    ///
    /// A VCS repository binding requires an OAuth token ID; without one the
    /// request is refused before anything is sent. A branch given without a
    /// repository has nothing to bind to and is skipped with a warning.
    pub fn from_options(options: &WorkspaceOptions) -> Result<Self> {
        let vcs_repo = match &options.repo {
            Some(identifier) => {
                let oauth_token_id = options
                    .oauth_token_id
                    .clone()
                    .ok_or_else(|| TfeError::OauthTokenNotFound(oauth_not_found_message()))?;
                Some(VcsRepo {
                    oauth_token_id,
                    identifier: identifier.clone(),
                    branch: options.branch.clone(),
                })
            }
            None => {
                if options.branch.is_some() {
                    warn!("--branch given without --repo, ignoring");
                }
                None
            }
        };

        Ok(Self {
            data: CreateWorkspaceData {
                data_type: "workspaces".to_string(),
                attributes: CreateWorkspaceAttributes {
                    name: options.name.clone(),
                    execution_mode: options.execution_mode.clone(),
                    terraform_version: options.terraform_version.clone(),
                    working_directory: options.working_directory.clone(),
                    file_triggers_enabled: options.auto_trigger,
                    trigger_prefixes: options.trigger_path.clone().map(|path| vec![path]),
                    vcs_repo,
                },
            },
        })
    }
}

/// Generate helpful error message when a repo is given without an OAuth token ID
fn oauth_not_found_message() -> String {
    format!(
        "A VCS repository was given but no OAuth token ID was found. \
         Please provide one using one of:\n\
         \n\
         1. CLI argument:      tfe-ws-manager create ... --oauth <OAUTH_TOKEN_ID>\n\
         2. Environment var:   export {}=<OAUTH_TOKEN_ID>",
        credentials::OAUTH_TOKEN_ENV_VAR
    )
}

/// Response wrapper for single workspace
#[derive(Deserialize, Debug)]
pub struct WorkspaceResponse {
    pub data: Workspace,
}

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: Option<WorkspaceAttributes>,
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone, Default)]
pub struct WorkspaceAttributes {
    pub name: Option<String>,
    #[serde(rename = "execution-mode")]
    pub execution_mode: Option<String>,
    #[serde(rename = "terraform-version")]
    pub terraform_version: Option<String>,
}

impl Workspace {
    /// Get name from attributes
    pub fn name(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or("")
    }

    /// Get execution mode from attributes
    pub fn execution_mode(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.execution_mode.as_deref())
            .unwrap_or("")
    }

    /// Get Terraform version from attributes
    pub fn terraform_version(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.terraform_version.as_deref())
            .unwrap_or("")
    }
}
