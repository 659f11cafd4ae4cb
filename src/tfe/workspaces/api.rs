//! Workspace API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::tfe::TfeClient;

use super::models::{CreateWorkspaceRequest, Workspace, WorkspaceOptions, WorkspaceResponse};

impl TfeClient {
    /// Create a workspace in an organization
    ///
    /// Builds the creation payload from `options` and returns the workspace
    /// reported by the service, including its assigned ID.
    pub async fn create_workspace(
        &self,
        org: &str,
        options: &WorkspaceOptions,
    ) -> Result<Workspace> {
        let request = CreateWorkspaceRequest::from_options(options)?;

        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES
        );

        debug!("Creating workspace {} in organization {}", options.name, org);

        let response = self.post(&url).json(&request).send().await?;

        match response.status().as_u16() {
            200 | 201 => {
                let workspace_response: WorkspaceResponse = response.json().await?;
                debug!(
                    "Successfully created workspace {} (ID: {})",
                    options.name, workspace_response.data.id
                );
                Ok(workspace_response.data)
            }
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("Organization '{}' not found", org),
            }),
            422 => {
                // Try to parse error message from response
                let error_body: serde_json::Value =
                    response.json().await.unwrap_or(serde_json::json!({}));
                let error_msg = error_body["errors"][0]["detail"]
                    .as_str()
                    .unwrap_or("Validation error");
                Err(TfeError::Api {
                    status: 422,
                    message: format!("Cannot create workspace '{}': {}", options.name, error_msg),
                })
            }
            status => {
                let error_body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!(
                        "Failed to create workspace '{}' in '{}': {}",
                        options.name, org, error_body
                    ),
                })
            }
        }
    }

    /// Delete a workspace by name
    ///
    /// Returns the HTTP status reported by the service without classifying
    /// it; the caller decides what to make of the outcome.
    pub async fn delete_workspace(
        &self,
        org: &str,
        workspace: &str,
    ) -> Result<reqwest::StatusCode> {
        let url = format!(
            "{}/{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES,
            urlencoding::encode(workspace)
        );

        debug!("Deleting workspace {} in organization {}", workspace, org);

        let response = self.delete(&url).send().await?;

        Ok(response.status())
    }
}
