//! Workspace variable API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::tfe::TfeClient;

use super::models::{CreateVariableRequest, Variable, VariableResponse};

impl TfeClient {
    /// Create a variable scoped to a workspace
    pub async fn create_workspace_variable(
        &self,
        workspace_id: &str,
        request: &CreateVariableRequest,
    ) -> Result<Variable> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::WORKSPACES,
            urlencoding::encode(workspace_id),
            api::VARS
        );

        debug!(
            "Creating variable {} for workspace {}",
            request.key(),
            workspace_id
        );

        let response = self.post(&url).json(request).send().await?;

        match response.status().as_u16() {
            200 | 201 => {
                let variable_response: VariableResponse = response.json().await?;
                debug!(
                    "Successfully created variable {} (ID: {})",
                    request.key(),
                    variable_response.data.id
                );
                Ok(variable_response.data)
            }
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("Workspace '{}' not found", workspace_id),
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
                    message: format!("Cannot create variable '{}': {}", request.key(), error_msg),
                })
            }
            status => {
                let error_body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!(
                        "Failed to create variable '{}' for workspace '{}': {}",
                        request.key(),
                        workspace_id,
                        error_body
                    ),
                })
            }
        }
    }
}
