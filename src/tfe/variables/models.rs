//! Workspace variable data models

use serde::{Deserialize, Serialize};

/// Request payload for creating a workspace variable
#[derive(Serialize, Debug)]
pub struct CreateVariableRequest {
    pub data: CreateVariableData,
}

/// Data part of variable creation request
#[derive(Serialize, Debug)]
pub struct CreateVariableData {
    #[serde(rename = "type")]
    pub data_type: String,
    pub attributes: CreateVariableAttributes,
}

/// Attributes for variable creation request
#[derive(Serialize, Debug)]
pub struct CreateVariableAttributes {
    pub key: String,
    pub value: String,
    pub sensitive: bool,
    pub category: VariableCategory,
    pub hcl: bool,
}

/// Variable category (environment variable or Terraform variable)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    Env,
    Terraform,
}

impl CreateVariableRequest {
    /// Create a plain variable request
    pub fn new(key: &str, value: &str, category: VariableCategory) -> Self {
        Self::build(key, value, category, false)
    }

    /// Create a sensitive variable request (value is write-only once stored)
    pub fn sensitive(key: &str, value: &str, category: VariableCategory) -> Self {
        Self::build(key, value, category, true)
    }

    fn build(key: &str, value: &str, category: VariableCategory, sensitive: bool) -> Self {
        Self {
            data: CreateVariableData {
                data_type: "vars".to_string(),
                attributes: CreateVariableAttributes {
                    key: key.to_string(),
                    value: value.to_string(),
                    sensitive,
                    category,
                    hcl: false,
                },
            },
        }
    }

    /// Get the variable key
    pub fn key(&self) -> &str {
        &self.data.attributes.key
    }
}

/// Response wrapper for single variable
#[derive(Deserialize, Debug)]
pub struct VariableResponse {
    pub data: Variable,
}

/// Variable data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    pub attributes: Option<VariableAttributes>,
}

/// Variable attributes from TFE API
#[derive(Deserialize, Debug, Clone, Default)]
pub struct VariableAttributes {
    pub key: Option<String>,
    pub sensitive: Option<bool>,
    pub category: Option<VariableCategory>,
}

impl Variable {
    /// Get key from attributes
    pub fn key(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.key.as_deref())
            .unwrap_or("")
    }

    /// Check whether the variable is sensitive
    pub fn is_sensitive(&self) -> bool {
        self.attributes
            .as_ref()
            .and_then(|a| a.sensitive)
            .unwrap_or(false)
    }
}
