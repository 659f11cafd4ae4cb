//! Workspace variables module

mod api;
mod models;

pub use models::{CreateVariableRequest, Variable, VariableAttributes, VariableCategory};
