//! New Item Draft
//!
//! Validation and failure messages for the add-item form.

use thiserror::Error;

use crate::api::ApiError;
use crate::models::NewItem;

pub const ADD_SUCCEEDED: &str = "Item added successfully!";
pub const ADD_FAILED: &str = "Failed to add item. Please try again.";
pub const NETWORK_FAILED: &str = "Network error. Please check your connection.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewItemError {
    #[error("Item name is required.")]
    NameRequired,
}

/// Build the create request from the name field.
/// The name is sent as typed; only blank names are refused.
pub fn validate_name(name: &str) -> Result<NewItem, NewItemError> {
    if name.trim().is_empty() {
        return Err(NewItemError::NameRequired);
    }
    Ok(NewItem::named(name))
}

pub fn add_failure_message(err: &ApiError) -> String {
    if let Some(msg) = err.field_error("name") {
        return format!("Error: {msg}");
    }
    if err.is_network() {
        NETWORK_FAILED.to_string()
    } else {
        ADD_FAILED.to_string()
    }
}
