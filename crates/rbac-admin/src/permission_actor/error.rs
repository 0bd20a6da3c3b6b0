//! Error types for the Permission actor.

use thiserror::Error;

pub const PERMISSION_FIELDS_REQUIRED: &str = "Both name and description are required.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PermissionError {
    #[error("{0}")]
    Validation(String),
}
