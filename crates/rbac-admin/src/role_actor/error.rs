//! Error types for the Role actor.

use thiserror::Error;

pub const ROLE_NAME_REQUIRED: &str = "Role name is required.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoleError {
    #[error("{0}")]
    Validation(String),
}
