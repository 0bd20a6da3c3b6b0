//! Error types for the User actor.

use thiserror::Error;

pub const USER_FIELDS_REQUIRED: &str = "All fields are required to add a new user.";

/// Errors that can occur during user operations.
///
/// The message is shown to the operator as-is.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// A required field of the draft was empty.
    #[error("{0}")]
    Validation(String),
}
