//! # Errors
//!
//! Two layers:
//! - [`FrameworkError`]: what a store request can fail with (channel gone, id missing,
//!   record rejected the operation).
//! - [`ControllerError`]: what a controller operation reports to its caller after it has
//!   already surfaced the failure as a notification.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
    #[error("No ids left in this store")]
    IdsExhausted,
}

/// Outcome of a failed controller operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// The record rejected the operation: a required draft field was missing, or a patch,
    /// action or delete hook returned its error. The message is the record's own error text.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The target id is not in the store.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store cannot serve the request: its task is no longer running, or it has no ids
    /// left to hand out.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Every [`FrameworkError::EntityError`] becomes `Validation`, whichever hook produced it.
/// A rejected patch or action is therefore reported the same way as an incomplete draft.
impl From<FrameworkError> for ControllerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ControllerError::NotFound(id),
            FrameworkError::EntityError(inner) => ControllerError::Validation(inner.to_string()),
            other @ (FrameworkError::ActorClosed
            | FrameworkError::ActorDropped
            | FrameworkError::IdsExhausted) => {
                ControllerError::Unavailable(other.to_string())
            }
        }
    }
}
