//! Custom actions for the User actor.
//!
//! Handled by [`ResourceEntity::handle_action`](resource_framework::ResourceEntity::handle_action)
//! in [`super::entity`].

/// Operations on a user beyond CRUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Flip `Active` and `Inactive`. Returns the updated user.
    ToggleStatus,
}
