//! Custom actions for the Role actor.

use crate::model::AccessRight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleAction {
    /// Grant the right if the role lacks it, revoke it otherwise. Returns the updated role.
    TogglePermission(AccessRight),
}
