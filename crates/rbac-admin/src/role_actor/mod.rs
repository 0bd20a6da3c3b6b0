//! # Role Actor
//!
//! The store behind the roles table. Its one custom action,
//! [`RoleAction::TogglePermission`], flips a single [`AccessRight`](crate::model::AccessRight)
//! in a role's set.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Role;
use resource_framework::{ResourceActor, ResourceClient};

/// Creates a Role actor pre-loaded with `seed` and its client.
pub fn new(capacity: usize, seed: Vec<Role>) -> (ResourceActor<Role>, ResourceClient<Role>) {
    ResourceActor::with_records(capacity, seed)
}
