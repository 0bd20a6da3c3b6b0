//! Controllers for the three admin tables.
//!
//! Each is a [`ResourceController`](resource_framework::ResourceController) over one store;
//! operations that only make sense for one record type live on an extension trait.

pub mod role_controller;
pub mod user_controller;

pub use role_controller::*;
pub use user_controller::*;

use crate::model::Permission;
use resource_framework::ResourceController;

/// Permissions need nothing beyond CRUD and the generic `view`.
pub type PermissionController = ResourceController<Permission>;
