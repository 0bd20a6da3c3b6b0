//! # Permission Actor
//!
//! The store behind the permissions table. Plain CRUD, no custom actions.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Permission;
use resource_framework::{ResourceActor, ResourceClient};

/// Creates a Permission actor pre-loaded with `seed` and its client.
pub fn new(
    capacity: usize,
    seed: Vec<Permission>,
) -> (ResourceActor<Permission>, ResourceClient<Permission>) {
    ResourceActor::with_records(capacity, seed)
}
