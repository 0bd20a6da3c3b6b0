//! # User Actor
//!
//! The store behind the users table.
//!
//! ## Structure
//!
//! - [`entity`] - [`ResourceEntity`](resource_framework::ResourceEntity) and
//!   [`Notices`](resource_framework::Notices) for [`User`]
//! - [`actions`] - [`UserAction::ToggleStatus`]
//! - [`error`] - [`UserError`], whose messages are shown to the operator
//! - [`new()`] - Factory that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use rbac_admin::model::{default_users, UserDraft};
//! use rbac_admin::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32, default_users());
//!     tokio::spawn(actor.run(()));
//!
//!     let draft = UserDraft::new("alice", "Alice", "alice@example.com", "secret", "Viewer");
//!     let alice = client.create(draft).await?;
//!     assert_eq!(alice.id.0, 4);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::User;
use resource_framework::{ResourceActor, ResourceClient};

/// Creates a User actor pre-loaded with `seed` and its client.
pub fn new(capacity: usize, seed: Vec<User>) -> (ResourceActor<User>, ResourceClient<User>) {
    ResourceActor::with_records(capacity, seed)
}
