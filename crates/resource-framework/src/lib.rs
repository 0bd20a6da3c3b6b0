//! # Resource Framework
//!
//! Building blocks for in-memory resource tables: a store per record type that owns its
//! collection inside a Tokio task, a cloneable client to reach it, a controller that turns
//! CRUD outcomes into user-facing notifications, and a pure projection for filtered and
//! sorted table views.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ResourceEntity`]) - the record type, its draft/patch/action types
//!    and lifecycle hooks.
//! 2. **Runtime Layer** ([`ResourceActor`]) - owns the ordered collection, mints ids,
//!    processes requests one at a time.
//! 3. **Interface Layer** ([`ResourceClient`]) - typed async requests over mpsc/oneshot.
//! 4. **Controller Layer** ([`ResourceController`]) - validation outcomes become
//!    [`Notification`]s on a [`NotificationQueue`]; tracks the record being edited.
//! 5. **View Layer** ([`project`]) - filter and stable sort over a snapshot.
//!
//! ## Concurrency Model
//!
//! - Each store and the notification queue run in their own Tokio task.
//! - Requests are processed **sequentially** within a task, so no collection is locked.
//! - Notification expiry runs on independent timer tasks that only hold weak senders.
//! - Dropping every client ends the corresponding task.
//!
//! ## Example
//!
//! ```rust,ignore
//! let (notice_actor, notices) = NotificationActor::new(32, DEFAULT_NOTICE_DURATION);
//! let (store, client) = ResourceActor::<Permission>::with_records(32, seed);
//! tokio::spawn(notice_actor.run());
//! tokio::spawn(store.run(()));
//!
//! let mut permissions = ResourceController::new(client, notices.clone());
//! permissions.create(PermissionDraft::new("Write", "Can edit")).await?;
//! assert_eq!(notices.pending().await?.len(), 1);
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers store requests from scripted expectations, so controller
//! logic can be tested against failures a real store would rarely produce.

pub mod actor;
pub mod client;
pub mod controller;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod notification;
pub mod projection;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use controller::{Notices, ResourceController};
pub use entity::ResourceEntity;
pub use error::{ControllerError, FrameworkError};
pub use message::{ResourceRequest, Response};
pub use notification::{
    Notification, NotificationActor, NotificationId, NotificationKind, NotificationQueue,
    DEFAULT_NOTICE_DURATION,
};
pub use projection::{project, Criterion, Projectable, SortDirection, SortSpec};
