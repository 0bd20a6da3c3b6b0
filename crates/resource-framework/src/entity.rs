//! # ResourceEntity Trait
//!
//! The `ResourceEntity` trait is the contract every record type (User, Role, Permission, …)
//! implements to be stored by the generic [`ResourceActor`](crate::ResourceActor). It names
//! the id, draft, patch and action types of the record and provides the lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`) the actor drives.
//!
//! # Architecture Note
//! The actor, the client and the controller are written *once* against this trait. A `User`
//! store only accepts a `UserDraft`; sending it a `RoleDraft` is a compile error.
//!
//! # Provided Methods (Hooks)
//! - [`ResourceEntity::on_create`]
//! - [`ResourceEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Identity
/// Ids are minted by the actor from a monotonic `u32` counter, hence the `From<u32>` bound.
/// The `Into<u32>` bound lets the actor resume the counter past seeded records.
///
/// # Async & Context
/// The hooks are `#[async_trait]` and receive the `Context` passed to
/// [`ResourceActor::run`](crate::ResourceActor::run). Stores without dependencies use `()`.
#[async_trait]
pub trait ResourceEntity: Clone + Send + Sync + 'static {
    /// Unique identifier within one store.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32> + Into<u32>;

    /// Draft used to create a new record.
    type Create: Send + Sync + Debug;

    /// Partial record applied by `update`.
    type Update: Send + Sync + Debug;

    /// Record-specific operations beyond CRUD (e.g. `ToggleStatus`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// The error type for this record.
    ///
    /// One enum per record type rather than one per operation; `from_create_params`
    /// validation failures and action failures share it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id assigned to this record.
    fn id(&self) -> &Self::Id;

    /// Human readable name used in notifications and logs.
    fn display_name(&self) -> &str;

    /// Validate the draft and build the record.
    /// Returning `Err` leaves the store untouched.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merge a patch into the record.
    ///
    /// The actor applies the patch to a copy and only stores it when this returns `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
