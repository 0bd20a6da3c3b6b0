//! # RBAC Admin Console
//!
//! In-memory administration of users, roles and permissions, built on `resource-framework`.
//!
//! - **[model]**: records, drafts, patches, table columns and the default seed data.
//! - **[user_actor], [role_actor], [permission_actor]**: the
//!   [`ResourceEntity`](resource_framework::ResourceEntity) implementations, custom actions
//!   and error types behind each store.
//! - **[controllers]**: one controller per table, plus `toggle_status` and
//!   `toggle_permission`.
//! - **[lifecycle]**: [`AdminConsole`](lifecycle::AdminConsole), configuration and tracing.
//!
//! Permissions are data only. Nothing here enforces them, and there is no login.

pub mod controllers;
pub mod lifecycle;
pub mod model;
pub mod permission_actor;
pub mod role_actor;
pub mod user_actor;
