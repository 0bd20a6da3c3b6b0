//! Records, drafts and patches of the three admin tables, plus their default seed data.

pub mod permission;
pub mod role;
pub mod user;

pub use permission::*;
pub use role::*;
pub use user::*;
