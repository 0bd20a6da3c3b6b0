//! # Role Controller

use crate::model::{AccessRight, Role, RoleId};
use crate::role_actor::RoleAction;
use async_trait::async_trait;
use resource_framework::{ControllerError, ResourceController};
use tracing::{debug, instrument};

pub type RoleController = ResourceController<Role>;

#[async_trait]
pub trait RoleControllerExt {
    /// Grant or revoke one right. Emits no notification, even when the role is missing;
    /// the error is only returned.
    async fn toggle_permission(
        &self,
        id: RoleId,
        right: AccessRight,
    ) -> Result<Role, ControllerError>;
}

#[async_trait]
impl RoleControllerExt for RoleController {
    #[instrument(skip(self))]
    async fn toggle_permission(
        &self,
        id: RoleId,
        right: AccessRight,
    ) -> Result<Role, ControllerError> {
        debug!("Sending request");
        self.perform(id, RoleAction::TogglePermission(right)).await
    }
}
