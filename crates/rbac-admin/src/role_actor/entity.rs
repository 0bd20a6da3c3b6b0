//! [`ResourceEntity`] and [`Notices`] implementations for [`Role`].

use super::actions::RoleAction;
use super::error::{RoleError, ROLE_NAME_REQUIRED};
use crate::model::{Role, RoleDraft, RoleId, RolePatch};
use async_trait::async_trait;
use resource_framework::{NotificationKind, Notices, ResourceEntity};

#[async_trait]
impl ResourceEntity for Role {
    type Id = RoleId;
    type Create = RoleDraft;
    type Update = RolePatch;
    type Action = RoleAction;
    type ActionResult = Role;
    type Context = ();
    type Error = RoleError;

    fn id(&self) -> &RoleId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn from_create_params(id: RoleId, params: RoleDraft) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(RoleError::Validation(ROLE_NAME_REQUIRED.to_string()));
        }
        Ok(Self {
            id,
            name: params.name,
            permissions: params.permissions,
        })
    }

    async fn on_update(&mut self, update: RolePatch, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(permissions) = update.permissions {
            self.permissions = permissions;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: RoleAction, _ctx: &()) -> Result<Role, Self::Error> {
        match action {
            RoleAction::TogglePermission(right) => {
                if !self.permissions.remove(&right) {
                    self.permissions.insert(right);
                }
                Ok(self.clone())
            }
        }
    }
}

impl Notices for Role {
    const DELETE_KIND: NotificationKind = NotificationKind::Error;

    fn created_notice(&self) -> String {
        format!("{} role has been created", self.display_name())
    }

    fn updated_notice(&self) -> String {
        format!("{} role has been updated", self.display_name())
    }

    fn deleted_notice(&self) -> String {
        "Role deleted successfully".to_string()
    }

    fn update_missing_notice() -> String {
        "No role selected for update.".to_string()
    }

    fn delete_missing_notice() -> String {
        "Role not found.".to_string()
    }
}
