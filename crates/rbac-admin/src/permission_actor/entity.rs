//! [`ResourceEntity`] and [`Notices`] implementations for [`Permission`].
//!
//! Permissions have no custom actions (`Action = ()`).

use super::error::{PermissionError, PERMISSION_FIELDS_REQUIRED};
use crate::model::{Permission, PermissionDraft, PermissionId, PermissionPatch};
use async_trait::async_trait;
use resource_framework::{NotificationKind, Notices, ResourceEntity};

#[async_trait]
impl ResourceEntity for Permission {
    type Id = PermissionId;
    type Create = PermissionDraft;
    type Update = PermissionPatch;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = PermissionError;

    fn id(&self) -> &PermissionId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn from_create_params(id: PermissionId, params: PermissionDraft) -> Result<Self, Self::Error> {
        if params.name.is_empty() || params.description.is_empty() {
            return Err(PermissionError::Validation(
                PERMISSION_FIELDS_REQUIRED.to_string(),
            ));
        }
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
        })
    }

    async fn on_update(&mut self, update: PermissionPatch, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Notices for Permission {
    // Unlike users and roles, a removed permission is reported as info.
    const DELETE_KIND: NotificationKind = NotificationKind::Info;

    fn created_notice(&self) -> String {
        format!("{} permission has been successfully created.", self.display_name())
    }

    fn updated_notice(&self) -> String {
        format!("{} permission has been successfully updated.", self.display_name())
    }

    fn deleted_notice(&self) -> String {
        format!("{} has been removed from the system.", self.display_name())
    }

    fn update_missing_notice() -> String {
        "No permission selected for editing.".to_string()
    }

    fn delete_missing_notice() -> String {
        "Permission not found.".to_string()
    }
}
