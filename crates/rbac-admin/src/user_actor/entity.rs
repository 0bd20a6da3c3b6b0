//! [`ResourceEntity`] and [`Notices`] implementations for [`User`].

use super::actions::UserAction;
use super::error::{UserError, USER_FIELDS_REQUIRED};
use crate::model::{PasswordDigest, User, UserDraft, UserId, UserPatch, UserStatus};
use async_trait::async_trait;
use resource_framework::{NotificationKind, Notices, ResourceEntity};

#[async_trait]
impl ResourceEntity for User {
    type Id = UserId;
    type Create = UserDraft;
    type Update = UserPatch;
    type Action = UserAction;
    type ActionResult = User;
    type Context = ();
    type Error = UserError;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    /// Every draft field must be non-empty. The password is digested here and the
    /// plaintext dropped with the draft.
    fn from_create_params(id: UserId, params: UserDraft) -> Result<Self, Self::Error> {
        let complete = [
            &params.username,
            &params.name,
            &params.email,
            &params.password,
            &params.role,
        ]
        .iter()
        .all(|field| !field.is_empty());
        if !complete {
            return Err(UserError::Validation(USER_FIELDS_REQUIRED.to_string()));
        }

        Ok(Self {
            id,
            username: params.username,
            name: params.name,
            email: params.email,
            password: PasswordDigest::from_plaintext(&params.password),
            role: params.role,
            status: UserStatus::Active,
        })
    }

    async fn on_update(&mut self, update: UserPatch, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        // Blank means "keep current password".
        if let Some(password) = update.password.filter(|p| !p.is_empty()) {
            self.password = PasswordDigest::from_plaintext(&password);
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<User, Self::Error> {
        match action {
            UserAction::ToggleStatus => {
                self.status = self.status.toggled();
                Ok(self.clone())
            }
        }
    }
}

impl Notices for User {
    const DELETE_KIND: NotificationKind = NotificationKind::Error;

    fn created_notice(&self) -> String {
        format!("{} has been added as a {}", self.display_name(), self.role)
    }

    fn updated_notice(&self) -> String {
        format!("{}'s information has been updated", self.display_name())
    }

    fn deleted_notice(&self) -> String {
        format!("{} has been removed from the system", self.display_name())
    }

    fn update_missing_notice() -> String {
        "No user selected for update.".to_string()
    }

    fn delete_missing_notice() -> String {
        "User not found.".to_string()
    }
}
