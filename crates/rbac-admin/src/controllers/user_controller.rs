//! # User Controller
//!
//! [`ResourceController<User>`] plus the user-only operations: toggling an account's status
//! and the filtered, sorted users table.

use crate::model::{User, UserField, UserFilters, UserId};
use crate::user_actor::UserAction;
use async_trait::async_trait;
use resource_framework::{ControllerError, NotificationKind, ResourceController, SortSpec};
use tracing::{debug, instrument};

pub type UserController = ResourceController<User>;

/// The users table starts sorted by username, ascending.
pub fn default_user_sort() -> SortSpec<UserField> {
    SortSpec::ascending(UserField::Username)
}

#[async_trait]
pub trait UserControllerExt {
    /// Flip the user's status and announce it as `info` ("Jane Smith is now inactive").
    /// A missing user is reported as `error`.
    async fn toggle_status(&self, id: UserId) -> Result<User, ControllerError>;

    /// The users table as currently filtered and sorted.
    async fn view_users(
        &self,
        filters: &UserFilters,
        sort: &SortSpec<UserField>,
    ) -> Result<Vec<User>, ControllerError>;
}

#[async_trait]
impl UserControllerExt for UserController {
    #[instrument(skip(self))]
    async fn toggle_status(&self, id: UserId) -> Result<User, ControllerError> {
        debug!("Sending request");
        match self.perform(id, UserAction::ToggleStatus).await {
            Ok(user) => {
                let message = format!(
                    "{} is now {}",
                    user.name,
                    user.status.as_str().to_lowercase()
                );
                self.notify(NotificationKind::Info, message).await;
                Ok(user)
            }
            Err(e) => {
                let message = match &e {
                    ControllerError::NotFound(_) => "User not found.".to_string(),
                    other => other.to_string(),
                };
                self.notify(NotificationKind::Error, message).await;
                Err(e)
            }
        }
    }

    async fn view_users(
        &self,
        filters: &UserFilters,
        sort: &SortSpec<UserField>,
    ) -> Result<Vec<User>, ControllerError> {
        self.view(&filters.criteria(), sort).await
    }
}
