//! # Resource Controller
//!
//! The controller is what a table screen talks to. It sits in front of one store's
//! [`ResourceClient`] and turns every mutation outcome into exactly one notification on the
//! shared [`NotificationQueue`]:
//!
//! | Operation | Success | Failure |
//! |-----------|---------|---------|
//! | `create`  | `Success`: `created_notice` | `Error`: the validation message |
//! | `update`  | `Success`: `updated_notice` | `Error`: `update_missing_notice` |
//! | `delete`  | `DELETE_KIND`: `deleted_notice` | `Error`: `delete_missing_notice` |
//!
//! The texts and the delete kind come from the record's [`Notices`] impl.
//!
//! Failures are also returned to the caller as [`ControllerError`]; nothing panics and the
//! store is never touched by a failed operation.
//!
//! Record-specific operations (toggling a user's status, a role's rights) go through
//! [`ResourceController::perform`], which is silent; the record type's own controller
//! extension decides what to announce.

use crate::client::ResourceClient;
use crate::entity::ResourceEntity;
use crate::error::ControllerError;
use crate::notification::{NotificationKind, NotificationQueue};
use crate::projection::{project, Criterion, Projectable, SortSpec};
use tracing::{debug, instrument, warn};

/// Notification texts for one record type.
pub trait Notices: ResourceEntity {
    /// Kind of the confirmation emitted after a successful delete.
    const DELETE_KIND: NotificationKind;

    fn created_notice(&self) -> String;

    fn updated_notice(&self) -> String;

    fn deleted_notice(&self) -> String;

    fn update_missing_notice() -> String;

    fn delete_missing_notice() -> String;
}

/// CRUD front for one store, with notification side effects and an editing selection.
pub struct ResourceController<T: Notices> {
    client: ResourceClient<T>,
    notices: NotificationQueue,
    editing: Option<T>,
}

impl<T: Notices> ResourceController<T> {
    pub fn new(client: ResourceClient<T>, notices: NotificationQueue) -> Self {
        Self {
            client,
            notices,
            editing: None,
        }
    }

    /// Push a notification, logging instead of failing if the queue is gone.
    pub async fn notify(&self, kind: NotificationKind, message: String) {
        if let Err(e) = self.notices.push(message, kind).await {
            warn!(error = %e, ?kind, "Notification dropped");
        }
    }

    fn failure_notice(error: &ControllerError, missing: fn() -> String) -> String {
        match error {
            ControllerError::Validation(reason) => reason.clone(),
            ControllerError::NotFound(_) => missing(),
            ControllerError::Unavailable(_) => error.to_string(),
        }
    }

    /// Validate `draft` and append it with a fresh id.
    #[instrument(skip(self))]
    pub async fn create(&mut self, draft: T::Create) -> Result<T, ControllerError> {
        debug!("Sending request");
        match self.client.create(draft).await {
            Ok(record) => {
                self.notify(NotificationKind::Success, record.created_notice())
                    .await;
                Ok(record)
            }
            Err(e) => {
                let error = ControllerError::from(e);
                let message = match &error {
                    ControllerError::Validation(reason) => reason.clone(),
                    other => other.to_string(),
                };
                self.notify(NotificationKind::Error, message).await;
                Err(error)
            }
        }
    }

    /// Merge `patch` into the record with `id` and clear the editing selection.
    #[instrument(skip(self))]
    pub async fn update(&mut self, id: T::Id, patch: T::Update) -> Result<T, ControllerError> {
        debug!("Sending request");
        match self.client.update(id, patch).await {
            Ok(record) => {
                self.editing = None;
                self.notify(NotificationKind::Success, record.updated_notice())
                    .await;
                Ok(record)
            }
            Err(e) => {
                let error = ControllerError::from(e);
                let message = Self::failure_notice(&error, T::update_missing_notice);
                self.notify(NotificationKind::Error, message).await;
                Err(error)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: T::Id) -> Result<T, ControllerError> {
        debug!("Sending request");
        match self.client.delete(id).await {
            Ok(record) => {
                if self
                    .editing
                    .as_ref()
                    .is_some_and(|editing| editing.id() == record.id())
                {
                    self.editing = None;
                }
                self.notify(T::DELETE_KIND, record.deleted_notice()).await;
                Ok(record)
            }
            Err(e) => {
                let error = ControllerError::from(e);
                let message = Self::failure_notice(&error, T::delete_missing_notice);
                self.notify(NotificationKind::Error, message).await;
                Err(error)
            }
        }
    }

    /// Run a record-specific action without emitting a notification.
    #[instrument(skip(self))]
    pub async fn perform(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, ControllerError> {
        debug!("Sending request");
        self.client
            .perform_action(id, action)
            .await
            .map_err(ControllerError::from)
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ControllerError> {
        self.client.get(id).await.map_err(ControllerError::from)
    }

    /// Every record in insertion order.
    pub async fn list(&self) -> Result<Vec<T>, ControllerError> {
        self.client.list().await.map_err(ControllerError::from)
    }

    /// Select a record for editing. `None` if it does not exist.
    pub async fn begin_edit(&mut self, id: T::Id) -> Result<Option<T>, ControllerError> {
        let record = self.get(id).await?;
        self.editing = record.clone();
        Ok(record)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<&T> {
        self.editing.as_ref()
    }
}

impl<T> ResourceController<T>
where
    T: Notices + Projectable,
{
    /// Current rows of the table, filtered and sorted.
    pub async fn view(
        &self,
        criteria: &[Criterion<T::Field>],
        sort: &SortSpec<T::Field>,
    ) -> Result<Vec<T>, ControllerError> {
        let records = self.list().await?;
        Ok(project(&records, criteria, sort))
    }
}
