//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor). Each variant carries a oneshot sender for the reply.

use crate::entity::ResourceEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the CRUD lifecycle of a stored record plus `List` for
/// table views and `Action` for record-specific operations.
///
/// - **Create**: Uses [`ResourceEntity::Create`] to build and append a record, replying with it.
/// - **Get**: Fetches one record by id.
/// - **List**: Fetches every record in insertion order.
/// - **Update**: Merges a [`ResourceEntity::Update`] patch into an existing record.
/// - **Delete**: Removes a record.
/// - **Action**: Executes a [`ResourceEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ResourceEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
