//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns one store of records and
//! processes its requests sequentially, so the collection needs no lock.

use crate::client::ResourceClient;
use crate::entity::ResourceEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashSet;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns an ordered collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the records and the receiver end
/// of the channel; every [`ResourceClient`] clone feeds the same queue.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` or `ResourceActor::with_records()` returns the
///     actor and its client.
/// 2.  **Run**: spawn `actor.run(context)` on the runtime.
/// 3.  **Use**: share the client; dropping every clone stops the actor.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Permission>::with_records(32, seed);
/// tokio::spawn(actor.run(()));
/// let created = client.create(draft).await?;
/// ```
///
/// # Implementation Details
///
/// * Records live in a `Vec` in insertion order; lookups are linear, which is fine for
///   admin tables.
/// * Ids come from `next_id`, which starts one past the highest seeded id and only moves
///   forward. A deleted id is never handed out again. Once `u32::MAX` has been handed out
///   the counter is `None` and every further create fails with
///   [`FrameworkError::IdsExhausted`].
/// * `Update` and `Action` run the hook on a copy and swap it in on success, so a failing
///   hook leaves the stored record untouched.
pub struct ResourceActor<T: ResourceEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id: Option<u32>,
}

impl<T: ResourceEntity> ResourceActor<T> {
    /// Creates an empty `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client calls
    /// wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_records(buffer_size, Vec::new())
    }

    /// Creates a `ResourceActor` pre-loaded with `records`.
    ///
    /// Seeded ids are kept as given; freshly created records continue after the highest one.
    /// A record whose id was already seeded is dropped with a warning, the first one wins.
    pub fn with_records(buffer_size: usize, records: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);

        let mut seen = HashSet::new();
        let mut store = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id().clone()) {
                store.push(record);
            } else {
                warn!(
                    id = %record.id(),
                    name = record.display_name(),
                    "Duplicate seed id dropped"
                );
            }
        }

        let next_id = match store
            .iter()
            .map(|record| Into::<u32>::into(record.id().clone()))
            .max()
        {
            Some(highest) => highest.checked_add(1),
            None => Some(1),
        };
        let actor = Self {
            receiver,
            store,
            next_id,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// `context` is handed to every hook. It is supplied here rather than in `new()` so
    /// stores can depend on clients created after them.
    pub async fn run(mut self, context: T::Context) {
        // "User" instead of "rbac_admin::model::user::User"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(next) = self.next_id else {
                        warn!(entity_type, "No ids left");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    let id = T::Id::from(next);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.next_id = next.checked_add(1);
                            self.store.push(item.clone());
                            info!(
                                entity_type,
                                %id,
                                name = item.display_name(),
                                size = self.store.len(),
                                "Created"
                            );
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|pos| self.store[pos].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut item = self.store[pos].clone();
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store[pos] = item.clone();
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = self.store[pos].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let removed = self.store.remove(pos);
                    info!(
                        entity_type,
                        %id,
                        name = removed.display_name(),
                        size = self.store.len(),
                        "Deleted"
                    );
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut item = self.store[pos].clone();
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            self.store[pos] = item;
                            info!(entity_type, %id, "Action ok");
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
