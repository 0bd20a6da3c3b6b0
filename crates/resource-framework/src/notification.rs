//! # Notification Queue
//!
//! Transient, auto-expiring messages raised by controller operations ("Jane Smith has been
//! added as a Editor", "User not found.").
//!
//! The queue follows the same actor recipe as the stores: a [`NotificationActor`] task owns
//! the pending list and a cloneable [`NotificationQueue`] handle talks to it over a channel.
//!
//! ## Expiry
//!
//! Every push schedules its own [`ExpiryTimer`]: a spawned task that sleeps for the
//! notification's duration and then asks the actor to drop it. The timer only holds a
//! *weak* sender, so outstanding timers never keep the queue alive. `dismiss` aborts the
//! matching timer and nothing else.
//!
//! ```rust,ignore
//! let (actor, queue) = NotificationActor::new(32, DEFAULT_NOTICE_DURATION);
//! tokio::spawn(actor.run());
//!
//! let id = queue.push("Write permission has been successfully created.", Success).await?;
//! queue.dismiss(id).await?; // or wait three seconds
//! ```

use crate::error::FrameworkError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// How long a notification stays visible unless pushed with an explicit duration.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// Identity of a notification, unique for the lifetime of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notice_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub duration: Duration,
}

#[derive(Debug)]
enum NotificationRequest {
    Push {
        message: String,
        kind: NotificationKind,
        duration: Duration,
        respond_to: oneshot::Sender<NotificationId>,
    },
    Dismiss {
        id: NotificationId,
        respond_to: oneshot::Sender<bool>,
    },
    Expire {
        id: NotificationId,
    },
    Pending {
        respond_to: oneshot::Sender<Vec<Notification>>,
    },
}

/// A deferred removal of one notification.
///
/// Cancelling aborts the sleeping task; a timer that already fired is unaffected.
#[derive(Debug)]
pub struct ExpiryTimer {
    handle: JoinHandle<()>,
}

impl ExpiryTimer {
    fn schedule(
        id: NotificationId,
        after: Duration,
        queue: mpsc::WeakSender<NotificationRequest>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if let Some(sender) = queue.upgrade() {
                let _ = sender.send(NotificationRequest::Expire { id }).await;
            }
        });
        Self { handle }
    }

    pub fn cancel(self) {
        self.handle.abort();
    }
}

/// Owns the pending notifications and their timers.
pub struct NotificationActor {
    receiver: mpsc::Receiver<NotificationRequest>,
    expiry: mpsc::WeakSender<NotificationRequest>,
    pending: Vec<Notification>,
    timers: HashMap<NotificationId, ExpiryTimer>,
    next_id: u64,
}

impl NotificationActor {
    /// Creates the actor and its queue handle.
    ///
    /// `default_duration` applies to [`NotificationQueue::push`].
    pub fn new(buffer_size: usize, default_duration: Duration) -> (Self, NotificationQueue) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            expiry: sender.downgrade(),
            pending: Vec::new(),
            timers: HashMap::new(),
            next_id: 1,
        };
        let queue = NotificationQueue {
            sender,
            default_duration,
        };
        (actor, queue)
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|notice| notice.id != id);
        self.pending.len() != before
    }

    pub async fn run(mut self) {
        info!("Notification queue started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                NotificationRequest::Push {
                    message,
                    kind,
                    duration,
                    respond_to,
                } => {
                    let id = NotificationId(self.next_id);
                    self.next_id += 1;
                    debug!(%id, ?kind, %message, "Push");
                    self.timers
                        .insert(id, ExpiryTimer::schedule(id, duration, self.expiry.clone()));
                    self.pending.push(Notification {
                        id,
                        message,
                        kind,
                        duration,
                    });
                    let _ = respond_to.send(id);
                }
                NotificationRequest::Dismiss { id, respond_to } => {
                    if let Some(timer) = self.timers.remove(&id) {
                        timer.cancel();
                    }
                    let removed = self.remove(id);
                    debug!(%id, removed, "Dismiss");
                    let _ = respond_to.send(removed);
                }
                NotificationRequest::Expire { id } => {
                    self.timers.remove(&id);
                    if self.remove(id) {
                        debug!(%id, "Expired");
                    }
                }
                NotificationRequest::Pending { respond_to } => {
                    let _ = respond_to.send(self.pending.clone());
                }
            }
        }

        for (_, timer) in self.timers.drain() {
            timer.cancel();
        }
        info!(size = self.pending.len(), "Notification queue shutdown");
    }
}

/// Cloneable handle to a running [`NotificationActor`].
#[derive(Clone)]
pub struct NotificationQueue {
    sender: mpsc::Sender<NotificationRequest>,
    default_duration: Duration,
}

impl NotificationQueue {
    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<R>) -> NotificationRequest,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Push with the queue's default duration.
    pub async fn push(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Result<NotificationId, FrameworkError> {
        self.push_for(message, kind, self.default_duration).await
    }

    pub async fn push_for(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration: Duration,
    ) -> Result<NotificationId, FrameworkError> {
        let message = message.into();
        self.request(|respond_to| NotificationRequest::Push {
            message,
            kind,
            duration,
            respond_to,
        })
        .await
    }

    /// Removes a notification before it expires.
    ///
    /// Returns `false` if it was already gone.
    pub async fn dismiss(&self, id: NotificationId) -> Result<bool, FrameworkError> {
        self.request(|respond_to| NotificationRequest::Dismiss { id, respond_to })
            .await
    }

    /// Notifications still visible, oldest first.
    pub async fn pending(&self) -> Result<Vec<Notification>, FrameworkError> {
        self.request(|respond_to| NotificationRequest::Pending { respond_to })
            .await
    }
}
