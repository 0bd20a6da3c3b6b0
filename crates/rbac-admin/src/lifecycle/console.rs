use super::config::ConsoleConfig;
use crate::controllers::{PermissionController, RoleController, UserController};
use crate::model::{default_permissions, default_roles, default_users};
use crate::{permission_actor, role_actor, user_actor};
use resource_framework::{ControllerError, NotificationActor, NotificationQueue, ResourceController};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The counters on the dashboard landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub total_users: usize,
    pub active_users: usize,
    pub roles: usize,
    pub permissions: usize,
}

/// The runtime orchestrator of the admin console.
///
/// Owns one controller per table and the shared notification queue. Four tasks run behind
/// them: the users, roles and permissions stores and the notification actor. None of the
/// stores depends on another (`Context = ()`), so they can start in any order.
///
/// # Example
///
/// ```ignore
/// let mut console = AdminConsole::new(&ConsoleConfig::default());
///
/// console.permissions.create(PermissionDraft::new("Export", "Can download reports")).await?;
/// let pending = console.notices.pending().await?;
///
/// console.shutdown().await?;
/// ```
pub struct AdminConsole {
    pub users: UserController,
    pub roles: RoleController,
    pub permissions: PermissionController,
    pub notices: NotificationQueue,

    /// Task handles for the stores and the notification actor (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl AdminConsole {
    /// Spawns every task and wires the controllers to the shared queue.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &ConsoleConfig) -> Self {
        let capacity = config.channel_capacity();
        let (users, roles, permissions) = if config.seed_defaults {
            (default_users(), default_roles(), default_permissions())
        } else {
            (Vec::new(), Vec::new(), Vec::new())
        };

        // 1. Create actors
        let (notice_actor, notices) = NotificationActor::new(capacity, config.notice_duration());
        let (user_actor, user_client) = user_actor::new(capacity, users);
        let (role_actor, role_client) = role_actor::new(capacity, roles);
        let (permission_actor, permission_client) = permission_actor::new(capacity, permissions);

        // 2. Start them
        let handles = vec![
            tokio::spawn(notice_actor.run()),
            tokio::spawn(user_actor.run(())),
            tokio::spawn(role_actor.run(())),
            tokio::spawn(permission_actor.run(())),
        ];

        info!(capacity, seeded = config.seed_defaults, "Admin console started");

        Self {
            users: ResourceController::new(user_client, notices.clone()),
            roles: ResourceController::new(role_client, notices.clone()),
            permissions: ResourceController::new(permission_client, notices.clone()),
            notices,
            handles,
        }
    }

    pub async fn overview(&self) -> Result<Overview, ControllerError> {
        let users = self.users.list().await?;
        Ok(Overview {
            total_users: users.len(),
            active_users: users.iter().filter(|user| user.is_active()).count(),
            roles: self.roles.list().await?.len(),
            permissions: self.permissions.list().await?.len(),
        })
    }

    /// Drops every client, then waits for all tasks to finish.
    ///
    /// Every task is awaited even if an earlier one failed. Returns `Err` with the first
    /// failure if any task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down console...");

        let Self {
            users,
            roles,
            permissions,
            notices,
            handles,
        } = self;

        // Controllers hold queue clones, so they go first for the queue to close too.
        drop(users);
        drop(roles);
        drop(permissions);
        drop(notices);

        join_tasks(handles).await?;

        info!("Console shutdown complete.");
        Ok(())
    }
}

/// Awaits every handle, even after one has failed, and reports the first failure.
async fn join_tasks(handles: Vec<JoinHandle<()>>) -> Result<(), String> {
    let mut failure = None;
    for handle in handles {
        if let Err(e) = handle.await {
            error!("Actor task failed: {:?}", e);
            failure.get_or_insert(format!("Actor task failed: {:?}", e));
        }
    }
    match failure {
        Some(reason) => Err(reason),
        None => Ok(()),
    }
}
