//! # RBAC Admin Console
//!
//! Drives a scripted session against the in-memory console and logs what an operator
//! would see: the dashboard counters, the users table and the notifications raised
//! along the way.
//!
//! ```bash
//! RUST_LOG=info cargo run -p rbac-admin
//! RBAC_SEED_DEFAULTS=false RUST_LOG=debug cargo run -p rbac-admin
//! ```

use rbac_admin::controllers::{default_user_sort, RoleControllerExt, UserControllerExt};
use rbac_admin::lifecycle::{setup_tracing, AdminConsole, ConsoleConfig};
use rbac_admin::model::{
    AccessRight, PermissionDraft, PermissionId, RoleDraft, RoleFilter, RoleId, UserDraft,
    UserField, UserFilters, UserId, UserPatch,
};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ConsoleConfig::from_env();
    info!(?config, "Starting admin console");
    let mut console = AdminConsole::new(&config);

    let span = tracing::info_span!("user_management");
    async {
        let draft = UserDraft::new(
            "alice",
            "Alice Walker",
            "alice@example.com",
            "s3cret",
            "Editor",
        );
        if let Ok(alice) = console.users.create(draft).await {
            info!(user_id = %alice.id, "User created");
        }

        // Rejected: no password.
        let incomplete = UserDraft::new("carol", "Carol", "carol@example.com", "", "Viewer");
        let _ = console.users.create(incomplete).await;

        let patch = UserPatch {
            email: Some("jane.smith@example.com".to_string()),
            password: Some(String::new()),
            ..Default::default()
        };
        let _ = console.users.update(UserId(2), patch).await;
        let _ = console.users.toggle_status(UserId(3)).await;
        let _ = console.users.delete(UserId(99)).await;

        let filters = UserFilters {
            email: "EXAMPLE".to_string(),
            role: RoleFilter::from("Editor"),
            ..Default::default()
        };
        let mut sort = default_user_sort();
        sort.toggle(UserField::Name);
        match console.users.view_users(&filters, &sort).await {
            Ok(rows) => {
                for user in rows {
                    info!(
                        username = %user.username,
                        name = %user.name,
                        status = %user.status,
                        "Row"
                    );
                }
            }
            Err(e) => warn!(error = %e, "Users table unavailable"),
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("role_management");
    async {
        let _ = console
            .roles
            .create(RoleDraft::new("Auditor", [AccessRight::Read]))
            .await;
        if let Ok(role) = console
            .roles
            .toggle_permission(RoleId(2), AccessRight::Delete)
            .await
        {
            info!(role = %role.name, rights = ?role.permissions, "Rights changed");
        }
        let _ = console.roles.delete(RoleId(3)).await;
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("permission_management");
    async {
        let _ = console
            .permissions
            .create(PermissionDraft::new("Export", "Can download reports"))
            .await;
        let _ = console.permissions.create(PermissionDraft::new("Audit", "")).await;
        let _ = console.permissions.delete(PermissionId(1)).await;
    }
    .instrument(span)
    .await;

    match console.overview().await {
        Ok(overview) => match serde_json::to_string(&overview) {
            Ok(json) => info!(overview = %json, "Dashboard"),
            Err(e) => warn!(error = %e, "Overview not serializable"),
        },
        Err(e) => warn!(error = %e, "Overview unavailable"),
    }

    match console.notices.pending().await {
        Ok(pending) => {
            for notice in pending {
                info!(
                    id = %notice.id,
                    kind = ?notice.kind,
                    message = %notice.message,
                    "Notification"
                );
            }
        }
        Err(e) => warn!(error = %e, "Notification queue unavailable"),
    }

    console.shutdown().await?;

    info!("Session completed");
    Ok(())
}
