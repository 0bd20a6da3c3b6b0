use rbac_admin::controllers::{
    default_user_sort, PermissionController, RoleControllerExt, UserControllerExt,
};
use rbac_admin::lifecycle::{AdminConsole, ConsoleConfig, Overview};
use rbac_admin::model::{
    AccessRight, Permission, PermissionDraft, PermissionId, PermissionPatch, RoleDraft,
    RoleFilter, RoleId, RolePatch, User, UserDraft, UserField, UserFilters, UserId, UserPatch,
    UserStatus,
};
use rbac_admin::permission_actor;
use resource_framework::mock::MockClient;
use resource_framework::{
    ControllerError, FrameworkError, NotificationActor, NotificationKind, NotificationQueue,
    ResourceController, SortSpec, DEFAULT_NOTICE_DURATION,
};
use std::time::Duration;

fn start() -> AdminConsole {
    AdminConsole::new(&ConsoleConfig::default())
}

async fn notices(queue: &NotificationQueue) -> Vec<(NotificationKind, String)> {
    queue
        .pending()
        .await
        .unwrap()
        .into_iter()
        .map(|n| (n.kind, n.message))
        .collect()
}

fn alice() -> UserDraft {
    UserDraft::new("alice", "Alice Walker", "alice@example.com", "s3cret", "Editor")
}

// --- Users ---

#[tokio::test]
async fn test_create_user_appends_and_announces() {
    let mut console = start();

    let created = console.users.create(alice()).await.unwrap();
    assert_eq!(created.id, UserId(4));
    assert_eq!(created.status, UserStatus::Active);
    assert!(created.verify_password("s3cret"));

    assert_eq!(console.users.list().await.unwrap().len(), 4);
    assert_eq!(console.users.get(UserId(4)).await.unwrap(), Some(created));
    assert_eq!(
        notices(&console.notices).await,
        vec![(
            NotificationKind::Success,
            "Alice Walker has been added as a Editor".to_string()
        )]
    );

    console.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_incomplete_user_is_rejected_once() {
    let mut console = start();
    let draft = UserDraft {
        email: String::new(),
        ..alice()
    };

    let err = console.users.create(draft).await.unwrap_err();
    assert_eq!(
        err,
        ControllerError::Validation("All fields are required to add a new user.".into())
    );
    assert_eq!(console.users.list().await.unwrap().len(), 3);
    assert_eq!(
        notices(&console.notices).await,
        vec![(
            NotificationKind::Error,
            "All fields are required to add a new user.".to_string()
        )]
    );
}

#[tokio::test]
async fn test_update_user_overwrites_only_patched_fields() {
    let mut console = start();
    let before = console.users.get(UserId(2)).await.unwrap().unwrap();

    console.users.begin_edit(UserId(2)).await.unwrap();
    let patch = UserPatch {
        email: Some("jane.smith@example.com".into()),
        password: Some(String::new()),
        ..Default::default()
    };
    let after = console.users.update(UserId(2), patch).await.unwrap();

    assert_eq!(after.id, before.id);
    assert_eq!(after.email, "jane.smith@example.com");
    assert_eq!(after.username, before.username);
    assert_eq!(after.role, before.role);
    assert_eq!(after.password, before.password);
    assert!(after.verify_password("password456"));
    assert!(console.users.editing().is_none());

    let patch = UserPatch {
        password: Some("n3w".into()),
        ..Default::default()
    };
    let rotated = console.users.update(UserId(2), patch).await.unwrap();
    assert!(rotated.verify_password("n3w"));

    let messages = notices(&console.notices).await;
    assert_eq!(
        messages[0],
        (
            NotificationKind::Success,
            "Jane Smith's information has been updated".to_string()
        )
    );
}

#[tokio::test]
async fn test_update_missing_user() {
    let mut console = start();

    let err = console
        .users
        .update(UserId(42), UserPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ControllerError::NotFound(_)));
    assert_eq!(
        notices(&console.notices).await,
        vec![(NotificationKind::Error, "No user selected for update.".to_string())]
    );
}

#[tokio::test]
async fn test_delete_user() {
    let mut console = start();

    let removed = console.users.delete(UserId(1)).await.unwrap();
    assert_eq!(removed.name, "John Doe");
    assert_eq!(console.users.list().await.unwrap().len(), 2);
    assert!(console.users.get(UserId(1)).await.unwrap().is_none());

    console.users.delete(UserId(1)).await.unwrap_err();
    assert_eq!(console.users.list().await.unwrap().len(), 2);

    assert_eq!(
        notices(&console.notices).await,
        vec![
            (
                NotificationKind::Error,
                "John Doe has been removed from the system".to_string()
            ),
            (NotificationKind::Error, "User not found.".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_toggle_status() {
    let console = start();

    let bob = console.users.toggle_status(UserId(3)).await.unwrap();
    assert_eq!(bob.status, UserStatus::Active);
    let bob = console.users.toggle_status(UserId(3)).await.unwrap();
    assert_eq!(bob.status, UserStatus::Inactive);

    let err = console.users.toggle_status(UserId(8)).await.unwrap_err();
    assert!(matches!(err, ControllerError::NotFound(_)));

    assert_eq!(
        notices(&console.notices).await,
        vec![
            (NotificationKind::Info, "Bob Johnson is now active".to_string()),
            (NotificationKind::Info, "Bob Johnson is now inactive".to_string()),
            (NotificationKind::Error, "User not found.".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let mut console = start();

    console.users.delete(UserId(3)).await.unwrap();
    let created = console.users.create(alice()).await.unwrap();
    assert_eq!(created.id, UserId(4));

    let ids: Vec<_> = console
        .users
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, vec![UserId(1), UserId(2), UserId(4)]);
}

// --- Users table ---

fn usernames(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.username.as_str()).collect()
}

#[tokio::test]
async fn test_users_table_filters_and_sorts() {
    let console = start();

    let all = console
        .users
        .view_users(&UserFilters::default(), &default_user_sort())
        .await
        .unwrap();
    assert_eq!(usernames(&all), vec!["bobjohnson", "janesmith", "johndoe"]);

    let filters = UserFilters {
        name: "JO".into(),
        ..Default::default()
    };
    let view = console
        .users
        .view_users(&filters, &SortSpec::descending(UserField::Name))
        .await
        .unwrap();
    assert_eq!(usernames(&view), vec!["johndoe", "bobjohnson"]);

    let filters = UserFilters {
        role: RoleFilter::from("Editor"),
        ..Default::default()
    };
    let view = console
        .users
        .view_users(&filters, &default_user_sort())
        .await
        .unwrap();
    assert_eq!(usernames(&view), vec!["janesmith"]);

    // Exact match: "editor" is not "Editor".
    let filters = UserFilters {
        role: RoleFilter::from("editor"),
        ..Default::default()
    };
    assert!(console
        .users
        .view_users(&filters, &default_user_sort())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_users_table_sorts_by_status_stably() {
    let console = start();

    let mut sort = default_user_sort();
    sort.toggle(UserField::Status);
    let view = console
        .users
        .view_users(&UserFilters::default(), &sort)
        .await
        .unwrap();
    // Active rows keep their store order.
    assert_eq!(usernames(&view), vec!["johndoe", "janesmith", "bobjohnson"]);

    sort.toggle(UserField::Status);
    let view = console
        .users
        .view_users(&UserFilters::default(), &sort)
        .await
        .unwrap();
    assert_eq!(usernames(&view), vec!["bobjohnson", "johndoe", "janesmith"]);
}

// --- Roles ---

#[tokio::test]
async fn test_role_lifecycle() {
    let mut console = start();

    let auditor = console
        .roles
        .create(RoleDraft::new("Auditor", [AccessRight::Read]))
        .await
        .unwrap();
    assert_eq!(auditor.id, RoleId(4));

    console.roles.create(RoleDraft::new("", [])).await.unwrap_err();

    let renamed = console
        .roles
        .update(
            RoleId(4),
            RolePatch {
                name: Some("Reviewer".into()),
                permissions: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.permissions, auditor.permissions);

    console.roles.delete(RoleId(4)).await.unwrap();
    console.roles.delete(RoleId(4)).await.unwrap_err();

    assert_eq!(
        notices(&console.notices).await,
        vec![
            (NotificationKind::Success, "Auditor role has been created".to_string()),
            (NotificationKind::Error, "Role name is required.".to_string()),
            (NotificationKind::Success, "Reviewer role has been updated".to_string()),
            (NotificationKind::Error, "Role deleted successfully".to_string()),
            (NotificationKind::Error, "Role not found.".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_toggle_permission_is_silent_and_reversible() {
    let console = start();
    let editor = console.roles.get(RoleId(2)).await.unwrap().unwrap();

    let granted = console
        .roles
        .toggle_permission(RoleId(2), AccessRight::Delete)
        .await
        .unwrap();
    assert!(granted.grants(AccessRight::Delete));

    let restored = console
        .roles
        .toggle_permission(RoleId(2), AccessRight::Delete)
        .await
        .unwrap();
    assert_eq!(restored.permissions, editor.permissions);

    let err = console
        .roles
        .toggle_permission(RoleId(77), AccessRight::Read)
        .await
        .unwrap_err();
    assert!(matches!(err, ControllerError::NotFound(_)));

    assert!(console.notices.pending().await.unwrap().is_empty());
}

// --- Permissions ---

fn permissions_with(seed: Vec<Permission>) -> (PermissionController, NotificationQueue) {
    let (notice_actor, queue) = NotificationActor::new(16, DEFAULT_NOTICE_DURATION);
    let (actor, client) = permission_actor::new(16, seed);
    tokio::spawn(notice_actor.run());
    tokio::spawn(actor.run(()));
    (ResourceController::new(client, queue.clone()), queue)
}

#[tokio::test]
async fn test_create_permission_after_single_seed() {
    let seed = vec![Permission {
        id: PermissionId(1),
        name: "Read".into(),
        description: "Can view content".into(),
    }];
    let (mut permissions, queue) = permissions_with(seed);

    permissions
        .create(PermissionDraft::new("Write", "Can edit"))
        .await
        .unwrap();

    let all = permissions.list().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].id, PermissionId(2));

    let pending = queue.pending().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].kind, NotificationKind::Success);
    assert!(pending[0].message.contains("Write"));
}

#[tokio::test]
async fn test_delete_missing_permission() {
    let mut console = start();

    let err = console.permissions.delete(PermissionId(99)).await.unwrap_err();
    assert!(matches!(err, ControllerError::NotFound(_)));
    assert_eq!(console.permissions.list().await.unwrap().len(), 3);
    assert_eq!(
        notices(&console.notices).await,
        vec![(NotificationKind::Error, "Permission not found.".to_string())]
    );
}

#[tokio::test]
async fn test_permission_messages() {
    let mut console = start();

    console
        .permissions
        .create(PermissionDraft::new("Audit", ""))
        .await
        .unwrap_err();
    console
        .permissions
        .update(
            PermissionId(2),
            PermissionPatch {
                description: Some("Can edit content".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    console
        .permissions
        .update(PermissionId(9), PermissionPatch::default())
        .await
        .unwrap_err();
    console.permissions.delete(PermissionId(3)).await.unwrap();

    assert_eq!(
        notices(&console.notices).await,
        vec![
            (
                NotificationKind::Error,
                "Both name and description are required.".to_string()
            ),
            (
                NotificationKind::Success,
                "Write permission has been successfully updated.".to_string()
            ),
            (
                NotificationKind::Error,
                "No permission selected for editing.".to_string()
            ),
            (
                NotificationKind::Info,
                "Delete has been removed from the system.".to_string()
            ),
        ]
    );
}

// --- Console ---

#[tokio::test]
async fn test_overview_tracks_mutations() {
    let mut console = start();
    assert_eq!(
        console.overview().await.unwrap(),
        Overview {
            total_users: 3,
            active_users: 2,
            roles: 3,
            permissions: 3,
        }
    );

    console.users.create(alice()).await.unwrap();
    console.users.toggle_status(UserId(1)).await.unwrap();
    console.roles.delete(RoleId(1)).await.unwrap();

    let overview = console.overview().await.unwrap();
    assert_eq!(overview.total_users, 4);
    assert_eq!(overview.active_users, 2);
    assert_eq!(overview.roles, 2);

    console.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unseeded_console_starts_empty() {
    let config = ConsoleConfig {
        seed_defaults: false,
        ..Default::default()
    };
    let mut console = AdminConsole::new(&config);

    let first = console
        .permissions
        .create(PermissionDraft::new("Read", "Can view content"))
        .await
        .unwrap();
    assert_eq!(first.id, PermissionId(1));
    assert_eq!(console.users.list().await.unwrap().len(), 0);

    console.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_console_notifications_expire() {
    let config = ConsoleConfig {
        notice_duration_ms: 1000,
        ..Default::default()
    };
    let mut console = AdminConsole::new(&config);

    console.users.delete(UserId(99)).await.unwrap_err();
    tokio::time::sleep(Duration::from_millis(500)).await;
    console.users.create(alice()).await.unwrap();
    assert_eq!(console.notices.pending().await.unwrap().len(), 2);

    tokio::time::sleep(Duration::from_millis(501)).await;
    assert_eq!(
        notices(&console.notices).await,
        vec![(
            NotificationKind::Success,
            "Alice Walker has been added as a Editor".to_string()
        )]
    );

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(console.notices.pending().await.unwrap().is_empty());

    console.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_toggle_status_reports_unavailable_store() {
    let (notice_actor, queue) = NotificationActor::new(16, DEFAULT_NOTICE_DURATION);
    tokio::spawn(notice_actor.run());

    let mut mock = MockClient::<User>::new();
    mock.expect_action(UserId(2))
        .return_err(FrameworkError::ActorClosed);
    let users = ResourceController::new(mock.client(), queue.clone());

    let err = users.toggle_status(UserId(2)).await.unwrap_err();
    assert!(matches!(err, ControllerError::Unavailable(_)));

    let pending = queue.pending().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].kind, NotificationKind::Error);
    assert_eq!(pending[0].message, err.to_string());
    mock.verify();
}
