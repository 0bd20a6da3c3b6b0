//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//! Module paths are hidden (`with_target(false)`); stores identify themselves with an
//! `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run -p rbac-admin    # store lifecycle and mutations
//! RUST_LOG=debug cargo run -p rbac-admin   # plus drafts, patches and notifications
//! ```
//!
//! With `RUST_LOG=info` a scripted session reads roughly:
//!
//! ```text
//! INFO Actor started entity_type="User" size=3
//! INFO Notification queue started
//! INFO Created entity_type="User" id=user_4 size=4
//! INFO Action ok entity_type="User" id=user_2
//! WARN Not found entity_type="Permission" id=permission_99
//! ```
//!
//! Passwords never appear: drafts and patches print them as `<redacted>`.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
