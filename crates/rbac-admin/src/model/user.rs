use resource_framework::{Criterion, Projectable};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<UserId> for u32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// SHA-256 hex digest of a user's password. The plaintext is never kept.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn from_plaintext(plaintext: &str) -> Self {
        Self(hex::encode(Sha256::digest(plaintext.as_bytes())))
    }

    pub fn matches(&self, plaintext: &str) -> bool {
        *self == Self::from_plaintext(plaintext)
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An account shown in the users table.
///
/// # Resource Framework
/// Implements [`ResourceEntity`](resource_framework::ResourceEntity), see
/// [`crate::user_actor::entity`]:
/// - Creation parameters ([`UserDraft`]), every field required
/// - Update parameters ([`UserPatch`])
/// - Actions ([`UserAction`](crate::user_actor::UserAction))
///
/// `role` holds a role *name*, not a [`RoleId`](crate::model::RoleId); renaming or deleting a
/// role does not touch the users assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: PasswordDigest,
    pub role: String,
    pub status: UserStatus,
}

impl User {
    pub fn verify_password(&self, plaintext: &str) -> bool {
        self.password.matches(plaintext)
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Payload for adding a user. New users start `Active`.
#[derive(Clone, Default)]
pub struct UserDraft {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl UserDraft {
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: role.into(),
        }
    }
}

// Drafts and patches are logged at debug level; the password must not be.
impl fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDraft")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Partial user. `None` leaves a field as it is; so does an empty `password`.
#[derive(Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub status: Option<UserStatus>,
}

impl fmt::Debug for UserPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPatch")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("role", &self.role)
            .field("status", &self.status)
            .finish()
    }
}

/// Sortable and filterable columns of the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserField {
    Username,
    Name,
    Email,
    Role,
    Status,
}

impl Projectable for User {
    type Field = UserField;

    fn field_value(&self, field: UserField) -> &str {
        match field {
            UserField::Username => &self.username,
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Role => &self.role,
            UserField::Status => self.status.as_str(),
        }
    }
}

/// The role dropdown above the users table. `"all"` shows every role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleFilter {
    #[default]
    All,
    Exactly(String),
}

impl From<&str> for RoleFilter {
    fn from(value: &str) -> Self {
        match value {
            "all" => RoleFilter::All,
            role => RoleFilter::Exactly(role.to_string()),
        }
    }
}

impl From<String> for RoleFilter {
    fn from(value: String) -> Self {
        RoleFilter::from(value.as_str())
    }
}

impl From<RoleFilter> for String {
    fn from(filter: RoleFilter) -> Self {
        match filter {
            RoleFilter::All => "all".to_string(),
            RoleFilter::Exactly(role) => role,
        }
    }
}

/// Text filters of the users table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFilters {
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: RoleFilter,
}

impl UserFilters {
    pub fn criteria(&self) -> Vec<Criterion<UserField>> {
        let mut criteria = Vec::new();
        for (field, needle) in [
            (UserField::Username, &self.username),
            (UserField::Name, &self.name),
            (UserField::Email, &self.email),
        ] {
            if !needle.is_empty() {
                criteria.push(Criterion::contains(field, needle.as_str()));
            }
        }
        if let RoleFilter::Exactly(role) = &self.role {
            criteria.push(Criterion::equals(UserField::Role, role.as_str()));
        }
        criteria
    }
}

/// The accounts a fresh console starts with.
pub fn default_users() -> Vec<User> {
    use UserStatus::{Active, Inactive};

    [
        ("johndoe", "John Doe", "john@example.com", "password123", "Admin", Active),
        ("janesmith", "Jane Smith", "jane@example.com", "password456", "Editor", Active),
        ("bobjohnson", "Bob Johnson", "bob@example.com", "password789", "Viewer", Inactive),
    ]
    .into_iter()
    .zip(1..)
    .map(|((username, name, email, password, role, status), id)| User {
        id: UserId(id),
        username: username.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: PasswordDigest::from_plaintext(password),
        role: role.to_string(),
        status,
    })
    .collect()
}
