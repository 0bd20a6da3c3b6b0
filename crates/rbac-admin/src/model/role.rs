use resource_framework::Projectable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleId(pub u32);

impl From<u32> for RoleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<RoleId> for u32 {
    fn from(id: RoleId) -> Self {
        id.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "role_{}", self.0)
    }
}

/// A right a role can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccessRight {
    Read,
    Write,
    Delete,
}

impl AccessRight {
    pub const ALL: [AccessRight; 3] = [AccessRight::Read, AccessRight::Write, AccessRight::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessRight::Read => "Read",
            AccessRight::Write => "Write",
            AccessRight::Delete => "Delete",
        }
    }
}

impl fmt::Display for AccessRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named bundle of access rights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub permissions: BTreeSet<AccessRight>,
}

impl Role {
    pub fn grants(&self, right: AccessRight) -> bool {
        self.permissions.contains(&right)
    }
}

/// Payload for creating a role. An empty right set is allowed.
#[derive(Debug, Clone, Default)]
pub struct RoleDraft {
    pub name: String,
    pub permissions: BTreeSet<AccessRight>,
}

impl RoleDraft {
    pub fn new(
        name: impl Into<String>,
        permissions: impl IntoIterator<Item = AccessRight>,
    ) -> Self {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RolePatch {
    pub name: Option<String>,
    pub permissions: Option<BTreeSet<AccessRight>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleField {
    Name,
}

impl Projectable for Role {
    type Field = RoleField;

    fn field_value(&self, field: RoleField) -> &str {
        match field {
            RoleField::Name => &self.name,
        }
    }
}

/// Admin, Editor and Viewer.
pub fn default_roles() -> Vec<Role> {
    use AccessRight::*;

    [
        ("Admin", vec![Read, Write, Delete]),
        ("Editor", vec![Read, Write]),
        ("Viewer", vec![Read]),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, rights), id)| Role {
        id: RoleId(id),
        name: name.to_string(),
        permissions: rights.into_iter().collect(),
    })
    .collect()
}
