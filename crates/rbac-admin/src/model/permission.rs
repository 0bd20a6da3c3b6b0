use resource_framework::Projectable;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PermissionId(pub u32);

impl From<u32> for PermissionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<PermissionId> for u32 {
    fn from(id: PermissionId) -> Self {
        id.0
    }
}

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "permission_{}", self.0)
    }
}

/// A documented permission. Purely descriptive: nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: PermissionId,
    pub name: String,
    pub description: String,
}

/// Payload for creating a permission. Both fields are required.
#[derive(Debug, Clone, Default)]
pub struct PermissionDraft {
    pub name: String,
    pub description: String,
}

impl PermissionDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PermissionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionField {
    Name,
    Description,
}

impl Projectable for Permission {
    type Field = PermissionField;

    fn field_value(&self, field: PermissionField) -> &str {
        match field {
            PermissionField::Name => &self.name,
            PermissionField::Description => &self.description,
        }
    }
}

pub fn default_permissions() -> Vec<Permission> {
    [
        ("Read", "Can view content"),
        ("Write", "Can create and edit content"),
        ("Delete", "Can remove content"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, description), id)| Permission {
        id: PermissionId(id),
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}
