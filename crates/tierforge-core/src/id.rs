use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a single item in the external catalog (`namespace:path` form).
/// Equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Names a group of items in the external catalog. The wrapped name never
/// carries the `#` reference marker; use [`crate::tag`] to construct one from
/// raw config input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(pub(crate) String);

impl TagId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Re-adds the `#` marker, producing the reference form used in
    /// configuration documents.
    pub fn to_reference(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
