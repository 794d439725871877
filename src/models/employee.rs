use serde::{Deserialize, Serialize};

/// A staff member as listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
}

impl Employee {
    /// Build an employee with its id already normalized.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: normalize_id(id),
            name: name.trim().to_string(),
        }
    }
}

/// Staff ids are compared trimmed and uppercase.
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}
