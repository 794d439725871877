//! Staff directory: the static id → employee reference data.

use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, normalize_id};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Directory {
    by_id: BTreeMap<String, Employee>,
}

impl Directory {
    /// Build a directory, normalizing ids. Blank and duplicate ids are rejected.
    pub fn from_employees<I>(employees: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = Employee>,
    {
        let mut by_id = BTreeMap::new();

        for emp in employees {
            let emp = Employee::new(&emp.id, &emp.name);
            if emp.id.is_empty() {
                return Err(AppError::Directory(format!(
                    "blank staff id for '{}'",
                    emp.name
                )));
            }
            if by_id.contains_key(&emp.id) {
                return Err(AppError::Directory(format!(
                    "duplicate staff id '{}'",
                    emp.id
                )));
            }
            by_id.insert(emp.id.clone(), emp);
        }

        Ok(Self { by_id })
    }

    /// Load a YAML (`.yml`/`.yaml`) or JSON (`.json`) list of `{id, name}` records.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Directory(format!("cannot read '{}': {}", path.display(), e))
        })?;

        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let records: Vec<Employee> = if is_json {
            serde_json::from_str(&content)?
        } else if content.trim().is_empty() {
            Vec::new()
        } else {
            serde_yaml::from_str::<Option<Vec<Employee>>>(&content)?.unwrap_or_default()
        };

        Self::from_employees(records)
    }

    pub fn lookup(&self, raw_id: &str) -> Option<&Employee> {
        self.by_id.get(&normalize_id(raw_id))
    }

    pub fn contains(&self, raw_id: &str) -> bool {
        self.lookup(raw_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.by_id.values()
    }
}
