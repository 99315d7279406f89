//! Registry of databases plus the current-database selection.

use crate::error::{ObjectKind, SqlError, SqlResult};
use crate::schema::Database;
use indexmap::IndexMap;
use log::info;

/// Top-level registry of databases.
///
/// The current selection is kept as a database name and resolved through
/// the registry on every access, so it can never outlive its target.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    databases: IndexMap<String, Database>,
    current: Option<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            databases: IndexMap::new(),
            current: None,
        }
    }

    /// Register an empty database. Does not change the current selection.
    pub fn create_database(&mut self, name: &str) -> SqlResult<()> {
        if self.databases.contains_key(name) {
            return Err(SqlError::already_exists(ObjectKind::Database, name));
        }

        self.databases.insert(name.to_string(), Database::new(name));
        info!("catalog: created database '{}'", name);
        Ok(())
    }

    /// Make an existing database the current one.
    pub fn use_database(&mut self, name: &str) -> SqlResult<()> {
        if !self.databases.contains_key(name) {
            return Err(SqlError::database_not_found(name));
        }

        self.current = Some(name.to_string());
        info!("catalog: current database is now '{}'", name);
        Ok(())
    }

    pub fn current_database_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_database(&self) -> Option<&Database> {
        self.current
            .as_deref()
            .and_then(|name| self.databases.get(name))
    }

    pub fn current_database_mut(&mut self) -> Option<&mut Database> {
        match self.current.as_deref() {
            Some(name) => self.databases.get_mut(name),
            None => None,
        }
    }

    /// Like `current_database_mut`, failing with `NoDatabaseSelected`.
    pub fn require_current_mut(&mut self) -> SqlResult<&mut Database> {
        self.current_database_mut().ok_or(SqlError::NoDatabaseSelected)
    }

    pub fn database(&self, name: &str) -> Option<&Database> {
        self.databases.get(name)
    }

    pub fn has_database(&self, name: &str) -> bool {
        self.databases.contains_key(name)
    }

    /// Database names in creation order
    pub fn database_names(&self) -> Vec<String> {
        self.databases.keys().cloned().collect()
    }

    pub fn database_count(&self) -> usize {
        self.databases.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_database_does_not_select_it() {
        let mut catalog = Catalog::new();
        catalog.create_database("shop").unwrap();

        assert!(catalog.has_database("shop"));
        assert!(catalog.current_database().is_none());
    }

    #[test]
    fn test_duplicate_database() {
        let mut catalog = Catalog::new();
        catalog.create_database("shop").unwrap();
        assert_eq!(
            catalog.create_database("shop"),
            Err(SqlError::already_exists(ObjectKind::Database, "shop"))
        );
        assert_eq!(catalog.database_count(), 1);
    }

    #[test]
    fn test_use_database() {
        let mut catalog = Catalog::new();
        catalog.create_database("a").unwrap();
        catalog.create_database("b").unwrap();

        catalog.use_database("a").unwrap();
        assert_eq!(catalog.current_database_name(), Some("a"));

        // a failed USE keeps the previous selection
        assert_eq!(
            catalog.use_database("missing"),
            Err(SqlError::database_not_found("missing"))
        );
        assert_eq!(catalog.current_database().map(|db| db.name.as_str()), Some("a"));
        assert!(!catalog.has_database("missing"));

        catalog.use_database("b").unwrap();
        assert_eq!(catalog.current_database_name(), Some("b"));
    }

    #[test]
    fn test_require_current_without_selection() {
        let mut catalog = Catalog::new();
        assert_eq!(
            catalog.require_current_mut().map(|_| ()),
            Err(SqlError::NoDatabaseSelected)
        );
    }

    #[test]
    fn test_database_names_are_case_sensitive() {
        let mut catalog = Catalog::new();
        catalog.create_database("Shop").unwrap();
        catalog.create_database("shop").unwrap();
        assert_eq!(catalog.database_names(), vec!["Shop", "shop"]);
    }
}
