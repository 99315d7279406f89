pub mod table;

pub use table::{Column, Table};

use crate::error::{ObjectKind, SqlError, SqlResult};
use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};

/// A named database owning its tables. Table names are unique within it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
    tables: IndexMap<String, Table>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Database {
            name: name.into(),
            tables: IndexMap::new(),
        }
    }

    /// Add an empty table with the given columns, in the given order.
    ///
    /// An existing table of the same name is left untouched.
    pub fn create_table(&mut self, name: &str, columns: Vec<Column>) -> SqlResult<()> {
        self.add_table(Table::new(name, columns))
    }

    /// Add an already-built table to the database
    pub fn add_table(&mut self, table: Table) -> SqlResult<()> {
        if self.tables.contains_key(&table.name) {
            return Err(SqlError::already_exists(ObjectKind::Table, &table.name));
        }

        info!(
            "database '{}': created table '{}' with {} column(s)",
            self.name,
            table.name,
            table.columns().len()
        );
        self.tables.insert(table.name.clone(), table);
        Ok(())
    }

    /// Get a table by name
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Get a mutable table by name
    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Table names in creation order
    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;

    #[test]
    fn test_empty_database() {
        let db = Database::new("shop");
        assert_eq!(db.name, "shop");
        assert_eq!(db.table_count(), 0);
    }

    #[test]
    fn test_create_table() {
        let mut db = Database::new("shop");
        db.create_table(
            "users",
            vec![
                Column::new("id", DataType::Int),
                Column::new("name", DataType::Text),
            ],
        )
        .unwrap();

        assert!(db.has_table("users"));
        let users = db.table("users").unwrap();
        assert_eq!(users.columns()[0].name, "id");
        assert_eq!(users.columns()[1].data_type, DataType::Text);
    }

    #[test]
    fn test_duplicate_table_is_rejected_and_existing_kept() {
        let mut db = Database::new("shop");
        db.create_table("users", vec![Column::new("id", DataType::Int)]).unwrap();
        db.table_mut("users").unwrap().insert_row(&["1"]).unwrap();

        let err = db
            .create_table("users", vec![Column::new("name", DataType::Text)])
            .unwrap_err();
        assert_eq!(err, SqlError::already_exists(ObjectKind::Table, "users"));

        let users = db.table("users").unwrap();
        assert_eq!(users.columns().len(), 1);
        assert_eq!(users.columns()[0].data_type, DataType::Int);
        assert_eq!(users.row_count(), 1);
    }

    #[test]
    fn test_table_names_keep_creation_order() {
        let mut db = Database::new("shop");
        for name in ["zeta", "alpha", "mid"] {
            db.create_table(name, vec![Column::new("id", DataType::Int)]).unwrap();
        }
        assert_eq!(db.table_names(), vec!["zeta", "alpha", "mid"]);
    }
}
