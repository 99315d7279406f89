pub mod config;
pub mod result;

pub use config::EngineConfig;
pub use result::Outcome;

use crate::catalog::Catalog;
use crate::error::{SqlError, SqlResult};
use crate::parser::{
    CreateDatabaseStatement, CreateTableStatement, InsertStatement, SqlParser, Statement,
    UseDatabaseStatement,
};
use crate::schema::{Column, Table};
use log::{debug, warn};

/// Command engine: classifies one statement, parses it and applies it to
/// the catalog it owns.
///
/// Each statement is validated completely before anything is mutated, so a
/// failed statement leaves the catalog as it was.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    catalog: Catalog,
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Engine {
            catalog: Catalog::new(),
            config,
        }
    }

    /// Execute one statement. A trailing `;` is accepted but not required.
    pub fn execute(&mut self, statement: &str) -> SqlResult<Outcome> {
        let result = self.run(statement);
        match &result {
            Ok(outcome) => debug!("ok: {}", outcome),
            Err(e) => warn!("rejected '{}': {}", statement.trim(), e),
        }
        result
    }

    fn run(&mut self, statement: &str) -> SqlResult<Outcome> {
        let parser = SqlParser::new(statement);
        let kind = parser.classify()?;
        debug!("classified statement as {}", kind);

        // the selection is checked before the rest of the statement is parsed
        if kind.needs_database() && self.catalog.current_database().is_none() {
            return Err(SqlError::NoDatabaseSelected);
        }

        match parser.parse()? {
            Statement::CreateDatabase(stmt) => self.create_database(stmt),
            Statement::UseDatabase(stmt) => self.use_database(stmt),
            Statement::CreateTable(stmt) => self.create_table(stmt),
            Statement::Insert(stmt) => self.insert(stmt),
        }
    }

    fn create_database(&mut self, stmt: CreateDatabaseStatement) -> SqlResult<Outcome> {
        self.catalog.create_database(&stmt.name)?;
        Ok(Outcome::DatabaseCreated(stmt.name))
    }

    fn use_database(&mut self, stmt: UseDatabaseStatement) -> SqlResult<Outcome> {
        self.catalog.use_database(&stmt.name)?;
        Ok(Outcome::DatabaseSelected(stmt.name))
    }

    fn create_table(&mut self, stmt: CreateTableStatement) -> SqlResult<Outcome> {
        let columns = stmt
            .columns
            .into_iter()
            .map(|def| Column::new(def.name, def.data_type))
            .collect();
        let table = Table::new(stmt.table_name.clone(), columns);
        if !self.config.allow_duplicate_columns {
            table.validate()?;
        }

        self.catalog.require_current_mut()?.add_table(table)?;
        Ok(Outcome::TableCreated(stmt.table_name))
    }

    fn insert(&mut self, stmt: InsertStatement) -> SqlResult<Outcome> {
        let table = self
            .catalog
            .require_current_mut()?
            .table_mut(&stmt.table)
            .ok_or_else(|| SqlError::table_not_found(&stmt.table))?;

        let row = table.insert_row(stmt.values.as_slice())?;
        debug!("appended {} to '{}'", row, stmt.table);
        Ok(Outcome::RowInserted {
            row_count: table.row_count(),
            table: stmt.table,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
