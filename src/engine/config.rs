use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Accept CREATE TABLE column lists that repeat a column name
    pub allow_duplicate_columns: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            allow_duplicate_columns: false,
        }
    }
}

impl EngineConfig {
    /// Apply environment-specific overrides
    pub fn apply_environment_overrides(&mut self) {
        if let Ok(value) = std::env::var("TINYDB_ALLOW_DUPLICATE_COLUMNS") {
            self.allow_duplicate_columns = value.to_lowercase() == "true" || value == "1";
        }
    }
}
