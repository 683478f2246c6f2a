use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use super::error::SchemaError;
use super::table::TableSchema;

fn default_durable_writes() -> bool {
    true
}

/// A keyspace and the tables it contains. Tables keep insertion order so
/// generated scripts replay in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyspaceSchema {
    pub name: String,
    #[serde(default)]
    pub replication: BTreeMap<String, Value>,
    #[serde(default = "default_durable_writes")]
    pub durable_writes: bool,
    #[serde(default)]
    pub tables: Vec<TableSchema>,
}

impl KeyspaceSchema {
    #[must_use]
    pub fn new(name: String) -> Self {
        let mut replication = BTreeMap::new();
        replication.insert("class".to_string(), Value::from("SimpleStrategy"));
        replication.insert("replication_factor".to_string(), Value::from(1));

        Self {
            name,
            replication,
            durable_writes: true,
            tables: Vec::new(),
        }
    }

    pub fn create_table(&mut self, table: TableSchema) -> Result<(), SchemaError> {
        if self.get_table(&table.name).is_some() {
            return Err(SchemaError::TableAlreadyExists(table.name));
        }
        self.tables.push(table);
        Ok(())
    }

    pub fn drop_table(&mut self, name: &str) -> Result<(), SchemaError> {
        let position = self
            .tables
            .iter()
            .position(|table| table.name == name)
            .ok_or_else(|| SchemaError::TableNotFound(name.to_string()))?;
        self.tables.remove(position);
        Ok(())
    }

    #[must_use]
    pub fn get_table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|table| table.name == name)
    }
}
