use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use super::column::Column;
use super::key::{KeyColumn, KeyRole};
use super::property::TableProperty;

/// Object representation of a table schema: all columns in declaration
/// order, key columns (partition then clustering), storage properties and
/// the legacy compact storage flag.
///
/// The DDL layer never mutates a `TableSchema`; it only reads it to
/// produce statements. No semantic validation happens here: a schema
/// with an empty partition key renders malformed CQL, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<Column>,
    pub keys: Vec<KeyColumn>,
    /// Keyed by property name; BTreeMap keeps WITH-clause order stable.
    #[serde(default)]
    pub properties: BTreeMap<String, TableProperty>,
    #[serde(default)]
    pub compact_storage: bool,
}

impl TableSchema {
    #[must_use]
    pub fn new(name: String, columns: Vec<Column>, keys: Vec<KeyColumn>) -> Self {
        Self {
            name,
            columns,
            keys,
            properties: BTreeMap::new(),
            compact_storage: false,
        }
    }

    pub fn set_property(&mut self, property: TableProperty) {
        self.properties.insert(property.name().to_string(), property);
    }

    #[must_use]
    pub fn partition_key_columns(&self) -> Vec<&KeyColumn> {
        self.keys
            .iter()
            .filter(|key| matches!(key.role, KeyRole::Partition))
            .collect()
    }

    /// Clustering keys in declaration order; this order drives both the
    /// primary key clause and CLUSTERING ORDER BY.
    #[must_use]
    pub fn clustering_columns(&self) -> Vec<&KeyColumn> {
        self.keys
            .iter()
            .filter(|key| matches!(key.role, KeyRole::Clustering { .. }))
            .collect()
    }

    /// Columns that are not part of the primary key.
    #[must_use]
    pub fn data_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|column| !self.keys.iter().any(|key| key.name == column.name))
            .collect()
    }

    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}
