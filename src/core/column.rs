use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use super::cql_type::CqlType;

/// Secondary index attached to a data column.
///
/// An explicit `name` overrides the `<table>_<column>_idx` default when the
/// index statement is generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum IndexDescriptor {
    Standard {
        name: Option<String>,
    },
    Custom {
        name: Option<String>,
        using: Option<String>,
        options: Option<BTreeMap<String, Value>>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub name: String,
    pub cql_type: CqlType,
    pub index: Option<IndexDescriptor>,
}

impl Column {
    #[must_use]
    pub fn new(name: String, cql_type: CqlType) -> Self {
        Self {
            name,
            cql_type,
            index: None,
        }
    }

    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Column definition fragment inside CREATE TABLE.
    #[must_use]
    pub fn to_cql(&self) -> String {
        format!("{} {}", self.name, self.cql_type.to_cql())
    }
}
