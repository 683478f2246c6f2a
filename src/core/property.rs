use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Table-level storage option, rendered as a `name = <literal>` fragment
/// in the WITH clause of CREATE TABLE.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TableProperty {
    Comment(String),
    GcGraceSeconds(i64),
    DefaultTimeToLive(i64),
    BloomFilterFpChance(f64),
    SpeculativeRetry(String),
    Compaction(BTreeMap<String, Value>),
    Compression(BTreeMap<String, Value>),
    Caching(BTreeMap<String, Value>),
    /// Anything not covered above; `value` is emitted verbatim.
    Raw { name: String, value: String },
}

impl TableProperty {
    /// Property name as it appears left of `=`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Comment(_) => "comment",
            Self::GcGraceSeconds(_) => "gc_grace_seconds",
            Self::DefaultTimeToLive(_) => "default_time_to_live",
            Self::BloomFilterFpChance(_) => "bloom_filter_fp_chance",
            Self::SpeculativeRetry(_) => "speculative_retry",
            Self::Compaction(_) => "compaction",
            Self::Compression(_) => "compression",
            Self::Caching(_) => "caching",
            Self::Raw { name, .. } => name,
        }
    }

    #[must_use]
    pub fn to_cql(&self) -> String {
        match self {
            Self::Comment(text) => format!("comment = '{}'", escape_cql_string(text)),
            Self::GcGraceSeconds(seconds) => format!("gc_grace_seconds = {}", seconds),
            Self::DefaultTimeToLive(seconds) => format!("default_time_to_live = {}", seconds),
            Self::BloomFilterFpChance(chance) => format!("bloom_filter_fp_chance = {}", chance),
            Self::SpeculativeRetry(policy) => {
                format!("speculative_retry = '{}'", escape_cql_string(policy))
            }
            Self::Compaction(options) => format!("compaction = {}", map_literal(options)),
            Self::Compression(options) => format!("compression = {}", map_literal(options)),
            Self::Caching(options) => format!("caching = {}", map_literal(options)),
            Self::Raw { name, value } => format!("{} = {}", name, value),
        }
    }
}

/// `{'key': 'value', 'threshold': 4}` map literal. String values are
/// single-quoted, numbers and booleans render bare.
#[must_use]
pub fn map_literal(map: &BTreeMap<String, Value>) -> String {
    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| format!("'{}': {}", escape_cql_string(key), value_literal(value)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn value_literal(value: &Value) -> String {
    match value {
        Value::String(text) => format!("'{}'", escape_cql_string(text)),
        other => other.to_string(),
    }
}

/// Escape single quotes by doubling them, per CQL string literal syntax.
#[must_use]
pub fn escape_cql_string(s: &str) -> String {
    s.replace('\'', "''")
}
