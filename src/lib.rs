// Cassandrust - Cassandra schema toolkit in Rust
// Typed table definitions with CQL DDL generation

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]

// Core schema model structures
pub mod core;

// DDL generation (CREATE TABLE, CREATE INDEX, CREATE KEYSPACE)
pub mod ddl;

// Executor boundary (statement log, script writer)
pub mod executor;

// Re-export commonly used types for convenience
pub use self::core::{
    ClusteringOrder, Column, CqlType, IndexDescriptor, KeyColumn, KeyRole, KeyspaceSchema,
    SchemaError, TableProperty, TableSchema,
};
pub use self::ddl::DdlWriter;
pub use self::executor::{CqlExecutor, ScriptWriter, StatementLog};
