// Module declarations
pub mod error;
pub mod cql_type;
pub mod key;
pub mod column;
pub mod property;
pub mod table;
pub mod keyspace;

// Re-exports for convenience
pub use error::SchemaError;
pub use cql_type::CqlType;
pub use key::{ClusteringOrder, KeyColumn, KeyRole};
pub use column::{Column, IndexDescriptor};
pub use property::TableProperty;
pub use table::TableSchema;
pub use keyspace::KeyspaceSchema;
