use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Table '{0}' not found")]
    TableNotFound(String),
    #[error("Table '{0}' already exists")]
    TableAlreadyExists(String),
    #[error("Schema file '{0}' not found")]
    SchemaFileNotFound(String),
    #[error("Statement execution failed: {0}")]
    Execution(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
