/// DDL generation - turns schema objects into CQL statements
///
/// Structure:
/// - writer: CREATE TABLE / CREATE KEYSPACE assembly and statement sequencing
/// - index: CREATE INDEX / CREATE CUSTOM INDEX assembly

pub mod writer;
pub mod index;

pub use writer::DdlWriter;
