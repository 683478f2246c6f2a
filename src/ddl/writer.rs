/// CREATE TABLE / CREATE KEYSPACE statement assembly
///
/// Statement order is part of the contract: the CREATE TABLE statement
/// always precedes the index statements, and index statements follow
/// column declaration order. Sequences are built fresh on every call and
/// never cached.

use crate::core::property::map_literal;
use crate::core::{Column, KeyspaceSchema, SchemaError, TableProperty, TableSchema};
use crate::executor::CqlExecutor;
use super::index;

pub struct DdlWriter;

impl DdlWriter {
    /// Full statement sequence for a table: the CREATE TABLE statement
    /// first, then one index statement per indexed data column.
    #[must_use]
    pub fn statements(table: &TableSchema) -> Vec<String> {
        let mut statements = vec![Self::create_table_statement(table)];
        statements.extend(index::index_statements(table));
        statements
    }

    /// Run every statement for `table` against `executor`, in order.
    /// Stops at the first executor error.
    pub fn apply<E: CqlExecutor>(table: &TableSchema, executor: &mut E) -> Result<(), SchemaError> {
        for statement in Self::statements(table) {
            executor.execute(&statement)?;
        }
        Ok(())
    }

    /// Keyspace statement first, then every table's statements, in
    /// declaration order.
    pub fn apply_keyspace<E: CqlExecutor>(
        keyspace: &KeyspaceSchema,
        executor: &mut E,
    ) -> Result<(), SchemaError> {
        executor.execute(&Self::create_keyspace_statement(keyspace))?;
        for table in &keyspace.tables {
            Self::apply(table, executor)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn create_table_statement(table: &TableSchema) -> String {
        let mut cql = format!(
            "CREATE TABLE {} ({}, {})",
            table.name,
            Self::columns_cql(table),
            Self::primary_key_cql(table)
        );
        if let Some(properties) = Self::properties_cql(table) {
            cql.push_str(&format!(" WITH {}", properties));
        }
        cql
    }

    #[must_use]
    pub fn create_keyspace_statement(keyspace: &KeyspaceSchema) -> String {
        format!(
            "CREATE KEYSPACE {} WITH replication = {} AND durable_writes = {}",
            keyspace.name,
            map_literal(&keyspace.replication),
            keyspace.durable_writes
        )
    }

    #[must_use]
    pub fn drop_table_statement(name: &str) -> String {
        format!("DROP TABLE {}", name)
    }

    #[must_use]
    pub fn drop_index_statement(name: &str) -> String {
        format!("DROP INDEX {}", name)
    }

    fn columns_cql(table: &TableSchema) -> String {
        table
            .columns
            .iter()
            .map(Column::to_cql)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `PRIMARY KEY ((p1, p2), c1, c2)` - partition key names inside the
    /// inner parentheses, clustering names (if any) after.
    fn primary_key_cql(table: &TableSchema) -> String {
        let partition: Vec<&str> = table
            .partition_key_columns()
            .iter()
            .map(|key| key.name.as_str())
            .collect();
        let clustering: Vec<&str> = table
            .clustering_columns()
            .iter()
            .map(|key| key.name.as_str())
            .collect();

        if clustering.is_empty() {
            format!("PRIMARY KEY (({}))", partition.join(", "))
        } else {
            format!(
                "PRIMARY KEY (({}), {})",
                partition.join(", "),
                clustering.join(", ")
            )
        }
    }

    /// WITH-clause fragments joined by AND: declared properties, then
    /// COMPACT STORAGE, then CLUSTERING ORDER BY. None when the clause
    /// would be empty, so the statement carries no WITH at all.
    fn properties_cql(table: &TableSchema) -> Option<String> {
        let mut fragments: Vec<String> = table
            .properties
            .values()
            .map(TableProperty::to_cql)
            .collect();

        if table.compact_storage {
            fragments.push("COMPACT STORAGE".to_string());
        }

        let clustering = table.clustering_columns();
        if !clustering.is_empty() {
            let order_fragments: Vec<String> = clustering
                .iter()
                .filter_map(|key| key.clustering_order_cql())
                .collect();
            fragments.push(format!(
                "CLUSTERING ORDER BY ({})",
                order_fragments.join(",")
            ));
        }

        if fragments.is_empty() {
            None
        } else {
            Some(fragments.join(" AND "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClusteringOrder, CqlType, IndexDescriptor, KeyColumn};
    use crate::executor::StatementLog;
    use serde_json::Value;
    use std::collections::BTreeMap;

    #[test]
    fn test_minimal_table_has_no_with_clause() {
        let table = TableSchema::new(
            "t".to_string(),
            vec![
                Column::new("p".to_string(), CqlType::Int),
                Column::new("v".to_string(), CqlType::Text),
            ],
            vec![KeyColumn::partition("p".to_string())],
        );

        assert_eq!(
            DdlWriter::create_table_statement(&table),
            "CREATE TABLE t (p int, v text, PRIMARY KEY ((p)))"
        );
    }

    #[test]
    fn test_clustering_columns_in_key_and_order_clause() {
        let table = TableSchema::new(
            "t".to_string(),
            vec![
                Column::new("p".to_string(), CqlType::Int),
                Column::new("c1".to_string(), CqlType::Timestamp),
                Column::new("c2".to_string(), CqlType::Int),
            ],
            vec![
                KeyColumn::partition("p".to_string()),
                KeyColumn::clustering("c1".to_string(), ClusteringOrder::Asc),
                KeyColumn::clustering("c2".to_string(), ClusteringOrder::Desc),
            ],
        );

        let statement = DdlWriter::create_table_statement(&table);
        assert!(statement.contains("PRIMARY KEY ((p), c1, c2)"));
        assert!(statement.contains("WITH CLUSTERING ORDER BY (c1 ASC,c2 DESC)"));
    }

    #[test]
    fn test_composite_partition_key() {
        let table = TableSchema::new(
            "t".to_string(),
            vec![
                Column::new("p1".to_string(), CqlType::Int),
                Column::new("p2".to_string(), CqlType::Text),
            ],
            vec![
                KeyColumn::partition("p1".to_string()),
                KeyColumn::partition("p2".to_string()),
            ],
        );

        assert!(
            DdlWriter::create_table_statement(&table).contains("PRIMARY KEY ((p1, p2))")
        );
    }

    #[test]
    fn test_compact_storage_alone() {
        let mut table = TableSchema::new(
            "t".to_string(),
            vec![Column::new("p".to_string(), CqlType::Int)],
            vec![KeyColumn::partition("p".to_string())],
        );
        table.compact_storage = true;

        let statement = DdlWriter::create_table_statement(&table);
        assert!(statement.ends_with(" WITH COMPACT STORAGE"));
        assert_eq!(statement.matches("COMPACT STORAGE").count(), 1);
        assert!(!statement.contains("AND"));
    }

    #[test]
    fn test_properties_joined_with_and() {
        let mut table = TableSchema::new(
            "t".to_string(),
            vec![
                Column::new("p".to_string(), CqlType::Int),
                Column::new("c".to_string(), CqlType::Timestamp),
            ],
            vec![
                KeyColumn::partition("p".to_string()),
                KeyColumn::clustering("c".to_string(), ClusteringOrder::Desc),
            ],
        );
        table.set_property(TableProperty::Comment("time series".to_string()));
        table.compact_storage = true;

        assert_eq!(
            DdlWriter::create_table_statement(&table),
            "CREATE TABLE t (p int, c timestamp, PRIMARY KEY ((p), c)) \
             WITH comment = 'time series' AND COMPACT STORAGE \
             AND CLUSTERING ORDER BY (c DESC)"
        );
    }

    #[test]
    fn test_statement_sequence_without_indexes() {
        let table = TableSchema::new(
            "t".to_string(),
            vec![
                Column::new("p".to_string(), CqlType::Int),
                Column::new("v".to_string(), CqlType::Text),
            ],
            vec![KeyColumn::partition("p".to_string())],
        );

        assert_eq!(DdlWriter::statements(&table).len(), 1);
    }

    #[test]
    fn test_statement_sequence_with_mixed_indexes() {
        let mut options = BTreeMap::new();
        options.insert("mode".to_string(), Value::from("PREFIX"));

        let mut table = TableSchema::new(
            "posts".to_string(),
            vec![
                Column::new("id".to_string(), CqlType::Uuid),
                Column::new("title".to_string(), CqlType::Text),
                Column::new("body".to_string(), CqlType::Text),
            ],
            vec![KeyColumn::partition("id".to_string())],
        );
        table.columns[1].index = Some(IndexDescriptor::Standard { name: None });
        table.columns[2].index = Some(IndexDescriptor::Custom {
            name: None,
            using: Some("org.apache.cassandra.index.sasi.SASIIndex".to_string()),
            options: Some(options),
        });

        let statements = DdlWriter::statements(&table);
        assert_eq!(statements.len(), 3);
        assert!(statements[0].starts_with("CREATE TABLE posts"));
        assert_eq!(
            statements[1],
            "CREATE INDEX \"posts_title_idx\" ON \"posts\" (\"title\")"
        );
        assert_eq!(
            statements[2],
            "CREATE CUSTOM INDEX \"posts_body_idx\" ON \"posts\" (\"body\") \
             USING 'org.apache.cassandra.index.sasi.SASIIndex' \
             WITH OPTIONS = {'mode':'PREFIX'}"
        );
    }

    #[test]
    fn test_statements_are_idempotent() {
        let mut table = TableSchema::new(
            "t".to_string(),
            vec![
                Column::new("p".to_string(), CqlType::Int),
                Column::new("v".to_string(), CqlType::Text),
            ],
            vec![KeyColumn::partition("p".to_string())],
        );
        table.columns[1].index = Some(IndexDescriptor::Standard { name: None });
        table.set_property(TableProperty::GcGraceSeconds(600));

        assert_eq!(DdlWriter::statements(&table), DdlWriter::statements(&table));
    }

    #[test]
    fn test_apply_feeds_statements_in_order() {
        let mut table = TableSchema::new(
            "t".to_string(),
            vec![
                Column::new("p".to_string(), CqlType::Int),
                Column::new("v".to_string(), CqlType::Text),
            ],
            vec![KeyColumn::partition("p".to_string())],
        );
        table.columns[1].index = Some(IndexDescriptor::Standard { name: None });

        let mut log = StatementLog::new();
        DdlWriter::apply(&table, &mut log).unwrap();

        assert_eq!(log.statements().len(), 2);
        assert!(log.statements()[0].starts_with("CREATE TABLE"));
        assert!(log.statements()[1].starts_with("CREATE INDEX"));
    }

    #[test]
    fn test_create_keyspace_statement() {
        let keyspace = KeyspaceSchema::new("blog".to_string());
        assert_eq!(
            DdlWriter::create_keyspace_statement(&keyspace),
            "CREATE KEYSPACE blog WITH replication = \
             {'class': 'SimpleStrategy', 'replication_factor': 1} \
             AND durable_writes = true"
        );
    }

    #[test]
    fn test_drop_statements() {
        assert_eq!(DdlWriter::drop_table_statement("posts"), "DROP TABLE posts");
        assert_eq!(
            DdlWriter::drop_index_statement("posts_title_idx"),
            "DROP INDEX posts_title_idx"
        );
    }
}
