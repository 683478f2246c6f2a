/// CREATE INDEX / CREATE CUSTOM INDEX statement assembly
///
/// One statement per indexed data column, in column declaration order.
/// In the custom form USING always precedes WITH OPTIONS.

use serde_json::Value;
use std::collections::BTreeMap;
use crate::core::{Column, IndexDescriptor, TableSchema};

/// Index statements for every indexed data column of `table`.
#[must_use]
pub fn index_statements(table: &TableSchema) -> Vec<String> {
    table
        .data_columns()
        .into_iter()
        .filter_map(|column| {
            column
                .index
                .as_ref()
                .map(|descriptor| index_statement_for(table, column, descriptor))
        })
        .collect()
}

fn index_statement_for(table: &TableSchema, column: &Column, descriptor: &IndexDescriptor) -> String {
    match descriptor {
        IndexDescriptor::Standard { name } => format!(
            "CREATE INDEX \"{}\" ON \"{}\" (\"{}\")",
            effective_name(name.as_deref(), table, column),
            table.name,
            column.name
        ),
        IndexDescriptor::Custom { name, using, options } => {
            let mut cql = format!(
                "CREATE CUSTOM INDEX \"{}\" ON \"{}\" (\"{}\")",
                effective_name(name.as_deref(), table, column),
                table.name,
                column.name
            );
            if let Some(class) = using {
                cql.push_str(&format!(" USING '{}'", class));
            }
            if let Some(options) = options {
                cql.push_str(&format!(" WITH OPTIONS = {}", options_literal(options)));
            }
            cql
        }
    }
}

/// Explicit index name if one was declared, `<table>_<column>_idx`
/// otherwise.
fn effective_name(explicit: Option<&str>, table: &TableSchema, column: &Column) -> String {
    match explicit {
        Some(name) => name.to_string(),
        None => format!("{}_{}_idx", table.name, column.name),
    }
}

/// Options map rendered as its JSON form with every double quote swapped
/// for a single quote. The swap is a compatibility contract with existing
/// schema tooling; embedded quotes are not escaped further.
fn options_literal(options: &BTreeMap<String, Value>) -> String {
    let json = Value::Object(options.clone().into_iter().collect());
    json.to_string().replace('"', "'")
}
