/// Executor boundary - hands finished CQL statements to whatever runs them
///
/// The DDL layer feeds statements one at a time, in order, and sees only
/// the error each `execute` call returns. Partial application (table
/// created, an index statement rejected) is the caller's concern.

use std::io::Write;
use crate::core::SchemaError;

pub trait CqlExecutor {
    fn execute(&mut self, statement: &str) -> Result<(), SchemaError>;
}

/// Captures statements in order without running them. Backs dry runs and
/// tests.
#[derive(Debug, Default)]
pub struct StatementLog {
    statements: Vec<String>,
}

impl StatementLog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    #[must_use]
    pub fn statements(&self) -> &[String] {
        &self.statements
    }
}

impl CqlExecutor for StatementLog {
    fn execute(&mut self, statement: &str) -> Result<(), SchemaError> {
        self.statements.push(statement.to_string());
        Ok(())
    }
}

/// Writes each statement as a `<statement>;` line to the underlying
/// writer, producing a script replayable through cqlsh.
pub struct ScriptWriter<W: Write> {
    output: W,
}

impl<W: Write> ScriptWriter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> CqlExecutor for ScriptWriter<W> {
    fn execute(&mut self, statement: &str) -> Result<(), SchemaError> {
        writeln!(self.output, "{};", statement)?;
        Ok(())
    }
}
