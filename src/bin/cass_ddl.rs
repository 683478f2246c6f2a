use cassandrust::ddl::index;
use cassandrust::{DdlWriter, IndexDescriptor, KeyRole, KeyspaceSchema, SchemaError, ScriptWriter};
use cassandrust::executor::CqlExecutor;
use clap::Parser;
use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "cass_ddl")]
#[command(about = "Generate CQL DDL scripts from a keyspace schema file", long_about = None)]
struct Args {
    /// Keyspace schema file (JSON)
    schema: Option<PathBuf>,

    /// Emit only CREATE TABLE statements
    #[arg(long)]
    tables_only: bool,

    /// Emit only index statements
    #[arg(long)]
    indexes_only: bool,

    /// Skip the CREATE KEYSPACE statement
    #[arg(long)]
    no_keyspace: bool,

    /// Print a per-table column summary instead of DDL
    #[arg(long)]
    inspect: bool,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

/// File/environment configuration
#[derive(Debug, Default, Deserialize)]
struct CliConfig {
    #[serde(default)]
    schema: Option<String>,
    #[serde(default)]
    output: Option<String>,
}

impl CliConfig {
    /// Load configuration with priority: CLI args > ENV > config file.
    fn load() -> Self {
        let config_paths = ["/etc/cassandrust/cassandrust.toml", "./cassandrust.toml"];

        let mut builder = Config::builder();

        for path in &config_paths {
            if Path::new(path).exists() {
                builder = builder.add_source(ConfigFile::with_name(path));
                eprintln!("Loaded config from: {}", path);
                break;
            }
        }

        builder = builder.add_source(Environment::with_prefix("CASSANDRUST"));

        builder
            .build()
            .ok()
            .and_then(|config| config.try_deserialize::<Self>().ok())
            .unwrap_or_default()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Validate: tables_only and indexes_only are mutually exclusive
    if args.tables_only && args.indexes_only {
        eprintln!("Error: --tables-only and --indexes-only cannot be used together");
        std::process::exit(1);
    }

    let config = CliConfig::load();

    let schema_path = match args.schema.or_else(|| config.schema.map(PathBuf::from)) {
        Some(path) => path,
        None => {
            eprintln!("Error: no schema file given (argument, config file or CASSANDRUST_SCHEMA)");
            std::process::exit(1);
        }
    };
    if !schema_path.exists() {
        return Err(SchemaError::SchemaFileNotFound(schema_path.display().to_string()).into());
    }

    let keyspace: KeyspaceSchema = serde_json::from_reader(File::open(&schema_path)?)?;

    if args.inspect {
        inspect_schema(&keyspace);
        return Ok(());
    }

    // Determine output writer (stdout or file)
    let output_path = args.output.or_else(|| config.output.map(PathBuf::from));
    let mut output: Box<dyn Write> = if let Some(path) = &output_path {
        Box::new(File::create(path)?)
    } else {
        Box::new(io::stdout())
    };

    dump_script(
        &keyspace,
        &mut output,
        args.tables_only,
        args.indexes_only,
        args.no_keyspace,
    )?;

    Ok(())
}

/// Write the DDL script: header comments, then the statement sequence.
fn dump_script(
    keyspace: &KeyspaceSchema,
    output: &mut Box<dyn Write>,
    tables_only: bool,
    indexes_only: bool,
    no_keyspace: bool,
) -> Result<(), SchemaError> {
    writeln!(output, "--")?;
    writeln!(output, "-- Cassandrust schema script")?;
    writeln!(output, "-- Keyspace: {}", keyspace.name)?;
    writeln!(output, "--")?;
    writeln!(output)?;

    let mut writer = ScriptWriter::new(output);

    if indexes_only {
        for table in &keyspace.tables {
            for statement in index::index_statements(table) {
                writer.execute(&statement)?;
            }
        }
        return Ok(());
    }

    if !no_keyspace {
        writer.execute(&DdlWriter::create_keyspace_statement(keyspace))?;
    }

    for table in &keyspace.tables {
        if tables_only {
            writer.execute(&DdlWriter::create_table_statement(table))?;
        } else {
            DdlWriter::apply(table, &mut writer)?;
        }
    }

    Ok(())
}

/// Render per-table column summaries with comfy-table.
fn inspect_schema(keyspace: &KeyspaceSchema) {
    println!("Keyspace: {}", keyspace.name);

    for table in &keyspace.tables {
        let mut summary = comfy_table::Table::new();
        summary.set_header(vec!["Column", "Type", "Key", "Index"]);

        for column in &table.columns {
            let key_role = table
                .keys
                .iter()
                .find(|key| key.name == column.name)
                .map_or_else(String::new, |key| match &key.role {
                    KeyRole::Partition => "partition".to_string(),
                    KeyRole::Clustering { order } => {
                        format!("clustering ({})", order.as_cql())
                    }
                });

            let index_kind = match &column.index {
                Some(IndexDescriptor::Standard { .. }) => "standard".to_string(),
                Some(IndexDescriptor::Custom { using, .. }) => using
                    .as_deref()
                    .map_or_else(|| "custom".to_string(), |class| format!("custom ({})", class)),
                None => String::new(),
            };

            summary.add_row(vec![
                column.name.clone(),
                column.cql_type.to_cql(),
                key_role,
                index_kind,
            ]);
        }

        println!("\nTable: {}", table.name);
        println!("{}", summary);
    }
}
