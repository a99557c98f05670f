//! Command-line interface implementation for coolme.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::{DEFAULT_DATA_PRODUCT, DEFAULT_PROJECT};
use crate::depot::{BigQueryDepot, DepotConfig, PostgresDepot, S3Depot, SnowflakeDepot};
use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use indexmap::IndexMap;
use std::path::PathBuf;

/// Command-line arguments structure for coolme.
#[derive(Parser, Debug)]
#[command(author, version, about = "coolme: scaffolding for ingestion, depot and lens YAML files", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory templates are resolved against
    #[arg(long, value_name = "DIR", global = true)]
    pub templates_dir: Option<PathBuf>,

    /// Configuration file (defaults to coolme.json, coolme.yml or coolme.yaml in the working directory)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create ingestion config files for a list of entities
    Create(CreateArgs),
    /// Create a depot config file for a storage backend
    Depot(DepotArgs),
    /// Scaffold a lens model directory
    Lens(LensArgs),
    /// List the available ingestion environments
    Environments,
}

#[derive(ClapArgs, Debug)]
pub struct CreateArgs {
    /// Ingestion environment, see `coolme environments`
    #[arg(value_name = "ENVIRONMENT")]
    pub environment: String,

    /// Project name
    #[arg(long, default_value = DEFAULT_PROJECT)]
    pub project_name: String,

    /// Name of the data product
    #[arg(long, default_value = DEFAULT_DATA_PRODUCT)]
    pub data_product: String,

    /// Comma-separated list of entities to generate config for
    #[arg(long, value_delimiter = ',')]
    pub entity: Vec<String>,

    /// Output catalog name (defaults to the environment's catalog)
    #[arg(long)]
    pub output_catalog: Option<String>,

    /// Output schema name (defaults to the environment's schema)
    #[arg(long)]
    pub output_schema: Option<String>,

    /// Mapping of entities to output tables, e.g. customer=tbl_customer,order=tbl_order
    #[arg(long, required = true, value_parser = parse_output_tables)]
    pub output_tables: IndexMap<String, String>,

    /// Template file to use instead of the environment's template
    #[arg(long)]
    pub template_path: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct DepotArgs {
    #[command(subcommand)]
    pub backend: DepotBackend,

    /// Template file to use instead of the backend's template
    #[arg(long, global = true)]
    pub template_path: Option<String>,
}

/// Storage backend of a depot, with its connection flags.
#[derive(Subcommand, Debug, Clone)]
pub enum DepotBackend {
    /// Postgres database depot
    Postgres {
        #[arg(long)]
        depot_name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        hostname: String,
        #[arg(long)]
        database: String,
    },
    /// Snowflake warehouse depot
    Snowflake {
        #[arg(long)]
        depot_name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Account URL
        #[arg(long)]
        url: String,
        #[arg(long)]
        database: String,
        #[arg(long)]
        warehouse: String,
    },
    /// S3 bucket depot
    S3 {
        #[arg(long)]
        depot_name: String,
        #[arg(long)]
        bucket_name: String,
        /// Path inside the bucket
        #[arg(long)]
        relative_path: String,
        #[arg(long)]
        access_key_id: String,
        #[arg(long)]
        access_secret_key_id: String,
    },
    /// BigQuery project depot
    #[command(name = "bigquery")]
    BigQuery {
        #[arg(long)]
        depot_name: String,
        #[arg(long)]
        project_id: String,
        /// Path to the service account JSON key
        #[arg(long)]
        key_file_path: String,
    },
}

impl From<DepotBackend> for DepotConfig {
    fn from(backend: DepotBackend) -> Self {
        match backend {
            DepotBackend::Postgres { depot_name, username, password, hostname, database } => {
                DepotConfig::Postgres(PostgresDepot {
                    depot_name,
                    username,
                    password,
                    hostname,
                    database,
                })
            }
            DepotBackend::Snowflake { depot_name, username, password, url, database, warehouse } => {
                DepotConfig::Snowflake(SnowflakeDepot {
                    depot_name,
                    username,
                    password,
                    url,
                    database,
                    warehouse,
                })
            }
            DepotBackend::S3 {
                depot_name,
                bucket_name,
                relative_path,
                access_key_id,
                access_secret_key_id,
            } => DepotConfig::S3(S3Depot {
                depot_name,
                bucket_name,
                relative_path,
                access_key_id,
                access_secret_key_id,
            }),
            DepotBackend::BigQuery { depot_name, project_id, key_file_path } => {
                DepotConfig::BigQuery(BigQueryDepot { depot_name, project_id, key_file_path })
            }
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct LensArgs {
    /// Directory the lens tree is created in
    #[arg(long, value_name = "DIR")]
    pub base_dir: PathBuf,

    /// Comma-separated list of entities to scaffold
    #[arg(long, value_delimiter = ',')]
    pub entity: Vec<String>,
}

/// Parses `key=value` pairs separated by commas.
///
/// Keys and values are trimmed. A pair without exactly one `=` is rejected.
pub fn parse_output_tables(s: &str) -> Result<IndexMap<String, String>, String> {
    s.split(',')
        .map(|pair| match pair.split('=').collect::<Vec<_>>().as_slice() {
            [key, value] => Ok((key.trim().to_string(), value.trim().to_string())),
            _ => Err(format!("expected ENTITY=TABLE, got '{pair}'")),
        })
        .collect()
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if no subcommand is given, after printing help
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingSubcommand
                || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
