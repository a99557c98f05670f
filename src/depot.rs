//! Depot configuration generation.
//! Each storage backend has its own parameter set and template; all of them are
//! rendered once and written to `{root}/config-{depot_name}-depot.yaml`.

use crate::error::Result;
use crate::filesystem::write_file;
use crate::loader::TemplateLoader;
use crate::renderer::{Bindings, TemplateRenderer};
use crate::reporter::{GenerationReport, Reporter};
use std::path::{Path, PathBuf};

/// Postgres connection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresDepot {
    pub depot_name: String,
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub database: String,
}

/// Snowflake connection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnowflakeDepot {
    pub depot_name: String,
    pub username: String,
    pub password: String,
    /// Account URL
    pub url: String,
    pub database: String,
    pub warehouse: String,
}

/// S3 bucket parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Depot {
    pub depot_name: String,
    pub bucket_name: String,
    /// Path inside the bucket
    pub relative_path: String,
    pub access_key_id: String,
    pub access_secret_key_id: String,
}

/// BigQuery project parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigQueryDepot {
    pub depot_name: String,
    pub project_id: String,
    /// Path to the service account JSON key
    pub key_file_path: String,
}

/// A depot definition for one storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepotConfig {
    /// Postgres database depot
    Postgres(PostgresDepot),
    /// Snowflake warehouse depot
    Snowflake(SnowflakeDepot),
    /// S3 bucket depot
    S3(S3Depot),
    /// BigQuery project depot
    BigQuery(BigQueryDepot),
}

fn bindings(pairs: &[(&str, &String)]) -> Bindings {
    pairs.iter().map(|(name, value)| (name.to_string(), (*value).clone())).collect()
}

impl DepotConfig {
    pub fn depot_name(&self) -> &str {
        match self {
            DepotConfig::Postgres(depot) => &depot.depot_name,
            DepotConfig::Snowflake(depot) => &depot.depot_name,
            DepotConfig::S3(depot) => &depot.depot_name,
            DepotConfig::BigQuery(depot) => &depot.depot_name,
        }
    }

    /// Default template of the backend, relative to the template root.
    pub fn template_name(&self) -> &'static str {
        match self {
            DepotConfig::Postgres(_) => "depot/postgres.yaml",
            DepotConfig::Snowflake(_) => "depot/snowflake.yaml",
            DepotConfig::S3(_) => "depot/s3.yaml",
            DepotConfig::BigQuery(_) => "depot/bigquery.yaml",
        }
    }

    /// Placeholder values for the backend template.
    pub fn bindings(&self) -> Bindings {
        match self {
            DepotConfig::Postgres(d) => bindings(&[
                ("depot_name", &d.depot_name),
                ("username", &d.username),
                ("password", &d.password),
                ("hostname", &d.hostname),
                ("database", &d.database),
            ]),
            DepotConfig::Snowflake(d) => bindings(&[
                ("depot_name", &d.depot_name),
                ("username", &d.username),
                ("password", &d.password),
                ("url", &d.url),
                ("database", &d.database),
                ("warehouse", &d.warehouse),
            ]),
            DepotConfig::S3(d) => bindings(&[
                ("depot_name", &d.depot_name),
                ("bucket_name", &d.bucket_name),
                ("relative_path", &d.relative_path),
                ("access_key_id", &d.access_key_id),
                ("access_secret_key_id", &d.access_secret_key_id),
            ]),
            DepotConfig::BigQuery(d) => bindings(&[
                ("depot_name", &d.depot_name),
                ("project_id", &d.project_id),
                ("key_file_path", &d.key_file_path),
            ]),
        }
    }

    /// Where the rendered depot file goes.
    pub fn output_path<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        root.as_ref().join(format!("config-{}-depot.yaml", self.depot_name()))
    }
}

/// Renders and writes a single depot config file.
pub struct DepotGenerator<'a> {
    loader: &'a dyn TemplateLoader,
    renderer: &'a dyn TemplateRenderer,
    reporter: &'a dyn Reporter,
}

impl<'a> DepotGenerator<'a> {
    pub fn new(
        loader: &'a dyn TemplateLoader,
        renderer: &'a dyn TemplateRenderer,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self { loader, renderer, reporter }
    }

    /// Renders `depot` with `template` (or the backend default) and writes it under `root`,
    /// overwriting any previous file.
    ///
    /// The content is fully rendered in memory first, so a failed render leaves no file.
    pub fn generate<P: AsRef<Path>>(
        &self,
        root: P,
        depot: &DepotConfig,
        template: Option<&str>,
    ) -> Result<GenerationReport> {
        let template_name = template.unwrap_or(depot.template_name());
        let template = self.loader.load(template_name)?;
        let content = self.renderer.render(&template, &depot.bindings())?;

        let path = depot.output_path(root);
        write_file(&path, &content)?;
        self.reporter.info(&format!(
            "Created depot configuration for {}: {}",
            depot.depot_name(),
            path.display()
        ));

        Ok(GenerationReport { written: vec![path], ..GenerationReport::default() })
    }
}
