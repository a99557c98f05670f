//! Ingestion configuration generation.
//! Renders one template per entity into
//! `{root}/{project}/{data_product}/build/data-processing/config-{entity}.yaml`.

use crate::constants::INGESTION_BUILD_DIR;
use crate::error::{Error, Result};
use crate::filesystem::{ensure_directory, write_file};
use crate::loader::TemplateLoader;
use crate::renderer::{Bindings, TemplateRenderer};
use crate::reporter::{GenerationReport, Reporter};
use indexmap::IndexMap;
use log::debug;
use std::path::PathBuf;

/// Parameters for one ingestion batch.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    /// Directory the project tree is created under, usually the working directory.
    pub root: PathBuf,
    pub project: String,
    pub data_product: String,
    /// Entity names, possibly padded with whitespace.
    pub entities: Vec<String>,
    pub output_catalog: String,
    pub output_schema: String,
    /// Entity name to destination table.
    pub output_tables: IndexMap<String, String>,
    /// Template path relative to the loader's root.
    pub template: String,
}

impl IngestionRequest {
    /// Directory every config file of the batch is written to.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.project).join(&self.data_product).join(INGESTION_BUILD_DIR)
    }
}

/// Human-readable title for an entity, e.g. `customer_order` becomes `Customer Order`.
///
/// Underscores become spaces. Each run of letters starts uppercase and continues
/// lowercase; any other character is kept and ends the run.
pub fn ingestion_title(entity: &str) -> String {
    let mut title = String::with_capacity(entity.len());
    let mut in_word = false;

    for c in entity.chars() {
        if c.is_alphabetic() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(if c == '_' { ' ' } else { c });
            in_word = false;
        }
    }

    title
}

/// Looks up the destination table of `entity`. Empty entries count as missing.
pub fn output_table_for<'a>(
    output_tables: &'a IndexMap<String, String>,
    entity: &str,
) -> Result<&'a str> {
    output_tables
        .get(entity)
        .map(String::as_str)
        .filter(|table| !table.is_empty())
        .ok_or_else(|| Error::MissingOutputMapping { entity: entity.to_string() })
}

/// Generates ingestion config files for a batch of entities.
pub struct IngestionGenerator<'a> {
    loader: &'a dyn TemplateLoader,
    renderer: &'a dyn TemplateRenderer,
    reporter: &'a dyn Reporter,
}

impl<'a> IngestionGenerator<'a> {
    pub fn new(
        loader: &'a dyn TemplateLoader,
        renderer: &'a dyn TemplateRenderer,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self { loader, renderer, reporter }
    }

    /// Writes one config file per entity that has an output table.
    ///
    /// Existing config files are overwritten.
    ///
    /// # Errors
    /// Aborts the whole batch on:
    /// * `Error::DirectoryCreateFailure` for the output directory
    /// * `Error::TemplateNotFound` / `Error::TemplateReadError`
    /// * `Error::MissingBinding` when the template needs a value the batch does not supply
    ///
    /// Entities without an output table and failed writes are reported and recorded
    /// in the returned [`GenerationReport`]; the rest of the batch still runs.
    pub fn generate(&self, request: &IngestionRequest) -> Result<GenerationReport> {
        let output_dir = request.output_dir();
        ensure_directory(&output_dir)?;
        self.reporter.info(&format!("Created directory: {}", output_dir.display()));

        let template = self.loader.load(&request.template)?;
        let mut report = GenerationReport::default();

        for raw in &request.entities {
            let entity = raw.trim();
            if entity.is_empty() {
                self.reporter.warn("Skipping blank entity name.");
                continue;
            }

            let output_table = match output_table_for(&request.output_tables, entity) {
                Ok(table) => table,
                Err(err) => {
                    self.reporter.warn(&format!("{err} Skipping file creation."));
                    report.skipped.push(entity.to_string());
                    continue;
                }
            };

            let bindings = Bindings::from([
                ("profile".to_string(), entity.to_string()),
                ("ingestion_title".to_string(), ingestion_title(entity)),
                ("output_catalog".to_string(), request.output_catalog.clone()),
                ("output_schema".to_string(), request.output_schema.clone()),
                ("output_table".to_string(), output_table.to_string()),
            ]);
            debug!("Rendering '{}' for {}", request.template, entity);
            let content = self.renderer.render(&template, &bindings)?;

            let path = output_dir.join(format!("config-{entity}.yaml"));
            match write_file(&path, &content) {
                Ok(()) => {
                    self.reporter.info(&format!(
                        "Created configuration file for {entity}: {}",
                        path.display()
                    ));
                    report.written.push(path);
                }
                Err(err) => {
                    self.reporter.error(&err.to_string());
                    report.failed.push(path);
                }
            }
        }

        Ok(report)
    }
}
