//! Lens (semantic model) scaffolding.
//!
//! Lays out `model/sqls`, `model/tables` and `model` under a base directory, then per
//! entity an empty SQL stub and a table model. Nothing here overwrites a non-empty file.

use crate::constants::{
    LENS_DATA_SOURCE, LENS_DEPLOYMENT_FILE, LENS_MODEL_DIR, LENS_SQLS_DIR, LENS_TABLES_DIR,
    LENS_USER_GROUP_FILE,
};
use crate::error::Result;
use crate::filesystem::{create_file_if_absent_or_empty, ensure_directory};
use crate::renderer::{Bindings, MiniJinjaRenderer, TemplateRenderer};
use crate::reporter::{GenerationReport, Reporter};
use std::path::{Path, PathBuf};

/// Table model written to `model/tables/{entity}.yaml`.
const TABLE_MODEL_TEMPLATE: &str = r#"tables:
  - name: {{ entity }}
    sql: {{ "{{" }} load_sql('{{ entity }}') {{ "}}" }}
    description: "This table captures detailed data about {{ entity }}."
    data_source: {{ data_source }}
    public: true
    joins:
      - name: tables
        relationship: one_to_one
        sql: "{ TABLE.key }= { tables.key }"
    dimensions:
      - name: id
        description: "Unique identifier for each {{ entity }}, linking it to related activities."
        type: number
        column: id
        primary_key: true
        public: true
"#;

/// Scaffolds lens model trees.
///
/// Table models are rendered with MiniJinja.
pub struct LensGenerator<'a> {
    renderer: MiniJinjaRenderer,
    reporter: &'a dyn Reporter,
}

impl<'a> LensGenerator<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self { renderer: MiniJinjaRenderer::new(), reporter }
    }

    /// Renders the table model of one entity.
    pub fn table_model(&self, entity: &str) -> Result<String> {
        let bindings = Bindings::from([
            ("entity".to_string(), entity.to_string()),
            ("data_source".to_string(), LENS_DATA_SOURCE.to_string()),
        ]);
        self.renderer.render(TABLE_MODEL_TEMPLATE, &bindings)
    }

    /// Creates the lens tree for `entities` under `base_dir`.
    ///
    /// # Errors
    /// * `Error::DirectoryCreateFailure` if any of the three directories cannot be
    ///   created; no file is created in that case
    /// * `Error::MinijinjaError` if the table model fails to render
    ///
    /// Individual file write failures are reported and recorded; the rest continue.
    pub fn generate<P: AsRef<Path>>(
        &self,
        base_dir: P,
        entities: &[String],
    ) -> Result<GenerationReport> {
        let base_dir = base_dir.as_ref();
        let sql_dir = base_dir.join(LENS_SQLS_DIR);
        let table_dir = base_dir.join(LENS_TABLES_DIR);
        let model_dir = base_dir.join(LENS_MODEL_DIR);

        for dir in [&sql_dir, &table_dir, &model_dir] {
            ensure_directory(dir)?;
            self.reporter.info(&format!("Created directory: {}", dir.display()));
        }

        let mut report = GenerationReport::default();
        for raw in entities {
            let entity = raw.trim();
            if entity.is_empty() {
                self.reporter.warn("Skipping blank entity name.");
                continue;
            }

            let model = self.table_model(entity)?;
            self.create(sql_dir.join(format!("{entity}.sql")), "", &mut report);
            self.create(table_dir.join(format!("{entity}.yaml")), &model, &mut report);
        }

        self.create(model_dir.join(LENS_USER_GROUP_FILE), "", &mut report);
        self.create(base_dir.join(LENS_DEPLOYMENT_FILE), "", &mut report);

        Ok(report)
    }

    fn create(&self, path: PathBuf, content: &str, report: &mut GenerationReport) {
        match create_file_if_absent_or_empty(&path, content) {
            Ok(true) => {
                self.reporter.info(&format!("Created file: {}", path.display()));
                report.written.push(path);
            }
            Ok(false) => {
                self.reporter.info(&format!(
                    "Skipped creating file as it already exists and is not empty: {}",
                    path.display()
                ));
                report.unchanged.push(path);
            }
            Err(err) => {
                self.reporter.error(&err.to_string());
                report.failed.push(path);
            }
        }
    }
}
