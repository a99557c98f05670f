mod common;

use common::{strings, RecordingReporter};
use coolme::error::Error;
use coolme::lens::LensGenerator;
use log::Level;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/lens");

#[test]
fn test_lens_scaffold_matches_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let reporter = RecordingReporter::new();
    let base = temp_dir.path().join("shop");

    let report = LensGenerator::new(&reporter)
        .generate(&base, &strings(&["product"]))
        .unwrap();

    assert_eq!(report.written.len(), 4);
    assert!(report.unchanged.is_empty());
    assert!(!dir_diff::is_different(&base, Path::new(FIXTURES).join("shop")).unwrap());
}

#[test]
fn test_lens_table_model_content() {
    let temp_dir = TempDir::new().unwrap();
    let reporter = RecordingReporter::new();
    let base = temp_dir.path().join("shop");

    LensGenerator::new(&reporter)
        .generate(&base, &strings(&["customer", " order "]))
        .unwrap();

    for dir in ["model/sqls", "model/tables", "model"] {
        assert!(base.join(dir).is_dir());
    }
    assert_eq!(fs::read_to_string(base.join("model/sqls/order.sql")).unwrap(), "");

    let model = fs::read_to_string(base.join("model/tables/order.yaml")).unwrap();
    assert!(model.contains("  - name: order\n"));
    assert!(model.contains("sql: {{ load_sql('order') }}"));
    assert!(model.contains("data_source: icebase"));
    assert!(model.contains("primary_key: true"));
    assert!(base.join("model/user_group.yml").is_file());
    assert!(base.join("deployment.yaml").is_file());
}

#[test]
fn test_rerun_keeps_edited_files() {
    let temp_dir = TempDir::new().unwrap();
    let reporter = RecordingReporter::new();
    let generator = LensGenerator::new(&reporter);
    let base = temp_dir.path().join("shop");

    generator.generate(&base, &strings(&["product"])).unwrap();
    let sql = base.join("model/sqls/product.sql");
    fs::write(&sql, "select * from product").unwrap();

    let report = generator.generate(&base, &strings(&["product"])).unwrap();

    assert_eq!(fs::read_to_string(&sql).unwrap(), "select * from product");
    // product.yaml is non-empty and kept; the empty files are written again.
    assert_eq!(report.unchanged, vec![sql, base.join("model/tables/product.yaml")]);
    assert_eq!(report.written.len(), 2);
}

#[test]
fn test_directory_failure_creates_no_files() {
    let temp_dir = TempDir::new().unwrap();
    let reporter = RecordingReporter::new();
    let base = temp_dir.path().join("shop");
    fs::create_dir_all(&base).unwrap();
    // A file where the model directory should go.
    fs::write(base.join("model"), "").unwrap();

    let result = LensGenerator::new(&reporter).generate(&base, &strings(&["product"]));

    assert!(matches!(result, Err(Error::DirectoryCreateFailure { .. })));
    assert!(!base.join("deployment.yaml").exists());
}

#[test]
fn test_blocked_entity_does_not_stop_scaffold() {
    let temp_dir = TempDir::new().unwrap();
    let reporter = RecordingReporter::new();
    let base = temp_dir.path().join("shop");

    // `nested/x` has no parent directory under sqls/ or tables/.
    let report = LensGenerator::new(&reporter)
        .generate(&base, &strings(&["nested/x", "product"]))
        .unwrap();

    assert_eq!(
        report.failed,
        vec![base.join("model/sqls/nested/x.sql"), base.join("model/tables/nested/x.yaml")]
    );
    assert_eq!(
        report.written,
        vec![
            base.join("model/sqls/product.sql"),
            base.join("model/tables/product.yaml"),
            base.join("model/user_group.yml"),
            base.join("deployment.yaml"),
        ]
    );
    assert!(report.has_failures());
    assert_eq!(reporter.messages(Level::Error).len(), 2);
}

#[test]
fn test_table_model_join_line() {
    let reporter = RecordingReporter::new();
    let model = LensGenerator::new(&reporter).table_model("customer").unwrap();

    assert!(model.contains("        sql: \"{ TABLE.key }= { tables.key }\"\n"));
    assert!(model.contains("    sql: {{ load_sql('customer') }}\n"));
}
