use coolme::cli::{parse_output_tables, Args, Command};
use coolme::depot::{DepotConfig, PostgresDepot};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("coolme")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_create_defaults() {
    let args = make_args(&[
        "create",
        "azure-postgres",
        "--entity",
        "customer,order",
        "--output-tables",
        "customer=tbl_customer,order=tbl_order",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert!(!parsed.verbose);

    let Command::Create(create) = parsed.command else { panic!("Expected create command") };
    assert_eq!(create.environment, "azure-postgres");
    assert_eq!(create.project_name, "default");
    assert_eq!(create.data_product, "default");
    assert_eq!(create.entity, vec!["customer", "order"]);
    assert_eq!(create.output_tables["order"], "tbl_order");
    assert!(create.output_catalog.is_none());
    assert!(create.template_path.is_none());
}

#[test]
fn test_create_requires_output_tables() {
    let args = make_args(&["create", "azure-postgres", "--entity", "customer"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let args = make_args(&[
        "lens",
        "--base-dir",
        "shop",
        "--entity",
        "product",
        "-v",
        "--templates-dir",
        "/opt/templates",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.templates_dir, Some(PathBuf::from("/opt/templates")));
    let Command::Lens(lens) = parsed.command else { panic!("Expected lens command") };
    assert_eq!(lens.base_dir, PathBuf::from("shop"));
    assert_eq!(lens.entity, vec!["product"]);
}

#[test]
fn test_depot_subcommands() {
    let args = make_args(&[
        "depot",
        "postgres",
        "--depot-name",
        "pg1",
        "--username",
        "u",
        "--password",
        "p",
        "--hostname",
        "h",
        "--database",
        "d",
    ]);
    let Command::Depot(depot) = Args::try_parse_from(args).unwrap().command else {
        panic!("Expected depot command")
    };
    assert_eq!(
        DepotConfig::from(depot.backend),
        DepotConfig::Postgres(PostgresDepot {
            depot_name: "pg1".to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
            hostname: "h".to_string(),
            database: "d".to_string(),
        })
    );

    let args = make_args(&[
        "depot",
        "bigquery",
        "--depot-name",
        "bq",
        "--project-id",
        "proj",
        "--key-file-path",
        "key.json",
        "--template-path",
        "custom.yaml",
    ]);
    let Command::Depot(depot) = Args::try_parse_from(args).unwrap().command else {
        panic!("Expected depot command")
    };
    assert_eq!(depot.template_path.as_deref(), Some("custom.yaml"));
    let depot = DepotConfig::from(depot.backend);
    assert!(matches!(depot, DepotConfig::BigQuery(_)));
    assert_eq!(depot.depot_name(), "bq");
    assert_eq!(depot.template_name(), "depot/bigquery.yaml");
}

#[test]
fn test_depot_missing_flag() {
    let args = make_args(&["depot", "s3", "--depot-name", "lake"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_missing_subcommand() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_parse_output_tables() {
    let tables = parse_output_tables("customer = tbl_customer, order=tbl_order").unwrap();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables["customer"], "tbl_customer");
    assert_eq!(tables["order"], "tbl_order");

    assert!(parse_output_tables("customer").is_err());
    assert!(parse_output_tables("a=b=c").is_err());
}
