//! Common constants used throughout the coolme application.

/// Supported configuration file names, tried in order
pub const CONFIG_FILES: [&str; 3] = ["coolme.json", "coolme.yml", "coolme.yaml"];

/// Template root shipped with the crate
pub const DEFAULT_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Default project and data product names for ingestion output
pub const DEFAULT_PROJECT: &str = "default";
pub const DEFAULT_DATA_PRODUCT: &str = "default";

/// Path of the ingestion output directory below `{project}/{data_product}`
pub const INGESTION_BUILD_DIR: &str = "build/data-processing";

/// Data source every scaffolded lens table points at
pub const LENS_DATA_SOURCE: &str = "icebase";

pub const LENS_MODEL_DIR: &str = "model";
pub const LENS_SQLS_DIR: &str = "model/sqls";
pub const LENS_TABLES_DIR: &str = "model/tables";
pub const LENS_USER_GROUP_FILE: &str = "user_group.yml";
pub const LENS_DEPLOYMENT_FILE: &str = "deployment.yaml";
