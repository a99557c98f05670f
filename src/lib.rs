//! coolme generates YAML configuration for data ingestion pipelines, storage
//! depots and lens (semantic model) projects from templates.

/// Command-line interface module for the coolme application
pub mod cli;

/// Ingestion environment table and optional configuration file
/// Supports JSON and YAML formats (coolme.json, coolme.yml, coolme.yaml)
pub mod config;

pub mod constants;

/// Depot config generation for Postgres, Snowflake, S3 and BigQuery
pub mod depot;

/// Error types and handling for the coolme application
pub mod error;

/// Directory creation and the two file write semantics
pub mod filesystem;

/// Per-entity ingestion config generation
pub mod ingestion;

/// Lens model scaffolding
pub mod lens;

/// Template loading from a template root
pub mod loader;

/// Placeholder and MiniJinja rendering
pub mod renderer;

/// Injected reporting capability and generation results
pub mod reporter;
