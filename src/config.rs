//! Configuration handling for coolme.
//! This module holds the table of ingestion environments and loads an optional
//! configuration file that can add environments or point at another template root.

use crate::constants::{CONFIG_FILES, DEFAULT_TEMPLATES_DIR};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Defaults for one ingestion environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Environment {
    /// Default output catalog
    pub catalog: String,
    /// Default output schema
    pub schema: String,
    /// Template path relative to the template root
    pub template: String,
}

impl Environment {
    fn new(catalog: &str, schema: &str, template: &str) -> Self {
        Self {
            catalog: catalog.to_string(),
            schema: schema.to_string(),
            template: template.to_string(),
        }
    }
}

/// Environments available without any configuration file.
pub fn builtin_environments() -> IndexMap<String, Environment> {
    [
        ("azure-postgres", Environment::new("postgres", "public", "ingestion/azure-postgres.yaml")),
        (
            "postgres-icebase",
            Environment::new("icebase", "default", "ingestion/postgres-icebase.yaml"),
        ),
        (
            "snowflake-icebase",
            Environment::new("icebase", "default", "ingestion/snowflake-icebase.yaml"),
        ),
        (
            "bigquery-icebase",
            Environment::new("icebase", "default", "ingestion/bigquery-icebase.yaml"),
        ),
        ("s3-icebase", Environment::new("icebase", "default", "ingestion/s3-icebase.yaml")),
    ]
    .into_iter()
    .map(|(name, env)| (name.to_string(), env))
    .collect()
}

/// Raw shape of a configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
    #[serde(default)]
    pub environments: IndexMap<String, Environment>,
}

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub templates_dir: PathBuf,
    pub environments: IndexMap<String, Environment>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            environments: builtin_environments(),
        }
    }
}

impl Config {
    /// Looks up an ingestion environment by name.
    ///
    /// # Errors
    /// * `Error::UnknownEnvironment` listing the available names
    pub fn environment(&self, name: &str) -> Result<&Environment> {
        self.environments.get(name).ok_or_else(|| Error::UnknownEnvironment {
            name: name.to_string(),
            available: self.environments.keys().cloned().collect::<Vec<_>>().join(", "),
        })
    }

    /// Merges a parsed file over the built-in defaults.
    ///
    /// A relative `templates_dir` is resolved against `base_dir`, the directory the
    /// file was read from.
    pub fn merge(mut self, file: ConfigFile, base_dir: &Path) -> Self {
        if let Some(templates_dir) = file.templates_dir {
            self.templates_dir = base_dir.join(templates_dir);
        }
        self.environments.extend(file.environments);
        self
    }
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if neither format parses
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    match serde_json::from_str(content) {
        Ok(file) => Ok(file),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Finds the first configuration file present in `dir`.
pub fn find_config_file<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files.iter().map(|file| dir.as_ref().join(file)).find(|path| path.is_file())
}

/// Builds the configuration for a run.
///
/// # Arguments
/// * `explicit` - Configuration file given on the command line; must exist
/// * `search_dir` - Directory searched for `coolme.json|yml|yaml` when no file is given
///
/// # Returns
/// * `Result<Config>` - Built-in defaults, with the file merged on top when one is found
pub fn get_config<P: AsRef<Path>>(explicit: Option<&Path>, search_dir: P) -> Result<Config> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(Error::ConfigError(format!(
                "configuration file '{}' does not exist",
                path.display()
            )));
        }
        Some(path) => path.to_path_buf(),
        None => match find_config_file(search_dir, &CONFIG_FILES) {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using built-in defaults");
                return Ok(Config::default());
            }
        },
    };

    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(&path)?;
    let file = parse_config(&content)?;
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

    Ok(Config::default().merge(file, &base_dir))
}
