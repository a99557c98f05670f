//! Template loading for coolme.
//! Templates are plain text files addressed by a path relative to a template root.
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for loading template text.
pub trait TemplateLoader {
    /// Loads the full text of the named template.
    ///
    /// # Arguments
    /// * `name` - Template path relative to the loader's root
    ///
    /// # Returns
    /// * `Result<String>` - Complete template text; nothing is returned on error
    fn load(&self, name: &str) -> Result<String>;
}

/// Loader for templates from the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalLoader<P: AsRef<Path>> {
    root: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader rooted at `root`.
    pub fn new(root: P) -> Self {
        Self { root }
    }

    /// Resolves `name` against the root. Absolute names are used as-is.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.as_ref().join(name)
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// # Errors
    /// * `Error::TemplateNotFound` if the resolved path is not a file
    /// * `Error::TemplateReadError` if the file cannot be read as UTF-8 text
    fn load(&self, name: &str) -> Result<String> {
        let path = self.resolve(name);
        if !path.is_file() {
            return Err(Error::TemplateNotFound { path: path.display().to_string() });
        }

        debug!("Loading template from {}", path.display());
        fs::read_to_string(&path).map_err(|source| Error::TemplateReadError {
            path: path.display().to_string(),
            source,
        })
    }
}
