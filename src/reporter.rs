//! Reporting capability handed to every generator.
//!
//! Generators never log directly; they go through a [`Reporter`] so callers decide
//! where messages end up. The binary uses [`LogReporter`].

use std::path::PathBuf;

/// Receives human-readable progress and failure messages.
pub trait Reporter {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards messages to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Outcome of one generator call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files written by this call.
    pub written: Vec<PathBuf>,
    /// Existing non-empty files left untouched.
    pub unchanged: Vec<PathBuf>,
    /// Entities skipped, e.g. for a missing output table.
    pub skipped: Vec<String>,
    /// Files whose write failed.
    pub failed: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
