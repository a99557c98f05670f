#![allow(dead_code)]

use coolme::reporter::Reporter;
use log::Level;
use std::cell::RefCell;

/// Captures reported messages for assertions.
#[derive(Default)]
pub struct RecordingReporter {
    messages: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.messages.borrow_mut().push((Level::Info, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push((Level::Warn, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages.borrow_mut().push((Level::Error, message.to_string()));
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
