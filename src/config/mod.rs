use std::fs;
use std::path::Path;

use crate::ast::{Document, Value};
use crate::{UclError, diagnostics, evaluate, parser};

mod access;
mod conversion;

/// High-level entry point: parses and evaluates a UCL document eagerly
/// and keeps the raw source around for error reporting.
#[derive(Debug)]
pub struct UclConfig {
    document: Document,
    root: Value,
    raw_content: String,
}

impl UclConfig {
    /// Load a UCL config file (UTF-8).
    ///
    /// # Example
    /// ```ignore
    /// let config = UclConfig::from_file("config.ucl")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, UclError> {
        let content = fs::read_to_string(&path).map_err(|e| UclError::FileError {
            message: e.to_string(),
            path: path.as_ref().to_string_lossy().to_string(),
        })?;
        Self::from_str(&content)
    }

    /// Parse and evaluate a UCL config from a string (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, UclError> {
        let document = parser::parse(content)?;
        let root = evaluate(&document)?;
        Ok(Self {
            document,
            root,
            raw_content: content.to_string(),
        })
    }

    /// Format an error against this config's source, with the offending
    /// line and a caret marker when the error carries a position.
    pub fn report(&self, error: &UclError) -> String {
        diagnostics::render(error, &self.raw_content)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The fully evaluated root value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn source(&self) -> &str {
        &self.raw_content
    }
}

#[cfg(test)]
mod tests;
