//! Resource loading utilities
//!
//! This module reads ComicInfo documents from their locations.

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::locations::Location;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Resource loader for ComicInfo documents
#[derive(Debug, Clone, Default)]
pub struct Loader {
    /// Resource limits
    limits: Limits,
}

impl Loader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// The limits this loader applies
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Load a resource as a string
    pub fn load(&self, location: &Location) -> Result<String> {
        match location {
            Location::Path(path) => self.load_file(path),
            Location::String(s) => {
                self.limits.check_xml_size(s.len())?;
                Ok(s.clone())
            }
        }
    }

    /// Read a file to a string. The handle is closed before this returns.
    ///
    /// I/O failures are [`Error::File`]; content that is not UTF-8 is
    /// [`Error::Parse`].
    pub fn load_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(Error::file(path, "file not found"));
        }

        let metadata = fs::metadata(path).map_err(|e| Error::file(path, e.to_string()))?;
        if !metadata.is_file() {
            return Err(Error::file(path, "not a regular file"));
        }
        // Reject oversized files before reading them; the size may overflow usize on 32-bit
        self.limits
            .check_xml_size(usize::try_from(metadata.len()).unwrap_or(usize::MAX))?;

        debug!(path = %path.display(), bytes = metadata.len(), "reading ComicInfo file");
        let bytes = fs::read(path).map_err(|e| Error::file(path, e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| {
            Error::parse(format!("{} is not valid UTF-8: {}", path.display(), e))
        })
    }
}
