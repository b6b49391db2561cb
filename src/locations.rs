//! Source location resolution
//!
//! Decides whether a `load` argument is literal XML or a file path. Inputs
//! that look like neither are rejected before the file system is touched.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use url::Url;

/// Document source - literal XML text or a file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// File system path
    Path(PathBuf),
    /// Literal XML text
    String(String),
}

impl Location {
    /// Create a location from a string (auto-detect type)
    pub fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::parse("input is empty"));
        }

        if trimmed.starts_with('<') {
            return Ok(Location::String(s.to_string()));
        }

        if let Some(location) = Self::from_url(trimmed)? {
            return Ok(location);
        }

        if looks_like_path(trimmed) {
            return Ok(Location::Path(PathBuf::from(trimmed)));
        }

        Err(Error::parse(format!(
            "input '{}' is neither XML nor a file path",
            trimmed
        )))
    }

    /// Resolve `file://` URLs; other schemes are rejected
    fn from_url(s: &str) -> Result<Option<Self>> {
        // A bare Windows drive like "C:\comic.xml" parses as a URL with scheme "c"
        if !s.contains("://") {
            return Ok(None);
        }
        let Ok(url) = Url::parse(s) else {
            return Ok(None);
        };

        if url.scheme() != "file" {
            return Err(Error::file(
                s,
                format!("unsupported URL scheme '{}'", url.scheme()),
            ));
        }

        url.to_file_path()
            .map(|path| Some(Location::Path(path)))
            .map_err(|_| Error::file(s, "URL does not name a local file"))
    }
}

/// A path has a separator or a file extension
fn looks_like_path(s: &str) -> bool {
    if s.contains('/') || s.contains('\\') {
        return true;
    }
    Path::new(s)
        .extension()
        .is_some_and(|ext| !ext.is_empty())
}
