//! Limits applied while loading ComicInfo documents
//!
//! ComicInfo files are small, so anything far larger or deeper than a real
//! document is rejected before it is walked.

use crate::error::{Error, Result};

/// Loading limits configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum element nesting depth
    pub max_xml_depth: usize,

    /// Maximum document size in bytes
    pub max_xml_size: usize,

    /// Maximum number of attributes per element
    pub max_attributes: usize,

    /// Maximum number of pages in the Pages list
    pub max_pages: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_xml_depth: 64,
            max_xml_size: 16 * 1024 * 1024, // 16 MB
            max_attributes: 64,
            max_pages: 100_000,
        }
    }
}

impl Limits {
    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_xml_depth: 8,
            max_xml_size: 1024 * 1024, // 1 MB
            max_attributes: 16,
            max_pages: 10_000,
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_xml_depth: 1024,
            max_xml_size: 512 * 1024 * 1024, // 512 MB
            max_attributes: 1024,
            max_pages: 10_000_000,
        }
    }

    /// Check if XML depth is within limits
    pub fn check_xml_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_xml_depth {
            Err(Error::parse(format!(
                "XML depth {} exceeds maximum {}",
                depth, self.max_xml_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Check if XML size is within limits
    pub fn check_xml_size(&self, size: usize) -> Result<()> {
        if size > self.max_xml_size {
            Err(Error::parse(format!(
                "XML size {} bytes exceeds maximum {} bytes",
                size, self.max_xml_size
            )))
        } else {
            Ok(())
        }
    }

    /// Check if number of attributes is within limits
    pub fn check_attributes(&self, count: usize) -> Result<()> {
        if count > self.max_attributes {
            Err(Error::parse(format!(
                "Attribute count {} exceeds maximum {}",
                count, self.max_attributes
            )))
        } else {
            Ok(())
        }
    }

    /// Check if number of pages is within limits
    pub fn check_pages(&self, count: usize) -> Result<()> {
        if count > self.max_pages {
            Err(Error::parse(format!(
                "Page count {} exceeds maximum {}",
                count, self.max_pages
            )))
        } else {
            Ok(())
        }
    }
}
