//! # comicinfo
//!
//! A typed, validating reader for `ComicInfo.xml` comic book metadata.
//!
//! Every schema field is exposed through an accessor. Absent fields read as
//! their schema default (`""`, `-1`, `"Unknown"`, ...), enum fields are checked
//! against the schema's value sets, and numeric fields are range checked.
//! Multi-value fields are available both as the raw text and as split lists.
//!
//! ## Example
//!
//! ```rust
//! let issue = comicinfo::load(
//!     r#"<ComicInfo>
//!          <Series>Example Comics</Series>
//!          <Year>1986</Year>
//!          <Manga>YesAndRightToLeft</Manga>
//!          <Pages>
//!            <Page Image="0" Type="FrontCover"/>
//!            <Page Image="1"/>
//!          </Pages>
//!        </ComicInfo>"#,
//! )?;
//!
//! assert_eq!(issue.series(), "Example Comics");
//! assert!(issue.is_right_to_left());
//! assert_eq!(issue.cover_pages().len(), 1);
//! # Ok::<(), comicinfo::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod limits;
pub mod schema;

// Field validation
pub mod validators;

// Resource loading
pub mod documents;
pub mod loaders;
pub mod locations;

// Entities
pub mod issue;
pub mod page;

// Re-exports for convenience
pub use error::{Error, Result};
pub use issue::Issue;
pub use limits::Limits;
pub use page::{Page, PageAttribute};

/// Version of the comicinfo library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load an issue from a file path or literal XML text
///
/// See [`Issue::load`].
pub fn load(source: &str) -> Result<Issue> {
    Issue::load(source)
}
