//! Error type shared by the config loader, the content loader and the CLI.
//!
//! Built-in content never produces these; they only surface when config or
//! content comes from disk, or when the rendered page is written out.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong outside the render path.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The rendered page could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// `digitech.toml` exists but is not valid TOML for [`crate::config::SiteConfig`].
    #[error("invalid config {}: {source}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },

    /// External content JSON does not match the registry schema.
    #[error("invalid content JSON: {0}")]
    Content(#[from] serde_json::Error),

    /// Two navigation entries share the same anchor id.
    #[error("duplicate section id `{0}`")]
    DuplicateSectionId(String),

    /// A navigation entry points at an anchor no page section renders.
    #[error("navigation entry `{0}` has no matching page section")]
    MissingSection(String),

    /// A required text field is blank.
    #[error("{section} entry {index}: `{field}` must not be empty")]
    EmptyField {
        /// Registry collection the entry belongs to
        section: &'static str,
        /// Position of the entry in its collection
        index: usize,
        /// Name of the blank field
        field: &'static str,
    },
}

/// Shorthand result alias for this crate.
pub type Result<T> = std::result::Result<T, SiteError>;
