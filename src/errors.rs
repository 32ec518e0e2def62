//! Error types for archive ingestion.
//!
//! Only structural malformation of the uploaded document is an error:
//! the file cannot be read, the content is not JSON at all, or the JSON
//! does not have the export's top-level shape. Everything past that layer
//! (missing optional fields, unmapped club ids, non-positive strokes)
//! degrades to null/zero inside the aggregation pipeline and never raises.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive file could not be read from disk.
    #[error("could not read archive file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The content is not valid JSON.
    #[error("archive is not valid JSON")]
    Json(#[source] serde_json::Error),

    /// The content is JSON but does not match the export's shape.
    #[error("archive does not look like an 18Birdies export: {0}")]
    Shape(String),
}

impl ArchiveError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
