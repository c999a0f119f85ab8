//! Error types.
//!
//! Parsing and key building cannot fail. The only fallible operation is
//! loading a model table.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The table file could not be read
    #[error("failed to read model table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table is not a JSON array of `{ description, modelNumber }`
    #[error("malformed model table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entry {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("duplicate description in model table: {0:?}")]
    DuplicateDescription(String),

    #[error("duplicate model number in model table: {0:?}")]
    DuplicateModelNumber(String),
}
