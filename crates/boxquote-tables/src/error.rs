//! # Table Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TableError (this module) ← adds the table name                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  QuoteError::TableUnavailable ← the request fails as a whole           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use boxquote_core::QuoteError;
use thiserror::Error;

/// Failures reading a price table region.
#[derive(Debug, Error)]
pub enum TableError {
    /// The region does not exist in the source.
    ///
    /// ## When This Occurs
    /// - `<range>.json` missing from the tables directory
    /// - Range name misspelled in the configuration
    #[error("Table '{table}' not found at {location}")]
    NotFound { table: String, location: String },

    /// The source could not be read.
    #[error("Failed to read table '{table}': {message}")]
    Io { table: String, message: String },

    /// The region was read but is not a values grid.
    ///
    /// ## When This Occurs
    /// - Invalid JSON
    /// - `values` holds something other than rows of scalars
    #[error("Table '{table}' is malformed: {message}")]
    Malformed { table: String, message: String },
}

impl TableError {
    pub fn table(&self) -> &str {
        match self {
            TableError::NotFound { table, .. }
            | TableError::Io { table, .. }
            | TableError::Malformed { table, .. } => table,
        }
    }
}

impl From<TableError> for QuoteError {
    fn from(err: TableError) -> Self {
        QuoteError::TableUnavailable {
            table: err.table().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type for table reads.
pub type TableResult<T> = Result<T, TableError>;
