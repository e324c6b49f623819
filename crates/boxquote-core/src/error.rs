//! # Error Types
//!
//! Domain-specific error types for boxquote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  boxquote-core errors (this file)                                      │
//! │  ├── QuoteError       - Request-level failures (abort the pipeline)    │
//! │  └── ValidationError  - Order rejected before pricing                  │
//! │                                                                         │
//! │  boxquote-tables errors (separate crate)                               │
//! │  └── TableError       - Table source failures → QuoteError             │
//! │                                                                         │
//! │  NOT errors: a lookup miss never reaches this file. It becomes a       │
//! │  missing fragment or a "not available" tier inside the document.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Quote Error
// =============================================================================

/// Failures that abort a quotation request.
///
/// No partial quotation is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// A matched price table cell is not a number.
    ///
    /// ## When This Occurs
    /// - Someone typed "RM 12" or "12,5" into the spreadsheet
    /// - A header row has the same shape as a data row and matched
    #[error("Malformed price cell '{value}' in {table} table")]
    MalformedPriceCell { table: String, value: String },

    /// The external table source could not be read.
    #[error("Price table '{table}' unavailable: {reason}")]
    TableUnavailable { table: String, reason: String },

    /// A tier total left the representable range.
    ///
    /// ## When This Occurs
    /// - Matched price cells are so large that their sum exceeds i64 sen
    #[error("Total for {tier} pcs overflowed")]
    TotalOverflow { tier: String },

    /// The first and last quantity tier fit no machine-type rule.
    ///
    /// Only reachable when the tiers are not sorted ascending.
    #[error("Unable to classify machine type for quantities {first}..{last}")]
    UnclassifiableMachineType { first: u32, last: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl QuoteError {
    /// Creates a MalformedPriceCell error.
    pub fn malformed(table: impl Into<String>, value: impl Into<String>) -> Self {
        QuoteError::MalformedPriceCell {
            table: table.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Order validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in the catalog.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Same value given twice.
    #[error("{field} '{value}' is listed more than once")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with QuoteError.
pub type QuoteResult<T> = Result<T, QuoteError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QuoteError::malformed("printing", "RM 12");
        assert_eq!(
            err.to_string(),
            "Malformed price cell 'RM 12' in printing table"
        );

        let err = QuoteError::UnclassifiableMachineType {
            first: 1000,
            last: 200,
        };
        assert_eq!(
            err.to_string(),
            "Unable to classify machine type for quantities 1000..200"
        );

        let err = QuoteError::TotalOverflow {
            tier: "500".to_string(),
        };
        assert_eq!(err.to_string(), "Total for 500 pcs overflowed");
    }

    #[test]
    fn test_validation_converts_to_quote_error() {
        let validation_err = ValidationError::Required {
            field: "quantity".to_string(),
        };
        let err: QuoteError = validation_err.into();
        assert!(matches!(err, QuoteError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: quantity is required");
    }
}
