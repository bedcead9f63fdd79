//! # Error Types
//!
//! Domain-specific error types for chilli-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  chilli-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule failures (draft, invoice status) │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  chilli-session errors (app)                                           │
//! │  ├── ServiceError     - Backend collaborator failures                  │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI alert               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The draft store itself never returns an error: unknown line ids are
//! no-ops and unparsable prices count as zero. These types cover the edges
//! around it (barcode input, submission checks, settled invoices).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product matches a barcode or item code.
    ///
    /// ## When This Occurs
    /// - The scanned barcode is unknown to the backend
    /// - A manually typed item code has a typo
    #[error("No product found with barcode: {0}")]
    ProductNotFound(String),

    /// The draft has no line items, so there is nothing to invoice.
    #[error("Please add at least one product")]
    EmptyDraft,

    /// No customer has been selected for the draft.
    #[error("Please select a customer")]
    CustomerRequired,

    /// The invoice is already paid or completed.
    #[error("Invoice {inv_no} is already settled ({status})")]
    AlreadySettled { inv_no: String, status: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., letters in a phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("4791234567890".to_string());
        assert_eq!(
            err.to_string(),
            "No product found with barcode: 4791234567890"
        );
        assert_eq!(
            CoreError::EmptyDraft.to_string(),
            "Please add at least one product"
        );
        assert_eq!(
            CoreError::CustomerRequired.to_string(),
            "Please select a customer"
        );
        let err = CoreError::AlreadySettled {
            inv_no: "INV-0007".to_string(),
            status: "Completed".to_string(),
        };
        assert_eq!(err.to_string(), "Invoice INV-0007 is already settled (Completed)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "barcode".to_string(),
        };
        assert_eq!(err.to_string(), "barcode is required");

        let err = ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "query must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "barcode".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
