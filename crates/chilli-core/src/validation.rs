//! # Validation Module
//!
//! Input validation for the text the user types or scans.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen                                                        │
//! │  └── Buttons disabled while inputs are blank                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session command (Rust)                                        │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: barcode, search and phone checks                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Invoice backend                                               │
//! │  └── Final say on codes, customers and invoice numbers                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use chilli_core::validation::{validate_barcode, validate_search_query};
//!
//! assert_eq!(validate_barcode(" TS-001 ").unwrap(), "TS-001");
//! assert_eq!(validate_search_query("  polo ").unwrap(), "polo");
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest barcode / item code accepted from the scanner or keyboard.
pub const MAX_BARCODE_LEN: usize = 64;

/// Longest picker search query.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a scanned or typed barcode.
///
/// ## Rules
/// - Must not be blank
/// - At most 64 characters after trimming
/// - No whitespace or control characters inside the code
///
/// ## Returns
/// The trimmed code, ready for lookup.
///
/// ## Example
/// ```rust
/// use chilli_core::validation::validate_barcode;
///
/// assert!(validate_barcode("4791234567890").is_ok());
/// assert!(validate_barcode("").is_err());
/// assert!(validate_barcode("TS 001").is_err());
/// ```
pub fn validate_barcode(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        });
    }

    if code.chars().count() > MAX_BARCODE_LEN {
        return Err(ValidationError::TooLong {
            field: "barcode".to_string(),
            max: MAX_BARCODE_LEN,
        });
    }

    if code.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::InvalidFormat {
            field: "barcode".to_string(),
            reason: "must not contain spaces".to_string(),
        });
    }

    Ok(code.to_string())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (returns everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates a customer phone number.
///
/// ## Rules
/// - Empty is allowed (phone is optional on the invoice)
/// - Digits, spaces and hyphens, with an optional leading `+`
/// - Between 7 and 15 digits
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Ok(());
    }

    let body = phone.strip_prefix('+').unwrap_or(phone);
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces and hyphens".to_string(),
        });
    }

    let digits = body.chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&digits) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must have between 7 and 15 digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_barcode() {
        assert_eq!(validate_barcode("4791234567890").unwrap(), "4791234567890");
        assert_eq!(validate_barcode("  TS-001\n").unwrap(), "TS-001");

        assert!(matches!(
            validate_barcode("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_barcode(&"9".repeat(65)),
            Err(ValidationError::TooLong { max: 64, .. })
        ));
        assert!(matches!(
            validate_barcode("TS 001"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("").unwrap(), "");
        assert_eq!(validate_search_query("  polo ").unwrap(), "polo");
        assert!(validate_search_query(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("0771234567").is_ok());
        assert!(validate_phone("+94 77 123 4567").is_ok());
        assert!(validate_phone("077-123-4567").is_ok());

        assert!(validate_phone("077ABC4567").is_err());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("+").is_err());
    }
}
