//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Chilli Invoice                         │
//! │                                                                         │
//! │  Screen                      Session command                            │
//! │  ──────                      ───────────────                            │
//! │                                                                         │
//! │  lookup_barcode("479...")                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Bad input?       ─── ValidationError ─────────┐                 │  │
//! │  │  Business rule?   ─── CoreError ───────────────┼──► ApiError ───►│  │
//! │  │  Backend failed?  ─── ServiceError ────────────┘                 │  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Alert.alert('Error', e.message)  /  switch (e.code) { ... }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chilli_core::{CoreError, ValidationError};
use serde::Serialize;

use crate::services::ServiceError;

/// Error returned from session commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "No product found with barcode: 4791234567890"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Message shown in the alert
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Draft is not ready to submit
    IncompleteInvoice,

    /// Invoice is already paid or completed
    AlreadySettled,

    /// Backend refused the request
    Rejected,

    /// Backend unreachable or answered garbage
    BackendError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::ProductNotFound(_) => ApiError::new(ErrorCode::NotFound, message),
            CoreError::EmptyDraft | CoreError::CustomerRequired => {
                ApiError::new(ErrorCode::IncompleteInvoice, message)
            }
            CoreError::AlreadySettled { .. } => ApiError::new(ErrorCode::AlreadySettled, message),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(what) => {
                ApiError::new(ErrorCode::NotFound, format!("Not found: {}", what))
            }
            ServiceError::Rejected { message, .. } => ApiError::new(ErrorCode::Rejected, message),
            ServiceError::Transport(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Backend unreachable: {}", e);
                ApiError::new(ErrorCode::BackendError, "Could not reach the server")
            }
            ServiceError::Decode(e) => {
                tracing::error!("Unexpected backend response: {}", e);
                ApiError::new(ErrorCode::BackendError, "Unexpected response from the server")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::from(CoreError::ProductNotFound("4791234567890".to_string()));
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "code": "NOT_FOUND",
                "message": "No product found with barcode: 4791234567890"
            })
        );
    }

    #[test]
    fn test_incomplete_invoice_messages() {
        let err = ApiError::from(CoreError::CustomerRequired);
        assert_eq!(err.code, ErrorCode::IncompleteInvoice);
        assert_eq!(err.message, "Please select a customer");

        let err = ApiError::from(CoreError::EmptyDraft);
        assert_eq!(err.message, "Please add at least one product");
    }

    #[test]
    fn test_validation_passes_through() {
        let err = ApiError::from(CoreError::Validation(ValidationError::Required {
            field: "barcode".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "barcode is required");
    }

    #[test]
    fn test_service_errors() {
        let err = ApiError::from(ServiceError::Rejected {
            status: 422,
            message: "Invoice number already used".to_string(),
        });
        assert_eq!(err.code, ErrorCode::Rejected);
        assert_eq!(err.message, "Invoice number already used");

        let err = ApiError::from(ServiceError::Transport("timeout".to_string()));
        assert_eq!(err.code, ErrorCode::BackendError);
        assert_eq!(err.message, "Could not reach the server");

        let err = ApiError::from(ServiceError::NotFound("invoice 42".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Not found: invoice 42");
    }

    #[test]
    fn test_settled_invoice_code() {
        let err = ApiError::from(CoreError::AlreadySettled {
            inv_no: "INV-0003".to_string(),
            status: "Payment Received".to_string(),
        });
        assert_eq!(err.code, ErrorCode::AlreadySettled);
        assert_eq!(
            serde_json::to_value(&err).unwrap()["code"],
            json!("ALREADY_SETTLED")
        );
    }
}
