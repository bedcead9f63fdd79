//! # Services Module
//!
//! Collaborators the session talks to. The draft never reaches the network
//! itself; commands call these traits and feed the results into the draft.
//!
//! ## Collaborators
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Backend Collaborators                             │
//! │                                                                         │
//! │  ProductLookup                                                          │
//! │  ├── find_by_barcode      GET    /products/barcode/{code}               │
//! │  └── list_products        GET    /products                              │
//! │                                                                         │
//! │  CustomerDirectory                                                      │
//! │  └── list_customers       GET    /cusname                               │
//! │                                                                         │
//! │  InvoiceGateway                                                         │
//! │  ├── next_invoice_number  GET    /max_inv_no                            │
//! │  ├── submit               POST   /save_inv                              │
//! │  ├── list_invoices        GET    /invoices?page={n}                     │
//! │  ├── get_invoice          GET    /invoices/{id}                         │
//! │  ├── mark_paid            PUT    /invoices/{id}  {status: "11"}         │
//! │  ├── delete_invoice       DELETE /invoices/{id}                         │
//! │  └── dashboard            GET    /dashboard                             │
//! │                                                                         │
//! │  Every response may arrive wrapped in {status, data}; see `envelope`.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`InMemoryBackend`] implements all three for tests and the scripted
//! binary.

pub mod envelope;
mod memory;

pub use memory::InMemoryBackend;

use chilli_core::history::{Dashboard, InvoicePage, InvoiceRecord};
use chilli_core::invoice::InvoicePayload;
use chilli_core::types::{Customer, Product};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Service Error
// =============================================================================

/// Errors returned by backend collaborators.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The backend has no such resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend answered but refused the request.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The backend could not be reached.
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Product catalog lookups.
pub trait ProductLookup: Send + Sync {
    /// Finds the product a barcode encodes. `Ok(None)` when nothing matches.
    async fn find_by_barcode(&self, code: &str) -> Result<Option<Product>, ServiceError>;

    /// Full product list for the picker.
    async fn list_products(&self) -> Result<Vec<Product>, ServiceError>;
}

/// Customer directory.
pub trait CustomerDirectory: Send + Sync {
    async fn list_customers(&self) -> Result<Vec<Customer>, ServiceError>;
}

/// Invoice numbering, submission and the saved-invoice history.
pub trait InvoiceGateway: Send + Sync {
    /// The number the next invoice will be saved under.
    async fn next_invoice_number(&self) -> Result<String, ServiceError>;

    /// Saves the invoice.
    async fn submit(&self, payload: &InvoicePayload) -> Result<SubmissionReceipt, ServiceError>;

    /// One page of saved invoices, newest first. Pages start at 1.
    async fn list_invoices(&self, page: u32) -> Result<InvoicePage, ServiceError>;

    /// `NotFound` for an unknown id.
    async fn get_invoice(&self, id: i64) -> Result<InvoiceRecord, ServiceError>;

    /// Records payment (status `11`) and returns the updated invoice.
    async fn mark_paid(&self, id: i64) -> Result<InvoiceRecord, ServiceError>;

    async fn delete_invoice(&self, id: i64) -> Result<(), ServiceError>;

    async fn dashboard(&self) -> Result<Dashboard, ServiceError>;
}

/// What the backend returns for a saved invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub inv_no: String,
    #[serde(default)]
    pub message: Option<String>,
}
