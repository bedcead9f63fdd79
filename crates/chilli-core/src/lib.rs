//! # chilli-core: Pure Business Logic for Chilli Invoice
//!
//! This crate holds the invoice draft and everything derived from it, as
//! plain data and pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Chilli Invoice Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile screens                               │   │
//! │  │   Scanner ──► Product picker ──► Cart ──► Customer ──► Submit   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                chilli-session (commands)                        │   │
//! │  │   lookup_barcode, update_quantity, submit_invoice, etc.         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ chilli-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  draft  │ │ pricing │ │ catalog │ │ invoice │ │  types  │  │   │
//! │  │   │  store  │ │ totals  │ │ colors  │ │ payload │ │ Product │  │   │
//! │  │   │  lines  │ │ parsing │ │  sizes  │ │  build  │ │Customer │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO GLOBALS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`draft`] - The invoice draft store (line items + customer header)
//! - [`pricing`] - Price text parsing, line and grand totals
//! - [`catalog`] - Color palette, size catalog, invoice statuses, picker search
//! - [`invoice`] - Submission checks and the backend payload
//! - [`history`] - Saved invoices, paging and dashboard counters
//! - [`types`] - Domain types (Product, Customer, CustomerInfo, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chilli_core::{InvoiceDraftStore, PriceTier, Product};
//!
//! let mut draft = InvoiceDraftStore::new();
//! let tee = Product::new(1, "TS-001", "Crew Neck Tee")
//!     .with_price(PriceTier::SellPrice1, "1,250.00");
//!
//! draft.add_product(tee.clone());
//! let items = draft.add_product(tee);
//!
//! assert_eq!(items.len(), 1);
//! assert_eq!(draft.totals().grand_total.to_string(), "2,500.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod draft;
pub mod error;
pub mod history;
pub mod invoice;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Color, InvoiceStatus, Size, SizeSystem};
pub use draft::{DraftLineItem, InvoiceDraftStore, LineId, LineVariant};
pub use error::{CoreError, CoreResult, ValidationError};
pub use history::{Dashboard, InvoicePage, InvoiceRecord, InvoiceRecordItem};
pub use invoice::{InvoiceHeader, InvoicePayload, InvoicePayloadItem};
pub use money::Money;
pub use pricing::DraftTotals;
pub use types::*;
