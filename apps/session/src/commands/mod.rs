//! # Commands Module
//!
//! All commands the screens call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── draft.rs     ◄─── Cart rows: add, +/-, tier/color/size, remove
//! ├── scan.rs      ◄─── Barcode lookup and add
//! ├── product.rs   ◄─── Product picker list/search
//! ├── customer.rs  ◄─── Customer search and header edits
//! ├── invoice.rs   ◄─── Invoice number, preview, submit
//! └── history.rs   ◄─── Saved invoices, mark paid, dashboard
//! ```
//!
//! ## How Commands Work
//! Each command takes only the state and collaborators it needs:
//! ```rust,ignore
//! // Only needs the draft
//! fn update_quantity(draft: &DraftState, id: LineId, delta: i64)
//!
//! // Needs a collaborator and the draft
//! async fn add_scanned_product(products: &impl ProductLookup, draft: &DraftState, ...)
//!
//! // Needs a collaborator, the draft and the config
//! async fn submit_invoice(gateway: &impl InvoiceGateway, draft: &DraftState, config: &SessionConfig, ...)
//! ```
//!
//! Commands return `Result<T, ApiError>` when they can fail; pure draft edits
//! cannot, and return the updated draft directly.

pub mod customer;
pub mod draft;
pub mod history;
pub mod invoice;
pub mod product;
pub mod scan;

pub use draft::DraftResponse;
pub use history::InvoiceDetail;
