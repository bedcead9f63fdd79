//! # State Module
//!
//! State a session holds between commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────────┐     │
//! │  │       DraftState         │      │        SessionConfig         │     │
//! │  │                          │      │                              │     │
//! │  │  Arc<Mutex<              │      │  currency_symbol             │     │
//! │  │    InvoiceDraftStore     │      │  invoice_type                │     │
//! │  │  >>                      │      │                              │     │
//! │  └──────────────────────────┘      └──────────────────────────────┘     │
//! │                                                                         │
//! │  • DraftState: one per session, exclusive access per command            │
//! │  • SessionConfig: read-only after startup                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod draft;

pub use config::{ConfigError, SessionConfig};
pub use draft::DraftState;
