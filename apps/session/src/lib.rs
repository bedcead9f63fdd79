//! # Chilli Session Library
//!
//! The session layer of Chilli Invoice: one shared invoice draft, the
//! commands the screens call, and the backend collaborators behind them.
//!
//! ## Module Organization
//! ```text
//! chilli_session/
//! ├── lib.rs          ◄─── You are here (logging setup, exports)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── draft.rs    ◄─── Shared draft (Arc<Mutex<InvoiceDraftStore>>)
//! │   └── config.rs   ◄─── Session configuration
//! ├── services/
//! │   ├── mod.rs      ◄─── Collaborator traits + ServiceError
//! │   ├── envelope.rs ◄─── {status, data} response unwrapping
//! │   └── memory.rs   ◄─── Fixture-backed backend
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── draft.rs    ◄─── Cart row commands
//! │   ├── scan.rs     ◄─── Barcode commands
//! │   ├── product.rs  ◄─── Product picker commands
//! │   ├── customer.rs ◄─── Customer commands
//! │   ├── invoice.rs  ◄─── Invoice number / preview / submit
//! │   └── history.rs  ◄─── Invoice list / detail / mark paid / dashboard
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod services;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ErrorCode};
pub use services::{CustomerDirectory, InMemoryBackend, InvoiceGateway, ProductLookup, ServiceError};
pub use state::{DraftState, SessionConfig};

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,chilli=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=chilli_session=trace` - Trace for the session crate only
/// - Default: `info,chilli=debug`
///
/// Calling it twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
