//! # Scan Commands
//!
//! Barcode scanner flow.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Camera reads "TS-001"                                                  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  validate_barcode ──── blank / too long ────► VALIDATION_ERROR          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ProductLookup::find_by_barcode ─── None ───► NOT_FOUND                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  draft.add_item(product, variant)   (scan twice = quantity 2)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chilli_core::validation::validate_barcode;
use chilli_core::{CoreError, LineVariant, Product};
use tracing::{debug, warn};

use super::draft::DraftResponse;
use crate::error::ApiError;
use crate::services::ProductLookup;
use crate::state::DraftState;

/// Looks up the product a scanned code encodes.
pub async fn lookup_barcode<P>(products: &P, code: &str) -> Result<Product, ApiError>
where
    P: ProductLookup,
{
    let code = validate_barcode(code)?;
    debug!(barcode = %code, "lookup_barcode command");

    let found = products.find_by_barcode(&code).await;
    match found {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(CoreError::ProductNotFound(code).into()),
        Err(e) => {
            warn!(barcode = %code, error = %e, "Barcode lookup failed");
            Err(e.into())
        }
    }
}

/// Looks up a scanned code and adds one unit to the draft.
///
/// `variant` defaults to the first price tier, white, size M.
pub async fn add_scanned_product<P>(
    products: &P,
    draft: &DraftState,
    code: &str,
    variant: Option<LineVariant>,
) -> Result<DraftResponse, ApiError>
where
    P: ProductLookup,
{
    let product = lookup_barcode(products, code).await?;
    let variant = variant.unwrap_or_default();
    debug!(product_id = product.id, ?variant, "add_scanned_product command");

    Ok(draft.with_draft_mut(|d| d.add_item(product, variant)).into())
}
