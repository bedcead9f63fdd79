//! # Draft Commands
//!
//! Commands behind the cart screen.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │  │  Empty   │────►│ In Draft │────►│ Preview  │────►│Submitted │        │
//! │  │  Draft   │     │          │     │  Modal   │     │ Invoice  │        │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘        │
//! │                        │                                 │              │
//! │                   add_to_draft                     submit_invoice       │
//! │                   update_quantity                  (invoice.rs)         │
//! │                   change_price/color/size                │              │
//! │                   remove_item                            │              │
//! │                        │                                 │              │
//! │                        ▼                                 ▼              │
//! │                   discard_draft ─────────────────► (back to empty)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chilli_core::{
    Color, DraftLineItem, DraftTotals, LineId, LineVariant, PriceTier, Product, Size,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::state::DraftState;

/// Draft response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub items: Vec<DraftLineItem>,
    pub totals: DraftTotals,
}

impl From<Vec<DraftLineItem>> for DraftResponse {
    fn from(items: Vec<DraftLineItem>) -> Self {
        let totals = DraftTotals::from(items.as_slice());
        DraftResponse { items, totals }
    }
}

/// Gets the current draft rows and totals.
pub fn get_draft(draft: &DraftState) -> DraftResponse {
    debug!("get_draft command");
    draft.with_draft(|d| d.items()).into()
}

/// Adds one unit of a picked product.
pub fn add_to_draft(draft: &DraftState, product: Product, variant: LineVariant) -> DraftResponse {
    debug!(product_id = product.id, ?variant, "add_to_draft command");
    draft.with_draft_mut(|d| d.add_item(product, variant)).into()
}

/// Applies a +/- step to a row. Rows reaching zero disappear.
pub fn update_quantity(draft: &DraftState, id: LineId, delta: i64) -> DraftResponse {
    debug!(%id, delta, "update_quantity command");
    draft.with_draft_mut(|d| d.update_quantity(id, delta)).into()
}

pub fn change_price(draft: &DraftState, id: LineId, price_tier: PriceTier) -> DraftResponse {
    debug!(%id, %price_tier, "change_price command");
    draft.with_draft_mut(|d| d.change_price(id, price_tier)).into()
}

pub fn change_color(draft: &DraftState, id: LineId, color: Color) -> DraftResponse {
    debug!(%id, %color, "change_color command");
    draft.with_draft_mut(|d| d.change_color(id, color)).into()
}

pub fn change_size(draft: &DraftState, id: LineId, size: Size) -> DraftResponse {
    debug!(%id, %size, "change_size command");
    draft.with_draft_mut(|d| d.change_size(id, size)).into()
}

pub fn remove_item(draft: &DraftState, id: LineId) -> DraftResponse {
    debug!(%id, "remove_item command");
    draft.with_draft_mut(|d| d.remove_item(id)).into()
}

/// Empties the cart but keeps the selected customer.
pub fn clear_items(draft: &DraftState) -> DraftResponse {
    debug!("clear_items command");
    draft.with_draft_mut(|d| d.clear_items()).into()
}

/// Throws the whole draft away, customer included.
pub fn discard_draft(draft: &DraftState) -> DraftResponse {
    info!("Draft discarded");
    draft.with_draft_mut(|d| {
        d.clear_all();
        d.items()
    })
    .into()
}
