//! # Invoice Draft Store
//!
//! The in-memory working set of the invoice being composed: line items plus
//! the customer header.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Store Operations                               │
//! │                                                                         │
//! │  UI Action                 Store Call              State Change         │
//! │  ─────────                 ──────────              ────────────         │
//! │                                                                         │
//! │  Scan / pick product ────► add_item() ───────────► push, or qty += 1    │
//! │                                                    (same product, tier, │
//! │                                                     color and size)     │
//! │                                                                         │
//! │  + / − buttons ──────────► update_quantity() ────► qty += delta,        │
//! │                                                    drop rows at qty ≤ 0 │
//! │                                                                         │
//! │  Tier / color / size ────► change_price() ───────► attribute replaced   │
//! │  pickers                   change_color()          (no re-merge)        │
//! │                            change_size()                                │
//! │                                                                         │
//! │  Trash icon ─────────────► remove_item() ────────► row dropped          │
//! │                                                                         │
//! │  Invoice submitted ──────► clear_all() ──────────► empty draft,         │
//! │                                                    default customer     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - Every read returns an owned copy. Callers can never reach the live rows.
//! - Every operation is total. Unknown line ids are no-ops.
//! - One store per session; tests build a fresh one each.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::catalog::{Color, Size};
use crate::pricing::DraftTotals;
use crate::types::{CustomerInfo, CustomerInfoPatch, PriceTier, Product};

// =============================================================================
// Line Identity
// =============================================================================

/// Identifier of a draft row.
///
/// Assigned from a per-store counter: increasing, and never reused even
/// after the row is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineId(u64);

impl LineId {
    /// Raw counter value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Line Items
// =============================================================================

/// The attributes that, together with the product id, identify a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineVariant {
    pub price_tier: PriceTier,
    pub color: Color,
    pub size: Size,
}

impl LineVariant {
    pub fn new(price_tier: PriceTier, color: Color, size: Size) -> Self {
        LineVariant {
            price_tier,
            color,
            size,
        }
    }
}

/// One row of the draft.
///
/// ## Design Notes
/// `product` is a frozen copy taken when the row was created, so the row
/// keeps its prices even if the catalog changes while the invoice is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DraftLineItem {
    pub id: LineId,
    pub product: Product,
    /// Always ≥ 1 while the row exists.
    pub quantity: i64,
    #[serde(rename = "priceType")]
    pub price_tier: PriceTier,
    pub color: Color,
    pub size: Size,
}

impl DraftLineItem {
    /// The row's variant (tier, color, size).
    pub fn variant(&self) -> LineVariant {
        LineVariant::new(self.price_tier, self.color, self.size)
    }

    fn matches(&self, product_id: i64, variant: &LineVariant) -> bool {
        self.product.id == product_id && self.variant() == *variant
    }
}

// =============================================================================
// Store
// =============================================================================

/// The invoice draft for one session.
///
/// ## Invariants
/// - Rows created by [`add_item`](Self::add_item) are unique by
///   (product id, price tier, color, size); adding a duplicate bumps its
///   quantity instead.
/// - No row has quantity ≤ 0.
/// - The `change_*` edits do not merge rows, so an edit may leave two rows
///   with the same key. They stay separate until one is removed.
#[derive(Debug, Clone, Default)]
pub struct InvoiceDraftStore {
    items: Vec<DraftLineItem>,
    customer: CustomerInfo,
    last_id: u64,
}

impl InvoiceDraftStore {
    /// Creates an empty draft with the default customer header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the rows, in insertion order.
    pub fn items(&self) -> Vec<DraftLineItem> {
        self.items.clone()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Totals over the current rows.
    pub fn totals(&self) -> DraftTotals {
        DraftTotals::from(self.items.as_slice())
    }

    /// Adds one unit of `product` in the given variant.
    ///
    /// ## Behavior
    /// - Row with the same product id and variant exists: quantity + 1
    ///   (no upper bound)
    /// - Otherwise: new row with quantity 1 and a fresh id
    ///
    /// ## Example
    /// ```rust
    /// use chilli_core::draft::{InvoiceDraftStore, LineVariant};
    /// use chilli_core::types::Product;
    ///
    /// let mut store = InvoiceDraftStore::new();
    /// let tee = Product::new(1, "TS-001", "Crew Neck Tee");
    ///
    /// store.add_item(tee.clone(), LineVariant::default());
    /// let items = store.add_item(tee, LineVariant::default());
    ///
    /// assert_eq!(items.len(), 1);
    /// assert_eq!(items[0].quantity, 2);
    /// ```
    pub fn add_item(&mut self, product: Product, variant: LineVariant) -> Vec<DraftLineItem> {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(product.id, &variant))
        {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            let id = self.next_line_id();
            self.items.push(DraftLineItem {
                id,
                product,
                quantity: 1,
                price_tier: variant.price_tier,
                color: variant.color,
                size: variant.size,
            });
        }

        self.items()
    }

    /// Adds one unit with the default variant (first price tier, white, M).
    pub fn add_product(&mut self, product: Product) -> Vec<DraftLineItem> {
        self.add_item(product, LineVariant::default())
    }

    /// Applies `delta` to a row's quantity and drops the row if it reaches
    /// zero or below.
    pub fn update_quantity(&mut self, id: LineId, delta: i64) -> Vec<DraftLineItem> {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = item.quantity.saturating_add(delta);
        }
        self.items.retain(|item| item.quantity > 0);

        self.items()
    }

    /// Switches a row to another price tier.
    pub fn change_price(&mut self, id: LineId, price_tier: PriceTier) -> Vec<DraftLineItem> {
        self.edit(id, |item| item.price_tier = price_tier)
    }

    /// Switches a row to another color.
    pub fn change_color(&mut self, id: LineId, color: Color) -> Vec<DraftLineItem> {
        self.edit(id, |item| item.color = color)
    }

    /// Switches a row to another size.
    pub fn change_size(&mut self, id: LineId, size: Size) -> Vec<DraftLineItem> {
        self.edit(id, |item| item.size = size)
    }

    /// Removes a row.
    pub fn remove_item(&mut self, id: LineId) -> Vec<DraftLineItem> {
        self.items.retain(|item| item.id != id);
        self.items()
    }

    /// Removes every row. The customer header is kept.
    pub fn clear_items(&mut self) -> Vec<DraftLineItem> {
        self.items.clear();
        Vec::new()
    }

    /// Snapshot of the customer header.
    pub fn customer_info(&self) -> CustomerInfo {
        self.customer.clone()
    }

    /// Merges `patch` into the customer header and returns the result.
    pub fn set_customer_info(&mut self, patch: CustomerInfoPatch) -> CustomerInfo {
        self.customer.merge(patch);
        self.customer_info()
    }

    /// Forgets the selected customer but keeps the chosen customer type.
    pub fn clear_customer(&mut self) -> CustomerInfo {
        self.customer = CustomerInfo {
            customer_type: self.customer.customer_type,
            ..CustomerInfo::default()
        };
        self.customer_info()
    }

    /// Resets rows and customer header to the empty draft.
    ///
    /// Called after a successful submission or when the user discards the
    /// draft. Line ids keep counting up.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.customer = CustomerInfo::default();
    }

    fn edit<F>(&mut self, id: LineId, f: F) -> Vec<DraftLineItem>
    where
        F: FnOnce(&mut DraftLineItem),
    {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            f(item);
        }
        self.items()
    }

    fn next_line_id(&mut self) -> LineId {
        self.last_id = self.last_id.saturating_add(1);
        LineId(self.last_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
