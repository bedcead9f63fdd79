//! # Pricing
//!
//! Price parsing and the derived aggregates of a draft.
//!
//! ## From Text to Totals
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  product.sell_price2 = "1,250.50"                                       │
//! │        │                                                                │
//! │        ▼  parse_price (commas dropped, leading number taken)            │
//! │  Money(125050)                                                          │
//! │        │                                                                │
//! │        ▼  × quantity 3                                                  │
//! │  line_total = Money(375150)                                             │
//! │        │                                                                │
//! │        ▼  Σ over lines                                                  │
//! │  grand_total                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here fails: a price that does not parse counts as zero.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::draft::DraftLineItem;
use crate::money::Money;
use crate::types::PriceTier;

// =============================================================================
// Parsing
// =============================================================================

/// Parses a backend price string into money.
///
/// Commas are removed and whitespace trimmed, then the longest leading
/// decimal number is read (`"12abc"` reads as 12). Fractions beyond two
/// digits are rounded half away from zero. Returns `None` when no digits are
/// found or the value does not fit in an `i64` of cents.
///
/// ## Example
/// ```rust
/// use chilli_core::pricing::parse_price;
///
/// assert_eq!(parse_price("1,250.50").map(|m| m.cents()), Some(125_050));
/// assert_eq!(parse_price("  900 ").map(|m| m.cents()), Some(90_000));
/// assert_eq!(parse_price("n/a"), None);
/// ```
pub fn parse_price(text: &str) -> Option<Money> {
    let cleaned: String = text.chars().filter(|&c| c != ',').collect();
    let mut chars = cleaned.trim().chars().peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut whole: i64 = 0;
    let mut seen_digit = false;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        whole = whole.checked_mul(10)?.checked_add(i64::from(d))?;
        seen_digit = true;
        chars.next();
    }

    // Two kept fraction digits plus one for rounding.
    let mut fraction = [0u32; 3];
    if chars.peek() == Some(&'.') {
        chars.next();
        let mut i = 0;
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
            if let Some(slot) = fraction.get_mut(i) {
                *slot = d;
            }
            i += 1;
            seen_digit = true;
            chars.next();
        }
    }

    if !seen_digit {
        return None;
    }

    let [tenths, hundredths, thousandths] = fraction;
    let mut cents = whole
        .checked_mul(100)?
        .checked_add(i64::from(tenths * 10 + hundredths))?;
    if thousandths >= 5 {
        cents = cents.checked_add(1)?;
    }

    Some(Money::from_cents(if negative { -cents } else { cents }))
}

// =============================================================================
// Aggregates
// =============================================================================

/// Unit price of a line: its selected tier, or `sell_price1` when that tier
/// is missing or empty. Unparsable text counts as zero.
pub fn unit_price(item: &DraftLineItem) -> Money {
    let product = &item.product;
    product
        .price_text(item.price_tier)
        .filter(|text| !text.is_empty())
        .or_else(|| {
            product
                .price_text(PriceTier::SellPrice1)
                .filter(|text| !text.is_empty())
        })
        .and_then(parse_price)
        .unwrap_or_default()
}

/// `unit_price × quantity`.
pub fn line_total(item: &DraftLineItem) -> Money {
    unit_price(item).multiply_quantity(item.quantity)
}

/// Sum of all line totals. Order of `items` does not matter.
pub fn grand_total(items: &[DraftLineItem]) -> Money {
    items.iter().map(line_total).sum()
}

/// Sum of all quantities, saturating at `i64::MAX` like [`Money`].
pub fn total_quantity(items: &[DraftLineItem]) -> i64 {
    items
        .iter()
        .fold(0i64, |acc, item| acc.saturating_add(item.quantity))
}

/// Totals summary for the cart footer and the submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DraftTotals {
    /// Number of rows.
    pub row_count: usize,
    pub total_quantity: i64,
    pub grand_total: Money,
}

impl From<&[DraftLineItem]> for DraftTotals {
    fn from(items: &[DraftLineItem]) -> Self {
        DraftTotals {
            row_count: items.len(),
            total_quantity: total_quantity(items),
            grand_total: grand_total(items),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{InvoiceDraftStore, LineVariant};
    use crate::types::Product;

    fn cents(text: &str) -> Option<i64> {
        parse_price(text).map(|m| m.cents())
    }

    #[test]
    fn test_parse_plain_and_comma_formatted() {
        assert_eq!(cents("1250"), Some(125_000));
        assert_eq!(cents("1,250"), Some(125_000));
        assert_eq!(cents("1,250.5"), Some(125_050));
        assert_eq!(cents("12,34,567.89"), Some(123_456_789));
        assert_eq!(cents(" 99.99 "), Some(9_999));
    }

    #[test]
    fn test_parse_leading_number_only() {
        assert_eq!(cents("12abc"), Some(1_200));
        assert_eq!(cents("450.00 LKR"), Some(45_000));
        assert_eq!(cents(".5"), Some(50));
        assert_eq!(cents("5."), Some(500));
    }

    #[test]
    fn test_parse_rounds_third_decimal() {
        assert_eq!(cents("1.005"), Some(101));
        assert_eq!(cents("1.004"), Some(100));
        assert_eq!(cents("-1.005"), Some(-101));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(cents(""), None);
        assert_eq!(cents("   "), None);
        assert_eq!(cents("abc"), None);
        assert_eq!(cents("-"), None);
        assert_eq!(cents("."), None);
        assert_eq!(cents("99999999999999999999"), None);
    }

    fn priced(id: i64, p1: &str, p2: Option<&str>) -> Product {
        let mut product = Product::new(id, format!("IC-{}", id), format!("Item {}", id))
            .with_price(PriceTier::SellPrice1, p1);
        if let Some(p2) = p2 {
            product = product.with_price(PriceTier::SellPrice2, p2);
        }
        product
    }

    fn variant(tier: PriceTier) -> LineVariant {
        LineVariant {
            price_tier: tier,
            ..LineVariant::default()
        }
    }

    #[test]
    fn test_unit_price_uses_selected_tier() {
        let mut store = InvoiceDraftStore::new();
        let items = store.add_item(
            priced(1, "1,000.00", Some("850.00")),
            variant(PriceTier::SellPrice2),
        );
        assert_eq!(unit_price(&items[0]).cents(), 85_000);
    }

    #[test]
    fn test_unit_price_falls_back_to_first_tier() {
        let mut store = InvoiceDraftStore::new();
        store.add_item(priced(1, "1,000.00", None), variant(PriceTier::SellPrice3));
        let items = store.add_item(priced(2, "500", Some("")), variant(PriceTier::SellPrice2));

        assert_eq!(unit_price(&items[0]).cents(), 100_000);
        assert_eq!(unit_price(&items[1]).cents(), 50_000);
    }

    #[test]
    fn test_unit_price_numeric_zero_tier_falls_back() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 4,
            "item_code": "IC-4",
            "item_name": "Item 4",
            "sell_price1": "1,000.00",
            "sell_price2": 0.0
        }))
        .unwrap();

        let mut store = InvoiceDraftStore::new();
        let items = store.add_item(product, variant(PriceTier::SellPrice2));
        assert_eq!(unit_price(&items[0]).cents(), 100_000);
    }

    #[test]
    fn test_unit_price_garbage_is_zero() {
        let mut store = InvoiceDraftStore::new();
        let items = store.add_product(priced(1, "call us", None));
        assert!(unit_price(&items[0]).is_zero());

        let items = store.add_product(Product::new(2, "IC-2", "No price"));
        assert!(unit_price(&items[1]).is_zero());
    }

    #[test]
    fn test_totals() {
        let mut store = InvoiceDraftStore::new();
        store.add_product(priced(1, "1,250.00", None));
        store.add_product(priced(1, "1,250.00", None));
        let items = store.add_product(priced(2, "499.50", None));

        assert_eq!(line_total(&items[0]).cents(), 250_000);
        assert_eq!(grand_total(&items).cents(), 299_950);
        assert_eq!(total_quantity(&items), 3);

        let totals = DraftTotals::from(items.as_slice());
        assert_eq!(totals.row_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.grand_total.cents(), 299_950);
    }

    #[test]
    fn test_total_quantity_saturates() {
        let mut store = InvoiceDraftStore::new();
        store.add_product(priced(1, "1.00", None));
        let items = store.add_product(priced(2, "1.00", None));
        for item in &items {
            store.update_quantity(item.id, i64::MAX);
        }

        let items = store.items();
        assert!(items.iter().all(|item| item.quantity == i64::MAX));
        assert_eq!(total_quantity(&items), i64::MAX);

        let totals = store.totals();
        assert_eq!(totals.row_count, 2);
        assert_eq!(totals.total_quantity, i64::MAX);
        assert_eq!(totals.grand_total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_totals_of_empty_draft() {
        let empty: &[DraftLineItem] = &[];
        let totals = DraftTotals::from(empty);
        assert_eq!(totals, DraftTotals::default());
    }
}
