//! # Catalogs
//!
//! Static lookup tables used to label draft lines and invoices:
//!
//! - [`Color`] - the 20-color garment palette (id, display name, hex code)
//! - [`Size`] - letter sizes XS..5XL and numeric sizes 28..44
//! - [`InvoiceStatus`] - backend status codes with label and badge color
//!
//! Plus the two client-side search filters used by the pickers
//! ([`filter_products`], [`filter_customers`]).
//!
//! ## Unknown Ids
//! Lookups by id never fail. An unknown color resolves to white, an unknown
//! size to M, an unknown status code to "Unknown". Labels on a submitted
//! invoice are therefore always present.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::{Customer, Product};

// =============================================================================
// Color Palette
// =============================================================================

/// A garment color from the fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    White,
    Black,
    Navy,
    RoyalBlue,
    SkyBlue,
    Red,
    Maroon,
    Green,
    DarkGreen,
    Yellow,
    Orange,
    Pink,
    Purple,
    Grey,
    LightGrey,
    Brown,
    Beige,
    Cream,
    Olive,
    Teal,
}

impl Color {
    /// The whole palette in picker order.
    pub const ALL: [Color; 20] = [
        Color::White,
        Color::Black,
        Color::Navy,
        Color::RoyalBlue,
        Color::SkyBlue,
        Color::Red,
        Color::Maroon,
        Color::Green,
        Color::DarkGreen,
        Color::Yellow,
        Color::Orange,
        Color::Pink,
        Color::Purple,
        Color::Grey,
        Color::LightGrey,
        Color::Brown,
        Color::Beige,
        Color::Cream,
        Color::Olive,
        Color::Teal,
    ];

    /// Stable identifier (`"royal_blue"`), also the serde representation.
    pub const fn id(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Navy => "navy",
            Color::RoyalBlue => "royal_blue",
            Color::SkyBlue => "sky_blue",
            Color::Red => "red",
            Color::Maroon => "maroon",
            Color::Green => "green",
            Color::DarkGreen => "dark_green",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Purple => "purple",
            Color::Grey => "grey",
            Color::LightGrey => "light_grey",
            Color::Brown => "brown",
            Color::Beige => "beige",
            Color::Cream => "cream",
            Color::Olive => "olive",
            Color::Teal => "teal",
        }
    }

    /// Display name (`"Royal Blue"`).
    pub const fn name(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
            Color::Navy => "Navy Blue",
            Color::RoyalBlue => "Royal Blue",
            Color::SkyBlue => "Sky Blue",
            Color::Red => "Red",
            Color::Maroon => "Maroon",
            Color::Green => "Green",
            Color::DarkGreen => "Dark Green",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Pink => "Pink",
            Color::Purple => "Purple",
            Color::Grey => "Grey",
            Color::LightGrey => "Light Grey",
            Color::Brown => "Brown",
            Color::Beige => "Beige",
            Color::Cream => "Cream",
            Color::Olive => "Olive",
            Color::Teal => "Teal",
        }
    }

    /// Swatch hex code (`"#4169E1"`).
    pub const fn hex(&self) -> &'static str {
        match self {
            Color::White => "#FFFFFF",
            Color::Black => "#000000",
            Color::Navy => "#000080",
            Color::RoyalBlue => "#4169E1",
            Color::SkyBlue => "#87CEEB",
            Color::Red => "#FF0000",
            Color::Maroon => "#800000",
            Color::Green => "#008000",
            Color::DarkGreen => "#006400",
            Color::Yellow => "#FFFF00",
            Color::Orange => "#FFA500",
            Color::Pink => "#FFC0CB",
            Color::Purple => "#800080",
            Color::Grey => "#808080",
            Color::LightGrey => "#D3D3D3",
            Color::Brown => "#8B4513",
            Color::Beige => "#F5F5DC",
            Color::Cream => "#FFFDD0",
            Color::Olive => "#808000",
            Color::Teal => "#008080",
        }
    }

    /// Resolves an id, falling back to white for anything unknown.
    pub fn from_id(id: &str) -> Color {
        Color::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .unwrap_or_default()
    }

    /// Resolves a display name (trimmed, case-insensitive), falling back to
    /// white.
    ///
    /// ```rust
    /// use chilli_core::catalog::Color;
    ///
    /// assert_eq!(Color::from_name("  navy blue "), Color::Navy);
    /// assert_eq!(Color::from_name("chartreuse"), Color::White);
    /// ```
    pub fn from_name(name: &str) -> Color {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return Color::default();
        }
        Color::ALL
            .into_iter()
            .find(|c| c.name().to_lowercase() == wanted)
            .unwrap_or_default()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Size Catalog
// =============================================================================

/// Which group of sizes a picker shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeSystem {
    /// XS..5XL (shirts).
    #[default]
    Letter,
    /// 28..44 (trousers).
    Numeric,
    /// Both groups, letter sizes first.
    All,
}

/// A garment size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Size {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "s")]
    S,
    #[default]
    #[serde(rename = "m")]
    M,
    #[serde(rename = "l")]
    L,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "xxl")]
    Xxl,
    #[serde(rename = "xxxl")]
    Xxxl,
    #[serde(rename = "4xl")]
    FourXl,
    #[serde(rename = "5xl")]
    FiveXl,
    #[serde(rename = "28")]
    W28,
    #[serde(rename = "30")]
    W30,
    #[serde(rename = "32")]
    W32,
    #[serde(rename = "34")]
    W34,
    #[serde(rename = "36")]
    W36,
    #[serde(rename = "38")]
    W38,
    #[serde(rename = "40")]
    W40,
    #[serde(rename = "42")]
    W42,
    #[serde(rename = "44")]
    W44,
}

impl Size {
    /// Letter sizes in picker order.
    pub const LETTER: [Size; 9] = [
        Size::Xs,
        Size::S,
        Size::M,
        Size::L,
        Size::Xl,
        Size::Xxl,
        Size::Xxxl,
        Size::FourXl,
        Size::FiveXl,
    ];

    /// Numeric sizes in picker order.
    pub const NUMERIC: [Size; 9] = [
        Size::W28,
        Size::W30,
        Size::W32,
        Size::W34,
        Size::W36,
        Size::W38,
        Size::W40,
        Size::W42,
        Size::W44,
    ];

    /// Sizes offered for a picker.
    pub fn all(system: SizeSystem) -> Vec<Size> {
        match system {
            SizeSystem::Letter => Size::LETTER.to_vec(),
            SizeSystem::Numeric => Size::NUMERIC.to_vec(),
            SizeSystem::All => Size::LETTER
                .into_iter()
                .chain(Size::NUMERIC)
                .collect(),
        }
    }

    /// Stable identifier (`"4xl"`, `"32"`), also the serde representation.
    pub const fn id(&self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::S => "s",
            Size::M => "m",
            Size::L => "l",
            Size::Xl => "xl",
            Size::Xxl => "xxl",
            Size::Xxxl => "xxxl",
            Size::FourXl => "4xl",
            Size::FiveXl => "5xl",
            Size::W28 => "28",
            Size::W30 => "30",
            Size::W32 => "32",
            Size::W34 => "34",
            Size::W36 => "36",
            Size::W38 => "38",
            Size::W40 => "40",
            Size::W42 => "42",
            Size::W44 => "44",
        }
    }

    /// Short name printed on the invoice (`"4XL"`, `"32"`).
    pub const fn name(&self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
            Size::Xxxl => "XXXL",
            Size::FourXl => "4XL",
            Size::FiveXl => "5XL",
            other => other.id(),
        }
    }

    /// Long label shown in the picker (`"Extra Large"`, `"Size 32"`).
    pub fn label(&self) -> String {
        match self {
            Size::Xs => "Extra Small".to_string(),
            Size::S => "Small".to_string(),
            Size::M => "Medium".to_string(),
            Size::L => "Large".to_string(),
            Size::Xl => "Extra Large".to_string(),
            Size::Xxl => "2X Large".to_string(),
            Size::Xxxl => "3X Large".to_string(),
            Size::FourXl => "4X Large".to_string(),
            Size::FiveXl => "5X Large".to_string(),
            numeric => format!("Size {}", numeric.id()),
        }
    }

    /// True for waist sizes.
    pub fn is_numeric(&self) -> bool {
        Size::NUMERIC.contains(self)
    }

    /// Resolves an id, falling back to M for anything unknown.
    pub fn from_id(id: &str) -> Size {
        Size::LETTER
            .into_iter()
            .chain(Size::NUMERIC)
            .find(|s| s.id() == id)
            .unwrap_or_default()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Invoice Status
// =============================================================================

/// Label and badge color for a backend invoice status code.
///
/// The invoice lifecycle itself lives in the backend; this table only turns
/// its codes into something displayable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceStatus {
    pub code: Option<u16>,
    pub label: &'static str,
    pub color: &'static str,
}

const STATUS_TABLE: [(u16, &str, &str); 12] = [
    (1, "Pending", "#FF9800"),
    (2, "Processing", "#2196F3"),
    (3, "Shipped", "#9C27B0"),
    (5, "Delivered", "#4CAF50"),
    (6, "Returned", "#795548"),
    (7, "Refunded", "#607D8B"),
    (8, "On Hold", "#FF5722"),
    (9, "Completed", "#4CAF50"),
    (10, "Failed", "#F44336"),
    (11, "Payment Received", "#4CAF50"),
    (12, "New Enquiry", "#FF9800"),
    (14, "With Courier", "#FF9800"),
];

impl InvoiceStatus {
    /// Status of a newly saved invoice.
    pub const PENDING: u16 = 1;

    /// Status the backend uses once payment is recorded.
    pub const PAYMENT_RECEIVED: u16 = 11;

    /// Status for completed orders.
    pub const COMPLETED: u16 = 9;

    /// Looks up a status code as the backend sends it (string or number
    /// text, e.g. `"11"`). Unknown or malformed codes map to "Unknown".
    pub fn from_code(code: &str) -> InvoiceStatus {
        code.trim()
            .parse::<u16>()
            .ok()
            .and_then(|code| {
                STATUS_TABLE
                    .iter()
                    .find(|(c, _, _)| *c == code)
                    .map(|&(code, label, color)| InvoiceStatus {
                        code: Some(code),
                        label,
                        color,
                    })
            })
            .unwrap_or(InvoiceStatus {
                code: None,
                label: "Unknown",
                color: "#9E9E9E",
            })
    }

    /// True when the invoice is paid or completed; "mark as paid" is hidden
    /// for these.
    pub fn is_settled(&self) -> bool {
        matches!(
            self.code,
            Some(InvoiceStatus::PAYMENT_RECEIVED) | Some(InvoiceStatus::COMPLETED)
        )
    }
}

// =============================================================================
// Picker Search
// =============================================================================

pub(crate) fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

/// Filters products by item code or name (case-insensitive substring).
/// A blank query returns every product.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| {
            contains_ci(Some(&p.item_code), &query) || contains_ci(Some(&p.item_name), &query)
        })
        .collect()
}

/// Filters customers by phone number or name (case-insensitive substring).
/// An empty query returns every customer.
pub fn filter_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return customers.iter().collect();
    }

    customers
        .iter()
        .filter(|c| {
            contains_ci(c.phone.as_deref(), &query)
                || contains_ci(c.customer_name.as_deref(), &query)
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup_and_fallback() {
        assert_eq!(Color::from_id("royal_blue"), Color::RoyalBlue);
        assert_eq!(Color::RoyalBlue.name(), "Royal Blue");
        assert_eq!(Color::RoyalBlue.hex(), "#4169E1");
        assert_eq!(Color::from_id("magenta"), Color::White);
        assert_eq!(Color::from_name(""), Color::White);
        assert_eq!(Color::from_name("LIGHT GREY"), Color::LightGrey);
    }

    #[test]
    fn test_color_ids_match_serde() {
        for color in Color::ALL {
            let json = serde_json::to_value(color).unwrap();
            assert_eq!(json, serde_json::json!(color.id()));
        }
    }

    #[test]
    fn test_size_lookup_and_fallback() {
        assert_eq!(Size::from_id("4xl"), Size::FourXl);
        assert_eq!(Size::FourXl.name(), "4XL");
        assert_eq!(Size::from_id("32").label(), "Size 32");
        assert_eq!(Size::from_id("7xl"), Size::M);
        assert_eq!(Size::default().label(), "Medium");
        assert!(Size::W44.is_numeric());
        assert!(!Size::Xs.is_numeric());
    }

    #[test]
    fn test_size_ids_match_serde() {
        for size in Size::all(SizeSystem::All) {
            let json = serde_json::to_value(size).unwrap();
            assert_eq!(json, serde_json::json!(size.id()));
        }
    }

    #[test]
    fn test_size_systems() {
        assert_eq!(Size::all(SizeSystem::Letter).len(), 9);
        assert_eq!(Size::all(SizeSystem::Numeric)[0], Size::W28);
        let all = Size::all(SizeSystem::All);
        assert_eq!(all.len(), 18);
        assert_eq!(all[0], Size::Xs);
        assert_eq!(all[17], Size::W44);
    }

    #[test]
    fn test_invoice_status_table() {
        let status = InvoiceStatus::from_code("14");
        assert_eq!(status.label, "With Courier");
        assert!(!status.is_settled());

        assert!(InvoiceStatus::from_code("11").is_settled());
        assert!(InvoiceStatus::from_code(" 9 ").is_settled());

        let unknown = InvoiceStatus::from_code("4");
        assert_eq!(unknown.label, "Unknown");
        assert_eq!(unknown.color, "#9E9E9E");
        assert_eq!(InvoiceStatus::from_code("abc").code, None);
    }

    #[test]
    fn test_filter_products() {
        let products = vec![
            Product::new(1, "TS-001", "Crew Neck Tee"),
            Product::new(2, "PL-010", "Polo Shirt"),
        ];

        assert_eq!(filter_products(&products, "  ").len(), 2);
        let hits = filter_products(&products, "polo");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
        assert_eq!(filter_products(&products, "ts-0").len(), 1);
        assert!(filter_products(&products, "hoodie").is_empty());
    }

    #[test]
    fn test_filter_customers() {
        let customers = vec![
            Customer {
                id: 1,
                cus_id: Some("C-1".to_string()),
                customer_name: Some("Nimal Perera".to_string()),
                phone: Some("0771234567".to_string()),
                address: None,
            },
            Customer {
                id: 2,
                cus_id: None,
                customer_name: None,
                phone: Some("0719876543".to_string()),
                address: None,
            },
        ];

        assert_eq!(filter_customers(&customers, "").len(), 2);
        assert_eq!(filter_customers(&customers, "077").len(), 1);
        assert_eq!(filter_customers(&customers, "PERERA").len(), 1);
        assert_eq!(filter_customers(&customers, "07").len(), 2);
    }
}
