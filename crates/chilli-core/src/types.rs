//! # Domain Types
//!
//! Core domain types used throughout Chilli Invoice.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │  CustomerInfo   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id (optional)  │       │
//! │  │  item_code      │   │  cus_id         │   │  cus_id, name   │       │
//! │  │  sell_price1..3 │   │  customer_name  │   │  phone, address │       │
//! │  │  (text prices)  │   │  phone          │   │  customer_type  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   PriceTier     │   │  CustomerType   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  sell_price1    │   │  working        │                             │
//! │  │  sell_price2    │   │  online         │                             │
//! │  │  sell_price3    │   │  redex          │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Backend Records Are Loose
//! The backend sends prices and codes sometimes as JSON strings
//! (`"1,250.00"`, `""`) and sometimes as numbers (`1250`). Records keep them
//! as text and the `pricing` module parses on demand, so a malformed price
//! never fails deserialization of the whole product.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Price Tier
// =============================================================================

/// Which of the product's three selling prices applies to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PriceTier {
    /// Standard price.
    #[default]
    #[serde(rename = "sell_price1")]
    SellPrice1,
    /// Second tier.
    #[serde(rename = "sell_price2")]
    SellPrice2,
    /// Third tier.
    #[serde(rename = "sell_price3")]
    SellPrice3,
}

impl PriceTier {
    /// All tiers in display order.
    pub const ALL: [PriceTier; 3] = [
        PriceTier::SellPrice1,
        PriceTier::SellPrice2,
        PriceTier::SellPrice3,
    ];

    /// Name of the product field this tier reads (`sell_price1`, ...).
    pub const fn field_name(&self) -> &'static str {
        match self {
            PriceTier::SellPrice1 => "sell_price1",
            PriceTier::SellPrice2 => "sell_price2",
            PriceTier::SellPrice3 => "sell_price3",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for PriceTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sell_price1" => Ok(PriceTier::SellPrice1),
            "sell_price2" => Ok(PriceTier::SellPrice2),
            "sell_price3" => Ok(PriceTier::SellPrice3),
            other => Err(ValidationError::InvalidFormat {
                field: "price_type".to_string(),
                reason: format!("unknown price tier '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Customer Type
// =============================================================================

/// Sales channel of the invoice's customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    /// Walk-in / working customer.
    #[default]
    Working,
    /// Online order.
    Online,
    /// Redex courier order.
    Redex,
}

impl CustomerType {
    /// All customer types in display order.
    pub const ALL: [CustomerType; 3] = [
        CustomerType::Working,
        CustomerType::Online,
        CustomerType::Redex,
    ];

    /// Code the backend stores for this type (`"1"`, `"2"`, `"3"`).
    pub const fn code(&self) -> &'static str {
        match self {
            CustomerType::Working => "1",
            CustomerType::Online => "2",
            CustomerType::Redex => "3",
        }
    }

    /// Display label.
    pub const fn label(&self) -> &'static str {
        match self {
            CustomerType::Working => "Working",
            CustomerType::Online => "Online",
            CustomerType::Redex => "Redex",
        }
    }

    /// Badge color shown next to the label.
    pub const fn color(&self) -> &'static str {
        match self {
            CustomerType::Working => "#4CAF50",
            CustomerType::Online => "#2196F3",
            CustomerType::Redex => "#FF5722",
        }
    }
}

impl FromStr for CustomerType {
    type Err = ValidationError;

    /// Accepts either the lowercase name or the backend code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "working" | "1" => Ok(CustomerType::Working),
            "online" | "2" => Ok(CustomerType::Online),
            "redex" | "3" => Ok(CustomerType::Redex),
            other => Err(ValidationError::InvalidFormat {
                field: "customer_type".to_string(),
                reason: format!("unknown customer type '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as returned by the product lookup service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Backend identifier. Part of the draft's dedup key.
    pub id: i64,

    /// Business item code (also what barcodes encode).
    #[serde(default, deserialize_with = "text::required")]
    pub item_code: String,

    /// Display name.
    #[serde(default, deserialize_with = "text::required")]
    pub item_name: String,

    #[serde(default, deserialize_with = "text::optional")]
    pub style: Option<String>,

    /// Fabric weight (grams per square metre).
    #[serde(default, deserialize_with = "text::optional")]
    pub gsm: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub fabric_up: Option<String>,

    #[serde(default, deserialize_with = "text::price")]
    pub sell_price1: Option<String>,

    #[serde(default, deserialize_with = "text::price")]
    pub sell_price2: Option<String>,

    #[serde(default, deserialize_with = "text::price")]
    pub sell_price3: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub profit1: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub profit2: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub profit3: Option<String>,

    /// Total unit cost.
    #[serde(default, deserialize_with = "text::optional")]
    pub tot_cost: Option<String>,
}

impl Product {
    /// Creates a product with only the identifying fields set.
    pub fn new(id: i64, item_code: impl Into<String>, item_name: impl Into<String>) -> Self {
        Product {
            id,
            item_code: item_code.into(),
            item_name: item_name.into(),
            style: None,
            gsm: None,
            fabric_up: None,
            sell_price1: None,
            sell_price2: None,
            sell_price3: None,
            profit1: None,
            profit2: None,
            profit3: None,
            tot_cost: None,
        }
    }

    /// Sets the raw text of one price tier.
    pub fn with_price(mut self, tier: PriceTier, price: impl Into<String>) -> Self {
        let price = Some(price.into());
        match tier {
            PriceTier::SellPrice1 => self.sell_price1 = price,
            PriceTier::SellPrice2 => self.sell_price2 = price,
            PriceTier::SellPrice3 => self.sell_price3 = price,
        }
        self
    }

    /// Raw text of a price tier, exactly as the backend sent it.
    pub fn price_text(&self, tier: PriceTier) -> Option<&str> {
        match tier {
            PriceTier::SellPrice1 => self.sell_price1.as_deref(),
            PriceTier::SellPrice2 => self.sell_price2.as_deref(),
            PriceTier::SellPrice3 => self.sell_price3.as_deref(),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer record from the customer directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: i64,

    /// Business-facing customer code.
    #[serde(default, deserialize_with = "text::optional")]
    pub cus_id: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub customer_name: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub address: Option<String>,
}

// =============================================================================
// Customer Info (draft header)
// =============================================================================

/// The customer section of the invoice being composed.
///
/// Serialized with the field names the UI has always used
/// (`{id, cus_id, name, phone, address, customerType}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerInfo {
    /// Directory id of the selected customer, `None` until one is picked.
    pub id: Option<i64>,
    pub cus_id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "customerType")]
    pub customer_type: CustomerType,
}

impl CustomerInfo {
    /// True once a customer has been picked or typed in.
    pub fn has_customer(&self) -> bool {
        self.id.is_some() || !self.cus_id.trim().is_empty() || !self.name.trim().is_empty()
    }

    /// Applies a shallow merge: only the fields present in `patch` change.
    pub fn merge(&mut self, patch: CustomerInfoPatch) {
        let CustomerInfoPatch {
            id,
            cus_id,
            name,
            phone,
            address,
            customer_type,
        } = patch;

        if let Some(id) = id {
            self.id = id;
        }
        if let Some(cus_id) = cus_id {
            self.cus_id = cus_id;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(customer_type) = customer_type {
            self.customer_type = customer_type;
        }
    }
}

/// A partial update to [`CustomerInfo`].
///
/// `None` means "leave as is". `id` is tri-state: `Some(None)` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CustomerInfoPatch {
    #[serde(default, deserialize_with = "text::double_option")]
    pub id: Option<Option<i64>>,
    pub cus_id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "customerType")]
    pub customer_type: Option<CustomerType>,
}

impl CustomerInfoPatch {
    /// An empty patch (changes nothing).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: Option<i64>) -> Self {
        self.id = Some(id);
        self
    }

    pub fn cus_id(mut self, cus_id: impl Into<String>) -> Self {
        self.cus_id = Some(cus_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn customer_type(mut self, customer_type: CustomerType) -> Self {
        self.customer_type = Some(customer_type);
        self
    }
}

/// Selecting a directory customer overwrites every customer field but
/// leaves the customer type alone.
impl From<&Customer> for CustomerInfoPatch {
    fn from(customer: &Customer) -> Self {
        CustomerInfoPatch {
            id: Some(Some(customer.id)),
            cus_id: Some(customer.cus_id.clone().unwrap_or_default()),
            name: Some(customer.customer_name.clone().unwrap_or_default()),
            phone: Some(customer.phone.clone().unwrap_or_default()),
            address: Some(customer.address.clone().unwrap_or_default()),
            customer_type: None,
        }
    }
}

// =============================================================================
// Lenient text fields
// =============================================================================

pub(crate) mod text {
    //! Deserializers for backend fields that may be a string, a number,
    //! or null.

    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn value_to_text(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(value_to_text(Value::deserialize(deserializer)?))
    }

    /// Price text. A numeric `0` reads as missing, so the line falls back to
    /// `sell_price1`; the string `"0"` is kept.
    pub fn price<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) if n.as_f64().is_some_and(|v| v == 0.0) => Ok(None),
            other => Ok(value_to_text(other)),
        }
    }

    pub fn required<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional(deserializer)?.unwrap_or_default())
    }

    pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
