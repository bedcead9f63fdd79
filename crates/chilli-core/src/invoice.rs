//! # Invoice Payload
//!
//! Turns a finished draft into the JSON document the invoice backend
//! accepts.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Draft → Payload                                  │
//! │                                                                         │
//! │   InvoiceDraftStore                                                     │
//! │   ├── customer_info() ──┐                                               │
//! │   └── items() ──────────┤                                               │
//! │                         ▼                                               │
//! │              validate_submission()  ── CustomerRequired / EmptyDraft    │
//! │                         │                                               │
//! │                         ▼                                               │
//! │   InvoiceHeader ──► InvoicePayload::build()                             │
//! │   (inv_no, date)        │                                               │
//! │                         ▼                                               │
//! │              { inv_no, cus_*, items[row_no..], totals }                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Money is kept in cents up to this point. The payload writes amounts as
//! plain JSON numbers in rupees (`1250.5`), which is what the backend reads.

use chrono::NaiveDate;
use serde::Serialize;

use crate::draft::DraftLineItem;
use crate::error::{CoreError, CoreResult};
use crate::money::{serialize_major_units, Money};
use crate::pricing::{grand_total, line_total, total_quantity, unit_price};
use crate::types::{CustomerInfo, PriceTier};

/// Document type the backend files mobile invoices under.
pub const DEFAULT_INVOICE_TYPE: &str = "job_order";

// =============================================================================
// Validation
// =============================================================================

/// Checks that a draft can be submitted.
///
/// The customer check runs first, so an empty draft with no customer reports
/// [`CoreError::CustomerRequired`].
pub fn validate_submission(customer: &CustomerInfo, items: &[DraftLineItem]) -> CoreResult<()> {
    if !customer.has_customer() {
        return Err(CoreError::CustomerRequired);
    }
    if items.is_empty() {
        return Err(CoreError::EmptyDraft);
    }
    Ok(())
}

// =============================================================================
// Payload
// =============================================================================

/// Values that come from outside the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceHeader {
    /// Invoice number handed out by the backend.
    pub inv_no: String,
    pub inv_date: NaiveDate,
    /// Document type, normally [`DEFAULT_INVOICE_TYPE`].
    pub kind: String,
}

impl InvoiceHeader {
    /// Header with the default document type.
    pub fn new(inv_no: impl Into<String>, inv_date: NaiveDate) -> Self {
        InvoiceHeader {
            inv_no: inv_no.into(),
            inv_date,
            kind: DEFAULT_INVOICE_TYPE.to_string(),
        }
    }
}

/// One row of the submitted invoice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicePayloadItem {
    /// 1-based position in the draft.
    pub row_no: usize,
    pub product_id: i64,
    pub item_code: String,
    pub item_name: String,
    pub style: Option<String>,
    pub gsm: Option<String>,
    pub fabric: Option<String>,
    pub color: String,
    pub color_name: String,
    pub size: String,
    pub size_name: String,
    pub quantity: i64,
    pub price_type: PriceTier,
    #[serde(serialize_with = "serialize_major_units")]
    pub unit_price: Money,
    #[serde(serialize_with = "serialize_major_units")]
    pub line_total: Money,
}

impl From<(usize, &DraftLineItem)> for InvoicePayloadItem {
    fn from((index, item): (usize, &DraftLineItem)) -> Self {
        let product = &item.product;
        InvoicePayloadItem {
            row_no: index + 1,
            product_id: product.id,
            item_code: product.item_code.clone(),
            item_name: product.item_name.clone(),
            style: product.style.clone(),
            gsm: product.gsm.clone(),
            fabric: product.fabric_up.clone(),
            color: item.color.id().to_string(),
            color_name: item.color.name().to_string(),
            size: item.size.id().to_string(),
            size_name: item.size.name().to_string(),
            quantity: item.quantity,
            price_type: item.price_tier,
            unit_price: unit_price(item),
            line_total: line_total(item),
        }
    }
}

/// The document posted to the invoice endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicePayload {
    pub inv_no: String,
    /// `YYYY-MM-DD`.
    pub inv_date: String,
    /// `null` when the customer has no code.
    pub cus_id: Option<String>,
    pub cus_name: String,
    pub phone: String,
    pub address: String,
    /// Backend code of the customer type (`"1"`, `"2"`, `"3"`).
    pub customer_type: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub items: Vec<InvoicePayloadItem>,
    pub item_row_count: usize,
    pub total_quantity: i64,
    #[serde(serialize_with = "serialize_major_units")]
    pub grand_total: Money,
}

impl InvoicePayload {
    /// Builds the payload. Does not validate; call
    /// [`validate_submission`] first.
    pub fn build(header: InvoiceHeader, customer: &CustomerInfo, items: &[DraftLineItem]) -> Self {
        let cus_id = customer.cus_id.trim();

        InvoicePayload {
            inv_no: header.inv_no,
            inv_date: header.inv_date.format("%Y-%m-%d").to_string(),
            cus_id: (!cus_id.is_empty()).then(|| cus_id.to_string()),
            cus_name: customer.name.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
            customer_type: customer.customer_type.code().to_string(),
            kind: header.kind,
            items: items.iter().enumerate().map(InvoicePayloadItem::from).collect(),
            item_row_count: items.len(),
            total_quantity: total_quantity(items),
            grand_total: grand_total(items),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
