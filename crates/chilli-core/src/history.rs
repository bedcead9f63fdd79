//! # Invoice History
//!
//! Saved invoices as the backend lists them, and the numbers the home
//! screen shows about them.
//!
//! ## Lifecycle Seen From the App
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Saved Invoice                                    │
//! │                                                                         │
//! │   submit ──► status 1 (Pending) ──► ... backend workflow ...            │
//! │                     │                                                   │
//! │                     ▼  mark as paid (only while not settled)            │
//! │              status 11 (Payment Received)                               │
//! │                                                                         │
//! │   Settled = 9 (Completed) or 11 (Payment Received)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are loose like products: totals and codes may arrive as strings
//! or numbers and are kept as text.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::catalog::{contains_ci, InvoiceStatus};
use crate::error::{CoreError, CoreResult};
use crate::invoice::InvoicePayload;
use crate::money::{serialize_major_units, Money};
use crate::pricing::parse_price;
use crate::types::text;

/// Status code a newly saved invoice gets.
pub const NEW_INVOICE_STATUS: &str = "1";

// =============================================================================
// Records
// =============================================================================

/// A saved invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceRecord {
    pub id: i64,

    #[serde(default, deserialize_with = "text::required")]
    pub inv_no: String,

    #[serde(default, deserialize_with = "text::optional")]
    pub inv_date: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub cus_id: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub cus_name: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub address: Option<String>,

    /// Document type, e.g. `job_order`.
    #[serde(rename = "type", default, deserialize_with = "text::optional")]
    pub kind: Option<String>,

    /// Backend status code, e.g. `"11"`.
    #[serde(default, deserialize_with = "text::required")]
    pub status: String,

    #[serde(default, deserialize_with = "text::optional")]
    pub grand_total: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub paydate: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub tracking_no: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub remarks: Option<String>,

    #[serde(default, alias = "invoice_items", deserialize_with = "nullable_list")]
    pub items: Vec<InvoiceRecordItem>,
}

/// One row of a saved invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceRecordItem {
    #[serde(default, alias = "name", deserialize_with = "text::optional")]
    pub product_name: Option<String>,

    #[serde(default, deserialize_with = "text::optional")]
    pub quantity: Option<String>,

    #[serde(default, alias = "amount", deserialize_with = "text::optional")]
    pub price: Option<String>,
}

impl InvoiceRecord {
    /// The record the backend keeps for a freshly submitted payload.
    pub fn saved(id: i64, payload: &InvoicePayload) -> Self {
        let address = payload.address.trim();

        InvoiceRecord {
            id,
            inv_no: payload.inv_no.clone(),
            inv_date: Some(payload.inv_date.clone()),
            cus_id: payload.cus_id.clone(),
            cus_name: Some(payload.cus_name.clone()),
            phone: Some(payload.phone.clone()),
            address: (!address.is_empty()).then(|| address.to_string()),
            kind: Some(payload.kind.clone()),
            status: NEW_INVOICE_STATUS.to_string(),
            grand_total: Some(payload.grand_total.to_string()),
            paydate: None,
            tracking_no: None,
            remarks: None,
            items: payload
                .items
                .iter()
                .map(|item| InvoiceRecordItem {
                    product_name: Some(item.item_name.clone()),
                    quantity: Some(item.quantity.to_string()),
                    price: Some(item.unit_price.to_string()),
                })
                .collect(),
        }
    }

    pub fn status(&self) -> InvoiceStatus {
        InvoiceStatus::from_code(&self.status)
    }

    /// False once the invoice is settled.
    pub fn can_mark_paid(&self) -> bool {
        !self.status().is_settled()
    }

    /// Grand total as money; unparsable or missing totals count as zero.
    pub fn total(&self) -> Money {
        self.grand_total
            .as_deref()
            .and_then(parse_price)
            .unwrap_or_default()
    }
}

/// Refuses to record payment twice.
pub fn ensure_payable(record: &InvoiceRecord) -> CoreResult<()> {
    let status = record.status();
    if status.is_settled() {
        return Err(CoreError::AlreadySettled {
            inv_no: record.inv_no.clone(),
            status: status.label.to_string(),
        });
    }
    Ok(())
}

/// Filters invoices by number, customer name, phone or customer code
/// (case-insensitive substring). A blank query returns every invoice.
pub fn filter_invoices<'a>(records: &'a [InvoiceRecord], query: &str) -> Vec<&'a InvoiceRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|r| {
            contains_ci(Some(&r.inv_no), &query)
                || contains_ci(r.cus_name.as_deref(), &query)
                || contains_ci(r.phone.as_deref(), &query)
                || contains_ci(r.cus_id.as_deref(), &query)
        })
        .collect()
}

fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Paging
// =============================================================================

/// One page of the invoice list, in the backend's paginator shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoicePage {
    #[serde(default, deserialize_with = "nullable_list")]
    pub data: Vec<InvoiceRecord>,

    #[serde(default = "first_page")]
    pub current_page: u32,

    #[serde(default = "first_page")]
    pub last_page: u32,
}

fn first_page() -> u32 {
    1
}

impl InvoicePage {
    /// Cuts page `page` (1-based, 0 reads as 1) out of `records`. Pages past
    /// the end are empty; an empty list still has one page.
    pub fn paginate(records: &[InvoiceRecord], page: u32, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let page = page.max(1);
        let last_page = records.len().div_ceil(per_page).max(1);
        let start = (page as usize - 1).saturating_mul(per_page);

        InvoicePage {
            data: records.iter().skip(start).take(per_page).cloned().collect(),
            current_page: page,
            last_page: u32::try_from(last_page).unwrap_or(u32::MAX),
        }
    }
}

// =============================================================================
// Dashboard
// =============================================================================

/// Counters for the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
pub struct Dashboard {
    pub total_invoices: u64,
    /// Invoices still in status 1.
    pub pending_invoices: u64,
    /// Settled invoices.
    pub paid_invoices: u64,
    /// Sum of the settled invoices' grand totals.
    #[serde(serialize_with = "serialize_major_units")]
    #[ts(type = "number")]
    pub total_revenue: Money,
}

impl From<&[InvoiceRecord]> for Dashboard {
    fn from(records: &[InvoiceRecord]) -> Self {
        let mut dashboard = Dashboard {
            total_invoices: records.len() as u64,
            ..Dashboard::default()
        };

        for record in records {
            let status = record.status();
            if status.is_settled() {
                dashboard.paid_invoices += 1;
                dashboard.total_revenue += record.total();
            } else if status.code == Some(InvoiceStatus::PENDING) {
                dashboard.pending_invoices += 1;
            }
        }
        dashboard
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::InvoiceDraftStore;
    use crate::invoice::InvoiceHeader;
    use crate::types::{CustomerInfoPatch, PriceTier, Product};
    use chrono::NaiveDate;
    use serde_json::json;

    fn record(id: i64, inv_no: &str, status: &str, total: &str) -> InvoiceRecord {
        serde_json::from_value(json!({
            "id": id,
            "inv_no": inv_no,
            "cus_name": format!("Customer {}", id),
            "phone": format!("07700000{:02}", id),
            "status": status,
            "grand_total": total
        }))
        .unwrap()
    }

    #[test]
    fn test_record_accepts_loose_fields() {
        let record: InvoiceRecord = serde_json::from_value(json!({
            "id": 5,
            "inv_no": "INV-0005",
            "cus_id": null,
            "cus_name": "Nimal",
            "type": "job_order",
            "status": 11,
            "grand_total": 2500.5,
            "invoice_items": [{"name": "Polo Tee", "quantity": 2, "amount": "1,250.25"}]
        }))
        .unwrap();

        assert_eq!(record.status, "11");
        assert_eq!(record.kind.as_deref(), Some("job_order"));
        assert_eq!(record.total().cents(), 250_050);
        assert_eq!(record.items[0].product_name.as_deref(), Some("Polo Tee"));
        assert_eq!(record.items[0].quantity.as_deref(), Some("2"));
        assert_eq!(record.items[0].price.as_deref(), Some("1,250.25"));

        let bare: InvoiceRecord =
            serde_json::from_value(json!({"id": 6, "items": null})).unwrap();
        assert!(bare.items.is_empty());
        assert_eq!(bare.status().label, "Unknown");
        assert!(bare.total().is_zero());
    }

    #[test]
    fn test_settled_invoices_cannot_be_paid_again() {
        let pending = record(1, "INV-0001", "1", "100");
        assert!(pending.can_mark_paid());
        assert!(ensure_payable(&pending).is_ok());

        for code in ["9", "11"] {
            let settled = record(2, "INV-0002", code, "100");
            assert!(!settled.can_mark_paid());
            let err = ensure_payable(&settled).unwrap_err();
            assert!(matches!(err, CoreError::AlreadySettled { ref inv_no, .. } if inv_no == "INV-0002"));
        }
    }

    #[test]
    fn test_filter_invoices() {
        let mut records = vec![
            record(1, "INV-0001", "1", "100"),
            record(2, "INV-0002", "1", "100"),
        ];
        records[1].cus_id = Some("C-0042".to_string());

        assert_eq!(filter_invoices(&records, " ").len(), 2);
        assert_eq!(filter_invoices(&records, "inv-0002")[0].id, 2);
        assert_eq!(filter_invoices(&records, "customer 1")[0].id, 1);
        assert_eq!(filter_invoices(&records, "0770000002")[0].id, 2);
        assert_eq!(filter_invoices(&records, "c-0042")[0].id, 2);
        assert!(filter_invoices(&records, "nobody").is_empty());
    }

    #[test]
    fn test_paginate() {
        let records: Vec<InvoiceRecord> = (1..=5)
            .map(|id| record(id, &format!("INV-{:04}", id), "1", "10"))
            .collect();

        let first = InvoicePage::paginate(&records, 1, 2);
        assert_eq!(first.data.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(first.last_page, 3);

        let last = InvoicePage::paginate(&records, 3, 2);
        assert_eq!(last.data.len(), 1);

        assert!(InvoicePage::paginate(&records, 4, 2).data.is_empty());
        assert_eq!(InvoicePage::paginate(&records, 0, 2).current_page, 1);

        let empty = InvoicePage::paginate(&[], 1, 15);
        assert!(empty.data.is_empty());
        assert_eq!(empty.last_page, 1);
    }

    #[test]
    fn test_page_decodes_paginator_shape() {
        let page: InvoicePage = serde_json::from_value(json!({
            "current_page": 2,
            "data": [{"id": 16, "inv_no": "INV-0016", "status": "1"}],
            "last_page": 4,
            "per_page": 15
        }))
        .unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.last_page, 4);
        assert_eq!(page.data[0].inv_no, "INV-0016");

        let defaults: InvoicePage = serde_json::from_value(json!({"data": null})).unwrap();
        assert!(defaults.data.is_empty());
        assert_eq!(defaults.last_page, 1);
    }

    #[test]
    fn test_dashboard_counts() {
        let records = vec![
            record(1, "INV-0001", "1", "1,000.00"),
            record(2, "INV-0002", "11", "2,500.50"),
            record(3, "INV-0003", "9", "500"),
            record(4, "INV-0004", "3", "750"),
        ];
        let dashboard = Dashboard::from(records.as_slice());

        assert_eq!(dashboard.total_invoices, 4);
        assert_eq!(dashboard.pending_invoices, 1);
        assert_eq!(dashboard.paid_invoices, 2);
        assert_eq!(dashboard.total_revenue.cents(), 300_050);
        assert_eq!(serde_json::to_value(dashboard).unwrap()["total_revenue"], json!(3000.5));

        let none: &[InvoiceRecord] = &[];
        assert_eq!(Dashboard::from(none), Dashboard::default());
    }

    #[test]
    fn test_saved_record_from_payload() {
        let mut store = InvoiceDraftStore::new();
        let tee = Product::new(1, "TS-001", "Crew Neck Tee")
            .with_price(PriceTier::SellPrice1, "1,250.00");
        store.add_product(tee.clone());
        store.add_product(tee);
        store.set_customer_info(
            CustomerInfoPatch::new()
                .cus_id("C-0001")
                .name("Nimal")
                .phone("0712345678"),
        );

        let payload = InvoicePayload::build(
            InvoiceHeader::new("INV-0009", NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()),
            &store.customer_info(),
            &store.items(),
        );
        let record = InvoiceRecord::saved(9, &payload);

        assert_eq!(record.id, 9);
        assert_eq!(record.status().code, Some(InvoiceStatus::PENDING));
        assert_eq!(record.inv_date.as_deref(), Some("2024-05-04"));
        assert_eq!(record.address, None);
        assert_eq!(record.kind.as_deref(), Some("job_order"));
        assert_eq!(record.total().cents(), 250_000);
        assert_eq!(record.items[0].quantity.as_deref(), Some("2"));
    }
}
