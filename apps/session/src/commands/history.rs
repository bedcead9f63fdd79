//! # Invoice History Commands
//!
//! The invoice list, the detail screen and the home dashboard.
//!
//! ## Mark as Paid
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  mark_invoice_paid(id)                                                  │
//! │                                                                         │
//! │  1. get_invoice(id) ─────────── unknown id ──► NOT_FOUND                │
//! │  2. ensure_payable ──────────── status 9/11 ──► ALREADY_SETTLED, no call│
//! │  3. InvoiceGateway::mark_paid(id) ──► status 11                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chilli_core::catalog::InvoiceStatus;
use chilli_core::history::{ensure_payable, filter_invoices, Dashboard, InvoicePage, InvoiceRecord};
use chilli_core::validation::validate_search_query;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::services::InvoiceGateway;

/// A saved invoice with what the detail screen derives from its status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetail {
    pub invoice: InvoiceRecord,
    pub status: InvoiceStatus,
    /// Whether the "mark as paid" action is offered.
    pub can_mark_paid: bool,
}

impl From<InvoiceRecord> for InvoiceDetail {
    fn from(invoice: InvoiceRecord) -> Self {
        InvoiceDetail {
            status: invoice.status(),
            can_mark_paid: invoice.can_mark_paid(),
            invoice,
        }
    }
}

/// Loads one page of the invoice list and filters it by number, customer
/// name, phone or customer code. Page 0 reads as page 1.
pub async fn list_invoices<G>(gateway: &G, page: u32, query: &str) -> Result<InvoicePage, ApiError>
where
    G: InvoiceGateway,
{
    let query = validate_search_query(query)?;
    debug!(page, query = %query, "list_invoices command");

    let mut page = gateway.list_invoices(page.max(1)).await.map_err(|e| {
        warn!(error = %e, "Invoice list unavailable");
        ApiError::from(e)
    })?;
    page.data = filter_invoices(&page.data, &query)
        .into_iter()
        .cloned()
        .collect();
    Ok(page)
}

/// Gets one invoice for the detail screen.
pub async fn get_invoice<G>(gateway: &G, id: i64) -> Result<InvoiceDetail, ApiError>
where
    G: InvoiceGateway,
{
    debug!(id, "get_invoice command");
    let invoice = gateway.get_invoice(id).await?;
    Ok(invoice.into())
}

/// Records payment for an invoice that is not yet settled.
pub async fn mark_invoice_paid<G>(gateway: &G, id: i64) -> Result<InvoiceDetail, ApiError>
where
    G: InvoiceGateway,
{
    debug!(id, "mark_invoice_paid command");

    let current = gateway.get_invoice(id).await?;
    ensure_payable(&current)?;

    let updated = gateway.mark_paid(id).await.map_err(|e| {
        warn!(inv_no = %current.inv_no, error = %e, "Could not mark invoice as paid");
        ApiError::from(e)
    })?;
    info!(inv_no = %updated.inv_no, "Invoice marked as paid");
    Ok(updated.into())
}

/// Deletes a saved invoice.
pub async fn delete_invoice<G>(gateway: &G, id: i64) -> Result<(), ApiError>
where
    G: InvoiceGateway,
{
    debug!(id, "delete_invoice command");
    gateway.delete_invoice(id).await?;
    info!(id, "Invoice deleted");
    Ok(())
}

/// Counters for the home screen.
pub async fn dashboard<G>(gateway: &G) -> Result<Dashboard, ApiError>
where
    G: InvoiceGateway,
{
    debug!("dashboard command");
    gateway.dashboard().await.map_err(|e| {
        warn!(error = %e, "Dashboard unavailable");
        ApiError::from(e)
    })
}
