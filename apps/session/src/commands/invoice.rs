//! # Invoice Commands
//!
//! Invoice numbering, preview and submission.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      submit_invoice                                     │
//! │                                                                         │
//! │  1. Lock draft ── snapshot customer + items ── unlock                   │
//! │  2. validate_submission ──── no customer / no items ──► error, no call  │
//! │  3. InvoicePayload::build(header, customer, items)                      │
//! │  4. InvoiceGateway::submit(payload).await                               │
//! │       │                                                                 │
//! │       ├── Ok  ──► draft.clear_all()       (fresh draft for next sale)   │
//! │       └── Err ──► draft untouched         (user can retry)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chilli_core::invoice::{validate_submission, InvoiceHeader, InvoicePayload};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::services::{InvoiceGateway, SubmissionReceipt};
use crate::state::{DraftState, SessionConfig};

/// Asks the backend for the next invoice number.
pub async fn next_invoice_number<G>(gateway: &G) -> Result<String, ApiError>
where
    G: InvoiceGateway,
{
    debug!("next_invoice_number command");
    gateway.next_invoice_number().await.map_err(|e| {
        warn!(error = %e, "Could not fetch next invoice number");
        ApiError::from(e)
    })
}

/// Validates the draft and builds the payload that would be submitted.
pub fn preview_invoice(
    draft: &DraftState,
    config: &SessionConfig,
    inv_no: &str,
    inv_date: NaiveDate,
) -> Result<InvoicePayload, ApiError> {
    debug!(inv_no = %inv_no, "preview_invoice command");

    let (customer, items) = draft.with_draft(|d| (d.customer_info(), d.items()));
    validate_submission(&customer, &items)?;

    let header = InvoiceHeader {
        inv_no: inv_no.to_string(),
        inv_date,
        kind: config.invoice_type.clone(),
    };
    Ok(InvoicePayload::build(header, &customer, &items))
}

/// Submits the draft. Clears it on success; leaves it as is on failure.
pub async fn submit_invoice<G>(
    gateway: &G,
    draft: &DraftState,
    config: &SessionConfig,
    inv_no: &str,
    inv_date: NaiveDate,
) -> Result<SubmissionReceipt, ApiError>
where
    G: InvoiceGateway,
{
    let payload = preview_invoice(draft, config, inv_no, inv_date)?;
    info!(
        inv_no = %payload.inv_no,
        rows = payload.item_row_count,
        quantity = payload.total_quantity,
        total = %config.format_currency(payload.grand_total),
        "Submitting invoice"
    );

    match gateway.submit(&payload).await {
        Ok(receipt) => {
            draft.with_draft_mut(|d| d.clear_all());
            info!(inv_no = %receipt.inv_no, "Invoice created, draft cleared");
            Ok(receipt)
        }
        Err(e) => {
            warn!(inv_no = %payload.inv_no, error = %e, "Invoice submission failed, draft kept");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::services::InMemoryBackend;
    use chilli_core::{CustomerInfo, CustomerInfoPatch, CustomerType, PriceTier, Product};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn ready_draft() -> DraftState {
        let draft = DraftState::new();
        draft.with_draft_mut(|d| {
            d.add_product(Product::new(1, "TS-001", "Tee").with_price(PriceTier::SellPrice1, "1,250.00"));
            d.add_product(Product::new(1, "TS-001", "Tee").with_price(PriceTier::SellPrice1, "1,250.00"));
            d.set_customer_info(
                CustomerInfoPatch::new()
                    .id(Some(3))
                    .cus_id("C-0003")
                    .name("Nimal Perera")
                    .customer_type(CustomerType::Redex),
            );
        });
        draft
    }

    #[tokio::test]
    async fn test_next_invoice_number() {
        let backend = InMemoryBackend::new().with_last_invoice_number(99);
        assert_eq!(next_invoice_number(&backend).await.unwrap(), "INV-0100");
    }

    #[test]
    fn test_preview_requires_customer() {
        let draft = DraftState::new();
        draft.with_draft_mut(|d| d.add_product(Product::new(1, "TS-001", "Tee")));

        let err = preview_invoice(&draft, &SessionConfig::default(), "INV-1", date()).unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompleteInvoice);
        assert_eq!(err.message, "Please select a customer");
    }

    #[test]
    fn test_preview_uses_configured_type() {
        let config = SessionConfig {
            invoice_type: "quotation".to_string(),
            ..SessionConfig::default()
        };
        let payload = preview_invoice(&ready_draft(), &config, "INV-7", date()).unwrap();

        assert_eq!(payload.kind, "quotation");
        assert_eq!(payload.inv_date, "2024-06-01");
        assert_eq!(payload.customer_type, "3");
    }

    #[tokio::test]
    async fn test_submit_success_clears_draft() {
        let backend = InMemoryBackend::new();
        let draft = ready_draft();
        let inv_no = next_invoice_number(&backend).await.unwrap();

        let receipt = submit_invoice(&backend, &draft, &SessionConfig::default(), &inv_no, date())
            .await
            .unwrap();

        assert_eq!(receipt.inv_no, "INV-0001");
        assert!(draft.with_draft(|d| d.is_empty()));
        assert_eq!(draft.with_draft(|d| d.customer_info()), CustomerInfo::default());

        let submitted = backend.submitted().await;
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].total_quantity, 2);
        assert_eq!(submitted[0].grand_total.cents(), 250_000);
        assert_eq!(next_invoice_number(&backend).await.unwrap(), "INV-0002");
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_draft() {
        let backend = InMemoryBackend::new();
        backend.fail_submissions(true);
        let draft = ready_draft();

        let err = submit_invoice(&backend, &draft, &SessionConfig::default(), "INV-0001", date())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::BackendError);
        assert_eq!(draft.with_draft(|d| d.len()), 1);
        assert_eq!(draft.with_draft(|d| d.customer_info().name), "Nimal Perera");
    }

    #[tokio::test]
    async fn test_empty_draft_is_never_sent() {
        let backend = InMemoryBackend::new();
        let draft = DraftState::new();
        draft.with_draft_mut(|d| d.set_customer_info(CustomerInfoPatch::new().name("Walk-in")));

        let err = submit_invoice(&backend, &draft, &SessionConfig::default(), "INV-0001", date())
            .await
            .unwrap_err();

        assert_eq!(err.message, "Please add at least one product");
        assert!(backend.submitted().await.is_empty());
    }
}
