//! In-memory backend.
//!
//! Serves products and customers from fixtures, hands out invoice numbers
//! from a counter, records every submitted payload and keeps the saved
//! invoices for the history screens. Cloning shares the same state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use chilli_core::catalog::InvoiceStatus;
use chilli_core::history::{Dashboard, InvoicePage, InvoiceRecord};
use chilli_core::invoice::InvoicePayload;
use chilli_core::types::{Customer, Product};
use tokio::sync::Mutex;
use tracing::debug;

use super::envelope::decode_list;
use super::{CustomerDirectory, InvoiceGateway, ProductLookup, ServiceError, SubmissionReceipt};

/// Invoices per history page, as the backend's paginator sends them.
pub const INVOICE_PAGE_SIZE: usize = 15;

/// Fixture-backed implementation of every collaborator trait.
///
/// # Example
///
/// ```
/// use chilli_session::services::{InMemoryBackend, InvoiceGateway};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let backend = InMemoryBackend::new();
/// assert_eq!(backend.next_invoice_number().await.unwrap(), "INV-0001");
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    products: Arc<Vec<Product>>,
    customers: Arc<Vec<Customer>>,
    /// Number of the last saved invoice.
    last_invoice: Arc<AtomicU64>,
    submitted: Arc<Mutex<Vec<InvoicePayload>>>,
    /// Saved invoices, oldest first.
    invoices: Arc<Mutex<Vec<InvoiceRecord>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryBackend {
    /// Empty catalog, no customers, first invoice `INV-0001`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = Arc::new(products);
        self
    }

    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = Arc::new(customers);
        self
    }

    /// Continues numbering after `last` (the next invoice is `last + 1`).
    pub fn with_last_invoice_number(self, last: u64) -> Self {
        self.last_invoice.store(last, Ordering::SeqCst);
        self
    }

    /// Seeds the invoice history, oldest first.
    pub fn with_invoices(mut self, invoices: Vec<InvoiceRecord>) -> Self {
        self.invoices = Arc::new(Mutex::new(invoices));
        self
    }

    /// Loads fixtures from response bodies in any envelope shape.
    pub fn from_fixture_json(products: &str, customers: &str) -> Result<Self, ServiceError> {
        Ok(Self::new()
            .with_products(decode_list(products)?)
            .with_customers(decode_list(customers)?))
    }

    /// Makes every following submission fail with a transport error.
    pub fn fail_submissions(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Payloads accepted so far, oldest first.
    pub async fn submitted(&self) -> Vec<InvoicePayload> {
        self.submitted.lock().await.clone()
    }

    fn format_invoice_number(number: u64) -> String {
        format!("INV-{:04}", number)
    }

    fn missing_invoice(id: i64) -> ServiceError {
        ServiceError::NotFound(format!("invoice {}", id))
    }
}

impl ProductLookup for InMemoryBackend {
    async fn find_by_barcode(&self, code: &str) -> Result<Option<Product>, ServiceError> {
        Ok(self
            .products
            .iter()
            .find(|product| product.item_code == code)
            .cloned())
    }

    async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.products.to_vec())
    }
}

impl CustomerDirectory for InMemoryBackend {
    async fn list_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(self.customers.to_vec())
    }
}

impl InvoiceGateway for InMemoryBackend {
    async fn next_invoice_number(&self) -> Result<String, ServiceError> {
        let last = self.last_invoice.load(Ordering::SeqCst);
        Ok(Self::format_invoice_number(last.saturating_add(1)))
    }

    async fn submit(&self, payload: &InvoicePayload) -> Result<SubmissionReceipt, ServiceError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ServiceError::Transport("backend unavailable".to_string()));
        }

        let mut submitted = self.submitted.lock().await;
        let mut invoices = self.invoices.lock().await;
        let id = invoices.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        invoices.push(InvoiceRecord::saved(id, payload));
        submitted.push(payload.clone());
        self.last_invoice.fetch_add(1, Ordering::SeqCst);
        debug!(inv_no = %payload.inv_no, id, count = submitted.len(), "invoice recorded");

        Ok(SubmissionReceipt {
            inv_no: payload.inv_no.clone(),
            message: Some("Invoice created successfully".to_string()),
        })
    }

    async fn list_invoices(&self, page: u32) -> Result<InvoicePage, ServiceError> {
        let invoices = self.invoices.lock().await;
        let newest_first: Vec<InvoiceRecord> = invoices.iter().rev().cloned().collect();
        Ok(InvoicePage::paginate(&newest_first, page, INVOICE_PAGE_SIZE))
    }

    async fn get_invoice(&self, id: i64) -> Result<InvoiceRecord, ServiceError> {
        let invoices = self.invoices.lock().await;
        invoices
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| Self::missing_invoice(id))
    }

    async fn mark_paid(&self, id: i64) -> Result<InvoiceRecord, ServiceError> {
        let mut invoices = self.invoices.lock().await;
        let record = invoices
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Self::missing_invoice(id))?;
        record.status = InvoiceStatus::PAYMENT_RECEIVED.to_string();
        debug!(inv_no = %record.inv_no, "invoice marked paid");
        Ok(record.clone())
    }

    async fn delete_invoice(&self, id: i64) -> Result<(), ServiceError> {
        let mut invoices = self.invoices.lock().await;
        let before = invoices.len();
        invoices.retain(|r| r.id != id);
        if invoices.len() == before {
            return Err(Self::missing_invoice(id));
        }
        debug!(id, remaining = invoices.len(), "invoice deleted");
        Ok(())
    }

    async fn dashboard(&self) -> Result<Dashboard, ServiceError> {
        let invoices = self.invoices.lock().await;
        Ok(Dashboard::from(invoices.as_slice()))
    }
}
