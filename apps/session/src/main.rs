//! # Chilli Session Runner
//!
//! Plays one invoice session against the in-memory backend and prints the
//! submitted payload.
//!
//! ```text
//! chilli-session [PRODUCTS_JSON CUSTOMERS_JSON] [BARCODE...]
//! ```
//!
//! Fixture files may use any response envelope shape. Without fixtures a
//! small built-in catalog is used.
//!
//! ## Session Script
//! 1. Initialize tracing and load `SessionConfig` from the environment
//! 2. Fetch the next invoice number
//! 3. Scan each barcode into the draft
//! 4. Select the first customer in the directory
//! 5. Submit, log the dashboard counters and print the payload as JSON

use std::env;
use std::fs;

use chilli_core::{Customer, PriceTier, Product};
use chilli_session::commands::{customer, history, invoice, scan};
use chilli_session::{init_tracing, DraftState, InMemoryBackend, SessionConfig};
use chrono::Local;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let config = SessionConfig::from_env()?;
    info!(invoice_type = %config.invoice_type, "Starting Chilli Invoice session");

    let args: Vec<String> = env::args().skip(1).collect();
    let with_fixtures =
        args.len() >= 2 && args[0].ends_with(".json") && args[1].ends_with(".json");

    let (backend, mut codes) = if with_fixtures {
        let products = fs::read_to_string(&args[0])?;
        let customers = fs::read_to_string(&args[1])?;
        (
            InMemoryBackend::from_fixture_json(&products, &customers)?,
            args[2..].to_vec(),
        )
    } else {
        (sample_backend(), args)
    };
    if codes.is_empty() {
        codes = vec!["TS-001".to_string(), "TS-001".to_string(), "PL-002".to_string()];
    }

    let draft = DraftState::new();
    let inv_no = invoice::next_invoice_number(&backend).await?;

    for code in &codes {
        let response = scan::add_scanned_product(&backend, &draft, code, None).await?;
        info!(
            barcode = %code,
            rows = response.totals.row_count,
            total = %config.format_currency(response.totals.grand_total),
            "Scanned"
        );
    }

    let customers = customer::search_customers(&backend, "").await?;
    if let Some(first) = customers.first() {
        customer::select_customer(&draft, first);
    }

    let inv_date = Local::now().date_naive();
    let payload = invoice::preview_invoice(&draft, &config, &inv_no, inv_date)?;
    let receipt = invoice::submit_invoice(&backend, &draft, &config, &inv_no, inv_date).await?;
    let stats = history::dashboard(&backend).await?;
    info!(
        inv_no = %receipt.inv_no,
        invoices = stats.total_invoices,
        pending = stats.pending_invoices,
        "Session finished"
    );

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn sample_backend() -> InMemoryBackend {
    InMemoryBackend::new()
        .with_products(vec![
            Product::new(1, "TS-001", "Crew Neck Tee")
                .with_price(PriceTier::SellPrice1, "1,250.00")
                .with_price(PriceTier::SellPrice2, "1,100.00"),
            Product::new(2, "PL-002", "Polo Shirt").with_price(PriceTier::SellPrice1, "2,450.00"),
        ])
        .with_customers(vec![Customer {
            id: 1,
            cus_id: Some("C-0001".to_string()),
            customer_name: Some("Walk-in Customer".to_string()),
            phone: Some("0771234567".to_string()),
            address: None,
        }])
}
