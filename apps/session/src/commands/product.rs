//! # Product Commands
//!
//! Product picker: full list and search by item code or name.

use chilli_core::catalog::filter_products;
use chilli_core::validation::validate_search_query;
use chilli_core::Product;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::services::ProductLookup;

/// Lists every product.
pub async fn list_products<P>(products: &P) -> Result<Vec<Product>, ApiError>
where
    P: ProductLookup,
{
    debug!("list_products command");
    products.list_products().await.map_err(|e| {
        warn!(error = %e, "Product list unavailable");
        ApiError::from(e)
    })
}

/// Searches products by item code or name. A blank query returns all.
pub async fn search_products<P>(products: &P, query: &str) -> Result<Vec<Product>, ApiError>
where
    P: ProductLookup,
{
    let query = validate_search_query(query)?;
    debug!(query = %query, "search_products command");

    let all = list_products(products).await?;
    Ok(filter_products(&all, &query).into_iter().cloned().collect())
}
