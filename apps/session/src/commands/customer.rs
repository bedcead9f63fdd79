//! # Customer Commands
//!
//! Customer search and the draft's customer header.
//!
//! Selecting a directory customer overwrites every customer field but keeps
//! the customer type; the type has its own dropdown.

use chilli_core::catalog::filter_customers;
use chilli_core::validation::{validate_phone, validate_search_query};
use chilli_core::{Customer, CustomerInfo, CustomerInfoPatch, CustomerType};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::services::CustomerDirectory;
use crate::state::DraftState;

/// Searches the directory by phone number or name.
///
/// The query is matched as typed (phone search runs on every keystroke). An
/// empty query returns everyone.
pub async fn search_customers<C>(directory: &C, query: &str) -> Result<Vec<Customer>, ApiError>
where
    C: CustomerDirectory,
{
    validate_search_query(query)?;
    debug!(query = %query, "search_customers command");

    let customers = directory.list_customers().await.map_err(|e| {
        warn!(error = %e, "Customer directory unavailable");
        ApiError::from(e)
    })?;

    Ok(filter_customers(&customers, query)
        .into_iter()
        .cloned()
        .collect())
}

/// Gets the draft's customer header.
pub fn get_customer(draft: &DraftState) -> CustomerInfo {
    debug!("get_customer command");
    draft.with_draft(|d| d.customer_info())
}

/// Puts a directory customer on the draft.
pub fn select_customer(draft: &DraftState, customer: &Customer) -> CustomerInfo {
    debug!(customer_id = customer.id, "select_customer command");
    draft.with_draft_mut(|d| d.set_customer_info(CustomerInfoPatch::from(customer)))
}

/// Applies a hand-edited patch to the customer header.
pub fn update_customer(
    draft: &DraftState,
    patch: CustomerInfoPatch,
) -> Result<CustomerInfo, ApiError> {
    if let Some(phone) = &patch.phone {
        validate_phone(phone)?;
    }
    debug!(?patch, "update_customer command");

    Ok(draft.with_draft_mut(|d| d.set_customer_info(patch)))
}

pub fn set_customer_type(draft: &DraftState, customer_type: CustomerType) -> CustomerInfo {
    debug!(?customer_type, "set_customer_type command");
    draft.with_draft_mut(|d| {
        d.set_customer_info(CustomerInfoPatch::new().customer_type(customer_type))
    })
}

/// Deselects the customer; the customer type stays.
pub fn clear_customer(draft: &DraftState) -> CustomerInfo {
    debug!("clear_customer command");
    draft.with_draft_mut(|d| d.clear_customer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::services::InMemoryBackend;

    fn customer(id: i64, name: &str, phone: &str) -> Customer {
        Customer {
            id,
            cus_id: Some(format!("C-{:04}", id)),
            customer_name: Some(name.to_string()),
            phone: Some(phone.to_string()),
            address: Some("Colombo".to_string()),
        }
    }

    fn directory() -> InMemoryBackend {
        InMemoryBackend::new().with_customers(vec![
            customer(1, "Nimal Perera", "0712345678"),
            customer(2, "Kamala Silva", "0779876543"),
        ])
    }

    #[tokio::test]
    async fn test_search_by_phone_and_name() {
        let directory = directory();

        let hits = search_customers(&directory, "0779").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        let hits = search_customers(&directory, "PERERA").await.unwrap();
        assert_eq!(hits[0].id, 1);

        assert_eq!(search_customers(&directory, "").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_rejects_long_query() {
        let err = search_customers(&directory(), &"9".repeat(101)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_select_keeps_type_and_clear_keeps_type() {
        let draft = DraftState::new();
        set_customer_type(&draft, CustomerType::Online);

        let info = select_customer(&draft, &customer(1, "Nimal Perera", "0712345678"));
        assert_eq!(info.id, Some(1));
        assert_eq!(info.cus_id, "C-0001");
        assert_eq!(info.customer_type, CustomerType::Online);

        let info = clear_customer(&draft);
        assert_eq!(info.id, None);
        assert_eq!(info.name, "");
        assert_eq!(info.customer_type, CustomerType::Online);
        assert_eq!(get_customer(&draft), info);
    }

    #[test]
    fn test_update_customer_validates_phone() {
        let draft = DraftState::new();

        let err = update_customer(&draft, CustomerInfoPatch::new().phone("call me")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_customer(&draft).phone, "");

        let info = update_customer(&draft, CustomerInfoPatch::new().name("Walk-in").phone("0771234567"))
            .unwrap();
        assert_eq!(info.name, "Walk-in");
        assert_eq!(info.phone, "0771234567");
    }
}
