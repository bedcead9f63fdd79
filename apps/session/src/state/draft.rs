//! # Draft State
//!
//! The session's invoice draft, shared by every command.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. The scanner, the cart and the invoice form all touch the same draft
//! 2. Only one command may mutate it at a time
//! 3. Commands are async and can run concurrently
//!
//! The lock is never held across an `.await`: commands read what they need,
//! release the lock, talk to the backend, then lock again to apply the
//! result.

use std::sync::{Arc, Mutex, MutexGuard};

use chilli_core::InvoiceDraftStore;

/// Shared handle to the session's draft. Cloning shares the same draft.
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    draft: Arc<Mutex<InvoiceDraftStore>>,
}

impl DraftState {
    /// Creates a state holding an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the draft.
    ///
    /// ## Usage
    /// ```rust
    /// use chilli_session::state::DraftState;
    ///
    /// let draft = DraftState::new();
    /// let totals = draft.with_draft(|d| d.totals());
    /// assert_eq!(totals.row_count, 0);
    /// ```
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InvoiceDraftStore) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the draft.
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InvoiceDraftStore) -> R,
    {
        f(&mut self.lock())
    }

    // Store operations have no partial states; a poisoned draft is usable.
    fn lock(&self) -> MutexGuard<'_, InvoiceDraftStore> {
        self.draft
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
