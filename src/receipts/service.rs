use std::sync::Arc;

use super::domain::{Receipt, ReceiptId};
use super::points;
use super::store::{PointsStore, StoreError};
use super::validation::{self, ValidationError};

/// Service composing the validator, the points engine, and the store.
///
/// The store is an explicitly owned collaborator rather than process-global
/// state, so tests and alternative frontends construct their own instances.
pub struct ReceiptService<S> {
    store: Arc<S>,
}

impl<S> ReceiptService<S>
where
    S: PointsStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate and score a receipt, returning the identifier its points were
    /// stored under. A rejected receipt stores nothing.
    pub fn submit(&self, receipt: &Receipt) -> Result<ReceiptId, ReceiptServiceError> {
        validation::validate(receipt)?;
        let awarded = points::score(receipt);
        let id = self.store.assign(awarded)?;
        Ok(id)
    }

    /// Fetch the points previously awarded under `id`.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        self.store.get(id)?.ok_or(ReceiptServiceError::NotFound)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("receipt not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}
