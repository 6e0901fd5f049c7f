use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::ReceiptId;

/// Storage abstraction so the service module can be exercised in isolation
/// and the in-memory registry can be swapped for another backend.
///
/// Implementations must be safe for arbitrarily many concurrent callers;
/// records are insert-only and live for the lifetime of the store.
pub trait PointsStore: Send + Sync {
    /// Store `points` under a freshly generated identifier and return it.
    /// An existing record is never overwritten.
    fn assign(&self, points: u64) -> Result<ReceiptId, StoreError>;

    /// Look up the points recorded under `id`, without mutating anything.
    fn get(&self, id: &ReceiptId) -> Result<Option<u64>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("points store unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime points registry backed by a mutex-guarded map.
#[derive(Default, Clone)]
pub struct InMemoryPointsStore {
    records: Arc<Mutex<HashMap<ReceiptId, u64>>>,
}

impl PointsStore for InMemoryPointsStore {
    fn assign(&self, points: u64) -> Result<ReceiptId, StoreError> {
        let mut guard = self.records.lock().expect("points store mutex poisoned");
        loop {
            // A v4 collision is not expected in practice; the retry keeps the
            // registry insert-only even if one ever happens.
            let id = ReceiptId::generate();
            match guard.entry(id.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    slot.insert(points);
                    return Ok(id);
                }
            }
        }
    }

    fn get(&self, id: &ReceiptId) -> Result<Option<u64>, StoreError> {
        let guard = self.records.lock().expect("points store mutex poisoned");
        Ok(guard.get(id).copied())
    }
}
