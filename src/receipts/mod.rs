//! Receipt intake, points scoring, and identifier-keyed lookup.
//!
//! Control flow for a submission is validator → points engine → store; a
//! lookup goes straight to the store. Validation and scoring are pure, the
//! store is the only shared mutable state.

pub mod domain;
pub mod points;
pub mod router;
pub mod service;
pub mod store;
pub mod validation;

pub use domain::{Item, Receipt, ReceiptId};
pub use points::score;
pub use router::receipt_router;
pub use service::{ReceiptService, ReceiptServiceError};
pub use store::{InMemoryPointsStore, PointsStore, StoreError};
pub use validation::{validate, ValidationError};
