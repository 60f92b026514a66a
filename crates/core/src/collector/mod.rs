//! Multi-gym data collection.
//!
//! Fetches ledger and roster data for every gym in scope, concurrently and
//! with per-gym timeouts. A failing gym is reported and left out; it never
//! aborts or alters the data of the other gyms.

pub mod error;
pub mod service;
pub mod types;


pub use error::CollectError;
pub use service::MultiTenantCollector;
pub use types::{Collection, FailedTenant, FetchFailure};
