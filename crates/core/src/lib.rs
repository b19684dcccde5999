//! Domain vocabulary shared across the dispatch workspace.
//!
//! Carries no I/O dependencies: type aliases, the core error enum, and the
//! request status vocabulary. Data access lives in `dispatch-db`.

pub mod error;
pub mod status;
pub mod types;

pub use error::CoreError;
pub use status::RequestStatus;
