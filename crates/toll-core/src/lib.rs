//! toll-core
//!
//! Vehicle registry and tax aggregation for the toll.
//! Depends on toll-domain. No CLI, no terminal I/O, no input validation.

pub mod catalog;
pub mod error;

pub use catalog::VehicleCatalog;
pub use error::CoreError;
