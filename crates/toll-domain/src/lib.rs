//! toll-domain
//!
//! Pure domain models (Vehicle, VehicleCategory, AggregateCounters).
//! No I/O, no CLI, no validation of operator input. Only data types and core enums.

pub mod category;
pub mod common;
pub mod counters;
pub mod vehicle;

pub use category::*;
pub use common::*;
pub use counters::*;
pub use vehicle::*;
