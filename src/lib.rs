#![doc(test(attr(deny(warnings))))]

//! Toll Tax records toll vehicles, their one-time tax decision, and the running
//! totals an operator queries from the console menu.

pub mod cli;
pub mod config;
pub mod errors;
pub mod utils;

pub use toll_core::{CoreError, VehicleCatalog};
pub use toll_domain::{AggregateCounters, TaxDisposition, Vehicle, VehicleCategory, VehicleId};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Toll Tax tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
