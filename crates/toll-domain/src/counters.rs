//! Running totals derived from registrations and tax dispositions.

use serde::{Deserialize, Serialize};

/// Aggregate counters reported by the toll menu.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct AggregateCounters {
    pub total_vehicles: u32,
    pub total_tax_paying_vehicles: u32,
    pub total_non_tax_paying_vehicles: u32,
    pub total_tax_collected: f64,
}

impl AggregateCounters {
    /// Vehicles that have been registered but not yet dispositioned.
    pub fn pending_vehicles(&self) -> u32 {
        self.total_vehicles
            .saturating_sub(self.total_tax_paying_vehicles + self.total_non_tax_paying_vehicles)
    }

    /// Checks that dispositions never outnumber registrations.
    pub fn is_consistent(&self) -> bool {
        self.total_tax_paying_vehicles + self.total_non_tax_paying_vehicles <= self.total_vehicles
    }
}
