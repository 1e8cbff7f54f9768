//! Domain types representing registered toll vehicles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{category::VehicleCategory, common::VehicleId};

/// A vehicle recorded at the toll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub registration_number: String,
    pub model: String,
    pub brand: String,
    pub base_price: f64,
    pub category: VehicleCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<TaxDisposition>,
}

impl Vehicle {
    pub fn new(
        id: VehicleId,
        registration_number: impl Into<String>,
        model: impl Into<String>,
        brand: impl Into<String>,
        base_price: f64,
        category: VehicleCategory,
    ) -> Self {
        Self {
            id,
            registration_number: registration_number.into(),
            model: model.into(),
            brand: brand.into(),
            base_price,
            category,
            disposition: None,
        }
    }

    /// Returns `true` once the vehicle has either paid or passed without paying.
    pub fn is_dispositioned(&self) -> bool {
        self.disposition.is_some()
    }

    /// Tax amount this vehicle is liable for, derived from its category.
    pub fn tax_due(&self) -> f64 {
        self.category.tax_rate()
    }
}

/// Outcome of the one-time tax decision taken for a vehicle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum TaxDisposition {
    Paid { amount: f64 },
    PassedWithoutPaying,
}

impl fmt::Display for TaxDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxDisposition::Paid { amount } => write!(f, "Paid {amount}"),
            TaxDisposition::PassedWithoutPaying => f.write_str("Passed without paying"),
        }
    }
}
