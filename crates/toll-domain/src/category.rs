//! Vehicle categories and their fixed toll tax rates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Closed set of vehicle categories recognised at the toll.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    Car,
    Bike,
    HeavyVehicle,
}

impl VehicleCategory {
    /// Every category in menu order.
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Car,
        VehicleCategory::Bike,
        VehicleCategory::HeavyVehicle,
    ];

    /// Fixed tax charged when a vehicle of this category pays.
    pub fn tax_rate(self) -> f64 {
        match self {
            VehicleCategory::Car => 2.0,
            VehicleCategory::Bike => 1.0,
            VehicleCategory::HeavyVehicle => 4.0,
        }
    }

    /// Human-readable label used in menus and tables.
    pub fn label(self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Bike => "Bike",
            VehicleCategory::HeavyVehicle => "Heavy Vehicle",
        }
    }

    /// Resolves a 1-based menu selection (`"1"` = Car, `"2"` = Bike, `"3"` = Heavy Vehicle).
    pub fn from_menu_choice(choice: &str) -> Result<Self, UnknownCategoryError> {
        match choice.trim() {
            "1" => Ok(VehicleCategory::Car),
            "2" => Ok(VehicleCategory::Bike),
            "3" => Ok(VehicleCategory::HeavyVehicle),
            other => Err(UnknownCategoryError(other.to_string())),
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for VehicleCategory {
    type Err = UnknownCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "car" => Ok(VehicleCategory::Car),
            "bike" => Ok(VehicleCategory::Bike),
            "heavy" | "heavyvehicle" => Ok(VehicleCategory::HeavyVehicle),
            _ => Self::from_menu_choice(value),
        }
    }
}

/// Raised when a selection does not name one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategoryError(pub String);

impl fmt::Display for UnknownCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown vehicle category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategoryError {}
