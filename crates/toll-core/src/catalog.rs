//! Owns registered vehicles and the aggregate counters they feed.

use tracing::{debug, warn};

use crate::CoreError;
use toll_domain::{AggregateCounters, TaxDisposition, Vehicle, VehicleCategory, VehicleId};

/// Registry of toll vehicles plus the running totals reported to operators.
///
/// The catalog is the only mutator of the counters. Each vehicle may receive
/// exactly one disposition; repeat calls are rejected and leave the counters
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
    counters: AggregateCounters,
}

impl VehicleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new vehicle with the next sequential id.
    ///
    /// Inputs are expected to be validated by the caller; no format checks happen here.
    pub fn register_vehicle(
        &mut self,
        registration_number: impl Into<String>,
        model: impl Into<String>,
        brand: impl Into<String>,
        base_price: f64,
        category: VehicleCategory,
    ) -> &Vehicle {
        let id = self.counters.total_vehicles + 1;
        let vehicle = Vehicle::new(id, registration_number, model, brand, base_price, category);
        debug!(
            id,
            registration = %vehicle.registration_number,
            %category,
            "vehicle registered"
        );
        self.vehicles.push(vehicle);
        self.counters.total_vehicles += 1;
        &self.vehicles[self.vehicles.len() - 1]
    }

    /// Charges the category's fixed tax and returns the amount collected.
    pub fn pay_tax(&mut self, id: VehicleId) -> Result<f64, CoreError> {
        let vehicle = self.undisposed_mut(id)?;
        let amount = vehicle.tax_due();
        vehicle.disposition = Some(TaxDisposition::Paid { amount });
        self.counters.total_tax_collected += amount;
        self.counters.total_tax_paying_vehicles += 1;
        debug!(id, amount, "tax paid");
        Ok(amount)
    }

    /// Marks the vehicle as having passed the toll without paying.
    pub fn pass_without_paying(&mut self, id: VehicleId) -> Result<(), CoreError> {
        let vehicle = self.undisposed_mut(id)?;
        vehicle.disposition = Some(TaxDisposition::PassedWithoutPaying);
        self.counters.total_non_tax_paying_vehicles += 1;
        debug!(id, "vehicle passed without paying");
        Ok(())
    }

    /// Returns a copy of the current counters.
    pub fn snapshot(&self) -> AggregateCounters {
        self.counters
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        // ids are dense and 1-based
        id.checked_sub(1)
            .and_then(|index| self.vehicles.get(index as usize))
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehicles still waiting for a tax decision.
    pub fn pending(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles
            .iter()
            .filter(|vehicle| !vehicle.is_dispositioned())
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    fn undisposed_mut(&mut self, id: VehicleId) -> Result<&mut Vehicle, CoreError> {
        let vehicle = id
            .checked_sub(1)
            .and_then(|index| self.vehicles.get_mut(index as usize))
            .ok_or(CoreError::VehicleNotFound(id))?;
        if let Some(disposition) = vehicle.disposition {
            warn!(id, %disposition, "repeat disposition rejected");
            return Err(CoreError::AlreadyDispositioned { id, disposition });
        }
        Ok(vehicle)
    }
}
