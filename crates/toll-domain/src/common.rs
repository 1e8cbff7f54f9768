//! Identifiers shared across toll entities.

/// Sequential identifier assigned by the catalog, starting at 1.
pub type VehicleId = u32;
