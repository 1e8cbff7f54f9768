use thiserror::Error;
use toll_domain::{TaxDisposition, UnknownCategoryError, VehicleId};

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(VehicleId),
    #[error("Vehicle {id} already dispositioned ({disposition})")]
    AlreadyDispositioned {
        id: VehicleId,
        disposition: TaxDisposition,
    },
}

impl From<UnknownCategoryError> for CoreError {
    fn from(err: UnknownCategoryError) -> Self {
        CoreError::InvalidCategory(err.0)
    }
}
