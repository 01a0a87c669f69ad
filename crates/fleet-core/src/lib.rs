pub mod dto;
pub mod error;
pub mod models;
pub mod pagination;
pub mod password;
pub mod testutil;
pub mod token;
pub mod traits;
pub mod validation;

pub use error::AppError;
pub use models::{Administrator, NewAdministrator, NewVehicle, Role, Vehicle};
pub use traits::{AdministratorStore, VehicleFilter, VehicleStore};
