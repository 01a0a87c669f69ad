pub mod administrators;
pub mod config;
pub mod database;
pub mod vehicles;

pub use administrators::AdministratorRepository;
pub use config::DatabaseConfig;
pub use database::Database;
pub use vehicles::VehicleRepository;
