use std::future::Future;

use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Administrator, NewAdministrator, NewVehicle, Vehicle};
use crate::password;

/// Persists and retrieves administrators.
pub trait AdministratorStore: Send + Sync + Clone {
    fn create(
        &self,
        admin: NewAdministrator,
    ) -> impl Future<Output = Result<Administrator, AppError>> + Send;

    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Administrator>, AppError>> + Send;

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Administrator>, AppError>> + Send;

    /// List administrators. `page` absent returns all rows.
    fn list(
        &self,
        page: Option<u32>,
    ) -> impl Future<Output = Result<Vec<Administrator>, AppError>> + Send;

    /// Credential check: look up by email, verify the password against the
    /// stored hash. `None` for an unknown email or a wrong password, with no
    /// distinction between the two.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Option<Administrator>, AppError>> + Send {
        async move {
            Ok(match self.find_by_email(email).await? {
                Some(admin) if password::verify(password, &admin.password_hash) => Some(admin),
                _ => None,
            })
        }
    }
}

/// Optional substring filters for vehicle listings, matched
/// case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub name: Option<String>,
    pub brand: Option<String>,
}

/// Persists and retrieves vehicles.
pub trait VehicleStore: Send + Sync + Clone {
    fn create(
        &self,
        vehicle: NewVehicle,
    ) -> impl Future<Output = Result<Vehicle, AppError>> + Send;

    fn get_by_id(&self, id: Uuid)
    -> impl Future<Output = Result<Option<Vehicle>, AppError>> + Send;

    /// List vehicles, filtered then paginated. `page` absent returns all
    /// matching rows.
    fn list(
        &self,
        page: Option<u32>,
        filter: &VehicleFilter,
    ) -> impl Future<Output = Result<Vec<Vehicle>, AppError>> + Send;

    /// Overwrite every mutable field. Fails with `NotFound` when the id does
    /// not exist.
    fn update(
        &self,
        id: Uuid,
        fields: NewVehicle,
    ) -> impl Future<Output = Result<Vehicle, AppError>> + Send;

    /// Delete by id. Deleting a missing vehicle is a `NotFound` error, not a
    /// no-op.
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), AppError>> + Send;
}
