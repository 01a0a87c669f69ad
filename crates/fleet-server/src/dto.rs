use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_core::models::{Administrator, Vehicle};

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HomeResponse {
    pub message: &'static str,
    pub doc: &'static str,
}

impl Default for HomeResponse {
    fn default() -> Self {
        Self {
            message: "Welcome to the Fleet API",
            doc: "/swagger-ui",
        }
    }
}

// ---------------------------------------------------------------------------
// Administrators
// ---------------------------------------------------------------------------

/// Response to a successful login.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoggedAdministrator {
    pub email: String,
    pub profile: String,
    pub token: String,
}

/// Administrator as exposed over the API. Never carries the password hash.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AdministratorView {
    pub id: Uuid,
    pub email: String,
    pub profile: String,
}

impl From<Administrator> for AdministratorView {
    fn from(admin: Administrator) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            profile: admin.profile.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct AdminListQuery {
    /// 1-based page number; omit to list everything.
    pub page: Option<u32>,
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct VehicleView {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub year: i32,
}

impl From<Vehicle> for VehicleView {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            brand: vehicle.brand,
            year: vehicle.year,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct VehicleListQuery {
    /// 1-based page number; omit to list everything.
    pub page: Option<u32>,
    /// Case-insensitive substring match on the vehicle name.
    pub name: Option<String>,
    /// Case-insensitive substring match on the brand.
    pub brand: Option<String>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// All accumulated validation messages for a rejected body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ValidationErrors {
    pub messages: Vec<String>,
}
