use serde::Deserialize;

use crate::error::AppError;
use crate::models::{NewVehicle, Role};
use crate::validation::{validate_administrator, validate_vehicle};

/// Login request body.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Administrator registration body. Fields are optional so that validation
/// can report every missing field in one response instead of failing at
/// deserialization.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct AdministratorDto {
    pub email: Option<String>,
    pub password: Option<String>,
    /// One of "Admin" or "Editor".
    pub profile: Option<String>,
}

/// Validated administrator fields, extracted from the DTO.
#[derive(Debug)]
pub struct AdministratorFields {
    pub email: String,
    pub password: String,
    pub profile: Role,
}

impl AdministratorDto {
    /// Validate and extract the fields, accumulating all messages on failure.
    pub fn into_fields(self) -> Result<AdministratorFields, AppError> {
        let messages = validate_administrator(&self);
        if !messages.is_empty() {
            return Err(AppError::Validation(messages));
        }
        let profile = self
            .profile
            .as_deref()
            .unwrap_or_default()
            .parse::<Role>()
            .map_err(|e| AppError::Validation(vec![e]))?;
        Ok(AdministratorFields {
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            profile,
        })
    }
}

/// Vehicle create/update body.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct VehicleDto {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub year: Option<i32>,
}

impl VehicleDto {
    /// Validate and extract the fields, accumulating all messages on failure.
    pub fn into_fields(self) -> Result<NewVehicle, AppError> {
        let messages = validate_vehicle(&self);
        if !messages.is_empty() {
            return Err(AppError::Validation(messages));
        }
        Ok(NewVehicle {
            name: self.name.unwrap_or_default(),
            brand: self.brand.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
        })
    }
}
