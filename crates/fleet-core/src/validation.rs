//! Stateless request-shape checks. Each function returns every applicable
//! message at once; an empty list means the DTO is valid.

use crate::dto::{AdministratorDto, VehicleDto};
use crate::models::Role;

pub const VEHICLE_NAME_MAX_LEN: usize = 150;
pub const VEHICLE_BRAND_MAX_LEN: usize = 100;
/// Exclusive lower bound.
pub const VEHICLE_YEAR_MIN: i32 = 1950;
/// Inclusive upper bound, matching the storage CHECK constraint.
pub const VEHICLE_YEAR_MAX: i32 = 2100;

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().unwrap_or("").is_empty()
}

/// Validate an administrator registration body.
pub fn validate_administrator(dto: &AdministratorDto) -> Vec<String> {
    let mut messages = Vec::new();

    if is_blank(&dto.email) {
        messages.push("The 'Email' field is required.".to_string());
    }
    if is_blank(&dto.password) {
        messages.push("The 'Password' field is required.".to_string());
    }
    match dto.profile.as_deref() {
        None | Some("") => messages.push("The 'Profile' field is required.".to_string()),
        Some(profile) if profile.parse::<Role>().is_err() => {
            messages.push(format!(
                "The 'Profile' field must be one of: {}.",
                Role::ALL
                    .iter()
                    .map(Role::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        Some(_) => {}
    }

    messages
}

/// Validate a vehicle create/update body.
pub fn validate_vehicle(dto: &VehicleDto) -> Vec<String> {
    let mut messages = Vec::new();

    match dto.name.as_deref() {
        None | Some("") => messages.push("The 'Name' field is required.".to_string()),
        Some(name) if name.chars().count() > VEHICLE_NAME_MAX_LEN => messages.push(format!(
            "The 'Name' field must be at most {VEHICLE_NAME_MAX_LEN} characters."
        )),
        Some(_) => {}
    }

    match dto.brand.as_deref() {
        None | Some("") => messages.push("The 'Brand' field is required.".to_string()),
        Some(brand) if brand.chars().count() > VEHICLE_BRAND_MAX_LEN => messages.push(format!(
            "The 'Brand' field must be at most {VEHICLE_BRAND_MAX_LEN} characters."
        )),
        Some(_) => {}
    }

    match dto.year {
        None => messages.push("The 'Year' field is required.".to_string()),
        Some(year) if year <= VEHICLE_YEAR_MIN => messages.push(format!(
            "The 'Year' field must be greater than {VEHICLE_YEAR_MIN}."
        )),
        Some(year) if year > VEHICLE_YEAR_MAX => messages.push(format!(
            "The 'Year' field must not be greater than {VEHICLE_YEAR_MAX}."
        )),
        Some(_) => {}
    }

    messages
}
