//! In-memory store implementations, used by the server integration tests in
//! place of a live database.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Administrator, NewAdministrator, NewVehicle, Vehicle};
use crate::pagination::window;
use crate::traits::{AdministratorStore, VehicleFilter, VehicleStore};

fn paginate<T: Clone>(items: &[T], page: Option<u32>) -> Vec<T> {
    match window(page) {
        Some(w) => items
            .iter()
            .skip(w.offset as usize)
            .take(w.limit as usize)
            .cloned()
            .collect(),
        None => items.to_vec(),
    }
}

/// Vec-backed administrator store. Rows keep insertion order, so pagination
/// is stable.
#[derive(Clone, Default)]
pub struct InMemoryAdministrators {
    inner: Arc<Mutex<Vec<Administrator>>>,
}

impl InMemoryAdministrators {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdministratorStore for InMemoryAdministrators {
    async fn create(&self, admin: NewAdministrator) -> Result<Administrator, AppError> {
        let mut rows = self.inner.lock().expect("administrator store poisoned");
        if rows.iter().any(|a| a.email == admin.email) {
            return Err(AppError::DatabaseError(format!(
                "duplicate email: {}",
                admin.email
            )));
        }
        let created = Administrator {
            id: Uuid::new_v4(),
            email: admin.email,
            password_hash: admin.password_hash,
            profile: admin.profile,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Administrator>, AppError> {
        let rows = self.inner.lock().expect("administrator store poisoned");
        Ok(rows.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Administrator>, AppError> {
        let rows = self.inner.lock().expect("administrator store poisoned");
        Ok(rows.iter().find(|a| a.email == email).cloned())
    }

    async fn list(&self, page: Option<u32>) -> Result<Vec<Administrator>, AppError> {
        let rows = self.inner.lock().expect("administrator store poisoned");
        Ok(paginate(&rows, page))
    }
}

/// Vec-backed vehicle store.
#[derive(Clone, Default)]
pub struct InMemoryVehicles {
    inner: Arc<Mutex<Vec<Vehicle>>>,
}

impl InMemoryVehicles {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(vehicle: &Vehicle, filter: &VehicleFilter) -> bool {
    let contains = |haystack: &str, needle: &Option<String>| match needle {
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
        None => true,
    };
    contains(&vehicle.name, &filter.name) && contains(&vehicle.brand, &filter.brand)
}

impl VehicleStore for InMemoryVehicles {
    async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, AppError> {
        let mut rows = self.inner.lock().expect("vehicle store poisoned");
        let created = Vehicle {
            id: Uuid::new_v4(),
            name: vehicle.name,
            brand: vehicle.brand,
            year: vehicle.year,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let rows = self.inner.lock().expect("vehicle store poisoned");
        Ok(rows.iter().find(|v| v.id == id).cloned())
    }

    async fn list(&self, page: Option<u32>, filter: &VehicleFilter) -> Result<Vec<Vehicle>, AppError> {
        let rows = self.inner.lock().expect("vehicle store poisoned");
        let filtered: Vec<Vehicle> = rows.iter().filter(|v| matches(v, filter)).cloned().collect();
        Ok(paginate(&filtered, page))
    }

    async fn update(&self, id: Uuid, fields: NewVehicle) -> Result<Vehicle, AppError> {
        let mut rows = self.inner.lock().expect("vehicle store poisoned");
        match rows.iter_mut().find(|v| v.id == id) {
            Some(vehicle) => {
                vehicle.name = fields.name;
                vehicle.brand = fields.brand;
                vehicle.year = fields.year;
                Ok(vehicle.clone())
            }
            None => Err(AppError::NotFound("Vehicle".into())),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut rows = self.inner.lock().expect("vehicle store poisoned");
        let before = rows.len();
        rows.retain(|v| v.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound("Vehicle".into()));
        }
        Ok(())
    }
}
