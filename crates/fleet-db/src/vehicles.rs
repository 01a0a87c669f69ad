use fleet_core::error::AppError;
use fleet_core::models::{NewVehicle, Vehicle};
use fleet_core::pagination::window;
use fleet_core::traits::{VehicleFilter, VehicleStore};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

/// Repository for vehicle persistence in PostgreSQL.
#[derive(Clone)]
pub struct VehicleRepository {
    pool: Pool<Postgres>,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl VehicleStore for VehicleRepository {
    async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            INSERT INTO vehicles (name, brand, year)
            VALUES ($1, $2, $3)
            RETURNING id, name, brand, year
            "#,
        )
        .bind(&vehicle.name)
        .bind(&vehicle.brand)
        .bind(vehicle.year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, name, brand, year
            FROM vehicles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        page: Option<u32>,
        filter: &VehicleFilter,
    ) -> Result<Vec<Vehicle>, AppError> {
        let (limit, offset) = match window(page) {
            Some(w) => (Some(w.limit), w.offset),
            None => (None, 0),
        };

        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, name, brand, year
            FROM vehicles
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR brand ILIKE '%' || $2 || '%')
            ORDER BY created_at, id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.name.as_deref().map(escape_like))
        .bind(filter.brand.as_deref().map(escape_like))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, fields: NewVehicle) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            UPDATE vehicles
            SET name = $2, brand = $3, year = $4
            WHERE id = $1
            RETURNING id, name, brand, year
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.brand)
        .bind(fields.year)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        row.map(Into::into)
            .ok_or_else(|| AppError::NotFound("Vehicle".into()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle".into()));
        }
        Ok(())
    }
}

/// Filters are substring matches, never patterns: LIKE metacharacters in
/// user input must match literally. Backslash is Postgres' default escape
/// character.
fn escape_like(pattern: &str) -> String {
    pattern
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct VehicleRow {
    id: Uuid,
    name: String,
    brand: String,
    year: i32,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle {
            id: row.id,
            name: row.name,
            brand: row.brand,
            year: row.year,
        }
    }
}
