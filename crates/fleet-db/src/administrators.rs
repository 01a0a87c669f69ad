use fleet_core::error::AppError;
use fleet_core::models::{Administrator, NewAdministrator, Role};
use fleet_core::pagination::window;
use fleet_core::traits::AdministratorStore;
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

/// Repository for administrator persistence in PostgreSQL.
#[derive(Clone)]
pub struct AdministratorRepository {
    pool: Pool<Postgres>,
}

impl AdministratorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

impl AdministratorStore for AdministratorRepository {
    async fn create(&self, admin: NewAdministrator) -> Result<Administrator, AppError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r#"
            INSERT INTO administrators (email, password_hash, profile)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, profile
            "#,
        )
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(admin.profile.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        row.try_into()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Administrator>, AppError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r#"
            SELECT id, email, password_hash, profile
            FROM administrators
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Administrator>, AppError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r#"
            SELECT id, email, password_hash, profile
            FROM administrators
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list(&self, page: Option<u32>) -> Result<Vec<Administrator>, AppError> {
        // A NULL limit means no pagination.
        let (limit, offset) = match window(page) {
            Some(w) => (Some(w.limit), w.offset),
            None => (None, 0),
        };

        let rows = sqlx::query_as::<_, AdministratorRow>(
            r#"
            SELECT id, email, password_hash, profile
            FROM administrators
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct AdministratorRow {
    id: Uuid,
    email: String,
    password_hash: String,
    profile: String,
}

impl TryFrom<AdministratorRow> for Administrator {
    type Error = AppError;

    fn try_from(row: AdministratorRow) -> Result<Self, AppError> {
        // The CHECK constraint keeps the column inside the closed role set;
        // a parse failure here means the schema and the enum drifted apart.
        let profile = row
            .profile
            .parse::<Role>()
            .map_err(AppError::DatabaseError)?;

        Ok(Administrator {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            profile,
        })
    }
}
