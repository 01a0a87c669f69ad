use fleet_core::AppError;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings for the PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Configuration for the given URL with the default pool size.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Read `DATABASE_URL` (required) and `DATABASE_MAX_CONNECTIONS`
    /// (optional) from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        let url = std::env::var("DATABASE_URL").map_err(|_| {
            AppError::ConfigError("DATABASE_URL not set. Required for database operations.".into())
        })?;

        let mut config = Self::new(url);
        if let Ok(raw) = std::env::var("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = parse_max_connections(&raw)?;
        }

        Ok(config)
    }
}

fn parse_max_connections(raw: &str) -> Result<u32, AppError> {
    match raw.parse::<u32>() {
        Ok(0) => Err(AppError::ConfigError(
            "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
        )),
        Ok(n) => Ok(n),
        Err(_) => Err(AppError::ConfigError(format!(
            "Invalid DATABASE_MAX_CONNECTIONS '{raw}': must be a positive integer"
        ))),
    }
}
