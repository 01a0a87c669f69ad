use fleet_core::AppError;

const DEFAULT_PORT: u16 = 3000;

/// Server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Symmetric signing key for bearer tokens. Required; there is no
    /// default.
    pub jwt_secret: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `FLEET_JWT_SECRET` (required) and `FLEET_SERVER_PORT` (optional)
    /// from the environment. Startup must fail when the signing key is
    /// absent.
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = std::env::var("FLEET_JWT_SECRET").map_err(|_| {
            AppError::ConfigError(
                "FLEET_JWT_SECRET not set. Refusing to start without a signing key.".into(),
            )
        })?;

        let port = match std::env::var("FLEET_SERVER_PORT") {
            Err(_) => DEFAULT_PORT,
            Ok(raw) => parse_port(&raw)?,
        };

        Ok(Self { jwt_secret, port })
    }

    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, AppError> {
    raw.parse().map_err(|_| {
        AppError::ConfigError(format!(
            "Invalid FLEET_SERVER_PORT '{raw}': must be a port number"
        ))
    })
}
