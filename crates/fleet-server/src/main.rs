use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use fleet_core::models::{NewAdministrator, Role};
use fleet_core::{AdministratorStore, password};
use fleet_db::{Database, DatabaseConfig};
use fleet_server::config::ServerConfig;
use fleet_server::routes;
use fleet_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fleet=info".parse()?))
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr();

    let db = Database::connect(&DatabaseConfig::from_env()?).await?;
    db.migrate().await?;

    let administrators = db.administrator_repo();
    let vehicles = db.vehicle_repo();

    bootstrap_admin(&administrators).await?;

    let state = Arc::new(AppState {
        administrators,
        vehicles,
        jwt_secret: config.jwt_secret,
    });

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Seed an initial Admin account from the environment so a fresh database is
/// usable. Skipped when the variables are unset or the email already exists.
async fn bootstrap_admin<A: AdministratorStore>(administrators: &A) -> anyhow::Result<()> {
    let (email, plain) = match (
        std::env::var("FLEET_ADMIN_EMAIL"),
        std::env::var("FLEET_ADMIN_PASSWORD"),
    ) {
        (Ok(email), Ok(plain)) => (email, plain),
        _ => return Ok(()),
    };

    if administrators.find_by_email(&email).await?.is_some() {
        tracing::info!("bootstrap administrator {email} already present");
        return Ok(());
    }

    let password_hash = password::hash(&plain)?;
    administrators
        .create(NewAdministrator {
            email: email.clone(),
            password_hash,
            profile: Role::Admin,
        })
        .await?;
    tracing::info!("bootstrap administrator {email} created");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutdown signal received");
}
