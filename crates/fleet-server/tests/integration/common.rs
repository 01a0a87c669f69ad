use std::sync::Arc;

use axum::Router;

use fleet_core::models::{NewAdministrator, Role};
use fleet_core::testutil::{InMemoryAdministrators, InMemoryVehicles};
use fleet_core::{AdministratorStore, password, token};
use fleet_server::routes;
use fleet_server::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-signing-secret";
pub const ADMIN_EMAIL: &str = "admin@test.com";
pub const ADMIN_PASSWORD: &str = "123456";
pub const EDITOR_EMAIL: &str = "editor@test.com";
pub const EDITOR_PASSWORD: &str = "654321";

// Low bcrypt cost keeps the suite fast; never use this outside tests.
const TEST_COST: u32 = 4;

/// Build the app against in-memory stores, seeded with one Admin and one
/// Editor account.
pub async fn setup_test_app() -> Router {
    let administrators = InMemoryAdministrators::new();
    let vehicles = InMemoryVehicles::new();

    seed(&administrators, ADMIN_EMAIL, ADMIN_PASSWORD, Role::Admin).await;
    seed(&administrators, EDITOR_EMAIL, EDITOR_PASSWORD, Role::Editor).await;

    let state = Arc::new(AppState {
        administrators,
        vehicles,
        jwt_secret: TEST_JWT_SECRET.to_string(),
    });

    routes::router(state)
}

async fn seed(store: &InMemoryAdministrators, email: &str, plain: &str, profile: Role) {
    let password_hash = password::hash_with_cost(plain, TEST_COST).unwrap();
    store
        .create(NewAdministrator {
            email: email.to_string(),
            password_hash,
            profile,
        })
        .await
        .unwrap();
}

/// Mint a token for the seeded account with the given role, signed with the
/// app's secret.
pub fn token_for(role: Role) -> String {
    let email = match role {
        Role::Admin => ADMIN_EMAIL,
        Role::Editor => EDITOR_EMAIL,
    };
    token::issue(email, role, TEST_JWT_SECRET).unwrap()
}
