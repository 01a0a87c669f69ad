use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use fleet_core::models::Role;
use fleet_core::token::{self, Claims};
use fleet_core::{AdministratorStore, AppError, VehicleStore};

use crate::dto::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Middleware that validates `Authorization: Bearer <token>` and attaches the
/// token claims to the request. Requests without a valid token never reach
/// the role check or the handler.
pub async fn authenticate<A, V>(
    State(state): State<Arc<AppState<A, V>>>,
    mut request: Request,
    next: Next,
) -> Response
where
    A: AdministratorStore + 'static,
    V: VehicleStore + 'static,
{
    let bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let claims = match bearer.map(|t| token::validate(t, &state.jwt_secret)) {
        Some(Ok(claims)) => claims,
        Some(Err(e)) => {
            tracing::warn!("bearer token rejected: {e}");
            return unauthorized();
        }
        None => return unauthorized(),
    };

    request.extensions_mut().insert(claims);
    next.run(request).await
}

/// Middleware that checks the authenticated role against the route's allowed
/// set. Layer this inside [`authenticate`].
pub fn require_role(
    allowed: &'static [Role],
) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Response> + Send>> + Clone {
    move |request: Request, next: Next| {
        Box::pin(async move {
            match request.extensions().get::<Claims>() {
                Some(claims) if allowed.contains(&claims.profile) => next.run(request).await,
                Some(claims) => {
                    tracing::warn!(
                        "role {} denied on {} {}",
                        claims.profile,
                        request.method(),
                        request.uri().path()
                    );
                    ApiError(AppError::Forbidden).into_response()
                }
                None => unauthorized(),
            }
        })
    }
}

// The 401 body stays opaque: no detail about which check failed.

fn unauthorized() -> Response {
    let body = ErrorResponse {
        error: "unauthorized".to_string(),
        message: "Missing or invalid Authorization header. Expected: Bearer <token>".to_string(),
    };
    (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
}
