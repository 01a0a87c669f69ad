use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use fleet_core::dto::{AdministratorDto, LoginDto, VehicleDto};
use fleet_core::models::{NewAdministrator, Role};
use fleet_core::traits::VehicleFilter;
use fleet_core::{AdministratorStore, AppError, VehicleStore, password, token};

use crate::auth::{authenticate, require_role};
use crate::dto::{
    AdminListQuery, AdministratorView, HomeResponse, LoggedAdministrator, VehicleListQuery,
    VehicleView,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ADMIN_OR_EDITOR: &[Role] = &[Role::Admin, Role::Editor];

/// Build the full router with all routes and middleware.
pub fn router<A, V>(state: Arc<AppState<A, V>>) -> Router
where
    A: AdministratorStore + 'static,
    V: VehicleStore + 'static,
{
    let admin_only = Router::new()
        .route(
            "/administrators",
            post(create_administrator).get(list_administrators),
        )
        .route("/administrators/{id}", get(get_administrator))
        .route("/vehicles", get(list_vehicles))
        .route(
            "/vehicles/{id}",
            axum::routing::put(update_vehicle).delete(delete_vehicle),
        )
        .route_layer(middleware::from_fn(require_role(ADMIN_ONLY)));

    let admin_or_editor = Router::new()
        .route("/vehicles", post(create_vehicle))
        .route("/vehicles/{id}", get(get_vehicle))
        .route_layer(middleware::from_fn(require_role(ADMIN_OR_EDITOR)));

    let protected = admin_only.merge(admin_or_editor).layer(
        middleware::from_fn_with_state(state.clone(), authenticate::<A, V>),
    );

    let public = Router::new()
        .route("/", get(home))
        .route("/administrators/login", post(login))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(protected).with_state(state)
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome payload", body = HomeResponse),
    ),
    tag = "home"
)]
pub async fn home() -> impl IntoResponse {
    axum::Json(HomeResponse::default())
}

// ---------------------------------------------------------------------------
// Administrators
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/administrators/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Authenticated", body = LoggedAdministrator),
        (status = 401, description = "Bad credentials", body = crate::dto::ErrorResponse),
    ),
    tag = "administrators"
)]
pub async fn login<A, V>(
    State(state): State<Arc<AppState<A, V>>>,
    axum::Json(body): axum::Json<LoginDto>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AdministratorStore + 'static,
    V: VehicleStore + 'static,
{
    let Some(admin) = state.administrators.login(&body.email, &body.password).await? else {
        return Err(AppError::AuthenticationFailed.into());
    };

    let token = token::issue(&admin.email, admin.profile, &state.jwt_secret)?;
    tracing::info!("administrator {} logged in", admin.email);

    Ok(axum::Json(LoggedAdministrator {
        email: admin.email,
        profile: admin.profile.to_string(),
        token,
    }))
}

#[utoipa::path(
    post,
    path = "/administrators",
    request_body = AdministratorDto,
    responses(
        (status = 201, description = "Administrator created", body = AdministratorView),
        (status = 400, description = "Validation failed", body = crate::dto::ValidationErrors),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer" = [])),
    tag = "administrators"
)]
pub async fn create_administrator<A, V>(
    State(state): State<Arc<AppState<A, V>>>,
    axum::Json(body): axum::Json<AdministratorDto>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AdministratorStore + 'static,
    V: VehicleStore + 'static,
{
    let fields = body.into_fields()?;
    let password_hash = password::hash(&fields.password)?;

    let created = state
        .administrators
        .create(NewAdministrator {
            email: fields.email,
            password_hash,
            profile: fields.profile,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(AdministratorView::from(created)),
    ))
}

#[utoipa::path(
    get,
    path = "/administrators",
    params(AdminListQuery),
    responses(
        (status = 200, description = "List of administrators", body = [AdministratorView]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer" = [])),
    tag = "administrators"
)]
pub async fn list_administrators<A, V>(
    State(state): State<Arc<AppState<A, V>>>,
    Query(query): Query<AdminListQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AdministratorStore + 'static,
    V: VehicleStore + 'static,
{
    let admins = state.administrators.list(query.page).await?;
    let views: Vec<AdministratorView> = admins.into_iter().map(Into::into).collect();
    Ok(axum::Json(views))
}

#[utoipa::path(
    get,
    path = "/administrators/{id}",
    params(
        ("id" = Uuid, Path, description = "Administrator ID")
    ),
    responses(
        (status = 200, description = "Administrator details", body = AdministratorView),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer" = [])),
    tag = "administrators"
)]
pub async fn get_administrator<A, V>(
    State(state): State<Arc<AppState<A, V>>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AdministratorStore + 'static,
    V: VehicleStore + 'static,
{
    let admin = state
        .administrators
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Administrator".into()))?;

    Ok(axum::Json(AdministratorView::from(admin)))
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/vehicles",
    request_body = VehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleView),
        (status = 400, description = "Validation failed", body = crate::dto::ValidationErrors),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn create_vehicle<A, V>(
    State(state): State<Arc<AppState<A, V>>>,
    axum::Json(body): axum::Json<VehicleDto>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AdministratorStore + 'static,
    V: VehicleStore + 'static,
{
    let fields = body.into_fields()?;
    let created = state.vehicles.create(fields).await?;
    Ok((StatusCode::CREATED, axum::Json(VehicleView::from(created))))
}

#[utoipa::path(
    get,
    path = "/vehicles",
    params(VehicleListQuery),
    responses(
        (status = 200, description = "List of vehicles", body = [VehicleView]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn list_vehicles<A, V>(
    State(state): State<Arc<AppState<A, V>>>,
    Query(query): Query<VehicleListQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AdministratorStore + 'static,
    V: VehicleStore + 'static,
{
    let filter = VehicleFilter {
        name: query.name,
        brand: query.brand,
    };
    let vehicles = state.vehicles.list(query.page, &filter).await?;
    let views: Vec<VehicleView> = vehicles.into_iter().map(Into::into).collect();
    Ok(axum::Json(views))
}

#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    params(
        ("id" = Uuid, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Vehicle details", body = VehicleView),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn get_vehicle<A, V>(
    State(state): State<Arc<AppState<A, V>>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AdministratorStore + 'static,
    V: VehicleStore + 'static,
{
    let vehicle = state
        .vehicles
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle".into()))?;

    Ok(axum::Json(VehicleView::from(vehicle)))
}

#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    params(
        ("id" = Uuid, Path, description = "Vehicle ID")
    ),
    request_body = VehicleDto,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleView),
        (status = 400, description = "Validation failed", body = crate::dto::ValidationErrors),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn update_vehicle<A, V>(
    State(state): State<Arc<AppState<A, V>>>,
    Path(id): Path<Uuid>,
    axum::Json(body): axum::Json<VehicleDto>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AdministratorStore + 'static,
    V: VehicleStore + 'static,
{
    // Partial updates are not supported; every mutable field is overwritten.
    let fields = body.into_fields()?;
    let updated = state.vehicles.update(id, fields).await?;
    Ok(axum::Json(VehicleView::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    params(
        ("id" = Uuid, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn delete_vehicle<A, V>(
    State(state): State<Arc<AppState<A, V>>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AdministratorStore + 'static,
    V: VehicleStore + 'static,
{
    state.vehicles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
