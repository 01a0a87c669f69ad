use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet API",
        version = "0.1.0",
        description = "Vehicle fleet management with JWT-authenticated administrators."
    ),
    paths(
        crate::routes::home,
        crate::routes::login,
        crate::routes::create_administrator,
        crate::routes::list_administrators,
        crate::routes::get_administrator,
        crate::routes::create_vehicle,
        crate::routes::list_vehicles,
        crate::routes::get_vehicle,
        crate::routes::update_vehicle,
        crate::routes::delete_vehicle,
    ),
    components(schemas(
        fleet_core::dto::LoginDto,
        fleet_core::dto::AdministratorDto,
        fleet_core::dto::VehicleDto,
        crate::dto::HomeResponse,
        crate::dto::LoggedAdministrator,
        crate::dto::AdministratorView,
        crate::dto::VehicleView,
        crate::dto::ErrorResponse,
        crate::dto::ValidationErrors,
    )),
    tags(
        (name = "home", description = "Service entry point"),
        (name = "administrators", description = "Administrator accounts and login"),
        (name = "vehicles", description = "Vehicle registry"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds Bearer token security scheme to the OpenAPI spec.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Bearer token obtained from POST /administrators/login.",
                        ))
                        .build(),
                ),
            );
        }
    }
}
