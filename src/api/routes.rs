//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::error::ErrorResponse;
use super::state::AppState;
use super::v1;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "Student records API",
        license(name = "GPL-2.0")
    ),
    paths(
        v1::health,
        v1::list_students,
        v1::get_student,
        v1::create_student,
        v1::update_student,
        v1::delete_student,
    ),
    components(
        schemas(
            v1::HealthResponse,
            v1::StudentResponse,
            v1::StudentPayload,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "students", description = "Student record management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new().route("/health", get(v1::health));

    // Student routes (generic over Database)
    let student_routes = routes!(D => {
        get "/api/v1/students" => v1::list_students,
        get "/api/v1/students/{id}" => v1::get_student,
        post "/api/v1/students" => v1::create_student,
        put "/api/v1/students/{id}" => v1::update_student,
        delete "/api/v1/students/{id}" => v1::delete_student,
    });

    system_routes
        .merge(student_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
