//! HTTP router assembly.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, state::AppState};

/// Build the application router.
///
/// # Routes
///
/// - `GET /test` - store handle check
/// - `POST /cars`, `GET /cars` - car inventory
/// - `POST /bookings` - bookings
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(handlers::health::store_check))
        .route(
            "/cars",
            post(handlers::cars::create_car).get(handlers::cars::list_cars),
        )
        .route("/bookings", post(handlers::bookings::create_booking))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive CORS: any origin, method and header, with credentials.
///
/// Wildcards cannot be combined with credentials, so the request's own origin, method and
/// headers are echoed back instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
