use std::sync::Arc;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::core::middleware;
use crate::features::auth::JwtValidator;
use crate::features::categories::{routes as categories_routes, CategoryService};

/// Assemble the API router with authentication and the error envelope.
///
/// `extra` is merged in before the layers so that health and documentation
/// routes get the same error handling as the API.
pub fn build_router(
    category_service: Arc<CategoryService>,
    jwt_validator: Arc<JwtValidator>,
    extra: Router,
) -> Router {
    Router::new()
        .merge(extra)
        .merge(categories_routes::routes(category_service))
        .fallback(middleware::route_not_found)
        .layer(from_fn_with_state(jwt_validator, middleware::auth_middleware))
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        // Outermost: every failure above ends up in the envelope
        .layer(from_fn(middleware::error_envelope))
}
