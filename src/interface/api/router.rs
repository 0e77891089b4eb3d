//! API Router configuration

use super::item_handler::{
    create_item, delete_item, get_item, health_check, list_items, update_item, AppState,
};
use super::metrics_handler::metrics_handler;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the API router
pub fn build_router(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    // Health check route
    let health_routes = Router::new().route("/health", get(health_check));

    // Item routes. Trailing slashes follow the upstream contract:
    // collection and mutation paths carry one, single-item GET does not.
    let item_routes = Router::new()
        .route("/items/", post(create_item))
        .route("/items/", get(list_items))
        .route("/items/:id", get(get_item))
        .route("/items/:id/", put(update_item))
        .route("/items/:id/", delete(delete_item));

    // Metrics route (separate state)
    let metrics_routes = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    // Combine routes with state
    Router::new()
        .merge(health_routes)
        .merge(item_routes)
        .with_state(state)
        .merge(metrics_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
