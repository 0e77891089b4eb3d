//! Prometheus metrics handler

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Initialize the Prometheus metrics exporter
pub fn init_metrics() -> PrometheusHandle {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // Describe metrics
    describe_counter!("items_created_total", "Total number of items created");
    describe_counter!("items_updated_total", "Total number of items updated");
    describe_counter!("items_deleted_total", "Total number of items deleted");

    handle
}

/// HTTP metrics handler
pub async fn metrics_handler(
    axum::extract::State(prometheus_handle): axum::extract::State<PrometheusHandle>,
) -> Response {
    let metrics = prometheus_handle.render();
    (StatusCode::OK, metrics).into_response()
}

/// Record item creation
pub fn record_item_created() {
    counter!("items_created_total").increment(1);
}

/// Record item update
pub fn record_item_updated() {
    counter!("items_updated_total").increment(1);
}

/// Record item deletion
pub fn record_item_deleted() {
    counter!("items_deleted_total").increment(1);
}
