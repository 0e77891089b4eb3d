//! Web front router and handlers
//!
//! Route-for-route mirror of the upstream API: list renders a page, the
//! form posts proxy to the API and redirect back to the list.

use super::api_client::ApiClient;
use super::pages::{render_index, render_items};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Item form fields (add and update share the same form)
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
}

/// Landing page
pub async fn index() -> Html<String> {
    Html(render_index())
}

/// Item list page, populated from the API
pub async fn items(
    State(client): State<ApiClient>,
) -> Result<Html<String>, (StatusCode, String)> {
    match client.list_items().await {
        Ok(items) => {
            info!("Web: rendering {} items", items.len());
            Ok(Html(render_items(&items)))
        }
        Err(e) => {
            error!("Web: failed to fetch items: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch items: {}", e),
            ))
        }
    }
}

/// Add an item, then redirect back to the list
pub async fn add_item(
    State(client): State<ApiClient>,
    Form(form): Form<ItemForm>,
) -> Result<Redirect, (StatusCode, String)> {
    info!("Web: adding item {}", form.name);

    client
        .create_item(&form.into())
        .await
        .map_err(upstream_error)?;

    Ok(Redirect::to("/items"))
}

/// Update an item, then redirect back to the list
pub async fn update_item(
    State(client): State<ApiClient>,
    Path(id): Path<i32>,
    Form(form): Form<ItemForm>,
) -> Result<Redirect, (StatusCode, String)> {
    info!("Web: updating item {}", id);

    client
        .update_item(id, &form.into())
        .await
        .map_err(upstream_error)?;

    Ok(Redirect::to("/items"))
}

/// Delete an item, then redirect back to the list
pub async fn delete_item(
    State(client): State<ApiClient>,
    Path(id): Path<i32>,
) -> Result<Redirect, (StatusCode, String)> {
    info!("Web: deleting item {}", id);

    client.delete_item(id).await.map_err(upstream_error)?;

    Ok(Redirect::to("/items"))
}

fn upstream_error(e: super::api_client::ApiClientError) -> (StatusCode, String) {
    error!("Web: upstream call failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e))
}

impl From<ItemForm> for crate::interface::api::item_dto::ItemPayload {
    fn from(form: ItemForm) -> Self {
        Self {
            name: form.name,
            description: form.description,
        }
    }
}

/// Build the web front router
pub fn build_web_router(client: ApiClient) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/items", get(items))
        .route("/add-item", post(add_item))
        .route("/update-item/:id", post(update_item))
        .route("/delete-item/:id", post(delete_item))
        .with_state(client)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_index_renders_landing_page() {
        let app = build_web_router(ApiClient::new("http://127.0.0.1:1"));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("ItemStore"));
    }

    #[tokio::test]
    async fn test_items_upstream_failure_yields_500() {
        // Port 1 is unroutable, so the upstream call fails immediately
        let app = build_web_router(ApiClient::new("http://127.0.0.1:1"));

        let response = app
            .oneshot(Request::builder().uri("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
