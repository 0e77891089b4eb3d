//! Item API handlers

use super::item_dto::{ErrorBody, ItemPayload, ItemResponse};
use super::metrics_handler::{record_item_created, record_item_deleted, record_item_updated};
use crate::domain::item::ItemRepository;
use crate::domain::shared::error::DomainError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub item_repository: Arc<dyn ItemRepository>,
}

/// Rejection type for item handlers: 404 for a missing id, 500 with the
/// underlying error text for everything else.
type ApiError = (StatusCode, Json<ErrorBody>);

fn not_found(id: i32) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(format!("Item {} not found", id))),
    )
}

fn internal(e: DomainError) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(e.to_string())),
    )
}

/// Query parameters for listing items
///
/// Both are optional pass-through values; a bare `GET /items/` is
/// read-all and returns every row.
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: i64,
}

/// Create a new item
pub async fn create_item(
    State(state): State<AppState>,
    Json(req): Json<ItemPayload>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    info!("API: Creating item {}", req.name);

    match state.item_repository.create(req.into()).await {
        Ok(item) => {
            info!("API: Created item {} (ID: {})", item.name, item.id);
            record_item_created();
            Ok((StatusCode::CREATED, Json(item.into())))
        }
        Err(e) => {
            error!("API: Failed to create item: {}", e);
            Err(internal(e))
        }
    }
}

/// Get item by ID
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ItemResponse>, ApiError> {
    info!("API: Getting item ID: {}", id);

    match state.item_repository.find_by_id(id).await {
        Ok(Some(item)) => Ok(Json(item.into())),
        Ok(None) => Err(not_found(id)),
        Err(e) => {
            error!("API: Failed to get item: {}", e);
            Err(internal(e))
        }
    }
}

/// List items
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    info!(
        "API: Listing items (limit: {:?}, offset: {})",
        query.limit, query.offset
    );

    match state.item_repository.list(query.limit, query.offset).await {
        Ok(items) => Ok(Json(items.into_iter().map(|i| i.into()).collect())),
        Err(e) => {
            error!("API: Failed to list items: {}", e);
            Err(internal(e))
        }
    }
}

/// Update item
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<ItemPayload>,
) -> Result<Json<ItemResponse>, ApiError> {
    info!("API: Updating item ID: {}", id);

    match state.item_repository.update(id, req.into()).await {
        Ok(Some(item)) => {
            info!("API: Updated item {} (ID: {})", item.name, item.id);
            record_item_updated();
            Ok(Json(item.into()))
        }
        Ok(None) => Err(not_found(id)),
        Err(e) => {
            error!("API: Failed to update item: {}", e);
            Err(internal(e))
        }
    }
}

/// Delete item, echoing the deleted row back
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ItemResponse>, ApiError> {
    info!("API: Deleting item ID: {}", id);

    match state.item_repository.delete(id).await {
        Ok(Some(item)) => {
            info!("API: Deleted item ID: {}", id);
            record_item_deleted();
            Ok(Json(item.into()))
        }
        Ok(None) => Err(not_found(id)),
        Err(e) => {
            error!("API: Failed to delete item: {}", e);
            Err(internal(e))
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
