//! HTTP client for the upstream item API

use crate::interface::api::item_dto::{ItemPayload, ItemResponse};
use reqwest::Client;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("request to item API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("item API returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Thin client over the item API. One method per upstream call, no
/// retries; failures bubble up to the page handlers.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn items_url(&self) -> String {
        format!("{}/items/", self.base_url)
    }

    /// Fetch all items
    pub async fn list_items(&self) -> Result<Vec<ItemResponse>, ApiClientError> {
        let resp = self.client.get(self.items_url()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiClientError::Status { status, body });
        }

        Ok(resp.json().await?)
    }

    /// Create an item from form data
    pub async fn create_item(&self, payload: &ItemPayload) -> Result<(), ApiClientError> {
        self.client
            .post(self.items_url())
            .json(payload)
            .send()
            .await?;
        Ok(())
    }

    /// Update an item from form data
    pub async fn update_item(
        &self,
        id: i32,
        payload: &ItemPayload,
    ) -> Result<(), ApiClientError> {
        self.client
            .put(format!("{}{}/", self.items_url(), id))
            .json(payload)
            .send()
            .await?;
        Ok(())
    }

    /// Delete an item
    pub async fn delete_item(&self, id: i32) -> Result<(), ApiClientError> {
        self.client
            .delete(format!("{}{}/", self.items_url(), id))
            .send()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.items_url(), "http://127.0.0.1:8000/items/");

        let client = ApiClient::new("http://127.0.0.1:8000");
        assert_eq!(client.items_url(), "http://127.0.0.1:8000/items/");
    }
}
