/// PostgreSQL implementation of ItemRepository
use crate::domain::item::{Item, ItemRepository, NewItem};
use crate::domain::shared::error::{DomainError, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::{debug, error};

pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, data: NewItem) -> Result<Item> {
        let result = sqlx::query(
            r#"
            INSERT INTO items (name, description, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => {
                let item = row_to_item(row);
                debug!("Created item: {}", item.id);
                Ok(item)
            }
            Err(e) => {
                error!("Failed to create item: {}", e);
                Err(DomainError::Database(e.to_string()))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Item>> {
        let result = sqlx::query(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(row)) => Ok(Some(row_to_item(row))),
            Ok(None) => Ok(None),
            Err(e) => {
                error!("Failed to get item: {}", e);
                Err(DomainError::Database(e.to_string()))
            }
        }
    }

    async fn list(&self, limit: Option<i64>, offset: i64) -> Result<Vec<Item>> {
        // LIMIT NULL means no limit in Postgres, so one query covers both
        // the paginated and the read-all case.
        let result = sqlx::query(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM items
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await;

        match result {
            Ok(rows) => Ok(rows.into_iter().map(row_to_item).collect()),
            Err(e) => {
                error!("Failed to list items: {}", e);
                Err(DomainError::Database(e.to_string()))
            }
        }
    }

    async fn update(&self, id: i32, data: NewItem) -> Result<Option<Item>> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(row)) => {
                debug!("Updated item: {}", id);
                Ok(Some(row_to_item(row)))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                error!("Failed to update item: {}", e);
                Err(DomainError::Database(e.to_string()))
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<Option<Item>> {
        let result = sqlx::query(
            r#"
            DELETE FROM items
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(row)) => {
                debug!("Deleted item: {}", id);
                Ok(Some(row_to_item(row)))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                error!("Failed to delete item: {}", e);
                Err(DomainError::Database(e.to_string()))
            }
        }
    }
}

fn row_to_item(row: sqlx::postgres::PgRow) -> Item {
    Item {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
