//! Persistence implementations

pub mod database;
pub mod item_repository;

pub use database::{create_pool, run_migrations, DatabaseConfig};
pub use item_repository::PgItemRepository;
