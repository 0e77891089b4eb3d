//! ItemStore - a two-tier item management demo
//!
//! The crate ships two processes: a JSON CRUD API over a single `items`
//! table, and a web front that renders HTML forms and proxies user
//! actions to the API over HTTP.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;

// Re-export commonly used types
pub use domain::shared::error::DomainError;
pub use domain::shared::result::Result;
