//! Web front implementations
//!
//! Renders HTML pages and proxies form actions to the item API over HTTP.

pub mod api_client;
pub mod pages;
pub mod router;

pub use api_client::ApiClient;
pub use router::build_web_router;
