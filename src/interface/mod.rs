//! Interface layer - External interfaces
//!
//! This layer handles:
//! - The REST API endpoints of the item service
//! - The HTML web front that proxies to the API

pub mod api;
pub mod web;
