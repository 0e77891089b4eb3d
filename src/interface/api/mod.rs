//! API interface implementations

pub mod item_dto;
pub mod item_handler;
pub mod metrics_handler;
pub mod router;

pub use item_handler::AppState;
pub use metrics_handler::init_metrics;
pub use router::build_router;
