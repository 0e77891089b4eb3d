//! Domain layer - Core business logic and rules
//!
//! This layer contains:
//! - Entities: Objects with identity
//! - Repository Interfaces: Ports for persistence

pub mod item;
pub mod shared;

// Re-export commonly used types
pub use shared::{DomainError, Result};
