//! Item domain

pub mod entity;
pub mod repository;

pub use entity::{Item, NewItem};
pub use repository::ItemRepository;

#[cfg(test)]
pub use repository::MockItemRepository;
