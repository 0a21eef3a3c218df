// src/catalog/mod.rs
//! Item catalog domain: the record type, its store and store errors.

pub mod error;
pub mod store;
pub mod types;

pub use error::CatalogError;
pub use store::ItemStore;
pub use types::{Item, ItemId, seed_items};
