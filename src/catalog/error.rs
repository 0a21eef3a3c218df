// src/catalog/error.rs

use thiserror::Error;

use super::ItemId;

/// Failures of catalog store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item {0} not found")]
    NotFound(ItemId),

    #[error("item {0} already exists")]
    Conflict(ItemId),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
