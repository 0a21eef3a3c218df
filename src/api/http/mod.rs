// src/api/http/mod.rs

pub mod handlers;
pub mod router;

pub use router::{API_PREFIX, create_router, http_router};
