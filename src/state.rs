// src/state.rs
// Shared application state handed to every handler

use std::sync::Arc;

use crate::catalog::ItemStore;
use crate::config::PapiConfig;

pub const FRAMEWORK_NAME: &str = "axum";

/// Static description of the running service
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl ServiceInfo {
    pub fn from_config(config: &PapiConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            version: config.version.clone(),
        }
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self::from_config(&PapiConfig::default())
    }
}

#[derive(Clone)]
pub struct AppState {
    /// Item store, owned by the state and shared between requests
    pub store: Arc<ItemStore>,
    pub info: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(store: ItemStore, info: ServiceInfo) -> Self {
        Self {
            store: Arc::new(store),
            info: Arc::new(info),
        }
    }

    /// State with the seed items and service info from `config`
    pub fn from_config(config: &PapiConfig) -> Self {
        Self::new(ItemStore::seeded(), ServiceInfo::from_config(config))
    }
}
