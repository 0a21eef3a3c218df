// src/catalog/types.rs

use serde::{Deserialize, Serialize};

/// Item identifier, chosen by the caller on create
pub type ItemId = i64;

/// Catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub tax: Option<f64>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            price,
            tax: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }
}

/// Items present when the service starts
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "Apple", 1.20).with_description("Red fruit"),
        Item::new(2, "Banana", 0.80).with_description("Yellow fruit"),
    ]
}
