// src/models/inventory.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{common::validation::not_blank, db::Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub quantity: Decimal,  // Quantidade em estoque
    pub threshold: Decimal, // Estoque mínimo
}

impl InventoryItem {
    // "Estoque baixo" inclui o próprio limite.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.threshold
    }
}

impl Entity for InventoryItem {
    const STORAGE_KEY: &'static str = "inventory";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    #[validate(custom(function = "not_blank", message = "Name, quantity, and threshold required"))]
    pub name: String,
    #[validate(required(message = "Name, quantity, and threshold required"))]
    pub quantity: Option<Decimal>,
    #[validate(required(message = "Name, quantity, and threshold required"))]
    pub threshold: Option<Decimal>,
}
