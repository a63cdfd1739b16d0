// src/services/inventory_service.rs

use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    common::{error::AppError, id::new_id},
    db::CollectionRepository,
    models::inventory::{InventoryItem, NewInventoryItem},
    services::aggregator::{count_where, saturating_add},
};

#[derive(Debug, Clone, Default)]
pub struct InventoryService;

impl InventoryService {
    pub fn new() -> Self {
        Self
    }

    // --- CREATE ITEM ---
    pub fn add_item(
        &self,
        items: &mut CollectionRepository<InventoryItem>,
        payload: NewInventoryItem,
    ) -> Result<InventoryItem, AppError> {
        payload.validate()?;

        // `required` já garantiu os dois
        let (Some(quantity), Some(threshold)) = (payload.quantity, payload.threshold) else {
            return Err(AppError::InternalServerError(anyhow::anyhow!(
                "quantidade ou limite ausente após validação"
            )));
        };

        let item = InventoryItem {
            id: new_id(),
            name: payload.name.trim().to_string(),
            quantity,
            threshold,
        };

        items.insert(item.clone())?;
        tracing::info!(item_id = %item.id, quantity = %item.quantity, "Item de estoque criado");
        Ok(item)
    }

    pub fn remove(
        &self,
        items: &mut CollectionRepository<InventoryItem>,
        item_id: &str,
    ) -> Result<bool, AppError> {
        let removed = items.remove(item_id)?;
        tracing::info!(item_id, removed, "Item de estoque excluído");
        Ok(removed)
    }

    // --- ENTRADA (+1) ---
    pub fn increment(
        &self,
        items: &mut CollectionRepository<InventoryItem>,
        item_id: &str,
    ) -> Result<bool, AppError> {
        self.adjust(items, item_id, Decimal::ONE)
    }

    // --- SAÍDA (-1, nunca abaixo de zero) ---
    pub fn decrement(
        &self,
        items: &mut CollectionRepository<InventoryItem>,
        item_id: &str,
    ) -> Result<bool, AppError> {
        self.adjust(items, item_id, -Decimal::ONE)
    }

    fn adjust(
        &self,
        items: &mut CollectionRepository<InventoryItem>,
        item_id: &str,
        delta: Decimal,
    ) -> Result<bool, AppError> {
        let matched = items.replace_where(item_id, |item| InventoryItem {
            quantity: saturating_add(item.quantity, delta).max(Decimal::ZERO),
            ..item.clone()
        })?;

        if let Some(item) = items.find(item_id) {
            if item.is_low_stock() {
                tracing::warn!(item_id, quantity = %item.quantity, threshold = %item.threshold, "Estoque baixo");
            }
        }
        Ok(matched)
    }

    pub fn low_stock_count(&self, items: &CollectionRepository<InventoryItem>) -> usize {
        count_where(items.all(), InventoryItem::is_low_stock)
    }

    pub fn low_stock_items<'a>(&self, items: &'a CollectionRepository<InventoryItem>) -> Vec<&'a InventoryItem> {
        items.all().iter().filter(|i| i.is_low_stock()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{KeyValueStorage, MemoryStorage};
    use std::sync::Arc;

    fn payload(name: &str, quantity: i64, threshold: i64) -> NewInventoryItem {
        NewInventoryItem {
            name: name.into(),
            quantity: Some(Decimal::from(quantity)),
            threshold: Some(Decimal::from(threshold)),
        }
    }

    #[test]
    fn decrement_clamps_at_zero() {
        let mut items = CollectionRepository::open(Arc::new(MemoryStorage::new())).unwrap();
        let service = InventoryService::new();
        let gloves = service.add_item(&mut items, payload("Gloves", 1, 0)).unwrap();

        service.decrement(&mut items, &gloves.id).unwrap();
        service.decrement(&mut items, &gloves.id).unwrap();
        assert_eq!(items.find(&gloves.id).unwrap().quantity, Decimal::ZERO);

        service.increment(&mut items, &gloves.id).unwrap();
        assert_eq!(items.find(&gloves.id).unwrap().quantity, Decimal::ONE);
    }

    #[test]
    fn increment_at_the_decimal_ceiling_saturates() {
        let storage = Arc::new(MemoryStorage::new());
        let huge = InventoryItem {
            id: "huge".into(),
            name: "Cotton swabs".into(),
            quantity: Decimal::MAX,
            threshold: Decimal::ZERO,
        };
        storage
            .set("inventory", &serde_json::to_string(&vec![huge]).unwrap())
            .unwrap();

        let mut items = CollectionRepository::open(storage).unwrap();
        let service = InventoryService::new();

        assert!(service.increment(&mut items, "huge").unwrap());
        assert_eq!(items.find("huge").unwrap().quantity, Decimal::MAX);
    }

    #[test]
    fn low_stock_counts_items_at_or_below_threshold() {
        let mut items = CollectionRepository::open(Arc::new(MemoryStorage::new())).unwrap();
        let service = InventoryService::new();
        service.add_item(&mut items, payload("Gloves", 5, 5)).unwrap();
        service.add_item(&mut items, payload("Masks", 10, 2)).unwrap();
        service.add_item(&mut items, payload("Wipes", 0, 3)).unwrap();

        assert_eq!(service.low_stock_count(&items), 2);
        let names: Vec<&str> = service
            .low_stock_items(&items)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Gloves", "Wipes"]);
    }

    #[test]
    fn quantity_and_threshold_are_required() {
        let mut items = CollectionRepository::open(Arc::new(MemoryStorage::new())).unwrap();
        let err = InventoryService::new()
            .add_item(
                &mut items,
                NewInventoryItem { name: "Soap".into(), quantity: Some(Decimal::ONE), threshold: None },
            )
            .unwrap_err();
        assert_eq!(
            err.validation_messages(),
            vec!["Name, quantity, and threshold required".to_string()]
        );
    }
}
