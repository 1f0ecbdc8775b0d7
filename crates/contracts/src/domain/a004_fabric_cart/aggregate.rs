use serde::{Deserialize, Serialize};

use crate::domain::a002_fabric::{fabric_item_id, FabricVariant};
use crate::domain::common::StateContainer;

/// Запрос образца ткани в корзине.
///
/// Образцы бесплатны: у позиции нет цены, итог корзины тканей всегда 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricCartItem {
    pub id: String,
    pub category_name: String,
    pub category_name_ru: String,
    pub collection_name: String,
    pub collection_name_ru: String,
    pub variant: FabricVariant,
    pub quantity: u32,
}

impl FabricCartItem {
    pub fn new(
        category_name: &str,
        category_name_ru: &str,
        collection_name: &str,
        collection_name_ru: &str,
        variant: FabricVariant,
    ) -> Self {
        Self {
            id: fabric_item_id(category_name, collection_name, variant.id),
            category_name: category_name.to_string(),
            category_name_ru: category_name_ru.to_string(),
            collection_name: collection_name.to_string(),
            collection_name_ru: collection_name_ru.to_string(),
            variant,
            quantity: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricCartState {
    pub items: Vec<FabricCartItem>,
    pub total_items: u32,
    /// Всегда 0
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FabricCartAction {
    AddToCart(FabricCartItem),
    RemoveFromCart(String),
    UpdateQuantity { id: String, quantity: u32 },
    ClearCart,
}

impl FabricCartState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    fn recalculate(&mut self) {
        self.total_items = self
            .items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity));
        self.total_price = 0.0;
    }
}

impl StateContainer for FabricCartState {
    type Action = FabricCartAction;
    const STORAGE_KEY: &'static str = "fabricCart";

    fn reduce(&mut self, action: FabricCartAction) -> bool {
        let changed = match action {
            FabricCartAction::AddToCart(item) => {
                if item.quantity == 0 {
                    return false;
                }
                match self.items.iter_mut().find(|i| i.id == item.id) {
                    Some(existing) => {
                        existing.quantity = existing.quantity.saturating_add(item.quantity)
                    }
                    None => self.items.push(item),
                }
                true
            }
            FabricCartAction::RemoveFromCart(id) => {
                let before = self.items.len();
                self.items.retain(|i| i.id != id);
                self.items.len() != before
            }
            FabricCartAction::UpdateQuantity { id, quantity } => {
                let quantity = quantity.max(1);
                match self.items.iter_mut().find(|i| i.id == id) {
                    Some(item) if item.quantity != quantity => {
                        item.quantity = quantity;
                        true
                    }
                    _ => false,
                }
            }
            FabricCartAction::ClearCart => {
                let changed = *self != FabricCartState::default();
                *self = FabricCartState::default();
                changed
            }
        };
        if changed {
            self.recalculate();
        }
        changed
    }

    fn replay(persisted: Self) -> Vec<FabricCartAction> {
        persisted
            .items
            .into_iter()
            .map(FabricCartAction::AddToCart)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_fabric::aggregate::fixtures::variant;
    use crate::domain::common::{KeyValueStorage, MemoryStorage, Store};

    fn swatch(variant_id: u32) -> FabricCartItem {
        FabricCartItem::new("velour", "Велюр", "Monolith", "Монолит", variant(variant_id, "Серый"))
    }

    #[test]
    fn test_add_merges_quantity_and_price_stays_zero() {
        let mut state = FabricCartState::default();
        state.reduce(FabricCartAction::AddToCart(swatch(1)));
        state.reduce(FabricCartAction::AddToCart(swatch(1)));
        state.reduce(FabricCartAction::AddToCart(swatch(2)));

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].id, "velour-Monolith-1");
        assert_eq!(state.items[0].quantity, 2);
        assert_eq!(state.total_items, 3);
        assert_eq!(state.total_price, 0.0);
    }

    #[test]
    fn test_update_and_remove() {
        let mut state = FabricCartState::default();
        state.reduce(FabricCartAction::AddToCart(swatch(1)));
        state.reduce(FabricCartAction::UpdateQuantity {
            id: "velour-Monolith-1".to_string(),
            quantity: 5,
        });
        assert_eq!(state.total_items, 5);
        assert_eq!(state.total_price, 0.0);

        assert!(!state.reduce(FabricCartAction::RemoveFromCart("missing".to_string())));
        assert!(state.reduce(FabricCartAction::RemoveFromCart("velour-Monolith-1".to_string())));
        assert!(state.is_empty());
        assert_eq!(state.total_items, 0);
    }

    #[test]
    fn test_persisted_price_is_ignored() {
        let storage = MemoryStorage::new();
        let mut persisted = FabricCartState::default();
        persisted.items.push(swatch(3));
        persisted.total_price = 1200.0;
        storage
            .set_item("fabricCart", &serde_json::to_string(&persisted).unwrap())
            .unwrap();

        let store: Store<FabricCartState, _> = Store::load(storage);
        assert_eq!(store.state().total_items, 1);
        assert_eq!(store.state().total_price, 0.0);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let storage = MemoryStorage::new();
        let mut persisted = FabricCartState::default();
        persisted.items.push(FabricCartItem {
            quantity: u32::MAX,
            ..swatch(1)
        });
        persisted.items.push(swatch(2));
        storage
            .set_item("fabricCart", &serde_json::to_string(&persisted).unwrap())
            .unwrap();

        let mut store: Store<FabricCartState, _> = Store::load(storage);
        assert_eq!(store.state().total_items, u32::MAX);

        store.dispatch(FabricCartAction::AddToCart(swatch(1)));
        assert_eq!(store.state().items[0].quantity, u32::MAX);
    }
}
