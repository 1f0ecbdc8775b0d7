use serde::{Deserialize, Serialize};

use crate::domain::a001_product::Product;
use crate::domain::common::StateContainer;

/// Сколько последних просмотренных товаров хранится
pub const MAX_RECENTLY_VIEWED: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentlyViewedItem {
    pub id: String,
    pub product: Product,
    /// Unix-время просмотра в миллисекундах
    pub timestamp: i64,
}

impl RecentlyViewedItem {
    pub fn new(product: Product, timestamp: i64) -> Self {
        Self {
            id: product.id.clone(),
            product,
            timestamp,
        }
    }

    /// Просмотр в текущий момент
    pub fn viewed_now(product: Product) -> Self {
        Self::new(product, chrono::Utc::now().timestamp_millis())
    }
}

/// Недавно просмотренные товары, самые свежие первыми
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecentlyViewedState {
    pub items: Vec<RecentlyViewedItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecentlyViewedAction {
    AddViewedProduct(RecentlyViewedItem),
    ClearViewedProducts,
}

impl RecentlyViewedState {
    /// Просмотренные товары, кроме указанного (для блока на странице товара)
    pub fn excluding(&self, product_id: &str) -> Vec<&RecentlyViewedItem> {
        self.items.iter().filter(|i| i.id != product_id).collect()
    }
}

impl StateContainer for RecentlyViewedState {
    type Action = RecentlyViewedAction;
    const STORAGE_KEY: &'static str = "recentlyViewed";

    fn reduce(&mut self, action: RecentlyViewedAction) -> bool {
        match action {
            RecentlyViewedAction::AddViewedProduct(item) => {
                // Повторный просмотр переносит товар в начало
                self.items.retain(|i| i.id != item.id);
                self.items.insert(0, item);
                self.items.truncate(MAX_RECENTLY_VIEWED);
                true
            }
            RecentlyViewedAction::ClearViewedProducts => {
                let changed = !self.items.is_empty();
                self.items.clear();
                changed
            }
        }
    }

    /// Сохранённый список упорядочен от новых к старым, поэтому
    /// проигрывается с конца
    fn replay(persisted: Self) -> Vec<RecentlyViewedAction> {
        persisted
            .items
            .into_iter()
            .rev()
            .map(RecentlyViewedAction::AddViewedProduct)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::fixtures::sofa;
    use crate::domain::common::{MemoryStorage, Store};

    fn view(id: u32, ts: i64) -> RecentlyViewedAction {
        RecentlyViewedAction::AddViewedProduct(RecentlyViewedItem::new(
            sofa(&id.to_string(), "Диван", 1000.0, 4.0),
            ts,
        ))
    }

    fn ids(state: &RecentlyViewedState) -> Vec<String> {
        state.items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_keeps_only_ten_most_recent() {
        let mut state = RecentlyViewedState::default();
        for id in 1..=11 {
            state.reduce(view(id, id as i64));
        }
        assert_eq!(state.items.len(), MAX_RECENTLY_VIEWED);
        assert_eq!(state.items[0].id, "11");
        assert_eq!(state.items[9].id, "2");
        assert!(!ids(&state).contains(&"1".to_string()));
    }

    #[test]
    fn test_review_moves_to_front_without_growing() {
        let mut state = RecentlyViewedState::default();
        state.reduce(view(1, 10));
        state.reduce(view(2, 20));
        state.reduce(view(3, 30));

        state.reduce(view(1, 40));
        assert_eq!(ids(&state), vec!["1", "3", "2"]);
        assert_eq!(state.items[0].timestamp, 40);
        assert_eq!(state.excluding("1").len(), 2);
    }

    #[test]
    fn test_hydration_preserves_order() {
        let storage = MemoryStorage::new();
        let mut store: Store<RecentlyViewedState, _> = Store::load(storage.clone());
        for id in 1..=4 {
            store.dispatch(view(id, id as i64));
        }
        let expected = ids(store.state());

        let reloaded: Store<RecentlyViewedState, _> = Store::load(storage);
        assert_eq!(ids(reloaded.state()), expected);
        assert_eq!(expected, vec!["4", "3", "2", "1"]);
    }

    #[test]
    fn test_clear() {
        let mut state = RecentlyViewedState::default();
        assert!(!state.reduce(RecentlyViewedAction::ClearViewedProducts));
        state.reduce(view(1, 1));
        assert!(state.reduce(RecentlyViewedAction::ClearViewedProducts));
        assert!(state.items.is_empty());
    }
}
