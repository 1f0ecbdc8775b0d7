use serde::{Deserialize, Serialize};

use crate::domain::a001_product::Product;
use crate::domain::common::StateContainer;

/// Элемент избранного, различаемый по `id`
pub trait Favorite {
    fn favorite_id(&self) -> &str;
}

/// Состояние избранного: множество без дубликатов, без количества и цены
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesState<T> {
    pub items: Vec<T>,
    pub total_items: usize,
}

impl<T> Default for FavoritesState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesAction<T> {
    AddToFavorites(T),
    RemoveFromFavorites(String),
    ClearFavorites,
}

impl<T: Favorite> FavoritesState<T> {
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.favorite_id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Общий редьюсер для избранного мебели и тканей
    pub fn apply(&mut self, action: FavoritesAction<T>) -> bool {
        let changed = match action {
            FavoritesAction::AddToFavorites(item) => {
                if self.contains(item.favorite_id()) {
                    false
                } else {
                    self.items.push(item);
                    true
                }
            }
            FavoritesAction::RemoveFromFavorites(id) => {
                let before = self.items.len();
                self.items.retain(|i| i.favorite_id() != id);
                self.items.len() != before
            }
            FavoritesAction::ClearFavorites => {
                let changed = !self.items.is_empty() || self.total_items != 0;
                self.items.clear();
                changed
            }
        };
        if changed {
            self.total_items = self.items.len();
        }
        changed
    }

    /// Действия для проигрывания сохранённого снимка
    pub fn replay_items(self) -> Vec<FavoritesAction<T>> {
        self.items
            .into_iter()
            .map(FavoritesAction::AddToFavorites)
            .collect()
    }
}

// ============================================================================
// Furniture favorites
// ============================================================================

/// Краткие данные товара для списка избранного
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub slug: String,
    pub category_name: String,
}

impl From<&Product> for FavoriteProduct {
    fn from(product: &Product) -> Self {
        let category = product.category();
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.current,
            image: product.main_image().unwrap_or_default().to_string(),
            category: category.code().to_string(),
            slug: product.slug.clone(),
            category_name: category.display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: String,
    pub product: FavoriteProduct,
}

impl FavoriteItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            product: product.into(),
        }
    }
}

impl Favorite for FavoriteItem {
    fn favorite_id(&self) -> &str {
        &self.id
    }
}

impl StateContainer for FavoritesState<FavoriteItem> {
    type Action = FavoritesAction<FavoriteItem>;
    const STORAGE_KEY: &'static str = "favorites";

    fn reduce(&mut self, action: Self::Action) -> bool {
        self.apply(action)
    }

    fn replay(persisted: Self) -> Vec<Self::Action> {
        persisted.replay_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::fixtures::{bed, sofa};
    use crate::domain::common::{KeyValueStorage, MemoryStorage, Store};

    type Favorites = FavoritesState<FavoriteItem>;

    #[test]
    fn test_add_is_idempotent() {
        let mut state = Favorites::default();
        let item = FavoriteItem::from_product(&sofa("1", "Честер", 45000.0, 4.6));
        assert!(state.reduce(FavoritesAction::AddToFavorites(item.clone())));
        let snapshot = state.clone();

        assert!(!state.reduce(FavoritesAction::AddToFavorites(item)));
        assert_eq!(state, snapshot);
        assert_eq!(state.total_items, 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut state = Favorites::default();
        state.reduce(FavoritesAction::AddToFavorites(FavoriteItem::from_product(
            &sofa("1", "Честер", 45000.0, 4.6),
        )));
        state.reduce(FavoritesAction::AddToFavorites(FavoriteItem::from_product(
            &bed("2", "Лофт", 30000.0, 4.1),
        )));
        assert_eq!(state.total_items, 2);
        assert_eq!(state.items[1].product.category, "bed");

        let snapshot = state.clone();
        assert!(!state.reduce(FavoritesAction::RemoveFromFavorites("9".to_string())));
        assert_eq!(state, snapshot);

        assert!(state.reduce(FavoritesAction::RemoveFromFavorites("1".to_string())));
        assert_eq!(state.total_items, 1);

        assert!(state.reduce(FavoritesAction::ClearFavorites));
        assert_eq!(state, Favorites::default());
    }

    #[test]
    fn test_hydration_drops_duplicates() {
        let storage = MemoryStorage::new();
        let item = FavoriteItem::from_product(&sofa("1", "Честер", 45000.0, 4.6));
        let persisted = Favorites {
            items: vec![item.clone(), item],
            total_items: 2,
        };
        storage
            .set_item("favorites", &serde_json::to_string(&persisted).unwrap())
            .unwrap();

        let store: Store<Favorites, _> = Store::load(storage);
        assert_eq!(store.state().items.len(), 1);
        assert_eq!(store.state().total_items, 1);
    }
}
