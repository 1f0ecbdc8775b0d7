use serde::{Deserialize, Serialize};

use crate::domain::a002_fabric::{fabric_item_id, FabricVariant};
use crate::domain::a005_favorites::{Favorite, FavoritesAction, FavoritesState};
use crate::domain::common::StateContainer;

/// Образец ткани в избранном
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricFavoriteItem {
    pub id: String,
    pub category_name: String,
    pub category_name_ru: String,
    pub collection_name: String,
    pub collection_name_ru: String,
    pub variant: FabricVariant,
}

impl FabricFavoriteItem {
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
        }
    }
}

impl Favorite for FabricFavoriteItem {
    fn favorite_id(&self) -> &str {
        &self.id
    }
}

pub type FabricFavoritesState = FavoritesState<FabricFavoriteItem>;
pub type FabricFavoritesAction = FavoritesAction<FabricFavoriteItem>;

impl StateContainer for FavoritesState<FabricFavoriteItem> {
    type Action = FabricFavoritesAction;
    const STORAGE_KEY: &'static str = "fabricFavorites";

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
    use crate::domain::a002_fabric::aggregate::fixtures::variant;
    use crate::domain::common::{MemoryStorage, Store};

    fn favorite(variant_id: u32) -> FabricFavoriteItem {
        FabricFavoriteItem::new("velour", "Велюр", "Bamboo", "Бамбук", variant(variant_id, "Синий"))
    }

    #[test]
    fn test_fabric_favorites_persist_under_own_key() {
        let storage = MemoryStorage::new();
        let mut store: Store<FabricFavoritesState, _> = Store::load(storage.clone());
        store.dispatch(FavoritesAction::AddToFavorites(favorite(1)));
        assert!(!store.dispatch(FavoritesAction::AddToFavorites(favorite(1))));
        store.dispatch(FavoritesAction::AddToFavorites(favorite(2)));

        let reloaded: Store<FabricFavoritesState, _> = Store::load(storage.clone());
        assert_eq!(reloaded.state().total_items, 2);
        assert!(reloaded.state().contains("velour-Bamboo-2"));

        // Избранное мебели не затронуто
        use crate::domain::common::KeyValueStorage;
        assert_eq!(storage.get_item("favorites").unwrap(), None);
    }
}
