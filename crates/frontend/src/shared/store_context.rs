//! Сторы клиентского состояния, доступные через контекст Leptos.
//!
//! Каждый контейнер (корзина, корзина тканей, избранное, избранные ткани,
//! просмотренное) живёт в своём `RwSignal` и один раз гидратируется
//! из `localStorage` при создании.

use contracts::domain::a003_cart::CartState;
use contracts::domain::a004_fabric_cart::FabricCartState;
use contracts::domain::a005_favorites::{FavoriteItem, FavoritesState};
use contracts::domain::a006_fabric_favorites::FabricFavoritesState;
use contracts::domain::a007_recently_viewed::RecentlyViewedState;
use contracts::domain::common::{StateContainer, Store};
use leptos::prelude::*;

use super::storage::BrowserStorage;

pub struct StoreContext<S: StateContainer + Send + Sync + 'static> {
    store: RwSignal<Store<S, BrowserStorage>>,
}

impl<S: StateContainer + Send + Sync + 'static> Clone for StoreContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: StateContainer + Send + Sync + 'static> Copy for StoreContext<S> {}

impl<S: StateContainer + Send + Sync + 'static> StoreContext<S> {
    /// Создать стор и гидратировать его из `localStorage`
    pub fn load() -> Self {
        Self {
            store: RwSignal::new(Store::load(BrowserStorage)),
        }
    }

    /// Применить действие. Подписчики уведомляются при любом вызове,
    /// сохранение происходит только если состояние изменилось.
    pub fn dispatch(&self, action: S::Action) -> bool {
        let mut changed = false;
        self.store.update(|store| changed = store.dispatch(action));
        changed
    }

    /// Прочитать состояние с подпиской на изменения
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.store.with(|store| f(store.state()))
    }

    /// Прочитать состояние без подписки
    pub fn with_untracked<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.store.with_untracked(|store| f(store.state()))
    }
}

pub type CartStore = StoreContext<CartState>;
pub type FabricCartStore = StoreContext<FabricCartState>;
pub type FavoritesStore = StoreContext<FavoritesState<FavoriteItem>>;
pub type FabricFavoritesStore = StoreContext<FabricFavoritesState>;
pub type RecentlyViewedStore = StoreContext<RecentlyViewedState>;

/// Создать все сторы и положить их в контекст
pub fn provide_stores() {
    provide_context(CartStore::load());
    provide_context(FabricCartStore::load());
    provide_context(FavoritesStore::load());
    provide_context(FabricFavoritesStore::load());
    provide_context(RecentlyViewedStore::load());
}

pub fn use_cart() -> CartStore {
    use_context::<CartStore>().expect("CartStore context not found")
}

pub fn use_fabric_cart() -> FabricCartStore {
    use_context::<FabricCartStore>().expect("FabricCartStore context not found")
}

pub fn use_favorites() -> FavoritesStore {
    use_context::<FavoritesStore>().expect("FavoritesStore context not found")
}

pub fn use_fabric_favorites() -> FabricFavoritesStore {
    use_context::<FabricFavoritesStore>().expect("FabricFavoritesStore context not found")
}

pub fn use_recently_viewed() -> RecentlyViewedStore {
    use_context::<RecentlyViewedStore>().expect("RecentlyViewedStore context not found")
}
