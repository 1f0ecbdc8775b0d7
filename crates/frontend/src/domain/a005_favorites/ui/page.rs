use contracts::domain::a005_favorites::{FavoriteItem, FavoritesAction};
use contracts::domain::a006_fabric_favorites::{FabricFavoriteItem, FabricFavoritesAction};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Button, ButtonAppearance};

use crate::domain::a002_fabric::ui::collection_href;
use crate::shared::components::PageHeader;
use crate::shared::price::rub;
use crate::shared::store_context::{use_fabric_favorites, use_favorites};

/// Вкладки страницы избранного
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FavoritesTab {
    #[default]
    All,
    Furniture,
    Fabrics,
}

impl FavoritesTab {
    fn label(&self) -> &'static str {
        match self {
            FavoritesTab::All => "Все",
            FavoritesTab::Furniture => "Мебель",
            FavoritesTab::Fabrics => "Ткани",
        }
    }

    fn shows_furniture(&self) -> bool {
        !matches!(self, FavoritesTab::Fabrics)
    }

    fn shows_fabrics(&self) -> bool {
        !matches!(self, FavoritesTab::Furniture)
    }
}

/// Избранное: мебель и ткани с переключением вкладок
#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = use_favorites();
    let fabric_favorites = use_fabric_favorites();
    let tab = RwSignal::new(FavoritesTab::default());

    let count = move |t: FavoritesTab| {
        let furniture = if t.shows_furniture() { favorites.with(|f| f.total_items) } else { 0 };
        let fabrics = if t.shows_fabrics() { fabric_favorites.with(|f| f.total_items) } else { 0 };
        furniture + fabrics
    };

    let clear_all = move |_| {
        if tab.get_untracked().shows_furniture() {
            favorites.dispatch(FavoritesAction::ClearFavorites);
        }
        if tab.get_untracked().shows_fabrics() {
            fabric_favorites.dispatch(FabricFavoritesAction::ClearFavorites);
        }
    };

    view! {
        <div class="container">
            <PageHeader title="Избранное" crumbs=vec![("Избранное".to_string(), "/favorites".to_string())] />
            <div class="favorites__tabs">
                {[FavoritesTab::All, FavoritesTab::Furniture, FavoritesTab::Fabrics]
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class="favorites__tab"
                            class:favorites__tab--active=move || tab.get() == t
                            on:click=move |_| tab.set(t)
                        >
                            {move || format!("{} ({})", t.label(), count(t))}
                        </button>
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || (count(tab.get()) > 0)
                fallback=|| view! {
                    <div class="favorites__empty">
                        <p>"В избранном пока ничего нет"</p>
                        <A href="/catalog">"Перейти в каталог"</A>
                    </div>
                }
            >
                <Show when=move || tab.get().shows_furniture() && !favorites.with(|f| f.is_empty())>
                    <section class="favorites__section">
                        <h2>"Мебель"</h2>
                        <div class="product-grid">
                            <For
                                each=move || favorites.with(|f| f.items.clone())
                                key=|item| item.id.clone()
                                children=|item| view! { <FavoriteProductCard item=item /> }
                            />
                        </div>
                    </section>
                </Show>
                <Show when=move || tab.get().shows_fabrics() && !fabric_favorites.with(|f| f.is_empty())>
                    <section class="favorites__section">
                        <h2>"Ткани"</h2>
                        <div class="fabric-favorites">
                            <For
                                each=move || fabric_favorites.with(|f| f.items.clone())
                                key=|item| item.id.clone()
                                children=|item| view! { <FavoriteFabricCard item=item /> }
                            />
                        </div>
                    </section>
                </Show>
                <Button appearance=ButtonAppearance::Subtle on_click=clear_all>
                    "Очистить избранное"
                </Button>
            </Show>
        </div>
    }
}

#[component]
fn FavoriteProductCard(item: FavoriteItem) -> impl IntoView {
    let favorites = use_favorites();
    let id = item.id.clone();
    let product = item.product;
    let href = format!("/products/{}/{}", product.category, product.slug);
    let remove = move |_| {
        favorites.dispatch(FavoritesAction::RemoveFromFavorites(id.clone()));
    };

    let image_alt = product.name.clone();
    view! {
        <div class="product-card">
            <A href=href.clone()>
                <img class="product-card__image" src=product.image alt=image_alt />
            </A>
            <button
                class="product-card__favorite product-card__favorite--active"
                aria-label="Удалить из избранного"
                on:click=remove
            >
                "♥"
            </button>
            <div class="product-card__body">
                <div class="product-card__category">{product.category_name}</div>
                <A href=href>
                    <h3 class="product-card__title">{product.name}</h3>
                </A>
                <div class="product-card__price">{rub(product.price)}</div>
            </div>
        </div>
    }
}

#[component]
fn FavoriteFabricCard(item: FabricFavoriteItem) -> impl IntoView {
    let fabric_favorites = use_fabric_favorites();
    let href = collection_href(&item.category_name, &item.collection_name);
    let id = item.id.clone();
    let remove = move |_| {
        fabric_favorites.dispatch(FabricFavoritesAction::RemoveFromFavorites(id.clone()));
    };

    let image_src = item.variant.image.clone();
    let image_alt = item.variant.color.ru.clone();
    view! {
        <div class="variant-card">
            <A href=href>
                <img class="variant-card__image" src=image_src alt=image_alt />
            </A>
            <div class="variant-card__color">
                {format!("{} · {}", item.collection_name_ru, item.variant.color.ru)}
            </div>
            <div class="variant-card__category">{item.category_name_ru.clone()}</div>
            <button
                class="variant-card__favorite variant-card__favorite--active"
                aria-label="Удалить из избранного"
                on:click=remove
            >
                "♥"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_visibility() {
        assert!(FavoritesTab::All.shows_furniture() && FavoritesTab::All.shows_fabrics());
        assert!(!FavoritesTab::Furniture.shows_fabrics());
        assert!(!FavoritesTab::Fabrics.shows_furniture());
    }
}
