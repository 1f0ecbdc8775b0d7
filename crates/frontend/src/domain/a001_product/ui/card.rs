use contracts::domain::a001_product::Product;
use contracts::domain::a005_favorites::{FavoriteItem, FavoritesAction};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::price::rub;
use crate::shared::store_context::use_favorites;

/// Ссылка на страницу товара
pub fn product_href(product: &Product) -> String {
    format!("/products/{}/{}", product.category().code(), product.slug)
}

/// Карточка товара в сетке каталога
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let favorites = use_favorites();
    let id = product.id.clone();
    let is_favorite = {
        let id = id.clone();
        move || favorites.with(|f| f.contains(&id))
    };
    let is_favorite_label = is_favorite.clone();

    let favorite_item = FavoriteItem::from_product(&product);
    let toggle_favorite = move |_| {
        if favorites.with_untracked(|f| f.contains(&id)) {
            favorites.dispatch(FavoritesAction::RemoveFromFavorites(id.clone()));
        } else {
            favorites.dispatch(FavoritesAction::AddToFavorites(favorite_item.clone()));
        }
    };

    let href = product_href(&product);
    let image = product.main_image().unwrap_or_default().to_string();
    let old_price = product.price.old.filter(|old| *old > product.price.current);

    let image_alt = product.name.clone();
    view! {
        <div class="product-card">
            <A href=href.clone()>
                <img class="product-card__image" src=image alt=image_alt />
            </A>
            <button
                class="product-card__favorite"
                class:product-card__favorite--active=is_favorite.clone()
                aria-label="Избранное"
                on:click=toggle_favorite
            >
                {move || if is_favorite_label() { "♥" } else { "♡" }}
            </button>
            <div class="product-card__body">
                <A href=href>
                    <h3 class="product-card__title">{product.name.clone()}</h3>
                </A>
                <div class="product-card__price">
                    <span class="product-card__price-current">{rub(product.price.current)}</span>
                    {old_price.map(|old| view! {
                        <span class="product-card__price-old">{rub(old)}</span>
                    })}
                </div>
                <div class="product-card__availability">{product.availability.clone()}</div>
            </div>
        </div>
    }
}

/// Сетка карточек товаров
#[component]
pub fn ProductGrid(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <div class="product-grid">
            <For
                each=move || products.get()
                key=|p| p.id.clone()
                children=|product| view! { <ProductCard product=product /> }
            />
        </div>
    }
}
