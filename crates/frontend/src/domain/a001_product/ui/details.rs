use contracts::domain::a001_product::{cart_item_id, Product};
use contracts::domain::a003_cart::{CartAction, CartItem};
use contracts::domain::a005_favorites::{FavoriteItem, FavoritesAction};
use contracts::domain::a007_recently_viewed::{RecentlyViewedAction, RecentlyViewedItem};
use contracts::enums::product_category::{CategoryFilter, ProductCategory};
use contracts::enums::sort_option::SortOption;
use contracts::shared::request_generation::RequestGeneration;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::{Button, ButtonAppearance, Spinner};

use super::card::ProductGrid;
use crate::domain::a007_recently_viewed::ui::RecentlyViewedWidget;
use crate::shared::catalog_api;
use crate::shared::components::PageHeader;
use crate::shared::price::rub;
use crate::shared::store_context::{use_cart, use_favorites, use_recently_viewed};

/// Сколько похожих товаров показывать под карточкой
const SIMILAR_LIMIT: usize = 4;

/// Похожие товары: та же категория без текущего товара
fn similar_products(all: Vec<Product>, current_id: &str) -> Vec<Product> {
    all.into_iter()
        .filter(|p| p.id != current_id)
        .take(SIMILAR_LIMIT)
        .collect()
}

/// Страница товара
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let product = RwSignal::new(None::<Product>);
    let loading = RwSignal::new(true);
    let similar = RwSignal::new(Vec::<Product>::new());
    let recently_viewed = use_recently_viewed();

    let generation = RequestGeneration::new();
    {
        let generation = generation.clone();
        on_cleanup(move || generation.invalidate());
    }

    // Переход на похожий товар переиспользует страницу: ответ для прежнего
    // адреса может прийти позже и должен быть отброшен
    Effect::new(move |_| {
        let (category, slug) = params.with(|p| (p.get("category"), p.get("slug")));
        let ticket = generation.begin();
        let category = category.as_deref().and_then(ProductCategory::from_code);
        let (Some(category), Some(slug)) = (category, slug) else {
            product.set(None);
            similar.set(Vec::new());
            loading.set(false);
            return;
        };

        let generation = generation.clone();
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let found = match catalog_api::fetch_product(category, &slug).await {
                Ok(found) => found,
                Err(e) => {
                    log::error!("Error loading product {}: {}", slug, e);
                    None
                }
            };
            let siblings = match &found {
                Some(p) => {
                    let all = catalog_api::fetch_products(
                        CategoryFilter::from(category),
                        SortOption::Default,
                    )
                    .await
                    .unwrap_or_else(|e| {
                        log::error!("Error loading similar products: {}", e);
                        Vec::new()
                    });
                    similar_products(all, &p.id)
                }
                None => Vec::new(),
            };

            let Some((found, siblings)) = generation.settle(ticket, (found, siblings)) else {
                log::debug!("Dropping stale product response for {}", slug);
                return;
            };
            if let Some(p) = &found {
                recently_viewed.dispatch(RecentlyViewedAction::AddViewedProduct(
                    RecentlyViewedItem::viewed_now(p.clone()),
                ));
            }
            similar.set(siblings);
            product.set(found);
            loading.set(false);
        });
    });

    view! {
        <div class="container">
            {move || {
                if loading.get() {
                    return view! { <div class="product-details__loading"><Spinner /></div> }.into_any();
                }
                match product.get() {
                    None => view! {
                        <div class="product-details__not-found">
                            <h1>"Товар не найден"</h1>
                            <a href="/catalog">"Вернуться в каталог"</a>
                        </div>
                    }
                    .into_any(),
                    Some(p) => view! { <ProductDetails product=p /> }.into_any(),
                }
            }}

            <Show when=move || similar.with(|s| !s.is_empty())>
                <section class="product-details__similar">
                    <h2>"Похожие товары"</h2>
                    <ProductGrid products=similar />
                </section>
            </Show>

            {move || {
                product
                    .get()
                    .map(|p| view! { <RecentlyViewedWidget exclude_id=p.id /> })
            }}
        </div>
    }
}

/// Карточка товара с выбором конфигурации
#[component]
fn ProductDetails(product: Product) -> impl IntoView {
    let cart = use_cart();
    let favorites = use_favorites();

    let selected_size = RwSignal::new(Some(0usize).filter(|_| !product.size_options().is_empty()));
    let with_mechanism = RwSignal::new(false);
    let selected_image = RwSignal::new(0usize);

    let product = StoredValue::new(product);
    let product_id = product.with_value(|p| p.id.clone());

    let has_mechanism =
        move || product.with_value(|p| p.has_lifting_mechanism(selected_size.get()));
    let price = move || {
        product.with_value(|p| {
            let mechanism = with_mechanism.get() && p.has_lifting_mechanism(selected_size.get());
            p.configured_price(selected_size.get(), mechanism)
        })
    };
    let configuration_id = {
        let product_id = product_id.clone();
        move || {
            let mechanism = with_mechanism.get() && has_mechanism();
            cart_item_id(&product_id, selected_size.get(), mechanism)
        }
    };
    let in_cart = {
        let configuration_id = configuration_id.clone();
        move || {
            let id = configuration_id();
            cart.with(|c| c.contains(&id))
        }
    };
    let is_favorite = {
        let product_id = product_id.clone();
        move || favorites.with(|f| f.contains(&product_id))
    };
    let is_favorite_label = is_favorite.clone();

    let add_to_cart = move |_| {
        let mechanism = with_mechanism.get_untracked() && has_mechanism();
        let item = product.with_value(|p| {
            CartItem::new(p.clone(), 1, selected_size.get_untracked(), mechanism)
        });
        log::debug!("Adding {} to cart", item.id);
        cart.dispatch(CartAction::AddToCart(item));
    };
    let toggle_favorite = {
        let product_id = product_id.clone();
        move |_| {
            if favorites.with_untracked(|f| f.contains(&product_id)) {
                favorites.dispatch(FavoritesAction::RemoveFromFavorites(product_id.clone()));
            } else {
                let item = product.with_value(FavoriteItem::from_product);
                favorites.dispatch(FavoritesAction::AddToFavorites(item));
            }
        }
    };

    let (name, category, description) = product.with_value(|p| {
        (p.name.clone(), p.category(), p.description.clone())
    });
    let crumbs = vec![
        ("Каталог".to_string(), "/catalog".to_string()),
        (
            category.display_name().to_string(),
            format!("/catalog?category={}", category.code()),
        ),
    ];
    let images = product.with_value(|p| p.images.clone());
    let sizes = product.with_value(|p| p.size_options());
    let old_price = product.with_value(|p| p.price.old);
    let details = product.with_value(|p| {
        vec![
            ("Наличие", p.availability.clone()),
            ("Изготовление", p.manufacturing.clone().unwrap_or_default()),
            ("Страна", p.country.clone()),
            ("Гарантия", p.warranty.clone()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect::<Vec<_>>()
    });
    let features = product.with_value(|p| p.features.clone());
    let materials = product.with_value(|p| {
        p.materials
            .iter()
            .map(|m| m.localized_titles.ru.clone())
            .collect::<Vec<_>>()
    });
    let plans = product.with_value(|p| p.installment_plans.clone());

    view! {
        <PageHeader title=name crumbs=crumbs />
        <div class="product-details">
            <div class="product-details__gallery">
                {
                    let images = images.clone();
                    move || {
                        images
                            .get(selected_image.get())
                            .cloned()
                            .map(|src| view! { <img class="product-details__image" src=src /> })
                    }
                }
                <div class="product-details__thumbs">
                    {images
                        .into_iter()
                        .enumerate()
                        .map(|(index, src)| {
                            view! {
                                <img
                                    class="product-details__thumb"
                                    class:product-details__thumb--active=move || selected_image.get() == index
                                    src=src
                                    on:click=move |_| selected_image.set(index)
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="product-details__info">
                <div class="product-details__price">
                    <span class="product-details__price-current">{move || rub(price())}</span>
                    {old_price.map(|old| view! { <span class="product-details__price-old">{rub(old)}</span> })}
                </div>

                <Show when={
                    let empty = sizes.is_empty();
                    move || !empty
                }>
                    <div class="product-details__sizes">
                        <h3>"Размер"</h3>
                        {sizes
                            .iter()
                            .enumerate()
                            .map(|(index, size)| {
                                let label = format!("{}x{} см", size.width, size.length);
                                view! {
                                    <button
                                        class="product-details__size"
                                        class:product-details__size--active=move || selected_size.get() == Some(index)
                                        on:click=move |_| {
                                            selected_size.set(Some(index));
                                            with_mechanism.set(false);
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>

                <Show when=has_mechanism>
                    <label class="product-details__mechanism">
                        <input
                            type="checkbox"
                            prop:checked=move || with_mechanism.get()
                            on:change=move |ev| with_mechanism.set(event_target_checked(&ev))
                        />
                        "Подъёмный механизм"
                    </label>
                </Show>

                <div class="product-details__actions">
                    {
                        let in_cart = in_cart.clone();
                        move || {
                            if in_cart() {
                                view! { <a class="product-details__in-cart" href="/cart">"В корзине"</a> }.into_any()
                            } else {
                                view! {
                                    <Button appearance=ButtonAppearance::Primary on_click=add_to_cart>
                                        "В корзину"
                                    </Button>
                                }
                                .into_any()
                            }
                        }
                    }
                    <button
                        class="product-details__favorite"
                        class:product-details__favorite--active=is_favorite.clone()
                        on:click=toggle_favorite
                    >
                        {move || if is_favorite_label() { "В избранном" } else { "В избранное" }}
                    </button>
                </div>

                <p class="product-details__description">{description}</p>

                <dl class="product-details__specs">
                    {details
                        .into_iter()
                        .map(|(term, value)| view! { <dt>{term}</dt><dd>{value}</dd> })
                        .collect_view()}
                </dl>

                {(!features.is_empty()).then(|| view! {
                    <ul class="product-details__features">
                        {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                    </ul>
                })}

                {(!materials.is_empty()).then(|| view! {
                    <p class="product-details__materials">"Материалы: " {materials.join(", ")}</p>
                })}

                {(!plans.is_empty()).then(|| view! {
                    <div class="product-details__installments">
                        <h3>"Рассрочка и кредит"</h3>
                        {plans
                            .into_iter()
                            .map(|plan| view! {
                                <div class="product-details__plan">
                                    <strong>{plan.bank}</strong>
                                    <span>
                                        {format!(
                                            "Рассрочка {} мес., {}",
                                            plan.installment.duration_months,
                                            plan.installment.interest
                                        )}
                                    </span>
                                    <span>
                                        {format!(
                                            "Кредит {} мес., {}",
                                            plan.credit.duration_months,
                                            plan.credit.interest
                                        )}
                                    </span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofa(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Диван {}", id),
            slug: format!("sofa-{}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_similar_products_excludes_current() {
        let all = (1..=6).map(|i| sofa(&format!("s{}", i))).collect::<Vec<_>>();
        let similar = similar_products(all, "s2");
        assert_eq!(similar.len(), SIMILAR_LIMIT);
        assert!(similar.iter().all(|p| p.id != "s2"));
        assert_eq!(similar[0].id, "s1");
        assert_eq!(similar[1].id, "s3");
    }
}
