use contracts::domain::a002_fabric::{fabric_item_id, FabricCollection, FabricVariant};
use contracts::domain::a004_fabric_cart::{FabricCartAction, FabricCartItem};
use contracts::domain::a006_fabric_favorites::{FabricFavoriteItem, FabricFavoritesAction};
use contracts::shared::request_generation::RequestGeneration;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::{Button, ButtonAppearance, Spinner};

use super::category_href;
use crate::shared::catalog_api;
use crate::shared::components::PageHeader;
use crate::shared::store_context::{use_fabric_cart, use_fabric_favorites};

/// Категория и коллекция, к которым относится открытая страница
#[derive(Debug, Clone, PartialEq)]
struct CollectionContext {
    category_name: String,
    category_name_ru: String,
    collection: FabricCollection,
}

/// Страница коллекции: расцветки и характеристики ткани
#[component]
pub fn FabricCollectionPage() -> impl IntoView {
    let params = use_params_map();
    let context = RwSignal::new(None::<CollectionContext>);
    let loading = RwSignal::new(true);

    let generation = RequestGeneration::new();
    {
        let generation = generation.clone();
        on_cleanup(move || generation.invalidate());
    }

    Effect::new(move |_| {
        let (category_id, collection_id) = params.with(|p| {
            (
                p.get("category_id").unwrap_or_default(),
                p.get("collection_id").unwrap_or_default(),
            )
        });
        let ticket = generation.begin();
        let generation = generation.clone();
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            // Русское название категории нужно для позиций корзины образцов
            let category = catalog_api::fetch_fabric_category(&category_id)
                .await
                .unwrap_or_else(|e| {
                    log::error!("Error loading fabric category {}: {}", category_id, e);
                    None
                });
            let found = match category {
                Some(category) => catalog_api::fetch_fabric_collection(&category.name, &collection_id)
                    .await
                    .unwrap_or_else(|e| {
                        log::error!("Error loading collection {}: {}", collection_id, e);
                        None
                    })
                    .map(|collection| CollectionContext {
                        category_name: category.name.clone(),
                        category_name_ru: category.name_ru.clone(),
                        collection,
                    }),
                None => None,
            };
            let Some(found) = generation.settle(ticket, found) else {
                log::debug!("Dropping stale collection response for {}", collection_id);
                return;
            };
            context.set(found);
            loading.set(false);
        });
    });

    view! {
        <div class="container">
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                match context.get() {
                    Some(ctx) => view! { <CollectionDetails context=ctx /> }.into_any(),
                    None => view! {
                        <div class="fabric-collection__not-found">
                            <h1>"Коллекция не найдена"</h1>
                            <A href="/fabrics">"Все ткани"</A>
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn CollectionDetails(context: CollectionContext) -> impl IntoView {
    let CollectionContext {
        category_name,
        category_name_ru,
        collection,
    } = context;

    let crumbs = vec![
        ("Ткани".to_string(), "/fabrics".to_string()),
        (category_name_ru.clone(), category_href(&category_name)),
    ];
    let specs = &collection.technical_specifications;
    let mut rows = vec![
        ("Тип ткани", specs.fabric_type.clone()),
        ("Износостойкость", specs.abrasion_resistance.clone()),
        ("Плотность", specs.density.clone()),
        ("Состав", specs.composition_ru.clone()),
        ("Ширина", specs.width.clone()),
        ("Страна", specs.origin_ru.clone()),
    ];
    if let Some(direction) = specs.directionality_ru.clone() {
        rows.push(("Направленность", direction));
    }
    let areas = specs.application_areas_ru.clone().unwrap_or_default();
    let care = collection.care_instructions_ru.clone();

    let variants = collection
        .variants
        .iter()
        .cloned()
        .map(|variant| {
            view! {
                <VariantCard
                    category_name=category_name.clone()
                    category_name_ru=category_name_ru.clone()
                    collection_name=collection.name.clone()
                    collection_name_ru=collection.name_ru.clone()
                    variant=variant
                />
            }
        })
        .collect_view();

    view! {
        <PageHeader
            title=collection.name_ru.clone()
            subtitle=format!("{} · {}", collection.kind, collection.availability)
            crumbs=crumbs
        />
        <div class="fabric-collection">
            {collection.description_ru.clone().map(|d| view! {
                <p class="fabric-collection__description">{d}</p>
            })}

            <div class="fabric-collection__variants">{variants}</div>

            <section class="fabric-collection__specs">
                <h2>"Характеристики"</h2>
                <dl>
                    {rows
                        .into_iter()
                        .filter(|(_, value)| !value.is_empty())
                        .map(|(term, value)| view! { <dt>{term}</dt><dd>{value}</dd> })
                        .collect_view()}
                </dl>
                {(!areas.is_empty()).then(|| view! {
                    <p>"Применение: " {areas.join(", ")}</p>
                })}
            </section>

            {(!care.is_empty()).then(|| view! {
                <section class="fabric-collection__care">
                    <h2>"Уход"</h2>
                    <ul>{care.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}</ul>
                </section>
            })}
        </div>
    }
}

/// Расцветка с кнопками "Заказать образец" и "В избранное"
#[component]
fn VariantCard(
    category_name: String,
    category_name_ru: String,
    collection_name: String,
    collection_name_ru: String,
    variant: FabricVariant,
) -> impl IntoView {
    let fabric_cart = use_fabric_cart();
    let fabric_favorites = use_fabric_favorites();

    let id = fabric_item_id(&category_name, &collection_name, variant.id);
    let in_cart = {
        let id = id.clone();
        move || fabric_cart.with(|c| c.contains(&id))
    };
    let is_favorite = {
        let id = id.clone();
        move || fabric_favorites.with(|f| f.contains(&id))
    };
    let is_favorite_label = is_favorite.clone();

    let cart_item = FabricCartItem::new(
        &category_name,
        &category_name_ru,
        &collection_name,
        &collection_name_ru,
        variant.clone(),
    );
    let favorite_item = FabricFavoriteItem::new(
        &category_name,
        &category_name_ru,
        &collection_name,
        &collection_name_ru,
        variant.clone(),
    );

    let order_sample = move |_| {
        fabric_cart.dispatch(FabricCartAction::AddToCart(cart_item.clone()));
    };
    let toggle_favorite = move |_| {
        if fabric_favorites.with_untracked(|f| f.contains(&id)) {
            fabric_favorites.dispatch(FabricFavoritesAction::RemoveFromFavorites(id.clone()));
        } else {
            fabric_favorites.dispatch(FabricFavoritesAction::AddToFavorites(favorite_item.clone()));
        }
    };

    view! {
        <div class="variant-card">
            <img class="variant-card__image" src=variant.image alt=variant.color.ru.clone() />
            <div class="variant-card__color">{variant.color.ru}</div>
            <div class="variant-card__actions">
                <Show
                    when=in_cart
                    fallback=move || {
                        let order_sample = order_sample.clone();
                        view! {
                            <Button appearance=ButtonAppearance::Primary on_click=order_sample>
                                "Заказать образец"
                            </Button>
                        }
                    }
                >
                    <A href="/cart">"Образец в корзине"</A>
                </Show>
                <button
                    class="variant-card__favorite"
                    class:variant-card__favorite--active=is_favorite.clone()
                    on:click=toggle_favorite
                >
                    {move || if is_favorite_label() { "♥" } else { "♡" }}
                </button>
            </div>
        </div>
    }
}
