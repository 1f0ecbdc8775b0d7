use contracts::domain::a002_fabric::{FabricCategory, FabricCollection};
use contracts::shared::filters::fabric::{availabilities, collection_names, fabric_types};
use contracts::shared::filters::FabricFilters;
use contracts::shared::request_generation::RequestGeneration;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::{Button, ButtonAppearance, Spinner};

use super::collection_href;
use crate::shared::catalog_api;
use crate::shared::components::ui::{CheckboxList, Input};
use crate::shared::components::PageHeader;

/// Переключить значение в списке выбранных
fn toggle_value(values: &mut Vec<String>, value: String, checked: bool) {
    if checked {
        if !values.contains(&value) {
            values.push(value);
        }
    } else {
        values.retain(|v| *v != value);
    }
}

fn collections_mut(f: &mut FabricFilters) -> &mut Vec<String> {
    &mut f.collections
}

fn types_mut(f: &mut FabricFilters) -> &mut Vec<String> {
    &mut f.types
}

fn availability_mut(f: &mut FabricFilters) -> &mut Vec<String> {
    &mut f.availability
}

fn parse_abrasion_bound(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Страница категории тканей с фасетными фильтрами коллекций
#[component]
pub fn FabricCategoryPage() -> impl IntoView {
    let params = use_params_map();
    let category = RwSignal::new(None::<FabricCategory>);
    let loading = RwSignal::new(true);
    let filters = RwSignal::new(FabricFilters::default());
    let collections = RwSignal::new(Vec::<FabricCollection>::new());
    let filtering = RwSignal::new(false);

    let generation = RequestGeneration::new();
    {
        let generation = generation.clone();
        on_cleanup(move || generation.invalidate());
    }

    let category_name = move || params.with(|p| p.get("category_id").unwrap_or_default());

    // Категория задаёт значения фасетов
    Effect::new(move |_| {
        let name = category_name();
        loading.set(true);
        filters.set(FabricFilters::default());
        wasm_bindgen_futures::spawn_local(async move {
            let found = catalog_api::fetch_fabric_category(&name)
                .await
                .unwrap_or_else(|e| {
                    log::error!("Error loading fabric category {}: {}", name, e);
                    None
                });
            collections.set(found.as_ref().map(|c| c.collections.clone()).unwrap_or_default());
            category.set(found);
            loading.set(false);
        });
    });

    // Отфильтрованные коллекции; ответы на устаревшие фильтры отбрасываются
    Effect::new(move |_| {
        let current = filters.get();
        let name = category_name();
        if current.is_empty() {
            generation.invalidate();
            filtering.set(false);
            collections.set(category.with_untracked(|c| {
                c.as_ref().map(|c| c.collections.clone()).unwrap_or_default()
            }));
            return;
        }
        let ticket = generation.begin();
        let generation = generation.clone();
        filtering.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = catalog_api::check_fabric_filters(&name, &current)
                .await
                .unwrap_or_else(|e| {
                    log::error!("Error filtering collections: {}", e);
                    Vec::new()
                });
            if generation.is_current(ticket) {
                collections.set(result);
                filtering.set(false);
            }
        });
    });

    let facet = move |f: fn(&FabricCategory) -> Vec<String>| {
        Signal::derive(move || category.with(|c| c.as_ref().map(f).unwrap_or_default()))
    };
    let toggle = move |select: fn(&mut FabricFilters) -> &mut Vec<String>| {
        Callback::new(move |(value, checked): (String, bool)| {
            filters.update(|f| toggle_value(select(f), value, checked));
        })
    };
    let abrasion_text = |bound: Option<u64>| bound.map(|v| v.to_string()).unwrap_or_default();

    let title = Signal::derive(move || {
        category.with(|c| c.as_ref().map(|c| c.name_ru.clone()).unwrap_or_default())
    });
    let crumbs = vec![("Ткани".to_string(), "/fabrics".to_string())];

    view! {
        <div class="container">
            <PageHeader title=title crumbs=crumbs />
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                if category.with(|c| c.is_none()) {
                    return view! {
                        <div class="fabric-category__not-found">
                            <h2>"Категория не найдена"</h2>
                            <A href="/fabrics">"Все ткани"</A>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="fabric-category">
                        <aside class="fabric-category__filters">
                            <CheckboxList
                                title="Коллекция"
                                options=facet(collection_names)
                                selected=Signal::derive(move || filters.get().collections)
                                on_toggle=toggle(collections_mut)
                            />
                            <CheckboxList
                                title="Тип ткани"
                                options=facet(fabric_types)
                                selected=Signal::derive(move || filters.get().types)
                                on_toggle=toggle(types_mut)
                            />
                            <CheckboxList
                                title="Наличие"
                                options=facet(availabilities)
                                selected=Signal::derive(move || filters.get().availability)
                                on_toggle=toggle(availability_mut)
                            />
                            <Input
                                label="Износостойкость от"
                                name="minAbrasion"
                                value=Signal::derive(move || abrasion_text(filters.get().min_abrasion))
                                on_input=Callback::new(move |raw: String| {
                                    filters.update(|f| f.min_abrasion = parse_abrasion_bound(&raw));
                                })
                            />
                            <Input
                                label="Износостойкость до"
                                name="maxAbrasion"
                                value=Signal::derive(move || abrasion_text(filters.get().max_abrasion))
                                on_input=Callback::new(move |raw: String| {
                                    filters.update(|f| f.max_abrasion = parse_abrasion_bound(&raw));
                                })
                            />
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| filters.set(FabricFilters::default())
                            >
                                "Сбросить фильтры"
                            </Button>
                        </aside>

                        <div class="fabric-category__collections">
                            <Show when=move || filtering.get()>
                                <Spinner />
                            </Show>
                            <Show
                                when=move || collections.with(|c| !c.is_empty())
                                fallback=|| view! { <p>"Коллекции не найдены"</p> }
                            >
                                <For
                                    each=move || collections.get()
                                    key=|c| c.name.clone()
                                    children=move |collection| {
                                        let href = collection_href(&category_name(), &collection.name);
                                        view! { <CollectionCard collection=collection href=href /> }
                                    }
                                />
                            </Show>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn CollectionCard(collection: FabricCollection, href: String) -> impl IntoView {
    let preview = collection.variants.first().map(|v| v.image.clone());
    let specs = collection.technical_specifications;

    view! {
        <A href=href>
            <div class="collection-card">
                {preview.map(|src| view! { <img class="collection-card__image" src=src /> })}
                <h3 class="collection-card__title">{collection.name_ru}</h3>
                <div class="collection-card__meta">
                    <span>{collection.kind}</span>
                    <span>{collection.availability}</span>
                    <span>{format!("Износостойкость: {}", specs.abrasion_resistance)}</span>
                </div>
                <div class="collection-card__variants">
                    {format!("Расцветок: {}", collection.variants.len())}
                </div>
            </div>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_value() {
        let mut values = vec!["Микровелюр".to_string()];
        toggle_value(&mut values, "Велюр".to_string(), true);
        toggle_value(&mut values, "Велюр".to_string(), true);
        assert_eq!(values, vec!["Микровелюр", "Велюр"]);

        toggle_value(&mut values, "Микровелюр".to_string(), false);
        assert_eq!(values, vec!["Велюр"]);
    }

    #[test]
    fn test_parse_abrasion_bound() {
        assert_eq!(parse_abrasion_bound("30 000"), Some(30000));
        assert_eq!(parse_abrasion_bound(""), None);
    }
}
