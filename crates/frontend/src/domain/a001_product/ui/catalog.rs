use contracts::domain::a001_product::{PriceRange, Product};
use contracts::enums::product_category::CategoryFilter;
use contracts::enums::sort_option::SortOption;
use contracts::shared::filters::{sort_products, ProductFilterQuery, ProductFilters};
use contracts::shared::request_generation::RequestGeneration;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use serde::Serialize;
use thaw::{Button, ButtonAppearance, Spinner};
use web_sys::window;

use super::card::ProductGrid;
use crate::shared::catalog_api;
use crate::shared::components::ui::{Input, Select};
use crate::shared::components::PageHeader;

/// Сортировка каталога по умолчанию
const DEFAULT_SORT: SortOption = SortOption::Popularity;

/// Параметры адресной строки каталога. Значения по умолчанию не пишутся.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogUrlQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
}

impl CatalogUrlQuery {
    fn new(filters: &ProductFilters, sort: SortOption, range: PriceRange) -> Self {
        Self {
            category: (filters.category != CategoryFilter::All)
                .then(|| filters.category.code().to_string()),
            min_price: filters.min_price.filter(|v| *v != range.min),
            max_price: filters.max_price.filter(|v| *v != range.max),
            sort: (sort != DEFAULT_SORT).then(|| sort.code().to_string()),
        }
    }
}

fn replace_url_query(query: &CatalogUrlQuery) {
    let Some(w) = window() else { return };
    let qs = serde_qs::to_string(query).unwrap_or_default();
    let new_url = if qs.is_empty() {
        w.location().pathname().unwrap_or_else(|_| "/catalog".to_string())
    } else {
        format!("?{}", qs)
    };
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}

fn parse_price_input(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Страница каталога мебели: фильтры с предпросмотром количества и сортировка
#[component]
pub fn CatalogPage() -> impl IntoView {
    let query = use_query_map();
    let initial = query.with_untracked(|q| {
        ProductFilterQuery {
            category: q.get("category"),
            min_price: q.get("minPrice"),
            max_price: q.get("maxPrice"),
        }
        .into_filters()
    });
    let initial_sort = query.with_untracked(|q| {
        q.get("sort")
            .map(|s| SortOption::from_code(&s))
            .unwrap_or(DEFAULT_SORT)
    });

    let applied = RwSignal::new(initial.clone());
    let pending = RwSignal::new(initial);
    let filters_changed = RwSignal::new(false);
    let preview_count = RwSignal::new(None::<usize>);
    let sort = RwSignal::new(initial_sort);
    let price_range = RwSignal::new(PriceRange::default());
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let filters_open = RwSignal::new(false);

    let list_generation = RequestGeneration::new();
    let preview_generation = RequestGeneration::new();
    {
        let list_generation = list_generation.clone();
        let preview_generation = preview_generation.clone();
        on_cleanup(move || {
            list_generation.invalidate();
            preview_generation.invalidate();
        });
    }

    // Диапазон цен задаёт границы фильтра, если их нет в адресе
    wasm_bindgen_futures::spawn_local(async move {
        let range = match catalog_api::fetch_price_range().await {
            Ok(range) => range,
            Err(e) => {
                log::error!("Error fetching price range: {}", e);
                PriceRange::default()
            }
        };
        price_range.set(range);
        let fill = |f: &mut ProductFilters| {
            f.min_price.get_or_insert(range.min);
            f.max_price.get_or_insert(range.max);
        };
        pending.update(fill);
        applied.update(fill);
    });

    // Загрузка товаров при смене применённых фильтров или сортировки
    Effect::new(move |_| {
        let filters = applied.get();
        let sort_by = sort.get();
        let ticket = list_generation.begin();
        let generation = list_generation.clone();
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let mut result = catalog_api::check_product_filters(&filters)
                .await
                .unwrap_or_else(|e| {
                    log::error!("Error loading catalog: {}", e);
                    Vec::new()
                });
            if !generation.is_current(ticket) {
                log::debug!("Dropping stale catalog response");
                return;
            }
            sort_products(&mut result, sort_by);
            products.set(result);
            loading.set(false);
        });
    });

    // Предпросмотр количества товаров для ещё не применённых фильтров
    Effect::new(move |_| {
        let filters = pending.get();
        if !filters_changed.get() {
            preview_generation.invalidate();
            preview_count.set(None);
            return;
        }
        let ticket = preview_generation.begin();
        let generation = preview_generation.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let count = match catalog_api::check_product_filters(&filters).await {
                Ok(found) => Some(found.len()),
                Err(e) => {
                    log::error!("Error checking filtered count: {}", e);
                    None
                }
            };
            if generation.is_current(ticket) {
                preview_count.set(count);
            }
        });
    });

    // Переход по ссылке меню (`?category=sofa`) при уже открытом каталоге
    Effect::new(move |previous: Option<Option<String>>| {
        let category = query.with(|q| q.get("category"));
        if previous.is_some_and(|prev| prev != category) {
            let category = CategoryFilter::from_code(category.as_deref().unwrap_or_default());
            applied.update(|f| f.category = category);
            pending.set(applied.get_untracked());
            filters_changed.set(false);
        }
        category
    });

    // Синхронизация адресной строки
    Effect::new(move |_| {
        let query = CatalogUrlQuery::new(&applied.get(), sort.get(), price_range.get());
        replace_url_query(&query);
    });

    let set_category = move |code: String| {
        pending.update(|f| f.category = CategoryFilter::from_code(&code));
        filters_changed.set(true);
    };
    let set_min_price = move |raw: String| {
        pending.update(|f| f.min_price = parse_price_input(&raw));
        filters_changed.set(true);
    };
    let set_max_price = move |raw: String| {
        pending.update(|f| f.max_price = parse_price_input(&raw));
        filters_changed.set(true);
    };
    let apply_filters = move |_| {
        applied.set(pending.get_untracked());
        filters_changed.set(false);
        filters_open.set(false);
    };
    let reset_filters = move |_| {
        let range = price_range.get_untracked();
        pending.set(ProductFilters {
            category: CategoryFilter::All,
            min_price: Some(range.min),
            max_price: Some(range.max),
        });
        filters_changed.set(true);
    };
    let toggle_filters = move |_| {
        if !filters_open.get_untracked() {
            pending.set(applied.get_untracked());
            filters_changed.set(false);
        }
        filters_open.update(|open| *open = !*open);
    };

    let category_options = CategoryFilter::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.display_name().to_string()))
        .collect::<Vec<_>>();
    let sort_options = SortOption::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect::<Vec<_>>();
    let price_text = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

    view! {
        <div class="container">
            <PageHeader
                title="Каталог мебели"
                crumbs=vec![("Каталог".to_string(), "/catalog".to_string())]
            />
            <div class="catalog__toolbar">
                <Button appearance=ButtonAppearance::Secondary on_click=toggle_filters>
                    "Фильтры"
                </Button>
                <Select
                    label="Сортировка"
                    name="sort"
                    value=Signal::derive(move || sort.get().code().to_string())
                    options=sort_options
                    on_change=Callback::new(move |code: String| sort.set(SortOption::from_code(&code)))
                />
            </div>

            <Show when=move || filters_open.get()>
                <div class="catalog__filters">
                    <Select
                        label="Категория"
                        name="category"
                        value=Signal::derive(move || pending.get().category.code().to_string())
                        options=category_options.clone()
                        on_change=Callback::new(set_category)
                    />
                    <Input
                        label="Цена от"
                        name="minPrice"
                        input_type="number"
                        value=Signal::derive(move || price_text(pending.get().min_price))
                        on_input=Callback::new(set_min_price)
                    />
                    <Input
                        label="Цена до"
                        name="maxPrice"
                        input_type="number"
                        value=Signal::derive(move || price_text(pending.get().max_price))
                        on_input=Callback::new(set_max_price)
                    />
                    <div class="catalog__filters-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=apply_filters>
                            {move || match preview_count.get() {
                                Some(count) => format!("Показать {} товаров", count),
                                None => "Применить".to_string(),
                            }}
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=reset_filters>
                            "Сбросить"
                        </Button>
                    </div>
                </div>
            </Show>

            {move || {
                if loading.get() {
                    view! { <div class="catalog__loading"><Spinner /></div> }.into_any()
                } else if products.with(|p| p.is_empty()) {
                    view! { <p class="catalog__empty">"Товары не найдены"</p> }.into_any()
                } else {
                    view! { <ProductGrid products=products /> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_query_skips_defaults() {
        let range = PriceRange {
            min: 1000.0,
            max: 90000.0,
        };
        let filters = ProductFilters {
            category: CategoryFilter::All,
            min_price: Some(1000.0),
            max_price: Some(50000.0),
        };
        let query = CatalogUrlQuery::new(&filters, SortOption::Popularity, range);
        assert_eq!(query.min_price, None);
        assert_eq!(query.max_price, Some(50000.0));
        let qs = serde_qs::to_string(&query).unwrap();
        assert!(qs.starts_with("maxPrice=50000"));

        let filters = ProductFilters {
            category: CategoryFilter::Bed,
            ..Default::default()
        };
        let query = CatalogUrlQuery::new(&filters, SortOption::PriceAsc, range);
        assert_eq!(
            serde_qs::to_string(&query).unwrap(),
            "category=bed&sort=price-asc"
        );
    }

    #[test]
    fn test_parse_price_input() {
        assert_eq!(parse_price_input(" 1500 "), Some(1500.0));
        assert_eq!(parse_price_input(""), None);
        assert_eq!(parse_price_input("abc"), None);
    }
}
