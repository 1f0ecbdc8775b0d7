use contracts::domain::a001_product::Product;
use contracts::enums::product_category::ProductCategory;
use contracts::shared::filters::DEFAULT_POPULAR_LIMIT;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Spinner;

use super::card::ProductGrid;
use crate::domain::a007_recently_viewed::ui::RecentlyViewedWidget;
use crate::shared::catalog_api;

/// Главная страница: разделы каталога, популярные товары, просмотренное
#[component]
pub fn HomePage() -> impl IntoView {
    let popular = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);

    wasm_bindgen_futures::spawn_local(async move {
        match catalog_api::fetch_popular(DEFAULT_POPULAR_LIMIT).await {
            Ok(products) => {
                log::debug!("Loaded {} popular products", products.len());
                popular.set(products);
            }
            Err(e) => log::error!("Error loading popular products: {}", e),
        }
        loading.set(false);
    });

    view! {
        <div class="home">
            <section class="home__hero">
                <div class="container">
                    <h1 class="home__title">"Мебель для вашего дома"</h1>
                    <p class="home__subtitle">
                        "Диваны и кровати собственного производства, образцы тканей бесплатно"
                    </p>
                    <A href="/catalog">"Перейти в каталог"</A>
                </div>
            </section>

            <section class="home__categories container">
                {ProductCategory::all()
                    .into_iter()
                    .map(|category| {
                        let href = format!("/catalog?category={}", category.code());
                        view! {
                            <A href=href>
                                <div class="home__category">{category.display_name()}</div>
                            </A>
                        }
                    })
                    .collect_view()}
                <A href="/fabrics">
                    <div class="home__category">"Ткани"</div>
                </A>
            </section>

            <section class="home__popular container">
                <h2>"Популярные товары"</h2>
                {move || {
                    if loading.get() {
                        view! { <Spinner /> }.into_any()
                    } else {
                        view! { <ProductGrid products=popular /> }.into_any()
                    }
                }}
            </section>

            <div class="container">
                <RecentlyViewedWidget />
            </div>
        </div>
    }
}
