use contracts::domain::a002_fabric::FabricCategory;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Badge, BadgeAppearance, BadgeColor, Spinner};

use super::category_href;
use crate::shared::catalog_api;
use crate::shared::components::PageHeader;

/// Список категорий тканей
#[component]
pub fn FabricCategoriesPage() -> impl IntoView {
    let categories = RwSignal::new(Vec::<FabricCategory>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    wasm_bindgen_futures::spawn_local(async move {
        match catalog_api::fetch_fabric_categories().await {
            Ok(data) => categories.set(data),
            Err(e) => {
                log::error!("Error loading fabric categories: {}", e);
                error.set(Some("Не удалось загрузить каталог тканей".to_string()));
            }
        }
        loading.set(false);
    });

    view! {
        <div class="container">
            <PageHeader
                title="Ткани"
                subtitle="Закажите бесплатные образцы понравившихся тканей"
                crumbs=vec![("Ткани".to_string(), "/fabrics".to_string())]
            />
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                view! {
                    <div class="fabric-categories">
                        <For
                            each=move || categories.get()
                            key=|c| c.name.clone()
                            children=|category| {
                                let href = category_href(&category.name);
                                let count = category.collections.len();
                                view! {
                                    <A href=href>
                                        <div class="fabric-categories__item">
                                            <h2>{category.name_ru.clone()}</h2>
                                            {category.description_ru.clone().map(|d| view! { <p>{d}</p> })}
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                                {format!("Коллекций: {}", count)}
                                            </Badge>
                                        </div>
                                    </A>
                                }
                            }
                        />
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
