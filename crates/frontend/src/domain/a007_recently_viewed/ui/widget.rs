use contracts::domain::a001_product::Product;
use contracts::domain::a007_recently_viewed::RecentlyViewedAction;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::a001_product::ui::ProductGrid;
use crate::shared::store_context::use_recently_viewed;

/// Блок "Вы недавно смотрели".
///
/// `exclude_id` скрывает товар, открытый на текущей странице.
/// Пустой список не рендерится.
#[component]
pub fn RecentlyViewedWidget(
    #[prop(optional, into)]
    exclude_id: Option<String>,
) -> impl IntoView {
    let recently_viewed = use_recently_viewed();

    let products = Signal::derive(move || {
        recently_viewed.with(|state| match &exclude_id {
            Some(id) => state
                .excluding(id)
                .into_iter()
                .map(|item| item.product.clone())
                .collect::<Vec<Product>>(),
            None => state.items.iter().map(|item| item.product.clone()).collect(),
        })
    });

    let clear = move |_| {
        recently_viewed.dispatch(RecentlyViewedAction::ClearViewedProducts);
    };

    view! {
        <Show when=move || products.with(|p| !p.is_empty())>
            <section class="recently-viewed">
                <div class="recently-viewed__header">
                    <h2>"Вы недавно смотрели"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=clear>
                        "Очистить"
                    </Button>
                </div>
                <ProductGrid products=products />
            </section>
        </Show>
    }
}
