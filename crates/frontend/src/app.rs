use leptos::prelude::*;
use leptos_router::components::Router;

use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::shared::store_context::provide_stores;

#[component]
pub fn App() -> impl IntoView {
    // Сторы корзин, избранного и просмотренного гидратируются один раз
    provide_stores();

    view! {
        <Router>
            <Shell>
                <AppRoutes />
            </Shell>
        </Router>
    }
}
