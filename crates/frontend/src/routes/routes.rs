use leptos::prelude::*;
use leptos_router::components::{Route, Routes, A};
use leptos_router::path;

use crate::domain::a001_product::ui::{CatalogPage, HomePage, ProductDetailsPage};
use crate::domain::a002_fabric::ui::{FabricCategoriesPage, FabricCategoryPage, FabricCollectionPage};
use crate::domain::a003_cart::ui::CartPage;
use crate::domain::a005_favorites::ui::FavoritesPage;
use crate::system::pages::{AboutPage, ContactsPage, DeliveryPage};
use crate::usecases::u501_checkout::ui::{CheckoutPage, SuccessPage};

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container not-found">
            <h1>"Страница не найдена"</h1>
            <A href="/">"На главную"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/catalog") view=CatalogPage />
            <Route path=path!("/products/:category/:slug") view=ProductDetailsPage />
            <Route path=path!("/fabrics") view=FabricCategoriesPage />
            <Route path=path!("/fabrics/:category_id") view=FabricCategoryPage />
            <Route path=path!("/fabrics/:category_id/:collection_id") view=FabricCollectionPage />
            <Route path=path!("/cart") view=CartPage />
            <Route path=path!("/checkout") view=CheckoutPage />
            <Route path=path!("/favorites") view=FavoritesPage />
            <Route path=path!("/success") view=SuccessPage />
            <Route path=path!("/about") view=AboutPage />
            <Route path=path!("/contacts") view=ContactsPage />
            <Route path=path!("/delivery") view=DeliveryPage />
        </Routes>
    }
}
