use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::store_context::{use_cart, use_fabric_cart, use_fabric_favorites, use_favorites};

/// Пункты главного меню: (подпись, ссылка)
const NAV_ITEMS: [(&str, &str); 8] = [
    ("Главная", "/"),
    ("Каталог", "/catalog"),
    ("Диваны", "/catalog?category=sofa"),
    ("Кровати", "/catalog?category=bed"),
    ("Ткани", "/fabrics"),
    ("О нас", "/about"),
    ("Контакты", "/contacts"),
    ("Доставка и оплата", "/delivery"),
];

#[component]
fn CounterLink(href: &'static str, label: &'static str, count: Signal<u32>) -> impl IntoView {
    view! {
        <A href=href>
            <span class="header__counter-link">
                {label}
                <Show when=move || { count.get() > 0 }>
                    <span class="header__counter">{move || count.get()}</span>
                </Show>
            </span>
        </A>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let cart = use_cart();
    let fabric_cart = use_fabric_cart();
    let favorites = use_favorites();
    let fabric_favorites = use_fabric_favorites();

    // Счётчики объединяют мебель и ткани
    let cart_count = Signal::derive(move || {
        cart.with(|c| c.total_items) + fabric_cart.with(|c| c.total_items)
    });
    let favorites_count = Signal::derive(move || {
        (favorites.with(|f| f.total_items) + fabric_favorites.with(|f| f.total_items)) as u32
    });

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/">
                    <span class="header__title">"Мебельная фабрика"</span>
                </A>
                <nav class="header__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(label, href)| view! { <A href=href>{label}</A> })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <CounterLink href="/favorites" label="Избранное" count=favorites_count />
                <CounterLink href="/cart" label="Корзина" count=cart_count />
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::product_category::CategoryFilter;

    #[test]
    fn test_category_shortcuts_use_known_codes() {
        let shortcuts: Vec<_> = NAV_ITEMS
            .into_iter()
            .filter_map(|(_, href)| href.strip_prefix("/catalog?category="))
            .collect();
        assert_eq!(shortcuts, vec!["sofa", "bed"]);
        for code in shortcuts {
            assert_eq!(CategoryFilter::from_code(code).code(), code);
        }
    }
}
