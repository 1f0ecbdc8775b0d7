use gloo_net::http::Request;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::api_url;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Каталог доступен",
            ServerStatus::Offline => "Каталог недоступен",
            ServerStatus::Checking => "Проверка связи...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    // Проверяем бэкенд при монтировании
    Effect::new(move |_| {
        status.set(ServerStatus::Checking);
        spawn_local(async move {
            let online = ping_server().await;
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__links">
                <A href="/catalog">"Каталог"</A>
                <A href="/fabrics">"Ткани"</A>
                <A href="/favorites">"Избранное"</A>
                <A href="/cart">"Корзина"</A>
                <A href="/delivery">"Доставка и оплата"</A>
                <A href="/contacts">"Контакты"</A>
            </div>
            <div class="footer__copyright">"© Мебельная фабрика"</div>
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}

async fn ping_server() -> bool {
    match Request::get(&api_url("/health")).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            false
        }
    }
}
