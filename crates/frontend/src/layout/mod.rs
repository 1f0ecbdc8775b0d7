pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Каркас страницы витрины.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">{children()}</main>
            <footer::Footer />
        </div>
    }
}
