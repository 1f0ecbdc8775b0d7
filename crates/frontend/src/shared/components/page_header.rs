use leptos::prelude::*;
use leptos_router::components::A;

/// Заголовок страницы с хлебными крошками.
///
/// `crumbs` - пары (подпись, ссылка) от главной к родителю текущей страницы.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    #[prop(optional)]
    crumbs: Vec<(String, String)>,
) -> impl IntoView {
    let has_crumbs = !crumbs.is_empty();

    view! {
        <div class="page-header">
            {has_crumbs.then(|| view! {
                <nav class="breadcrumbs">
                    <A href="/">"Главная"</A>
                    {crumbs
                        .into_iter()
                        .map(|(text, href)| view! {
                            <span class="breadcrumbs__separator">"/"</span>
                            <A href=href>{text}</A>
                        })
                        .collect_view()}
                </nav>
            })}
            <h1 class="page-header__title">{move || title.get()}</h1>
            {move || subtitle.get().map(|s| view! {
                <div class="page-header__subtitle">{s}</div>
            })}
        </div>
    }
}
