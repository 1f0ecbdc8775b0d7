use leptos::prelude::*;

/// Список флажков фасетного фильтра.
///
/// `on_toggle` получает значение и новое состояние флажка.
#[component]
pub fn CheckboxList(
    #[prop(into)]
    title: String,
    #[prop(into)]
    options: Signal<Vec<String>>,
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    view! {
        <fieldset class="filter__group">
            <legend class="filter__title">{title}</legend>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let for_check = option.clone();
                        let for_toggle = option.clone();
                        view! {
                            <label class="form__checkbox-wrapper">
                                <input
                                    type="checkbox"
                                    class="form__checkbox"
                                    prop:checked=move || selected.get().contains(&for_check)
                                    on:change=move |ev| {
                                        on_toggle.run((for_toggle.clone(), event_target_checked(&ev)));
                                    }
                                />
                                <span class="form__checkbox-label">{option}</span>
                            </label>
                        }
                    })
                    .collect_view()
            }}
        </fieldset>
    }
}
