use leptos::prelude::*;

/// Группа радиокнопок. Опции - пары (значение, подпись).
#[component]
pub fn RadioGroup(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <div class="form__radio-group">
                {move || {
                    let name = name.clone();
                    options
                        .get()
                        .into_iter()
                        .map(|(val, text)| {
                            let id = format!("{}-{}", name, val);
                            let val_for_check = val.clone();
                            let val_for_change = val.clone();
                            view! {
                                <label class="form__radio-wrapper" for=id.clone()>
                                    <input
                                        id=id.clone()
                                        type="radio"
                                        class="form__radio"
                                        name=name.clone()
                                        value=val
                                        prop:checked=move || value.get() == val_for_check
                                        on:change=move |_| {
                                            if let Some(handler) = on_change {
                                                handler.run(val_for_change.clone());
                                            }
                                        }
                                    />
                                    <span class="form__radio-label">{text}</span>
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
