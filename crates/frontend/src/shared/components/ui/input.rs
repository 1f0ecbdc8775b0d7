use leptos::prelude::*;

/// Поле формы с подписью и сообщением об ошибке под полем
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "tel", "email", "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Name attribute, также используется как id
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Ошибка валидации поля
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let input_name = move || name.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_class = move || {
        if error.get().is_some() {
            "form__input form__input--error"
        } else {
            "form__input"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_name>{l}</label>
            })}
            <input
                id=input_name
                name=input_name
                class=input_class
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
