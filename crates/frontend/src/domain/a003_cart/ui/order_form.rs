use contracts::enums::delivery_method::DeliveryMethod;
use contracts::enums::payment_method::PaymentMethod;
use contracts::enums::social_media::SocialMedia;
use contracts::usecases::u501_checkout::{FieldErrors, OrderForm};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::components::ui::{Input, RadioGroup, Select};

fn options<T>(all: Vec<T>, code: fn(&T) -> &'static str, name: fn(&T) -> &'static str) -> Vec<(String, String)> {
    all.iter()
        .map(|v| (code(v).to_string(), name(v).to_string()))
        .collect()
}

/// Форма заказа на странице корзины.
///
/// Способ доставки вынесен наружу: от него зависит стоимость доставки
/// в итогах. `on_submit` вызывается только для валидной формы.
#[component]
pub fn OrderFormPanel(
    delivery: RwSignal<DeliveryMethod>,
    on_submit: Callback<OrderForm>,
    #[prop(into)]
    submitting: Signal<bool>,
) -> impl IntoView {
    let form = RwSignal::new(OrderForm::default());
    let errors = RwSignal::new(FieldErrors::new());

    // Редактирование поля сбрасывает его ошибку
    let edit = move |field: &'static str, apply: fn(&mut OrderForm, String)| {
        Callback::new(move |value: String| {
            form.update(|f| apply(f, value));
            errors.update(|e| e.clear_field(field));
        })
    };
    let error_of = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let submit = move |_| {
        let current = OrderForm {
            delivery_method: delivery.get_untracked(),
            ..form.get_untracked()
        };
        match current.validate() {
            Ok(()) => {
                errors.set(FieldErrors::new());
                on_submit.run(current);
            }
            Err(field_errors) => {
                log::debug!("Order form has {} invalid fields", field_errors.len());
                errors.set(field_errors);
            }
        }
    };

    view! {
        <form class="order-form" on:submit=|ev| ev.prevent_default()>
            <h2>"Оформление заказа"</h2>
            <Input
                label="ФИО"
                name="fullName"
                value=Signal::derive(move || form.get().full_name)
                on_input=edit("fullName", |f, v| f.full_name = v)
                error=error_of("fullName")
            />
            <Input
                label="Телефон"
                name="phone"
                input_type="tel"
                placeholder="+7 900 000-00-00"
                value=Signal::derive(move || form.get().phone)
                on_input=edit("phone", |f, v| f.phone = v)
                error=error_of("phone")
            />
            <RadioGroup
                label="Способ доставки"
                name="deliveryMethod"
                value=Signal::derive(move || delivery.get().code().to_string())
                options=options(DeliveryMethod::all(), DeliveryMethod::code, DeliveryMethod::display_name)
                on_change=Callback::new(move |code: String| {
                    if let Some(method) = DeliveryMethod::from_code(&code) {
                        delivery.set(method);
                        if !method.requires_address() {
                            errors.update(|e| {
                                e.clear_field("address");
                                e.clear_field("city");
                            });
                        }
                    }
                })
            />
            <Show when=move || delivery.get().requires_address()>
                <Input
                    label="Адрес доставки"
                    name="address"
                    value=Signal::derive(move || form.get().address)
                    on_input=edit("address", |f, v| f.address = v)
                    error=error_of("address")
                />
                <Input
                    label="Город"
                    name="city"
                    value=Signal::derive(move || form.get().city)
                    on_input=edit("city", |f, v| f.city = v)
                    error=error_of("city")
                />
            </Show>
            <Select
                label="Мессенджер для связи"
                name="socialMedia"
                value=Signal::derive(move || form.get().social_media.code().to_string())
                options=options(SocialMedia::all(), SocialMedia::code, SocialMedia::display_name)
                on_change=Callback::new(move |code: String| {
                    if let Some(social) = SocialMedia::from_code(&code) {
                        form.update(|f| f.social_media = social);
                    }
                })
            />
            <Input
                label="Имя пользователя"
                name="socialMediaUsername"
                value=Signal::derive(move || form.get().social_media_username)
                on_input=edit("socialMediaUsername", |f, v| f.social_media_username = v)
                error=error_of("socialMediaUsername")
            />
            <RadioGroup
                label="Способ оплаты"
                name="paymentMethod"
                value=Signal::derive(move || form.get().payment_method.code().to_string())
                options=options(PaymentMethod::all(), PaymentMethod::code, PaymentMethod::display_name)
                on_change=Callback::new(move |code: String| {
                    if let Some(method) = PaymentMethod::from_code(&code) {
                        form.update(|f| f.payment_method = method);
                    }
                })
            />
            <Button
                appearance=ButtonAppearance::Primary
                disabled=submitting
                on_click=submit
            >
                {move || if submitting.get() { "Отправка..." } else { "Подтвердить заказ" }}
            </Button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_options() {
        let opts = options(DeliveryMethod::all(), DeliveryMethod::code, DeliveryMethod::display_name);
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[1], ("pickup".to_string(), "Самовывоз".to_string()));
    }
}
