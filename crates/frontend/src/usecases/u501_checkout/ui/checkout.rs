use contracts::domain::a003_cart::CartAction;
use contracts::enums::checkout_delivery::CheckoutDelivery;
use contracts::enums::payment_method::PaymentMethod;
use contracts::usecases::u501_checkout::{CheckoutForm, FieldErrors, OrderSummary};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance};

use crate::shared::components::ui::{Input, RadioGroup};
use crate::shared::components::PageHeader;
use crate::shared::price::rub;
use crate::shared::store_context::use_cart;

fn delivery_label(delivery: CheckoutDelivery) -> String {
    format!("{}: {}", delivery.display_name(), shipping_label(delivery.price()))
}

fn shipping_label(shipping: f64) -> String {
    if shipping > 0.0 {
        rub(shipping)
    } else {
        "Бесплатно".to_string()
    }
}

/// Оформление заказа мебели (без промокодов и образцов тканей)
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = use_cart();
    let navigate = use_navigate();
    let submitted = RwSignal::new(false);

    // Оформлять нечего - возвращаемся в корзину
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if cart.with(|c| c.is_empty()) && !submitted.get_untracked() {
                navigate("/cart", Default::default());
            }
        });
    }

    let form = RwSignal::new(CheckoutForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let delivery = RwSignal::new(CheckoutDelivery::Standard);
    let payment = RwSignal::new(PaymentMethod::Card);

    let summary = Memo::new(move |_| {
        OrderSummary::with_shipping(cart.with(|c| c.total_price), delivery.get().price(), None)
    });

    let edit = move |field: &'static str, apply: fn(&mut CheckoutForm, String)| {
        Callback::new(move |value: String| {
            form.update(|f| apply(f, value));
            errors.update(|e| e.clear_field(field));
        })
    };
    let error_of = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let submit = move |_| {
        let current = form.get_untracked();
        match current.validate() {
            Ok(()) => {
                log::info!(
                    "Checkout submitted: {} items, delivery={}, payment={}, total={}",
                    cart.with_untracked(|c| c.total_items),
                    delivery.get_untracked().code(),
                    payment.get_untracked().code(),
                    summary.get_untracked().total
                );
                submitted.set(true);
                cart.dispatch(CartAction::ClearCart);
                navigate("/success", Default::default());
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    let delivery_options = CheckoutDelivery::all()
        .into_iter()
        .map(|d| (d.code().to_string(), delivery_label(d)))
        .collect::<Vec<_>>();
    let payment_options = [PaymentMethod::Card, PaymentMethod::Cash]
        .into_iter()
        .map(|p| (p.code().to_string(), p.display_name().to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="container">
            <PageHeader
                title="Оформление заказа"
                crumbs=vec![
                    ("Корзина".to_string(), "/cart".to_string()),
                    ("Оформление".to_string(), "/checkout".to_string()),
                ]
            />
            <div class="checkout">
                <form class="checkout__form" on:submit=|ev| ev.prevent_default()>
                    <h2>"Контактные данные"</h2>
                    <Input label="Имя" name="firstName"
                        value=Signal::derive(move || form.get().first_name)
                        on_input=edit("firstName", |f, v| f.first_name = v)
                        error=error_of("firstName") />
                    <Input label="Фамилия" name="lastName"
                        value=Signal::derive(move || form.get().last_name)
                        on_input=edit("lastName", |f, v| f.last_name = v)
                        error=error_of("lastName") />
                    <Input label="Email" name="email" input_type="email"
                        value=Signal::derive(move || form.get().email)
                        on_input=edit("email", |f, v| f.email = v)
                        error=error_of("email") />
                    <Input label="Телефон" name="phone" input_type="tel"
                        value=Signal::derive(move || form.get().phone)
                        on_input=edit("phone", |f, v| f.phone = v)
                        error=error_of("phone") />

                    <h2>"Адрес доставки"</h2>
                    <Input label="Адрес" name="address"
                        value=Signal::derive(move || form.get().address)
                        on_input=edit("address", |f, v| f.address = v)
                        error=error_of("address") />
                    <Input label="Город" name="city"
                        value=Signal::derive(move || form.get().city)
                        on_input=edit("city", |f, v| f.city = v)
                        error=error_of("city") />
                    <Input label="Почтовый индекс" name="postalCode"
                        value=Signal::derive(move || form.get().postal_code)
                        on_input=edit("postalCode", |f, v| f.postal_code = v)
                        error=error_of("postalCode") />

                    <RadioGroup
                        label="Способ доставки"
                        name="deliveryMethod"
                        value=Signal::derive(move || delivery.get().code().to_string())
                        options=delivery_options
                        on_change=Callback::new(move |code: String| {
                            if let Some(method) = CheckoutDelivery::from_code(&code) {
                                delivery.set(method);
                            }
                        })
                    />
                    <RadioGroup
                        label="Способ оплаты"
                        name="paymentMethod"
                        value=Signal::derive(move || payment.get().code().to_string())
                        options=payment_options
                        on_change=Callback::new(move |code: String| {
                            if let Some(method) = PaymentMethod::from_code(&code) {
                                payment.set(method);
                            }
                        })
                    />

                    <div class="checkout__actions">
                        <A href="/cart">"Вернуться в корзину"</A>
                        <Button appearance=ButtonAppearance::Primary on_click=submit>
                            "Оформить заказ"
                        </Button>
                    </div>
                </form>

                <aside class="checkout__summary">
                    <h2>"Ваш заказ"</h2>
                    {move || {
                        cart.with(|c| {
                            c.items
                                .iter()
                                .map(|item| {
                                    let name = item.product.name.clone();
                                    let line = format!("{} × {}", item.quantity, rub(item.unit_price));
                                    view! {
                                        <div class="checkout__item">
                                            <span>{name}</span>
                                            <span>{line}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                    <dl class="cart__totals">
                        <dt>{move || format!("Товары ({})", cart.with(|c| c.total_items))}</dt>
                        <dd>{move || rub(summary.get().subtotal)}</dd>
                        <dt>"Доставка"</dt>
                        <dd>{move || shipping_label(summary.get().shipping)}</dd>
                        <dt>"Итого"</dt>
                        <dd class="cart__total">{move || rub(summary.get().total)}</dd>
                    </dl>
                </aside>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_labels() {
        assert_eq!(
            delivery_label(CheckoutDelivery::Standard),
            "Стандартная доставка (3-5 рабочих дней): Бесплатно"
        );
        assert!(delivery_label(CheckoutDelivery::Express).starts_with("Экспресс-доставка"));
        assert_eq!(shipping_label(0.0), "Бесплатно");
    }
}
