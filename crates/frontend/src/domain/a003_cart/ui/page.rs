use contracts::domain::a003_cart::{CartAction, CartItem, MIN_QUANTITY};
use contracts::domain::a004_fabric_cart::{FabricCartAction, FabricCartItem};
use contracts::enums::delivery_method::DeliveryMethod;
use contracts::usecases::u501_checkout::{OrderForm, OrderSummary, PromoCode};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance};

use super::order_form::OrderFormPanel;
use crate::domain::a001_product::ui::card::product_href;
use crate::shared::components::ui::Input;
use crate::shared::components::PageHeader;
use crate::shared::price::rub;
use crate::shared::store_context::{use_cart, use_fabric_cart};

/// Задержка перед переходом на страницу успеха (мс)
const SUCCESS_REDIRECT_DELAY_MS: u32 = 2000;

/// Результат применения промокода для отображения под полем
#[derive(Debug, Clone, PartialEq)]
enum PromoMessage {
    Applied(String),
    Error(String),
}

/// Корзина: мебель и образцы тканей, промокод, форма заказа
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let fabric_cart = use_fabric_cart();
    let navigate = use_navigate();

    let promo_input = RwSignal::new(String::new());
    let promo = RwSignal::new(None::<PromoCode>);
    let promo_message = RwSignal::new(None::<PromoMessage>);
    let delivery = RwSignal::new(DeliveryMethod::default());
    let show_order_form = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let order_placed = RwSignal::new(false);

    let is_empty = move || cart.with(|c| c.is_empty()) && fabric_cart.with(|c| c.is_empty());
    let summary = Memo::new(move |_| {
        OrderSummary::compute(cart.with(|c| c.total_price), delivery.get(), promo.get())
    });

    let apply_promo = move |_| {
        let (code, message) = apply_promo_code(&promo_input.get_untracked());
        if code.is_some() {
            promo_input.set(String::new());
        }
        promo.set(code);
        promo_message.set(Some(message));
    };
    let remove_promo = move |_| {
        promo.set(None);
        promo_message.set(None);
    };

    let clear_all = move |_| {
        cart.dispatch(CartAction::ClearCart);
        fabric_cart.dispatch(FabricCartAction::ClearCart);
        promo.set(None);
        promo_input.set(String::new());
        promo_message.set(None);
        show_order_form.set(false);
    };

    let on_submit = Callback::new(move |order: OrderForm| {
        log::info!(
            "Order placed: delivery={}, payment={}, total={}",
            order.delivery_method.code(),
            order.payment_method.code(),
            summary.get_untracked().total
        );
        submitting.set(true);
        order_placed.set(true);
        let navigate = navigate.clone();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SUCCESS_REDIRECT_DELAY_MS).await;
            cart.dispatch(CartAction::ClearCart);
            fabric_cart.dispatch(FabricCartAction::ClearCart);
            navigate("/success", Default::default());
        });
    });

    view! {
        <div class="container">
            <PageHeader title="Корзина" crumbs=vec![("Корзина".to_string(), "/cart".to_string())] />
            <Show
                when=move || !is_empty() || order_placed.get()
                fallback=|| view! {
                    <div class="cart__empty">
                        <p>"Ваша корзина пуста"</p>
                        <A href="/catalog">"Перейти в каталог"</A>
                    </div>
                }
            >
                <div class="cart">
                    <div class="cart__items">
                        <Show when=move || !cart.with(|c| c.is_empty())>
                            <h2>"Мебель"</h2>
                            <For
                                each=move || cart.with(|c| c.items.clone())
                                key=|item| (item.id.clone(), item.quantity)
                                children=|item| view! { <CartLine item=item /> }
                            />
                        </Show>
                        <Show when=move || !fabric_cart.with(|c| c.is_empty())>
                            <h2>"Образцы тканей"</h2>
                            <For
                                each=move || fabric_cart.with(|c| c.items.clone())
                                key=|item| (item.id.clone(), item.quantity)
                                children=|item| view! { <FabricCartLine item=item /> }
                            />
                        </Show>
                        <Button appearance=ButtonAppearance::Subtle on_click=clear_all>
                            "Очистить корзину"
                        </Button>
                    </div>

                    <aside class="cart__summary">
                        <div class="cart__promo">
                            {move || match promo.get() {
                                Some(code) => view! {
                                    <div class="cart__promo-applied">
                                        <span class="cart__promo-code">{code.code()}</span>
                                        <span class="cart__promo-description">{code.description()}</span>
                                        <button
                                            class="cart__promo-remove"
                                            aria-label="Удалить промокод"
                                            on:click=remove_promo
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                                .into_any(),
                                None => view! {
                                    <Input
                                        label="Промокод"
                                        name="promo"
                                        placeholder="Введите промокод"
                                        value=promo_input
                                        on_input=Callback::new(move |v: String| promo_input.set(v))
                                    />
                                    <Button appearance=ButtonAppearance::Secondary on_click=apply_promo>
                                        "Применить"
                                    </Button>
                                }
                                .into_any(),
                            }}
                            {move || promo_message.get().map(|message| match message {
                                PromoMessage::Applied(text) => view! { <p class="cart__promo-success">{text}</p> }.into_any(),
                                PromoMessage::Error(text) => view! { <p class="form__error">{text}</p> }.into_any(),
                            })}
                        </div>
                        <dl class="cart__totals">
                            <dt>"Товары"</dt>
                            <dd>{move || rub(summary.get().subtotal)}</dd>
                            <Show when=move || { summary.get().discount > 0.0 }>
                                <dt>"Скидка"</dt>
                                <dd>{move || format!("-{}", rub(summary.get().discount))}</dd>
                            </Show>
                            <dt>"Доставка"</dt>
                            <dd>
                                {move || {
                                    let shipping = summary.get().shipping;
                                    if shipping > 0.0 { rub(shipping) } else { "Бесплатно".to_string() }
                                }}
                            </dd>
                            <dt>"Итого"</dt>
                            <dd class="cart__total">{move || rub(summary.get().total)}</dd>
                        </dl>
                        <Show when=move || !show_order_form.get()>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| show_order_form.set(true)
                            >
                                "Оформить заказ"
                            </Button>
                        </Show>
                    </aside>
                </div>

                <Show when=move || show_order_form.get()>
                    <Show
                        when=move || !order_placed.get()
                        fallback=|| view! {
                            <div class="cart__success">
                                <h2>"Заказ успешно оформлен!"</h2>
                                <p>"Мы свяжемся с вами в ближайшее время"</p>
                            </div>
                        }
                    >
                        <OrderFormPanel delivery=delivery on_submit=on_submit submitting=submitting />
                    </Show>
                </Show>
            </Show>
        </div>
    }
}

/// Применить введённый промокод: код (если он действителен) и сообщение под полем
fn apply_promo_code(input: &str) -> (Option<PromoCode>, PromoMessage) {
    match PromoCode::parse(input) {
        Ok(code) => (
            Some(code),
            PromoMessage::Applied(format!("Промокод {} успешно применен!", code.code())),
        ),
        Err(e) => (None, PromoMessage::Error(e.to_string())),
    }
}

/// Количество после кнопки "−": не меньше минимального
fn decreased(quantity: u32) -> u32 {
    quantity.saturating_sub(1).max(MIN_QUANTITY)
}

/// Количество после кнопки "+"
fn increased(quantity: u32) -> u32 {
    quantity.saturating_add(1)
}

/// Позиция мебели
#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let cart = use_cart();
    let id = item.id.clone();
    let quantity = item.quantity;

    let set_quantity = {
        let id = id.clone();
        move |quantity: u32| {
            cart.dispatch(CartAction::UpdateQuantity {
                id: id.clone(),
                quantity,
            });
        }
    };
    let decrease = {
        let set_quantity = set_quantity.clone();
        move |_| set_quantity(decreased(quantity))
    };
    let increase = move |_| set_quantity(increased(quantity));
    let remove = move |_| {
        cart.dispatch(CartAction::RemoveFromCart(id.clone()));
    };

    let href = product_href(&item.product);
    let image = item.product.main_image().unwrap_or_default().to_string();
    let size = item.size_label();

    view! {
        <div class="cart-line">
            <img class="cart-line__image" src=image />
            <div class="cart-line__info">
                <A href=href>{item.product.name.clone()}</A>
                {size.map(|s| view! { <div class="cart-line__option">{format!("Размер: {}", s)}</div> })}
                {item.with_mechanism.then(|| view! {
                    <div class="cart-line__option">"С подъёмным механизмом"</div>
                })}
                <div class="cart-line__unit-price">{rub(item.unit_price)}</div>
            </div>
            <div class="cart-line__quantity">
                <button disabled={quantity <= MIN_QUANTITY} on:click=decrease>"−"</button>
                <span>{quantity}</span>
                <button on:click=increase>"+"</button>
            </div>
            <div class="cart-line__total">{rub(item.total_price)}</div>
            <button class="cart-line__remove" aria-label="Удалить" on:click=remove>"×"</button>
        </div>
    }
}

/// Образец ткани
#[component]
fn FabricCartLine(item: FabricCartItem) -> impl IntoView {
    let fabric_cart = use_fabric_cart();
    let id = item.id.clone();
    let quantity = item.quantity;

    let set_quantity = {
        let id = id.clone();
        move |quantity: u32| {
            fabric_cart.dispatch(FabricCartAction::UpdateQuantity {
                id: id.clone(),
                quantity,
            });
        }
    };
    let decrease = {
        let set_quantity = set_quantity.clone();
        move |_| set_quantity(decreased(quantity))
    };
    let increase = move |_| set_quantity(increased(quantity));
    let remove = move |_| {
        fabric_cart.dispatch(FabricCartAction::RemoveFromCart(id.clone()));
    };

    view! {
        <div class="cart-line cart-line--fabric">
            <img class="cart-line__image" src=item.variant.image.clone() />
            <div class="cart-line__info">
                <div>{format!("{} · {}", item.category_name_ru, item.collection_name_ru)}</div>
                <div class="cart-line__option">{format!("Цвет: {}", item.variant.color.ru)}</div>
            </div>
            <div class="cart-line__quantity">
                <button disabled={quantity <= MIN_QUANTITY} on:click=decrease>"−"</button>
                <span>{quantity}</span>
                <button on:click=increase>"+"</button>
            </div>
            <div class="cart-line__total">"Бесплатно"</div>
            <button class="cart-line__remove" aria-label="Удалить" on:click=remove>"×"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_fabric::FabricVariant;
    use contracts::domain::a004_fabric_cart::FabricCartState;
    use contracts::domain::common::StateContainer;

    #[test]
    fn test_quantity_steps_stay_at_or_above_minimum() {
        assert_eq!(decreased(3), 2);
        assert_eq!(decreased(1), MIN_QUANTITY);
        assert_eq!(decreased(0), MIN_QUANTITY);
        assert_eq!(increased(1), 2);
        assert_eq!(increased(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_fabric_line_steps_update_the_fabric_cart() {
        let variant = FabricVariant {
            id: 4,
            ..Default::default()
        };
        let item = FabricCartItem::new("velour", "Велюр", "Monolith", "Монолит", variant);
        let id = item.id.clone();
        let mut state = FabricCartState::default();
        state.reduce(FabricCartAction::AddToCart(item));

        state.reduce(FabricCartAction::UpdateQuantity {
            id: id.clone(),
            quantity: increased(state.items[0].quantity),
        });
        assert_eq!(state.total_items, 2);

        for _ in 0..3 {
            state.reduce(FabricCartAction::UpdateQuantity {
                id: id.clone(),
                quantity: decreased(state.items[0].quantity),
            });
        }
        assert_eq!(state.items[0].quantity, 1);
        assert_eq!(state.total_items, 1);
    }

    #[test]
    fn test_apply_promo_code() {
        let (code, message) = apply_promo_code(" мебель15 ");
        assert_eq!(code, Some(PromoCode::Furniture15));
        assert_eq!(
            message,
            PromoMessage::Applied("Промокод МЕБЕЛЬ15 успешно применен!".to_string())
        );

        let (code, message) = apply_promo_code("СКИДКА99");
        assert_eq!(code, None);
        assert_eq!(message, PromoMessage::Error("Недействительный промокод".to_string()));

        let (code, _) = apply_promo_code("   ");
        assert_eq!(code, None);
    }
}
