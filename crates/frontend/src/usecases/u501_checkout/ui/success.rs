use leptos::prelude::*;
use leptos_router::components::A;

/// Подтверждение оформленного заказа
#[component]
pub fn SuccessPage() -> impl IntoView {
    view! {
        <div class="container">
            <div class="success">
                <div class="success__icon">"✓"</div>
                <h1>"Заказ успешно оформлен"</h1>
                <p>"Спасибо за ваш заказ! Номер вашего заказа: " <strong>"#12345"</strong></p>
                <p>
                    "Мы отправили подтверждение на вашу электронную почту. "
                    "Наш менеджер свяжется с вами в ближайшее время для уточнения деталей."
                </p>
                <A href="/">"Вернуться на главную"</A>
            </div>
        </div>
    }
}
