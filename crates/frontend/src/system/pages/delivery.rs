use leptos::prelude::*;

use crate::shared::components::PageHeader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum InfoTab {
    #[default]
    Delivery,
    Payment,
    Faq,
}

impl InfoTab {
    fn title(&self) -> &'static str {
        match self {
            InfoTab::Delivery => "Доставка",
            InfoTab::Payment => "Оплата",
            InfoTab::Faq => "Вопросы и ответы",
        }
    }

    fn all() -> [InfoTab; 3] {
        [InfoTab::Delivery, InfoTab::Payment, InfoTab::Faq]
    }
}

/// Вопросы и ответы: (вопрос, ответ)
const FAQ: [(&str, &str); 4] = [
    (
        "Как отслеживать статус заказа?",
        "После оформления заказа вы получите уникальный номер, по которому можно отслеживать статус \
         в личном кабинете или уточнить у менеджера по телефону.",
    ),
    (
        "Что делать, если товар не подошел?",
        "Вы можете вернуть товар в течение 14 дней с момента получения, если он не был в использовании \
         и сохранил товарный вид. Для этого свяжитесь с нашим менеджером.",
    ),
    (
        "Как оформить доставку в другой город?",
        "При оформлении заказа укажите адрес доставки. Наш менеджер свяжется с вами для уточнения \
         деталей и согласования даты доставки.",
    ),
    (
        "Можно ли заказать сборку мебели?",
        "Да, мы предоставляем услугу сборки мебели. Стоимость зависит от сложности и объема работ. \
         Уточните детали у менеджера при оформлении заказа.",
    ),
];

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="info__list">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
fn DeliverySection() -> impl IntoView {
    view! {
        <div class="info__section">
            <p>
                "Мы осуществляем доставку по всей территории Республики Беларусь. "
                "Доставка осуществляется бесплатно при заказе от 500 рублей."
            </p>
            <h3>"Сроки доставки:"</h3>
            {bullet_list(&["Минск - 1-2 дня", "Областные центры - 2-3 дня", "Другие населенные пункты - 3-5 дней"])}
            <p>"Точную дату доставки вы можете уточнить у менеджера при оформлении заказа."</p>
            <img class="info__image" src="/furniture-delivery.png" alt="Доставка мебели" />
        </div>
    }
}

#[component]
fn PaymentSection() -> impl IntoView {
    view! {
        <div class="info__section">
            <p>"Мы предлагаем несколько способов оплаты для вашего удобства:"</p>
            {bullet_list(&[
                "Наличными при получении",
                "Банковской картой при получении",
                "Онлайн-оплата на сайте",
                "Безналичный расчет (для юридических лиц)",
            ])}
            <h3>"Рассрочка и кредит:"</h3>
            <p>
                "Мы сотрудничаем с ведущими банками Беларуси и предлагаем возможность приобретения "
                "мебели в рассрочку или кредит:"
            </p>
            {bullet_list(&[
                "Рассрочка от Альфа-Банка - до 4 месяцев без процентов",
                "Рассрочка от БеларусБанка - до 6 месяцев без процентов",
                "Кредит - до 36 месяцев по тарифам банка",
            ])}
            <img class="info__image" src="/payment-methods.png" alt="Способы оплаты" />
        </div>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <div class="info__faq">
            {FAQ
                .into_iter()
                .map(|(question, answer)| view! {
                    <div class="info__faq-item">
                        <h3>{question}</h3>
                        <p>{answer}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Доставка и оплата: три вкладки
#[component]
pub fn DeliveryPage() -> impl IntoView {
    let tab = RwSignal::new(InfoTab::default());

    view! {
        <div class="container">
            <PageHeader
                title="Доставка и оплата"
                crumbs=vec![("Доставка и оплата".to_string(), "/delivery".to_string())]
            />
            <div class="info__tabs">
                {InfoTab::all()
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class="info__tab"
                            class:info__tab--active=move || tab.get() == t
                            on:click=move |_| tab.set(t)
                        >
                            {t.title()}
                        </button>
                    })
                    .collect_view()}
            </div>
            {move || match tab.get() {
                InfoTab::Delivery => view! { <DeliverySection /> }.into_any(),
                InfoTab::Payment => view! { <PaymentSection /> }.into_any(),
                InfoTab::Faq => view! { <FaqSection /> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_start_with_delivery() {
        assert_eq!(InfoTab::default(), InfoTab::Delivery);
        let titles: Vec<_> = InfoTab::all().iter().map(InfoTab::title).collect();
        assert_eq!(titles, vec!["Доставка", "Оплата", "Вопросы и ответы"]);
    }
}
