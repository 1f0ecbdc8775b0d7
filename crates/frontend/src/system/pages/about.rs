use leptos::prelude::*;

use crate::shared::components::PageHeader;

const ADVANTAGES: [&str; 5] = [
    "Собственное производство",
    "Гарантия качества на всю продукцию",
    "Индивидуальный подход к каждому клиенту",
    "Бесплатная доставка по всей Беларуси",
    "Возможность изготовления мебели по индивидуальным заказам",
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="container">
            <PageHeader title="О нас" crumbs=vec![("О нас".to_string(), "/about".to_string())] />
            <div class="about">
                <img class="about__image" src="/modern-furniture-showroom.png" alt="Наш магазин" />
                <div class="about__text">
                    <p>
                        "Мы - команда профессионалов, которая уже более 10 лет занимается производством "
                        "и продажей качественной мебели для дома. Наша миссия - создавать комфортное "
                        "пространство для жизни наших клиентов."
                    </p>
                    <p>
                        "Мы предлагаем широкий ассортимент мебели: диваны, кровати и другие предметы интерьера. "
                        "Вся продукция изготавливается из высококачественных материалов и соответствует "
                        "современным стандартам."
                    </p>
                    <p>"Наши преимущества:"</p>
                    <ul class="about__advantages">
                        {ADVANTAGES.into_iter().map(|a| view! { <li>{a}</li> }).collect_view()}
                    </ul>
                    <p>
                        "Мы стремимся к постоянному совершенствованию и развитию, чтобы предлагать "
                        "нашим клиентам лучшие решения для их дома."
                    </p>
                </div>
            </div>
        </div>
    }
}
