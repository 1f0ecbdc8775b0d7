use leptos::prelude::*;

use crate::shared::components::PageHeader;

const PHONE: &str = "+375291234567";
const PHONE_DISPLAY: &str = "+375 (29) 123-45-67";
const EMAIL: &str = "info@furniture.by";
const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d75241.51082857054!2d27.5095355!3d53.8847125!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x46dbcfd35b1e6ad3%3A0xb61b853ddb570d9!2z0JzQuNC90YHQuiwg0JHQtdC70LDRgNGD0YHRjA!5e0!3m2!1sru!2sru!4v1620000000000!5m2!1sru!2sru";

#[component]
pub fn ContactsPage() -> impl IntoView {
    view! {
        <div class="container">
            <PageHeader title="Контакты" crumbs=vec![("Контакты".to_string(), "/contacts".to_string())] />
            <div class="contacts">
                <div class="contacts__info">
                    <div class="contacts__block">
                        <h2>"Адрес"</h2>
                        <p>"г. Минск, ул. Примерная, 123"</p>
                    </div>
                    <div class="contacts__block">
                        <h2>"Телефон"</h2>
                        <p><a href=format!("tel:{}", PHONE)>{PHONE_DISPLAY}</a></p>
                    </div>
                    <div class="contacts__block">
                        <h2>"Email"</h2>
                        <p><a href=format!("mailto:{}", EMAIL)>{EMAIL}</a></p>
                    </div>
                    <div class="contacts__block">
                        <h2>"Режим работы"</h2>
                        <p>"Пн-Пт: 9:00 - 20:00"</p>
                        <p>"Сб-Вс: 10:00 - 18:00"</p>
                    </div>
                </div>
                <iframe
                    class="contacts__map"
                    src=MAP_EMBED_URL
                    width="100%"
                    height="450"
                    {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                    title="Карта"
                ></iframe>
            </div>
        </div>
    }
}
