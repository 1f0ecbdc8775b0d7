use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::enums::delivery_method::DeliveryMethod;
use crate::enums::payment_method::PaymentMethod;
use crate::enums::social_media::SocialMedia;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());

/// Ошибки валидации формы по полям. Показываются рядом с полем,
/// непустой набор блокирует отправку.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Сбросить ошибку поля при его редактировании
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, message);
        false
    } else {
        true
    }
}

// ============================================================================
// Checkout page form
// ============================================================================

/// Форма страницы оформления заказа
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        require(&mut errors, "firstName", &self.first_name, "Введите имя");
        require(&mut errors, "lastName", &self.last_name, "Введите фамилию");
        if require(&mut errors, "email", &self.email, "Введите email")
            && !EMAIL_RE.is_match(&self.email)
        {
            errors.insert("email", "Введите корректный email");
        }
        require(&mut errors, "phone", &self.phone, "Введите телефон");
        require(&mut errors, "address", &self.address, "Введите адрес");
        require(&mut errors, "city", &self.city, "Введите город");
        require(&mut errors, "postalCode", &self.postal_code, "Введите почтовый индекс");

        errors.into_result()
    }
}

// ============================================================================
// Cart order form
// ============================================================================

/// Форма заказа на странице корзины
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub full_name: String,
    pub phone: String,
    pub delivery_method: DeliveryMethod,
    pub address: String,
    pub city: String,
    pub social_media: SocialMedia,
    pub social_media_username: String,
    pub payment_method: PaymentMethod,
}

impl OrderForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        require(&mut errors, "fullName", &self.full_name, "Пожалуйста, введите ФИО");

        if require(&mut errors, "phone", &self.phone, "Пожалуйста, введите номер телефона") {
            let compact: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
            if !PHONE_RE.is_match(&compact) {
                errors.insert("phone", "Пожалуйста, введите корректный номер телефона");
            }
        }

        if self.delivery_method.requires_address() {
            require(&mut errors, "address", &self.address, "Пожалуйста, введите адрес доставки");
            require(&mut errors, "city", &self.city, "Пожалуйста, введите город");
        }

        require(
            &mut errors,
            "socialMediaUsername",
            &self.social_media_username,
            "Пожалуйста, введите имя пользователя",
        );

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_checkout() -> CheckoutForm {
        CheckoutForm {
            first_name: "Анна".to_string(),
            last_name: "Иванова".to_string(),
            email: "anna@example.ru".to_string(),
            phone: "+7 900 000-00-00".to_string(),
            address: "ул. Ленина, 1".to_string(),
            city: "Москва".to_string(),
            postal_code: "101000".to_string(),
        }
    }

    fn valid_order() -> OrderForm {
        OrderForm {
            full_name: "Иванов Иван".to_string(),
            phone: "+7 900 123 45 67".to_string(),
            address: "пр. Мира, 5".to_string(),
            city: "Казань".to_string(),
            social_media_username: "@ivan".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_checkout_form_valid() {
        assert!(valid_checkout().validate().is_ok());
    }

    #[test]
    fn test_checkout_form_collects_all_errors() {
        let errors = CheckoutForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get("email"), Some("Введите email"));

        let form = CheckoutForm {
            email: "not-an-email".to_string(),
            ..valid_checkout()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Введите корректный email"));
    }

    #[test]
    fn test_order_form_phone_rules() {
        assert!(valid_order().validate().is_ok());

        let form = OrderForm {
            phone: "12-34".to_string(),
            ..valid_order()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("phone"),
            Some("Пожалуйста, введите корректный номер телефона")
        );
    }

    #[test]
    fn test_order_form_pickup_skips_address() {
        let form = OrderForm {
            delivery_method: DeliveryMethod::Pickup,
            address: String::new(),
            city: String::new(),
            ..valid_order()
        };
        assert!(form.validate().is_ok());

        let form = OrderForm {
            delivery_method: DeliveryMethod::Express,
            ..form
        };
        let mut errors = form.validate().unwrap_err();
        assert!(errors.get("address").is_some());
        assert!(errors.get("city").is_some());

        errors.clear_field("address");
        errors.clear_field("city");
        assert!(errors.is_empty());
    }
}
