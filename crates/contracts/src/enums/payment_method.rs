use serde::{Deserialize, Serialize};

/// Способ оплаты заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    #[default]
    Card,
    Online,
    Installment,
    Credit,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Online => "online",
            PaymentMethod::Installment => "installment",
            PaymentMethod::Credit => "credit",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Наличными при получении",
            PaymentMethod::Card => "Банковской картой",
            PaymentMethod::Online => "Онлайн на сайте",
            PaymentMethod::Installment => "Рассрочка",
            PaymentMethod::Credit => "Кредит",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Cash,
            PaymentMethod::Card,
            PaymentMethod::Online,
            PaymentMethod::Installment,
            PaymentMethod::Credit,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}
