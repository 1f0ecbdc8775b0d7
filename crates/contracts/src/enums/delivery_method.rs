use serde::{Deserialize, Serialize};

/// Способ доставки заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    #[default]
    Courier,
    Pickup,
    Express,
}

impl DeliveryMethod {
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryMethod::Courier => "courier",
            DeliveryMethod::Pickup => "pickup",
            DeliveryMethod::Express => "express",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryMethod::Courier => "Курьерская доставка",
            DeliveryMethod::Pickup => "Самовывоз",
            DeliveryMethod::Express => "Экспресс-доставка (1-2 дня)",
        }
    }

    /// Стоимость доставки в рублях
    pub fn price(&self) -> f64 {
        match self {
            DeliveryMethod::Courier => 300.0,
            DeliveryMethod::Pickup => 0.0,
            DeliveryMethod::Express => 500.0,
        }
    }

    /// Нужен ли адрес доставки
    pub fn requires_address(&self) -> bool {
        !matches!(self, DeliveryMethod::Pickup)
    }

    pub fn all() -> Vec<DeliveryMethod> {
        vec![
            DeliveryMethod::Courier,
            DeliveryMethod::Pickup,
            DeliveryMethod::Express,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "courier" => Some(DeliveryMethod::Courier),
            "pickup" => Some(DeliveryMethod::Pickup),
            "express" => Some(DeliveryMethod::Express),
            _ => None,
        }
    }
}
