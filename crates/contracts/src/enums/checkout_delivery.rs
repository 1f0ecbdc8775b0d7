use serde::{Deserialize, Serialize};

/// Доставка на странице оформления заказа мебели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutDelivery {
    #[default]
    Standard,
    Express,
}

impl CheckoutDelivery {
    pub fn code(&self) -> &'static str {
        match self {
            CheckoutDelivery::Standard => "standard",
            CheckoutDelivery::Express => "express",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutDelivery::Standard => "Стандартная доставка (3-5 рабочих дней)",
            CheckoutDelivery::Express => "Экспресс-доставка (1-2 рабочих дня)",
        }
    }

    /// Стоимость доставки в рублях: стандартная бесплатна
    pub fn price(&self) -> f64 {
        match self {
            CheckoutDelivery::Standard => 0.0,
            CheckoutDelivery::Express => 300.0,
        }
    }

    pub fn all() -> Vec<CheckoutDelivery> {
        vec![CheckoutDelivery::Standard, CheckoutDelivery::Express]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "standard" => Some(CheckoutDelivery::Standard),
            "express" => Some(CheckoutDelivery::Express),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_prices() {
        for delivery in CheckoutDelivery::all() {
            assert_eq!(CheckoutDelivery::from_code(delivery.code()), Some(delivery));
        }
        assert_eq!(CheckoutDelivery::default(), CheckoutDelivery::Standard);
        assert_eq!(CheckoutDelivery::Standard.price(), 0.0);
        assert_eq!(CheckoutDelivery::Express.price(), 300.0);
        assert_eq!(CheckoutDelivery::from_code("courier"), None);
    }
}
