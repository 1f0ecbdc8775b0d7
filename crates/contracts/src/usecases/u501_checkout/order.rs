use serde::{Deserialize, Serialize};

use crate::enums::delivery_method::DeliveryMethod;

/// Промокод витрины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromoCode {
    /// Скидка 15% на весь заказ
    Furniture15,
    /// Скидка 10% на весь заказ
    Sofa10,
    /// Бесплатная доставка
    FreeDelivery,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromoError {
    #[error("Введите промокод")]
    Empty,
    #[error("Недействительный промокод")]
    Unknown,
}

impl PromoCode {
    pub fn code(&self) -> &'static str {
        match self {
            PromoCode::Furniture15 => "МЕБЕЛЬ15",
            PromoCode::Sofa10 => "ДИВАН10",
            PromoCode::FreeDelivery => "ДОСТАВКА",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PromoCode::Furniture15 => "Скидка 15% на весь заказ",
            PromoCode::Sofa10 => "Скидка 10% на весь заказ",
            PromoCode::FreeDelivery => "Бесплатная доставка",
        }
    }

    /// Доля скидки от суммы товаров
    pub fn discount_rate(&self) -> f64 {
        match self {
            PromoCode::Furniture15 => 0.15,
            PromoCode::Sofa10 => 0.1,
            PromoCode::FreeDelivery => 0.0,
        }
    }

    pub fn free_shipping(&self) -> bool {
        matches!(self, PromoCode::FreeDelivery)
    }

    pub fn all() -> Vec<PromoCode> {
        vec![PromoCode::Furniture15, PromoCode::Sofa10, PromoCode::FreeDelivery]
    }

    /// Разобрать введённый пользователем код (пробелы и регистр не важны)
    pub fn parse(input: &str) -> Result<Self, PromoError> {
        let normalized = input.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(PromoError::Empty);
        }
        Self::all()
            .into_iter()
            .find(|p| p.code() == normalized)
            .ok_or(PromoError::Unknown)
    }
}

/// Итоговый расчёт заказа
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub discount: f64,
    pub shipping: f64,
    pub total: f64,
}

impl OrderSummary {
    pub fn compute(subtotal: f64, delivery: DeliveryMethod, promo: Option<PromoCode>) -> Self {
        Self::with_shipping(subtotal, delivery.price(), promo)
    }

    /// Расчёт с заданной стоимостью доставки (промокод может её обнулить)
    pub fn with_shipping(subtotal: f64, delivery_price: f64, promo: Option<PromoCode>) -> Self {
        let discount = promo
            .map(|p| (subtotal * p.discount_rate()).round())
            .unwrap_or(0.0);
        let shipping = if promo.is_some_and(|p| p.free_shipping()) {
            0.0
        } else {
            delivery_price
        };
        Self {
            subtotal,
            discount,
            shipping,
            total: subtotal - discount + shipping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_promo() {
        assert_eq!(PromoCode::parse("  мебель15 "), Ok(PromoCode::Furniture15));
        assert_eq!(PromoCode::parse("ДОСТАВКА"), Ok(PromoCode::FreeDelivery));
        assert_eq!(PromoCode::parse("   "), Err(PromoError::Empty));
        assert_eq!(PromoCode::parse("SALE"), Err(PromoError::Unknown));
    }

    #[test]
    fn test_order_summary() {
        let summary = OrderSummary::compute(45990.0, DeliveryMethod::Courier, None);
        assert_eq!(summary.total, 46290.0);

        let summary =
            OrderSummary::compute(45990.0, DeliveryMethod::Express, Some(PromoCode::Furniture15));
        assert_eq!(summary.discount, 6899.0);
        assert_eq!(summary.shipping, 500.0);
        assert_eq!(summary.total, 45990.0 - 6899.0 + 500.0);

        let summary =
            OrderSummary::compute(1000.0, DeliveryMethod::Express, Some(PromoCode::FreeDelivery));
        assert_eq!(summary.discount, 0.0);
        assert_eq!(summary.total, 1000.0);
    }

    #[test]
    fn test_checkout_delivery_totals() {
        use crate::enums::checkout_delivery::CheckoutDelivery;

        let standard = OrderSummary::with_shipping(45990.0, CheckoutDelivery::Standard.price(), None);
        assert_eq!(standard.shipping, 0.0);
        assert_eq!(standard.total, 45990.0);

        let express = OrderSummary::with_shipping(45990.0, CheckoutDelivery::Express.price(), None);
        assert_eq!(express.shipping, 300.0);
        assert_eq!(express.total, 46290.0);
    }
}
