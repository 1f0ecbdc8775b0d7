use contracts::shared::format::format_price;

/// Цена в рублях для отображения: `45 990 ₽`
pub fn rub(price: f64) -> String {
    format!("{}\u{a0}₽", format_price(price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rub() {
        assert_eq!(rub(45990.0), "45\u{a0}990\u{a0}₽");
        assert_eq!(rub(0.0), "0\u{a0}₽");
    }
}
