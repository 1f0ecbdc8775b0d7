/// Неразрывный пробел - разделитель разрядов в ru-RU
const RU_GROUP_SEPARATOR: char = '\u{a0}';

fn group_digits(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    group_digits(&n.to_string(), '.')
}

/// Форматирует цену по правилам ru-RU: разряды через неразрывный пробел,
/// дробная часть через запятую (не более двух знаков, без хвостовых нулей).
///
/// Нечисловое значение форматируется как `"0"`.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "0".to_string();
    }

    let kopecks = (price.abs() * 100.0).round() as u128;
    let whole = kopecks / 100;
    let fraction = kopecks % 100;

    let mut result = String::new();
    if price < 0.0 && kopecks > 0 {
        result.push('-');
    }
    result.push_str(&group_digits(&whole.to_string(), RU_GROUP_SEPARATOR));

    if fraction > 0 {
        let fraction = format!("{:02}", fraction);
        result.push(',');
        result.push_str(fraction.trim_end_matches('0'));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(950.0), "950");
        assert_eq!(format_price(45990.0), "45\u{a0}990");
        assert_eq!(format_price(1234567.5), "1\u{a0}234\u{a0}567,5");
        assert_eq!(format_price(99.99), "99,99");
        assert_eq!(format_price(-1500.0), "-1\u{a0}500");
        assert_eq!(format_price(f64::NAN), "0");
    }
}
