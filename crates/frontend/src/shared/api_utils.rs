//! Адреса backend API.
//!
//! Витрина и backend живут на одном хосте, backend слушает свой порт.

/// Порт backend (см. `[server] port` в config.toml)
const BACKEND_PORT: u16 = 3000;

/// Базовый адрес API по текущему `window.location`.
///
/// Без `window` (например, в нативных тестах) возвращает пустую строку,
/// и запросы уходят по относительному пути.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    origin(&protocol, &host)
}

fn origin(protocol: &str, host: &str) -> String {
    format!("{}//{}:{}", protocol, host, BACKEND_PORT)
}

/// Полный адрес запроса: `api_url("/api/products/popular")`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Закодировать сегмент пути (имена коллекций тканей содержат пробелы)
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_uses_backend_port() {
        assert_eq!(origin("https:", "shop.example"), "https://shop.example:3000");
    }

    #[test]
    fn test_path_segment_encodes_spaces_and_cyrillic() {
        assert_eq!(path_segment("Soft Line"), "Soft%20Line");
        assert_eq!(path_segment("Велюр"), "%D0%92%D0%B5%D0%BB%D1%8E%D1%80");
    }
}
