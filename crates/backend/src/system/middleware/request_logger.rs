use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use contracts::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог длительность (ms), размер ответа, статус, метод и путь.
/// Ответы с кодом не 2xx пишутся уровнем WARN.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                "{:>5}ms | {:>12} | {} {:>6} {} | {}",
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let duration = start.elapsed().as_millis();
    let size = format_number(bytes.len());
    if parts.status.is_success() {
        tracing::info!(
            "{:>5}ms | {:>12} | {} {:>6} {}",
            duration,
            size,
            parts.status.as_u16(),
            method,
            uri.path()
        );
    } else {
        tracing::warn!(
            "{:>5}ms | {:>12} | {} {:>6} {}",
            duration,
            size,
            parts.status.as_u16(),
            method,
            uri.path()
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
