//! Поколения запросов: отбрасывание устаревших ответов.
//!
//! Когда фильтры меняются быстрее, чем отвечает сервер, ответ на старый
//! запрос может прийти после ответа на новый. Каждый запрос получает
//! билет; применять ответ можно только пока билет актуален.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Билет конкретного запроса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Счётчик поколений. Клоны разделяют один счётчик.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начать новый запрос. Все ранее выданные билеты становятся устаревшими.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }

    /// Вернуть результат запроса, только если его билет ещё актуален
    pub fn settle<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }

    /// Сделать устаревшими все выданные билеты (например, при уходе со страницы)
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.clone().begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));

        generation.invalidate();
        assert!(!generation.is_current(second));
    }

    #[test]
    fn test_slow_earlier_response_is_dropped() {
        // Открыли товар A, затем сразу товар B; ответ для A пришёл последним
        let generation = RequestGeneration::new();
        let ticket_a = generation.begin();
        let ticket_b = generation.begin();

        assert_eq!(generation.settle(ticket_b, "B"), Some("B"));
        assert_eq!(generation.settle(ticket_a, "A"), None);

        // Уход со страницы отменяет и последний запрос
        let ticket_c = generation.begin();
        generation.invalidate();
        assert_eq!(generation.settle(ticket_c, "C"), None);
    }
}
