use serde::de::DeserializeOwned;
use serde::Serialize;

use super::storage::{KeyValueStorage, StorageError};

/// Ошибки границы сохранения/загрузки стора
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("invalid persisted state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Контейнер клиентского состояния (корзина, избранное, просмотренное).
///
/// Состояние меняется только через `reduce`. Агрегаты (итоги, счётчики)
/// пересчитываются внутри `reduce`, поэтому любая последовательность
/// действий сохраняет инварианты контейнера.
pub trait StateContainer: Default + Clone + Serialize + DeserializeOwned {
    /// Действие, которое принимает редьюсер
    type Action;

    /// Ключ в key-value хранилище, которым владеет контейнер
    const STORAGE_KEY: &'static str;

    /// Применить действие. Возвращает `true`, если состояние изменилось.
    fn reduce(&mut self, action: Self::Action) -> bool;

    /// Превратить сохранённый снимок в последовательность действий.
    ///
    /// Гидратация проигрывает эти действия через `reduce` вместо прямого
    /// присваивания, так что сохранённые данные проходят те же проверки,
    /// что и действия пользователя.
    fn replay(persisted: Self) -> Vec<Self::Action>;
}

/// Стор одного контейнера состояния с явной границей `load`/`save`.
#[derive(Debug, Clone)]
pub struct Store<S, B> {
    state: S,
    storage: B,
}

impl<S, B> Store<S, B>
where
    S: StateContainer,
    B: KeyValueStorage,
{
    /// Пустой стор без чтения хранилища
    pub fn new(storage: B) -> Self {
        Self {
            state: S::default(),
            storage,
        }
    }

    /// Создать стор и один раз гидратировать его из хранилища.
    ///
    /// Отсутствующий ключ даёт пустое состояние. Повреждённый JSON
    /// логируется и тоже даёт пустое состояние.
    pub fn load(storage: B) -> Self {
        let mut store = Self::new(storage);

        match store.read_persisted() {
            Ok(Some(snapshot)) => {
                let actions = S::replay(snapshot);
                log::debug!(
                    "Hydrating '{}' with {} persisted entries",
                    S::STORAGE_KEY,
                    actions.len()
                );
                for action in actions {
                    store.state.reduce(action);
                }
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("Failed to load '{}' from storage: {}", S::STORAGE_KEY, e);
            }
        }

        if let Err(e) = store.save() {
            log::error!("Failed to save '{}' to storage: {}", S::STORAGE_KEY, e);
        }

        store
    }

    fn read_persisted(&self) -> Result<Option<S>, StoreError> {
        let Some(raw) = self.storage.get_item(S::STORAGE_KEY)? else {
            return Ok(None);
        };
        let snapshot = serde_json::from_str::<S>(&raw)?;
        Ok(Some(snapshot))
    }

    /// Записать состояние целиком под ключ контейнера
    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.state)?;
        self.storage.set_item(S::STORAGE_KEY, &json)?;
        Ok(())
    }

    /// Применить действие и сохранить состояние, если оно изменилось.
    ///
    /// Ошибка записи логируется: состояние в памяти остаётся актуальным.
    pub fn dispatch(&mut self, action: S::Action) -> bool {
        let changed = self.state.reduce(action);
        if changed {
            if let Err(e) = self.save() {
                log::error!("Failed to save '{}' to storage: {}", S::STORAGE_KEY, e);
            }
        }
        changed
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::storage::MemoryStorage;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        values: Vec<u32>,
        total: u32,
    }

    enum CounterAction {
        Push(u32),
        Reset,
    }

    impl StateContainer for Counter {
        type Action = CounterAction;
        const STORAGE_KEY: &'static str = "counter";

        fn reduce(&mut self, action: CounterAction) -> bool {
            match action {
                CounterAction::Push(0) => false,
                CounterAction::Push(v) => {
                    self.values.push(v);
                    self.total = self.values.iter().sum();
                    true
                }
                CounterAction::Reset => {
                    *self = Counter::default();
                    true
                }
            }
        }

        fn replay(persisted: Self) -> Vec<CounterAction> {
            persisted.values.into_iter().map(CounterAction::Push).collect()
        }
    }

    #[test]
    fn test_dispatch_persists_and_load_replays() {
        let storage = MemoryStorage::new();
        let mut store: Store<Counter, _> = Store::load(storage.clone());
        store.dispatch(CounterAction::Push(2));
        store.dispatch(CounterAction::Push(3));

        let reloaded: Store<Counter, _> = Store::load(storage);
        assert_eq!(reloaded.state().values, vec![2, 3]);
        assert_eq!(reloaded.state().total, 5);
    }

    #[test]
    fn test_hydration_recomputes_aggregates() {
        let storage = MemoryStorage::new();
        // Тотал в хранилище намеренно неверный и содержит невалидный элемент
        storage
            .set_item("counter", r#"{"values":[4,0,6],"total":999}"#)
            .unwrap();

        let store: Store<Counter, _> = Store::load(storage.clone());
        assert_eq!(store.state().values, vec![4, 6]);
        assert_eq!(store.state().total, 10);

        let saved = storage.get_item("counter").unwrap().unwrap();
        assert_eq!(saved, r#"{"values":[4,6],"total":10}"#);
    }

    #[test]
    fn test_malformed_json_degrades_to_empty() {
        let storage = MemoryStorage::new();
        storage.set_item("counter", "{not json").unwrap();

        let store: Store<Counter, _> = Store::load(storage);
        assert_eq!(store.state(), &Counter::default());
    }

    #[test]
    fn test_noop_dispatch_does_not_write() {
        let storage = MemoryStorage::new();
        let mut store: Store<Counter, _> = Store::new(storage.clone());

        assert!(!store.dispatch(CounterAction::Push(0)));
        assert_eq!(storage.get_item("counter").unwrap(), None);

        assert!(store.dispatch(CounterAction::Reset));
        assert!(storage.get_item("counter").unwrap().is_some());
    }
}
