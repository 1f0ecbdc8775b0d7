use std::sync::Arc;

use crate::shared::catalog::CatalogSource;

/// Общее состояние приложения, передаётся в хендлеры через `State`
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self { catalog }
    }
}
