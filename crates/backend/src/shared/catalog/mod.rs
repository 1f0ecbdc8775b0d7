pub mod client;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_fabric::FabricCategory;
use contracts::enums::product_category::ProductCategory;

pub use client::CatalogClient;

/// Ошибки получения данных каталога
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Catalog API {url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("Catalog API {0} returned an empty document")]
    EmptyDocument(String),
}

/// Источник данных каталога: товары по категориям и документ тканей
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Все товары одной категории
    async fn fetch_products(&self, category: ProductCategory) -> Result<Vec<Product>, CatalogError>;

    /// Категории тканей
    async fn fetch_fabric_categories(&self) -> Result<Vec<FabricCategory>, CatalogError>;

    /// Название источника для логов
    fn source_name(&self) -> &str;
}
