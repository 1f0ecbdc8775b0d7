use async_trait::async_trait;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_fabric::{FabricCatalogDocument, FabricCategory};
use contracts::enums::product_category::ProductCategory;
use serde::de::DeserializeOwned;

use super::{CatalogError, CatalogSource};
use crate::shared::config::CatalogConfig;

/// HTTP-клиент удалённого каталога (mock API мебели и тканей)
pub struct CatalogClient {
    client: reqwest::Client,
    products_base_url: String,
    fabrics_base_url: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            products_base_url: config.products_base_url.trim_end_matches('/').to_string(),
            fabrics_base_url: config.fabrics_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn products_url(&self, category: ProductCategory) -> String {
        format!("{}/{}", self.products_base_url, category.code())
    }

    fn fabrics_url(&self) -> String {
        format!("{}/craft", self.fabrics_base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Catalog API request failed: {} {}", status, url);
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_products(&self, category: ProductCategory) -> Result<Vec<Product>, CatalogError> {
        let url = self.products_url(category);
        let products: Vec<Product> = self.get_json(&url).await?;
        tracing::debug!("Fetched {} products from {}", products.len(), url);
        Ok(products)
    }

    async fn fetch_fabric_categories(&self) -> Result<Vec<FabricCategory>, CatalogError> {
        let url = self.fabrics_url();
        // API отдаёт массив документов, категории лежат в первом
        let documents: Vec<FabricCatalogDocument> = self.get_json(&url).await?;
        documents
            .into_iter()
            .next()
            .map(|doc| doc.categories)
            .ok_or(CatalogError::EmptyDocument(url))
    }

    fn source_name(&self) -> &str {
        "mokky"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_from_config() {
        let config = CatalogConfig {
            products_base_url: "http://localhost:9000/".to_string(),
            fabrics_base_url: "http://localhost:9001".to_string(),
            timeout_secs: 5,
        };
        let client = CatalogClient::new(&config).unwrap();
        assert_eq!(
            client.products_url(ProductCategory::Sofa),
            "http://localhost:9000/sofa"
        );
        assert_eq!(
            client.products_url(ProductCategory::Bed),
            "http://localhost:9000/bed"
        );
        assert_eq!(client.fabrics_url(), "http://localhost:9001/craft");
    }
}
