//! Каталог в памяти для тестов сервисов и хендлеров.

use async_trait::async_trait;
use contracts::domain::a001_product::{Price, Product, SizeWithMechanism};
use contracts::domain::a002_fabric::{FabricCategory, FabricCollection, TechnicalSpecifications};
use contracts::enums::product_category::ProductCategory;

use super::{CatalogError, CatalogSource};

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    pub sofas: Vec<Product>,
    pub beds: Vec<Product>,
    pub fabrics: Vec<FabricCategory>,
    /// Имитировать недоступность API тканей
    pub fabrics_unavailable: bool,
    /// Имитировать недоступность API кроватей
    pub beds_unavailable: bool,
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn fetch_products(&self, category: ProductCategory) -> Result<Vec<Product>, CatalogError> {
        match category {
            ProductCategory::Sofa => Ok(self.sofas.clone()),
            ProductCategory::Bed if self.beds_unavailable => Err(CatalogError::Status {
                url: "memory://bed".to_string(),
                status: 503,
            }),
            ProductCategory::Bed => Ok(self.beds.clone()),
        }
    }

    async fn fetch_fabric_categories(&self) -> Result<Vec<FabricCategory>, CatalogError> {
        if self.fabrics_unavailable {
            return Err(CatalogError::EmptyDocument("memory://craft".to_string()));
        }
        Ok(self.fabrics.clone())
    }

    fn source_name(&self) -> &str {
        "memory"
    }
}

pub fn product(id: &str, name: &str, price: f64, popularity: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        slug: name.to_lowercase(),
        price: Price {
            current: price,
            old: None,
        },
        popularity,
        ..Default::default()
    }
}

pub fn bed(id: &str, name: &str, price: f64, popularity: f64) -> Product {
    Product {
        bed: Some(vec![SizeWithMechanism {
            width: 160,
            length: 200,
            price,
            lifting_mechanism: Vec::new(),
        }]),
        ..product(id, name, price, popularity)
    }
}

fn collection(name: &str, name_ru: &str, kind: &str, availability: &str, abrasion: &str) -> FabricCollection {
    FabricCollection {
        name: name.to_string(),
        name_ru: name_ru.to_string(),
        kind: kind.to_string(),
        availability: availability.to_string(),
        technical_specifications: TechnicalSpecifications {
            abrasion_resistance: abrasion.to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Небольшой каталог: 3 дивана, 2 кровати, одна категория тканей
pub fn sample() -> MemoryCatalog {
    MemoryCatalog {
        sofas: vec![
            product("s1", "Chester", 45990.0, 4.9),
            product("s2", "Amsterdam", 29990.0, 4.2),
            product("s3", "Bruno", 61990.0, 4.7),
        ],
        beds: vec![
            bed("b1", "Loft", 38990.0, 4.8),
            bed("b2", "Nord", 24990.0, 3.9),
        ],
        fabrics: vec![FabricCategory {
            name: "velour".to_string(),
            name_ru: "Велюр".to_string(),
            description_ru: None,
            collections: vec![
                collection("Monolith", "Монолит", "Велюр", "В наличии", "50 000 циклов"),
                collection("Bamboo", "Бамбук", "Микровелюр", "Под заказ", "30000"),
                collection("Soft Line", "Софт Лайн", "Велюр", "В наличии", "нет данных"),
            ],
        }],
        ..Default::default()
    }
}
