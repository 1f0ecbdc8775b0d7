use contracts::domain::a002_fabric::{find_category, FabricCategory, FabricCollection};
use contracts::shared::filters::FabricFilters;

use crate::shared::catalog::CatalogSource;

/// Все категории тканей. Ошибка API пробрасывается наверх.
pub async fn list_categories(source: &dyn CatalogSource) -> anyhow::Result<Vec<FabricCategory>> {
    let categories = source.fetch_fabric_categories().await?;
    Ok(categories)
}

/// Категория по имени без учёта регистра; при ошибке API - `None`
pub async fn get_category(source: &dyn CatalogSource, category_name: &str) -> Option<FabricCategory> {
    match list_categories(source).await {
        Ok(categories) => find_category(&categories, category_name).cloned(),
        Err(e) => {
            tracing::error!("Error fetching fabric category {}: {}", category_name, e);
            None
        }
    }
}

/// Коллекция по имени (английскому или русскому, возможно url-encoded)
pub async fn get_collection(
    source: &dyn CatalogSource,
    category_name: &str,
    collection_name: &str,
) -> Option<FabricCollection> {
    let category = get_category(source, category_name).await?;
    category.find_collection(collection_name).cloned()
}

/// Коллекции категории, прошедшие фильтры. Неизвестная категория - пустой список.
pub async fn filter_collections(
    source: &dyn CatalogSource,
    category_name: &str,
    fabric_filters: &FabricFilters,
) -> Vec<FabricCollection> {
    let Some(category) = get_category(source, category_name).await else {
        tracing::warn!("Fabric category not found: {}", category_name);
        return Vec::new();
    };
    let filtered: Vec<FabricCollection> = fabric_filters
        .apply(&category.collections)
        .into_iter()
        .cloned()
        .collect();
    tracing::debug!(
        "Fabric filters {:?} matched {} of {} collections in {}",
        fabric_filters,
        filtered.len(),
        category.collections.len(),
        category_name
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::memory::{sample, MemoryCatalog};

    fn names(collections: &[FabricCollection]) -> Vec<&str> {
        collections.iter().map(|c| c.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_categories_propagates_errors() {
        assert_eq!(list_categories(&sample()).await.unwrap().len(), 1);

        let catalog = MemoryCatalog {
            fabrics_unavailable: true,
            ..sample()
        };
        assert!(list_categories(&catalog).await.is_err());
        assert!(get_category(&catalog, "velour").await.is_none());
    }

    #[tokio::test]
    async fn test_get_category_and_collection() {
        let catalog = sample();
        assert!(get_category(&catalog, "VELOUR").await.is_some());
        assert!(get_category(&catalog, "chenille").await.is_none());

        let collection = get_collection(&catalog, "velour", "Soft%20Line").await;
        assert_eq!(collection.map(|c| c.name_ru), Some("Софт Лайн".to_string()));

        let collection = get_collection(&catalog, "velour", "бамбук").await;
        assert_eq!(collection.map(|c| c.name), Some("Bamboo".to_string()));
    }

    #[tokio::test]
    async fn test_filter_collections() {
        let catalog = sample();

        let all = filter_collections(&catalog, "velour", &FabricFilters::default()).await;
        assert_eq!(all.len(), 3);

        let in_stock = FabricFilters {
            availability: vec!["в наличии".to_string()],
            ..Default::default()
        };
        assert_eq!(
            names(&filter_collections(&catalog, "velour", &in_stock).await),
            vec!["Monolith", "Soft Line"]
        );

        let durable = FabricFilters {
            min_abrasion: Some(40000),
            ..Default::default()
        };
        assert_eq!(
            names(&filter_collections(&catalog, "velour", &durable).await),
            vec!["Monolith"]
        );

        assert!(filter_collections(&catalog, "chenille", &in_stock).await.is_empty());
    }
}
