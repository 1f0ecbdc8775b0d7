use contracts::domain::a001_product::{PriceRange, Product};
use contracts::enums::product_category::{CategoryFilter, ProductCategory};
use contracts::enums::sort_option::SortOption;
use contracts::shared::filters::{self, ProductFilters};

use crate::shared::catalog::CatalogSource;

/// Товары одной категории. Ошибка API логируется и даёт пустой список.
async fn fetch_category(source: &dyn CatalogSource, category: ProductCategory) -> Vec<Product> {
    match source.fetch_products(category).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!(
                "Error fetching {} from {}: {}",
                category.code(),
                source.source_name(),
                e
            );
            Vec::new()
        }
    }
}

/// Товары по фильтру категории: для `all` сначала диваны, затем кровати
pub async fn list_by_category(source: &dyn CatalogSource, category: CategoryFilter) -> Vec<Product> {
    let mut products = Vec::new();
    for c in category.categories() {
        products.extend(fetch_category(source, c).await);
    }
    products
}

/// Товары категории в заданном порядке
pub async fn list_sorted(
    source: &dyn CatalogSource,
    category: CategoryFilter,
    sort: SortOption,
) -> Vec<Product> {
    let mut products = list_by_category(source, category).await;
    filters::sort_products(&mut products, sort);
    products
}

/// Товары после применения фильтров каталога
pub async fn list_filtered(source: &dyn CatalogSource, product_filters: &ProductFilters) -> Vec<Product> {
    let products = list_by_category(source, product_filters.category).await;
    let filtered = product_filters.apply(products);
    tracing::debug!(
        "Product filters {:?} matched {} products",
        product_filters,
        filtered.len()
    );
    filtered
}

pub async fn popular(source: &dyn CatalogSource, limit: usize) -> Vec<Product> {
    let products = list_by_category(source, CategoryFilter::All).await;
    filters::popular_products(products, limit)
}

pub async fn price_range(source: &dyn CatalogSource) -> PriceRange {
    let products = list_by_category(source, CategoryFilter::All).await;
    filters::price_range(&products)
}

pub async fn get_by_slug(
    source: &dyn CatalogSource,
    category: ProductCategory,
    slug: &str,
) -> Option<Product> {
    fetch_category(source, category)
        .await
        .into_iter()
        .find(|p| p.slug == slug)
}
