//! API client for catalog routes of the backend
//!
//! Все функции возвращают `Result<_, String>`; вызывающий код логирует
//! ошибку и показывает пустой список.

use contracts::domain::a001_product::{PriceRange, Product};
use contracts::domain::a002_fabric::{FabricCategory, FabricCollection};
use contracts::enums::product_category::{CategoryFilter, ProductCategory};
use contracts::enums::sort_option::SortOption;
use contracts::shared::filters::{FabricFilterQuery, FabricFilters, ProductFilterQuery, ProductFilters};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::api_utils::{api_url, path_segment};

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse(response).await
}

/// Как `get_json`, но 404 означает "не найдено", а не ошибку
async fn get_optional<T: DeserializeOwned>(url: &str) -> Result<Option<T>, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() == 404 {
        return Ok(None);
    }
    parse(response).await.map(Some)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

// ============================================================================
// Products
// ============================================================================

/// GET /api/products?category&sort
pub async fn fetch_products(category: CategoryFilter, sort: SortOption) -> Result<Vec<Product>, String> {
    get_json(&api_url(&format!(
        "/api/products?category={}&sort={}",
        category.code(),
        sort.code()
    )))
    .await
}

/// GET /api/products/popular?limit
pub async fn fetch_popular(limit: usize) -> Result<Vec<Product>, String> {
    get_json(&api_url(&format!("/api/products/popular?limit={}", limit))).await
}

/// GET /api/products/price-range
pub async fn fetch_price_range() -> Result<PriceRange, String> {
    get_json(&api_url("/api/products/price-range")).await
}

/// GET /api/products/:category/:slug
pub async fn fetch_product(category: ProductCategory, slug: &str) -> Result<Option<Product>, String> {
    get_optional(&api_url(&format!(
        "/api/products/{}/{}",
        category.code(),
        path_segment(slug)
    )))
    .await
}

/// GET /api/check-product-filters - предпросмотр результата фильтров
pub async fn check_product_filters(filters: &ProductFilters) -> Result<Vec<Product>, String> {
    let query = serde_qs::to_string(&ProductFilterQuery::from(filters)).map_err(|e| e.to_string())?;
    get_json(&api_url(&format!("/api/check-product-filters?{}", query))).await
}

// ============================================================================
// Fabrics
// ============================================================================

/// GET /api/fabrics
pub async fn fetch_fabric_categories() -> Result<Vec<FabricCategory>, String> {
    get_json(&api_url("/api/fabrics")).await
}

/// GET /api/fabrics/:category
pub async fn fetch_fabric_category(category: &str) -> Result<Option<FabricCategory>, String> {
    get_optional(&api_url(&format!("/api/fabrics/{}", path_segment(category)))).await
}

/// GET /api/fabrics/:category/:collection
pub async fn fetch_fabric_collection(
    category: &str,
    collection: &str,
) -> Result<Option<FabricCollection>, String> {
    get_optional(&api_url(&format!(
        "/api/fabrics/{}/{}",
        path_segment(category),
        path_segment(collection)
    )))
    .await
}

/// GET /api/check-fabric-filters - коллекции категории после фильтров
pub async fn check_fabric_filters(
    category: &str,
    filters: &FabricFilters,
) -> Result<Vec<FabricCollection>, String> {
    let query = serde_qs::to_string(&FabricFilterQuery::new(category, filters))
        .map_err(|e| e.to_string())?;
    get_json(&api_url(&format!("/api/check-fabric-filters?{}", query))).await
}
