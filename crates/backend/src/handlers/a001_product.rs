use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_product::{PriceRange, Product};
use contracts::enums::product_category::{CategoryFilter, ProductCategory};
use contracts::enums::sort_option::SortOption;
use contracts::shared::filters::{ProductFilterQuery, DEFAULT_POPULAR_LIMIT};
use serde::Deserialize;

use crate::domain::a001_product;
use crate::shared::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PopularQuery {
    pub limit: Option<String>,
}

/// GET /api/check-product-filters
pub async fn check_filters(
    State(state): State<AppState>,
    Query(query): Query<ProductFilterQuery>,
) -> Json<Vec<Product>> {
    let filters = query.into_filters();
    Json(a001_product::service::list_filtered(state.catalog.as_ref(), &filters).await)
}

/// GET /api/products
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Json<Vec<Product>> {
    let category = query
        .category
        .as_deref()
        .map(CategoryFilter::from_code)
        .unwrap_or_default();
    let sort = query
        .sort
        .as_deref()
        .map(SortOption::from_code)
        .unwrap_or_default();
    Json(a001_product::service::list_sorted(state.catalog.as_ref(), category, sort).await)
}

/// GET /api/products/popular
pub async fn popular(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> Json<Vec<Product>> {
    let limit = query
        .limit
        .as_deref()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_POPULAR_LIMIT);
    Json(a001_product::service::popular(state.catalog.as_ref(), limit).await)
}

/// GET /api/products/price-range
pub async fn price_range(State(state): State<AppState>) -> Json<PriceRange> {
    Json(a001_product::service::price_range(state.catalog.as_ref()).await)
}

/// GET /api/products/:category/:slug
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path((category, slug)): Path<(String, String)>,
) -> Result<Json<Product>, StatusCode> {
    let category = ProductCategory::from_code(&category).ok_or(StatusCode::NOT_FOUND)?;
    match a001_product::service::get_by_slug(state.catalog.as_ref(), category, &slug).await {
        Some(v) => Ok(Json(v)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::memory::sample;
    use std::sync::Arc;

    fn state() -> State<AppState> {
        State(AppState::new(Arc::new(sample())))
    }

    #[tokio::test]
    async fn test_check_filters_ignores_bad_numbers() {
        let query = ProductFilterQuery {
            category: Some("sofa".to_string()),
            min_price: Some("abc".to_string()),
            max_price: Some("50000".to_string()),
        };
        let Json(products) = check_filters(state(), Query(query)).await;
        assert_eq!(products.len(), 3);

        let query = ProductFilterQuery {
            category: Some("bogus".to_string()),
            min_price: Some("30000".to_string()),
            max_price: Some("50000".to_string()),
        };
        let Json(products) = check_filters(state(), Query(query)).await;
        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "b1"]);
    }

    #[tokio::test]
    async fn test_popular_limit() {
        let Json(products) = popular(
            state(),
            Query(PopularQuery {
                limit: Some("2".to_string()),
            }),
        )
        .await;
        assert_eq!(products.len(), 2);

        let Json(products) = popular(state(), Query(PopularQuery::default())).await;
        assert_eq!(products.len(), 3);
    }

    #[tokio::test]
    async fn test_get_by_slug_not_found() {
        let found = get_by_slug(state(), Path(("sofa".to_string(), "bruno".to_string()))).await;
        assert_eq!(found.map(|Json(p)| p.id), Ok("s3".to_string()));

        let missing = get_by_slug(state(), Path(("chair".to_string(), "bruno".to_string()))).await;
        assert_eq!(missing.err(), Some(StatusCode::NOT_FOUND));
    }
}
