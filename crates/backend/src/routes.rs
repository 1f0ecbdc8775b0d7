use axum::{routing::get, Router};

use crate::handlers;
use crate::shared::app_state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // FILTER CHECKS (used by catalog pages)
        // ========================================
        .route(
            "/api/check-product-filters",
            get(handlers::a001_product::check_filters),
        )
        .route(
            "/api/check-fabric-filters",
            get(handlers::a002_fabric::check_filters),
        )
        // ========================================
        // A001 PRODUCTS
        // ========================================
        .route("/api/products", get(handlers::a001_product::list))
        .route(
            "/api/products/popular",
            get(handlers::a001_product::popular),
        )
        .route(
            "/api/products/price-range",
            get(handlers::a001_product::price_range),
        )
        .route(
            "/api/products/:category/:slug",
            get(handlers::a001_product::get_by_slug),
        )
        // ========================================
        // A002 FABRICS
        // ========================================
        .route("/api/fabrics", get(handlers::a002_fabric::list_categories))
        .route(
            "/api/fabrics/:category",
            get(handlers::a002_fabric::get_category),
        )
        .route(
            "/api/fabrics/:category/:collection",
            get(handlers::a002_fabric::get_collection),
        )
        .with_state(state)
}
