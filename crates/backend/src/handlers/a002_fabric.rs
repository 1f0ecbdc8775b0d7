use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a002_fabric::{FabricCategory, FabricCollection};
use contracts::shared::filters::FabricFilterQuery;
use serde_json::{json, Value};

use crate::domain::a002_fabric;
use crate::shared::app_state::AppState;

/// GET /api/check-fabric-filters
pub async fn check_filters(
    State(state): State<AppState>,
    Query(query): Query<FabricFilterQuery>,
) -> Result<Json<Vec<FabricCollection>>, (StatusCode, Json<Value>)> {
    let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Category name is required"})),
        ));
    };
    let filters = query.filters();
    Ok(Json(
        a002_fabric::service::filter_collections(state.catalog.as_ref(), category, &filters).await,
    ))
}

/// GET /api/fabrics
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<FabricCategory>>, StatusCode> {
    a002_fabric::service::list_categories(state.catalog.as_ref())
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Error fetching fabric categories: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// GET /api/fabrics/:category
pub async fn get_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<FabricCategory>, StatusCode> {
    match a002_fabric::service::get_category(state.catalog.as_ref(), &category).await {
        Some(v) => Ok(Json(v)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// GET /api/fabrics/:category/:collection
pub async fn get_collection(
    State(state): State<AppState>,
    Path((category, collection)): Path<(String, String)>,
) -> Result<Json<FabricCollection>, StatusCode> {
    match a002_fabric::service::get_collection(state.catalog.as_ref(), &category, &collection).await
    {
        Some(v) => Ok(Json(v)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::memory::{sample, MemoryCatalog};
    use std::sync::Arc;

    fn state(catalog: MemoryCatalog) -> State<AppState> {
        State(AppState::new(Arc::new(catalog)))
    }

    #[tokio::test]
    async fn test_check_filters_requires_category() {
        let result = check_filters(state(sample()), Query(FabricFilterQuery::default())).await;
        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Category name is required"}));
    }

    #[tokio::test]
    async fn test_check_filters_splits_lists() {
        let query = FabricFilterQuery {
            category: Some("velour".to_string()),
            types: Some("микро,шенилл".to_string()),
            min_abrasion: Some("not a number".to_string()),
            ..Default::default()
        };
        let Json(collections) = check_filters(state(sample()), Query(query)).await.unwrap();
        let names: Vec<_> = collections.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bamboo"]);
    }

    #[tokio::test]
    async fn test_list_categories_failure_is_500() {
        let catalog = MemoryCatalog {
            fabrics_unavailable: true,
            ..sample()
        };
        let result = list_categories(state(catalog)).await;
        assert_eq!(result.err(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_get_collection() {
        let found = get_collection(
            state(sample()),
            Path(("velour".to_string(), "Monolith".to_string())),
        )
        .await;
        assert!(found.is_ok());

        let missing = get_collection(
            state(sample()),
            Path(("velour".to_string(), "Chester".to_string())),
        )
        .await;
        assert_eq!(missing.err(), Some(StatusCode::NOT_FOUND));
    }
}
