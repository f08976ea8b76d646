// src/api/handlers/catalog_handler.rs

use crate::api::dto::catalog_dto::{CategoriesResponse, ProductQuery, ProductResponse};
use crate::api::{dto::common::ApiResponse, AppState};
use crate::domain::catalog;
use crate::error::AppResult;
use axum::{
    extract::{Json, Query, State},
    routing::get,
    Router,
};

pub async fn list_products_handler(
    State(app_state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<Vec<ProductResponse>>>> {
    let products: Vec<ProductResponse> =
        catalog::filter_by_category(&app_state.products, &query.category)
            .into_iter()
            .map(ProductResponse::from)
            .collect();

    Ok(Json(ApiResponse::success(
        "Products retrieved successfully",
        products,
    )))
}

pub async fn list_categories_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoriesResponse>>> {
    Ok(Json(ApiResponse::success(
        "Categories retrieved successfully",
        CategoriesResponse {
            categories: catalog::categories(&app_state.products),
        },
    )))
}

pub fn catalog_router(app_state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products_handler))
        .route("/products/categories", get(list_categories_handler))
        .with_state(app_state)
}
