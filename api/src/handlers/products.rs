//! Product handlers
//!
//! CRUD endpoints under `/products`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    Json,
};

use crate::app::ProductDto;
use crate::domain::entities::ProductId;
use crate::error::AppError;
use crate::handlers::pagination::{PageParams, PageResponse};
use crate::AppState;

/// GET /products
///
/// One page of products, `?page=&size=&sort=property,direction`.
pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<PageResponse<ProductDto>>, AppError> {
    let Query(params) = params?;
    let page = state
        .product_service
        .find_all_paged(params.into_page_request()?)
        .await?;

    Ok(Json(page.into()))
}

/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProductDto>, AppError> {
    let Path(id) = id?;
    let product = state.product_service.find_by_id(ProductId(id)).await?;

    Ok(Json(product))
}

/// POST /products
///
/// Responds 201 with the created product and its `Location`.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ProductDto>), AppError> {
    let Json(dto) = payload?;
    let created = state.product_service.insert(dto).await?;

    let location = format!("/products/{}", created.id.unwrap_or_default());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// PUT /products/:id
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> Result<Json<ProductDto>, AppError> {
    let Path(id) = id?;
    let Json(dto) = payload?;
    let updated = state.product_service.update(ProductId(id), dto).await?;

    Ok(Json(updated))
}

/// DELETE /products/:id
///
/// 204 on success, 400 while other rows still reference the product.
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.product_service.delete(ProductId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
