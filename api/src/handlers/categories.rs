//! Category handlers
//!
//! CRUD endpoints under `/categories`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    Json,
};

use crate::app::CategoryDto;
use crate::domain::entities::CategoryId;
use crate::error::AppError;
use crate::handlers::pagination::{PageParams, PageResponse};
use crate::AppState;

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<PageResponse<CategoryDto>>, AppError> {
    let Query(params) = params?;
    let page = state
        .category_service
        .find_all_paged(params.into_page_request()?)
        .await?;

    Ok(Json(page.into()))
}

/// GET /categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CategoryDto>, AppError> {
    let Path(id) = id?;
    let category = state.category_service.find_by_id(CategoryId(id)).await?;

    Ok(Json(category))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryDto>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CategoryDto>), AppError> {
    let Json(dto) = payload?;
    let created = state.category_service.insert(dto).await?;

    let location = format!("/categories/{}", created.id.unwrap_or_default());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// PUT /categories/:id
pub async fn update_category(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CategoryDto>, JsonRejection>,
) -> Result<Json<CategoryDto>, AppError> {
    let Path(id) = id?;
    let Json(dto) = payload?;
    let updated = state.category_service.update(CategoryId(id), dto).await?;

    Ok(Json(updated))
}

/// DELETE /categories/:id
pub async fn delete_category(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.category_service.delete(CategoryId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
