use axum::{extract::{Path, State}, http::StatusCode, Json};

use service::dto::{CreateProduct, ProductDto};
use service::product_service;

use crate::{auth::ServerState, errors::JsonApiError};

#[utoipa::path(
    post, path = "/api/product", tag = "product",
    request_body = crate::openapi::CreateProductDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Unknown section or invalid fields")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateProduct>) -> Result<Json<ProductDto>, JsonApiError> {
    Ok(Json(product_service::create(&state.db, input).await?))
}

#[utoipa::path(
    get, path = "/api/product/{id}", tag = "product",
    params(("id" = i32, Path, description = "Product ID")),
    responses((status = 200, description = "OK", body = crate::openapi::ProductDoc), (status = 400, description = "No such product"))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<ProductDto>, JsonApiError> {
    Ok(Json(product_service::get(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/api/product", tag = "product",
    responses((status = 200, description = "List OK", body = [crate::openapi::ProductDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ProductDto>>, JsonApiError> {
    Ok(Json(product_service::get_all(&state.db).await?))
}

#[utoipa::path(
    delete, path = "/api/product/{id}", tag = "product",
    params(("id" = i32, Path, description = "Product ID")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "No such product"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    product_service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
