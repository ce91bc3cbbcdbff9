use axum::{extract::{Path, State}, http::StatusCode, Json};

use service::dto::{CreateStore, StoreDto};
use service::store_service;

use crate::{auth::ServerState, errors::JsonApiError};

#[utoipa::path(
    post, path = "/api/store", tag = "store",
    request_body = crate::openapi::CreateStoreDoc,
    responses((status = 200, description = "Created", body = crate::openapi::StoreDoc), (status = 400, description = "Invalid name"))
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateStore>) -> Result<Json<StoreDto>, JsonApiError> {
    Ok(Json(store_service::create(&state.db, input).await?))
}

#[utoipa::path(
    get, path = "/api/store/{id}", tag = "store",
    params(("id" = i32, Path, description = "Store ID")),
    responses((status = 200, description = "OK", body = crate::openapi::StoreDoc), (status = 400, description = "No such store"))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<StoreDto>, JsonApiError> {
    Ok(Json(store_service::get(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/api/store", tag = "store",
    responses((status = 200, description = "List OK", body = [crate::openapi::StoreDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<StoreDto>>, JsonApiError> {
    Ok(Json(store_service::get_all(&state.db).await?))
}

#[utoipa::path(
    delete, path = "/api/store/{id}", tag = "store",
    params(("id" = i32, Path, description = "Store ID")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "No such store"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    store_service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
