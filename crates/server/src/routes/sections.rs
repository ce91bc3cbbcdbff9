use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;

use common::types::Ack;
use service::dto::{CreateSection, SectionDto};
use service::section_service;

use crate::{auth::ServerState, errors::JsonApiError};

#[utoipa::path(
    post, path = "/api/section", tag = "section",
    request_body = crate::openapi::CreateSectionDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::SectionDoc),
        (status = 400, description = "Unknown store or invalid name"),
        (status = 401, description = "Missing or wrong credentials")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateSection>) -> Result<Json<SectionDto>, JsonApiError> {
    let created = section_service::create(&state.db, input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/api/section/{id}", tag = "section",
    params(("id" = i32, Path, description = "Section ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SectionDoc),
        (status = 400, description = "No such section")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<SectionDto>, JsonApiError> {
    Ok(Json(section_service::get(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/api/section", tag = "section",
    responses((status = 200, description = "List OK", body = [crate::openapi::SectionDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<SectionDto>>, JsonApiError> {
    let all = section_service::get_all(&state.db).await?;
    info!(count = all.len(), "list sections");
    Ok(Json(all))
}

#[utoipa::path(
    delete, path = "/api/section/{id}", tag = "section",
    params(("id" = i32, Path, description = "Section ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "No such section")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    section_service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post, path = "/api/section/goodies", tag = "section",
    responses((status = 200, description = "Goodies section and ten products created"))
)]
pub async fn create_goodies(State(state): State<ServerState>) -> Result<Json<Ack>, JsonApiError> {
    section_service::create_goodies_section_and_products(&state.db).await?;
    Ok(Json(Ack::ok()))
}
