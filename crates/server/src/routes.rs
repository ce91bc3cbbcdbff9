use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::auth::{self, ServerState};
use crate::openapi::ApiDoc;

pub mod sections;
pub mod products;
pub mod stores;

pub const API_PREFIX: &str = "/api";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `/workflow` only forwards to the static workflow page.
pub async fn workflow() -> Redirect {
    Redirect::to("/workflow.html")
}

fn api_routes() -> Router<ServerState> {
    Router::new()
        .route("/section", post(sections::create).get(sections::list))
        .route("/section/goodies", post(sections::create_goodies))
        .route("/section/:id", get(sections::get).delete(sections::delete))
        .route("/product", post(products::create).get(products::list))
        .route("/product/:id", get(products::get).delete(products::delete))
        .route("/store", post(stores::create).get(stores::list))
        .route("/store/:id", get(stores::get).delete(stores::delete))
}

/// Build the full application router: public routes, basic-auth protected `/api`, static fallback.
pub fn build_router(state: ServerState, static_dir: &str, cors: CorsLayer) -> Router {
    let api = api_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::require_basic_auth,
    ));

    let public = Router::new()
        .route("/health", get(health))
        .route("/workflow", get(workflow));

    public
        .nest(API_PREFIX, api)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
