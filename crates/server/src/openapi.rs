use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionDoc { pub id: i32, pub name: String, pub store_id: Option<i32> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionDoc { pub name: String, pub store_id: Option<i32> }

#[derive(ToSchema)]
pub struct ProductDoc { pub id: i32, pub name: String, pub price: f64 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDoc { pub name: String, pub price: f64, pub section_id: Option<i32> }

#[derive(ToSchema)]
pub struct StoreDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
pub struct CreateStoreDoc { pub name: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::sections::create,
        crate::routes::sections::get,
        crate::routes::sections::list,
        crate::routes::sections::delete,
        crate::routes::sections::create_goodies,
        crate::routes::products::create,
        crate::routes::products::get,
        crate::routes::products::list,
        crate::routes::products::delete,
        crate::routes::stores::create,
        crate::routes::stores::get,
        crate::routes::stores::list,
        crate::routes::stores::delete,
    ),
    components(
        schemas(
            HealthResponse,
            SectionDoc,
            CreateSectionDoc,
            ProductDoc,
            CreateProductDoc,
            StoreDoc,
            CreateStoreDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "section"),
        (name = "product"),
        (name = "store")
    )
)]
pub struct ApiDoc;
