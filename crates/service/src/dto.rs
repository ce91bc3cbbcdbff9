//! Flat transfer records exchanged at the service boundary.
//!
//! Parents are carried as plain ids; nothing here nests another record.

use serde::{Deserialize, Serialize};

use models::{product, section, store};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDto {
    pub id: i32,
    pub name: String,
    pub store_id: Option<i32>,
}

/// Request body for section creation. An `id` in the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSection {
    pub name: String,
    #[serde(default)]
    pub store_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub section_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStore {
    pub name: String,
}

impl From<section::Model> for SectionDto {
    fn from(m: section::Model) -> Self {
        Self { id: m.id, name: m.name, store_id: m.store_id }
    }
}

impl From<product::Model> for ProductDto {
    fn from(m: product::Model) -> Self {
        Self { id: m.id, name: m.name, price: m.price }
    }
}

impl From<store::Model> for StoreDto {
    fn from(m: store::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}
