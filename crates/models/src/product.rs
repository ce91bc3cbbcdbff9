use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::section;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub section_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Section,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Section => Entity::belongs_to(section::Entity).from(Column::SectionId).to(section::Column::Id).into() }
    }
}

impl Related<section::Entity> for Entity {
    fn to() -> RelationDef { Relation::Section.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("product name required".into())); }
    if name.len() > 255 { return Err(errors::ModelError::Validation("product name too long (<=255)".into())); }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(errors::ModelError::Validation(format!("price must be a non-negative number, got {price}")));
    }
    Ok(())
}

/// Unsaved product row; used for batch inserts where the section id is only known later.
pub fn new_active(name: &str, price: f64, section_id: Option<i32>) -> ActiveModel {
    ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        section_id: Set(section_id),
        ..Default::default()
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, price: f64, section_id: Option<i32>) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_price(price)?;
    new_active(name, price, section_id)
        .insert(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
