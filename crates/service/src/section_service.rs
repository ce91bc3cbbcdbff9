use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, TransactionTrait};
use tracing::{info, instrument};

use models::{product, section, store};
use crate::dto::{CreateSection, SectionDto};
use crate::errors::ServiceError;

pub const GOODIES_SECTION_NAME: &str = "Goodies";
pub const GOODIES_PRODUCT_COUNT: usize = 10;

/// Names of the products attached to a Goodies section, in creation order.
///
/// The label carries the loop counter, not the id the row will be assigned.
pub fn goodies_product_names() -> Vec<String> {
    (1..=GOODIES_PRODUCT_COUNT)
        .map(|k| format!("The product with the ID {k}"))
        .collect()
}

/// Create a section, optionally attached to an existing store.
///
/// Runs in its own transaction; when `db` is already a transaction this nests
/// as a savepoint of the caller's unit of work.
#[instrument(skip(db, input), fields(name = %input.name, store_id = ?input.store_id))]
pub async fn create<C>(db: &C, input: CreateSection) -> Result<SectionDto, ServiceError>
where
    C: ConnectionTrait + TransactionTrait,
{
    section::validate_name(&input.name)?;
    let txn = db.begin().await.map_err(ServiceError::db)?;

    if let Some(store_id) = input.store_id {
        store::Entity::find_by_id(store_id)
            .one(&txn)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::no_store(store_id))?;
    }

    let saved = section::create(&txn, &input.name, input.store_id).await?;
    txn.commit().await.map_err(ServiceError::db)?;

    info!(id = saved.id, "section created");
    Ok(saved.into())
}

/// Get a section by id.
pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<SectionDto, ServiceError> {
    find_or_fail(db, id).await.map(SectionDto::from)
}

/// List every section, ordered by id.
pub async fn get_all<C: ConnectionTrait>(db: &C) -> Result<Vec<SectionDto>, ServiceError> {
    let rows = section::Entity::find()
        .order_by_asc(section::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    Ok(rows.into_iter().map(SectionDto::from).collect())
}

/// Delete a section. Its products stay, detached (FK `SET NULL`).
#[instrument(skip(db))]
pub async fn delete<C>(db: &C, id: i32) -> Result<(), ServiceError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await.map_err(ServiceError::db)?;
    let found = find_or_fail(&txn, id).await?;
    section::Entity::delete_by_id(found.id).exec(&txn).await.map_err(ServiceError::db)?;
    txn.commit().await.map_err(ServiceError::db)?;
    info!(id, "section deleted");
    Ok(())
}

/// Create a "Goodies" section with ten generated products in one transaction.
///
/// Either all eleven rows are committed or none are. Every call creates a new
/// independent section.
#[instrument(skip(db))]
pub async fn create_goodies_section_and_products<C>(db: &C) -> Result<SectionDto, ServiceError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await.map_err(ServiceError::db)?;

    let goodies = section::create(&txn, GOODIES_SECTION_NAME, None).await?;
    let products: Vec<product::ActiveModel> = goodies_product_names()
        .iter()
        .map(|name| product::new_active(name, 0.0, Some(goodies.id)))
        .collect();
    product::Entity::insert_many(products).exec(&txn).await.map_err(ServiceError::db)?;

    txn.commit().await.map_err(ServiceError::db)?;
    info!(section_id = goodies.id, products = GOODIES_PRODUCT_COUNT, "goodies section created");
    Ok(goodies.into())
}

async fn find_or_fail<C: ConnectionTrait>(db: &C, id: i32) -> Result<section::Model, ServiceError> {
    section::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ServiceError::db)?
        .ok_or_else(|| ServiceError::no_section(id))
}
