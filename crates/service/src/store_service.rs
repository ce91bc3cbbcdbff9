use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use models::store;
use crate::dto::{CreateStore, StoreDto};
use crate::errors::ServiceError;

/// Create a store.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create<C: ConnectionTrait>(db: &C, input: CreateStore) -> Result<StoreDto, ServiceError> {
    let saved = store::create(db, &input.name).await?;
    info!(id = saved.id, "store created");
    Ok(saved.into())
}

/// Get store by id.
pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<StoreDto, ServiceError> {
    store::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ServiceError::db)?
        .map(StoreDto::from)
        .ok_or_else(|| ServiceError::no_store(id))
}

pub async fn get_all<C: ConnectionTrait>(db: &C) -> Result<Vec<StoreDto>, ServiceError> {
    let rows = store::Entity::find()
        .order_by_asc(store::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    Ok(rows.into_iter().map(StoreDto::from).collect())
}

/// Hard delete store; its sections are detached, not removed.
#[instrument(skip(db))]
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    let res = store::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::no_store(id));
    }
    info!(id, "store deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::CreateSection;
    use crate::section_service;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn store_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create(&db, CreateStore { name: "Downtown".into() }).await?;
        assert_eq!(get(&db, created.id).await?, created);
        assert_eq!(get_all(&db).await?, vec![created.clone()]);

        delete(&db, created.id).await?;
        let err = get(&db, created.id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("There is no store with the id {}", created.id));
        Ok(())
    }

    #[tokio::test]
    async fn deleting_store_detaches_its_sections() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let shop = create(&db, CreateStore { name: "Closing".into() }).await?;
        let sec = section_service::create(&db, CreateSection { name: "Clearance".into(), store_id: Some(shop.id) }).await?;

        delete(&db, shop.id).await?;

        let after = section_service::get(&db, sec.id).await?;
        assert_eq!(after.store_id, None);
        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_store_fails() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(delete(&db, 5).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
