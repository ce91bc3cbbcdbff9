use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, TransactionTrait};
use tracing::{info, instrument};

use models::{product, section};
use crate::dto::{CreateProduct, ProductDto};
use crate::errors::ServiceError;

/// Create a product, optionally filed under an existing section.
#[instrument(skip(db, input), fields(name = %input.name, section_id = ?input.section_id))]
pub async fn create<C>(db: &C, input: CreateProduct) -> Result<ProductDto, ServiceError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await.map_err(ServiceError::db)?;
    if let Some(section_id) = input.section_id {
        section::Entity::find_by_id(section_id)
            .one(&txn)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::no_section(section_id))?;
    }
    let saved = product::create(&txn, &input.name, input.price, input.section_id).await?;
    txn.commit().await.map_err(ServiceError::db)?;
    info!(id = saved.id, "product created");
    Ok(saved.into())
}

/// Get product by id.
pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<ProductDto, ServiceError> {
    product::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ServiceError::db)?
        .map(ProductDto::from)
        .ok_or_else(|| ServiceError::no_product(id))
}

pub async fn get_all<C: ConnectionTrait>(db: &C) -> Result<Vec<ProductDto>, ServiceError> {
    let rows = product::Entity::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    Ok(rows.into_iter().map(ProductDto::from).collect())
}

/// Hard delete product.
#[instrument(skip(db))]
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    let res = product::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::no_product(id));
    }
    info!(id, "product deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn tablet() -> CreateProduct {
        CreateProduct { name: "Tablet".into(), price: 30.5, section_id: None }
    }

    #[tokio::test]
    async fn product_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create(&db, tablet()).await?;
        assert_eq!(created.name, "Tablet");
        assert_eq!(created.price, 30.5);

        assert_eq!(get(&db, created.id).await?, created);
        assert_eq!(get_all(&db).await?, vec![created.clone()]);

        delete(&db, created.id).await?;
        assert!(matches!(get(&db, created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete(&db, created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_in_existing_section() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let sec = section::create(&db, "Tablets", None).await?;

        let created = create(&db, CreateProduct { section_id: Some(sec.id), ..tablet() }).await?;
        let row = product::Entity::find_by_id(created.id).one(&db).await?.unwrap();
        assert_eq!(row.section_id, Some(sec.id));
        Ok(())
    }

    #[tokio::test]
    async fn create_in_missing_section_fails() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let err = create(&db, CreateProduct { section_id: Some(77), ..tablet() }).await.unwrap_err();
        assert_eq!(err.to_string(), "There is no section with the id 77");
        assert!(get_all(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn negative_price_is_a_client_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create(&db, CreateProduct { price: -1.0, ..tablet() }).await.unwrap_err();
        assert!(err.is_client_error());
        Ok(())
    }
}
