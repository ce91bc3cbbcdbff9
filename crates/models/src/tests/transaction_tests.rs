use crate::{product, section};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait};
use anyhow::Result;

use super::setup_test_db;

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = section::create(&txn, "Committed", None).await?;
    txn.commit().await?;

    let found = section::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.map(|s| s.name), Some("Committed".to_string()));
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = section::create(&txn, "Discarded", None).await?;
    product::create(&txn, "Discarded item", 1.0, Some(created.id)).await?;
    txn.rollback().await?;

    assert!(section::Entity::find_by_id(created.id).one(&db).await?.is_none());
    assert_eq!(product::Entity::find().count(&db).await?, 0);
    Ok(())
}

/// Dropping a transaction without commit rolls it back
#[tokio::test]
async fn test_transaction_dropped_without_commit() -> Result<()> {
    let db = setup_test_db().await?;

    {
        let txn = db.begin().await?;
        section::create(&txn, "Dropped", None).await?;
    }

    let found = section::Entity::find()
        .filter(section::Column::Name.eq("Dropped"))
        .one(&db)
        .await?;
    assert!(found.is_none());
    Ok(())
}

/// Test nested transactions (savepoints)
#[tokio::test]
async fn test_nested_transactions() -> Result<()> {
    let db = setup_test_db().await?;

    let outer = db.begin().await?;
    let kept = section::create(&outer, "Outer", None).await?;

    let inner = outer.begin().await?;
    let dropped = section::create(&inner, "Inner", None).await?;
    inner.rollback().await?;

    outer.commit().await?;

    assert!(section::Entity::find_by_id(kept.id).one(&db).await?.is_some());
    assert!(section::Entity::find_by_id(dropped.id).one(&db).await?.is_none());
    Ok(())
}
