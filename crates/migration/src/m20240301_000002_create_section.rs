//! Create `section` table with an optional FK to `store`.
//!
//! Deleting a store detaches its sections instead of removing them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Section::Table)
                    .if_not_exists()
                    .col(pk_auto(Section::Id))
                    .col(string_len(Section::Name, 255))
                    .col(integer_null(Section::StoreId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_store")
                            .from(Section::Table, Section::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_section_store")
                    .table(Section::Table)
                    .col(Section::StoreId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Section::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Section { Table, Id, Name, StoreId }

#[derive(DeriveIden)]
enum Store { Table, Id }
