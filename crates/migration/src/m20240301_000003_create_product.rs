//! Create `product` table with an optional FK to `section`.
//!
//! No cascading delete: removing a section only clears `section_id`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string_len(Product::Name, 255))
                    .col(double(Product::Price).default(0.0))
                    .col(integer_null(Product::SectionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_section")
                            .from(Product::Table, Product::SectionId)
                            .to(Section::Table, Section::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_section")
                    .table(Product::Table)
                    .col(Product::SectionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product { Table, Id, Name, Price, SectionId }

#[derive(DeriveIden)]
enum Section { Table, Id }
