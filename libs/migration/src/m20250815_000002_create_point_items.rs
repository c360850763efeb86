use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PointItems::Table)
                    .if_not_exists()
                    .col(uuid(PointItems::PointId))
                    .col(integer(PointItems::ItemId))
                    .primary_key(
                        Index::create()
                            .col(PointItems::PointId)
                            .col(PointItems::ItemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_items_point_id")
                            .from(PointItems::Table, PointItems::PointId)
                            .to(Points::Table, Points::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_items_item_id")
                            .from(PointItems::Table, PointItems::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The list filter joins on item_id
        manager
            .create_index(
                Index::create()
                    .name("idx_point_items_item_id")
                    .table(PointItems::Table)
                    .col(PointItems::ItemId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PointItems::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PointItems {
    Table,
    PointId,
    ItemId,
}

#[derive(DeriveIden)]
enum Points {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
}
