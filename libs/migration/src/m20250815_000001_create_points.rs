use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Points::Table)
                    .if_not_exists()
                    .col(pk_uuid(Points::Id))
                    .col(string(Points::Name))
                    .col(string(Points::Email))
                    .col(string(Points::Whatsapp))
                    .col(double(Points::Latitude))
                    .col(double(Points::Longitude))
                    .col(string(Points::City))
                    .col(string_len(Points::Uf, 2))
                    .col(string_null(Points::Image))
                    .col(
                        timestamp_with_time_zone(Points::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Collection points are filtered by location
        manager
            .create_index(
                Index::create()
                    .name("idx_points_city")
                    .table(Points::Table)
                    .col(Points::City)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_points_uf")
                    .table(Points::Table)
                    .col(Points::Uf)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_points_created_at")
                    .table(Points::Table)
                    .col(Points::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Points::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Points {
    Table,
    Id,
    Name,
    Email,
    Whatsapp,
    Latitude,
    Longitude,
    City,
    Uf,
    Image,
    CreatedAt,
}
