use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomTypes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RoomTypes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(RoomTypes::Name).string_len(100).not_null())
                    .col(ColumnDef::new(RoomTypes::Description).text())
                    .col(ColumnDef::new(RoomTypes::BasePriceCents).big_integer().not_null())
                    .col(ColumnDef::new(RoomTypes::Capacity).integer().not_null())
                    .col(ColumnDef::new(RoomTypes::BedType).string_len(50).not_null())
                    .col(ColumnDef::new(RoomTypes::Size).integer())
                    .col(
                        ColumnDef::new(RoomTypes::Amenities)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(RoomTypes::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(RoomTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(RoomTypes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomTypes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RoomTypes {
    Table,
    Id,
    Name,
    Description,
    BasePriceCents,
    Capacity,
    BedType,
    Size,
    Amenities,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
