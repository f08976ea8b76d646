use sea_orm_migration::prelude::*;

use super::m20250801_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Polar顧客テーブル（ユーザーと1対1）
        manager
            .create_table(
                Table::create()
                    .table(PolarCustomers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PolarCustomers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PolarCustomers::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PolarCustomers::CustomerId).text().not_null())
                    .col(
                        ColumnDef::new(PolarCustomers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP"),
                    )
                    .col(
                        ColumnDef::new(PolarCustomers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_polar_customers_user_id")
                            .from(PolarCustomers::Table, PolarCustomers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PolarCustomers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PolarCustomers {
    Table,
    Id,
    UserId,
    CustomerId,
    CreatedAt,
    UpdatedAt,
}
