use sea_orm_migration::prelude::*;

use super::m20250801_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // subscription_idの一意制約がupsert (ON CONFLICT) の対象になる
        manager
            .create_table(
                Table::create()
                    .table(PolarSubscriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PolarSubscriptions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PolarSubscriptions::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(PolarSubscriptions::CustomerId)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PolarSubscriptions::SubscriptionId)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(PolarSubscriptions::ProductId)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PolarSubscriptions::Status).text().not_null())
                    .col(
                        ColumnDef::new(PolarSubscriptions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP"),
                    )
                    .col(
                        ColumnDef::new(PolarSubscriptions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_polar_subscriptions_user_id")
                            .from(PolarSubscriptions::Table, PolarSubscriptions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // インデックス作成
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_polar_subscriptions_user_id")
                    .table(PolarSubscriptions::Table)
                    .col(PolarSubscriptions::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_polar_subscriptions_status")
                    .table(PolarSubscriptions::Table)
                    .col(PolarSubscriptions::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PolarSubscriptions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PolarSubscriptions {
    Table,
    Id,
    UserId,
    CustomerId,
    SubscriptionId,
    ProductId,
    Status,
    CreatedAt,
    UpdatedAt,
}
