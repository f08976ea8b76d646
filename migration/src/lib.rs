// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// ユーザー・アップロード関連マイグレーション
mod m20250801_000001_create_users_table;
mod m20250801_000002_create_uploads_table;

// Polar決済関連マイグレーション
mod m20250801_000003_create_polar_customers_table;
mod m20250801_000004_create_polar_subscriptions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成（依存関係なし）
            Box::new(m20250801_000001_create_users_table::Migration),
            // 2. 依存テーブル作成（usersテーブルに依存）
            Box::new(m20250801_000002_create_uploads_table::Migration),
            Box::new(m20250801_000003_create_polar_customers_table::Migration),
            Box::new(m20250801_000004_create_polar_subscriptions_table::Migration),
        ]
    }
}
