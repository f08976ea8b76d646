// src/repository/polar_subscription_repository.rs

use crate::domain::polar_subscription_model::{
    self, ActiveModel as SubscriptionActiveModel, Entity as SubscriptionEntity,
};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DbConn, DbErr, QueryFilter, QueryOrder, Set, Statement,
    TransactionTrait,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PolarSubscriptionRepository {
    db: DbConn,
}

impl PolarSubscriptionRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// ユーザーの全サブスクリプション（作成順）
    pub async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<polar_subscription_model::Model>, DbErr> {
        SubscriptionEntity::find()
            .filter(polar_subscription_model::Column::UserId.eq(user_id))
            .order_by_asc(polar_subscription_model::Column::CreatedAt)
            .order_by_asc(polar_subscription_model::Column::Id)
            .all(&self.db)
            .await
    }

    /// subscription_idをキーにした原子的なupsert
    ///
    /// 既存行がある場合は `status` と `updated_at` のみ更新する。
    /// 同時実行されても一意制約 + ON CONFLICT により行は1件に保たれる。
    /// 同じsubscription_idの同期はトランザクション単位のアドバイザリロックで直列化されるため、
    /// `created == false` のとき `previous_status` は必ずSomeになる。
    pub async fn upsert(&self, params: UpsertPolarSubscription) -> Result<UpsertResult, DbErr> {
        let txn = self.db.begin().await?;

        // 行がまだ存在しない場合もロックできるようキー単位でロック（コミット時に解放）
        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT pg_advisory_xact_lock(hashtext($1))",
            [params.subscription_id.as_str().into()],
        ))
        .await?;

        let previous = SubscriptionEntity::find()
            .filter(
                polar_subscription_model::Column::SubscriptionId
                    .eq(params.subscription_id.as_str()),
            )
            .one(&txn)
            .await?;

        let now = Utc::now();
        let new_id = Uuid::new_v4();
        let candidate = SubscriptionActiveModel {
            id: Set(new_id),
            user_id: Set(params.user_id),
            customer_id: Set(params.customer_id),
            subscription_id: Set(params.subscription_id),
            product_id: Set(params.product_id),
            status: Set(params.status),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let stored = SubscriptionEntity::insert(candidate)
            .on_conflict(
                OnConflict::column(polar_subscription_model::Column::SubscriptionId)
                    .update_columns([
                        polar_subscription_model::Column::Status,
                        polar_subscription_model::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&txn)
            .await?;

        txn.commit().await?;

        Ok(UpsertResult {
            created: stored.id == new_id,
            previous_status: previous.map(|row| row.status),
            subscription: stored,
        })
    }
}

/// サブスクリプション同期用構造体
#[derive(Debug, Clone)]
pub struct UpsertPolarSubscription {
    pub user_id: Uuid,
    pub customer_id: String,
    pub subscription_id: String,
    pub product_id: String,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct UpsertResult {
    pub subscription: polar_subscription_model::Model,
    pub previous_status: Option<String>,
    pub created: bool,
}
