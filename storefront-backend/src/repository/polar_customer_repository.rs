// src/repository/polar_customer_repository.rs

use crate::domain::polar_customer_model::{
    self, ActiveModel as PolarCustomerActiveModel, Entity as PolarCustomerEntity,
};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, QueryFilter, Set};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PolarCustomerRepository {
    db: DbConn,
}

impl PolarCustomerRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// ユーザーIDで顧客を検索
    pub async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<polar_customer_model::Model>, DbErr> {
        PolarCustomerEntity::find()
            .filter(polar_customer_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    /// 顧客を作成
    pub async fn create(
        &self,
        user_id: Uuid,
        customer_id: &str,
    ) -> Result<polar_customer_model::Model, DbErr> {
        let now = Utc::now();
        let new_customer = PolarCustomerActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            customer_id: Set(customer_id.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_customer.insert(&self.db).await
    }
}
