// src/repository/user_repository.rs

use crate::domain::upload_model::{self, Entity as UploadEntity};
use crate::domain::user_model::{self, ActiveModel as UserActiveModel, Entity as UserEntity};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, QueryOrder, Set};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DbConn,
}

impl UserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(&self, create_user: CreateUser) -> Result<user_model::Model, DbErr> {
        let now = Utc::now();
        let new_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(create_user.name),
            email: Set(create_user.email),
            email_verified: Set(create_user.email_verified),
            image: Set(create_user.image),
            created_at: Set(create_user.created_at.unwrap_or(now)),
            updated_at: Set(now),
        };

        new_user.insert(&self.db).await
    }

    /// users LEFT JOIN uploads（ユーザー作成日の降順）
    ///
    /// 同じユーザーの行は連続して返る。
    pub async fn find_all_with_uploads(
        &self,
    ) -> Result<Vec<(user_model::Model, Option<upload_model::Model>)>, DbErr> {
        UserEntity::find()
            .find_also_related(UploadEntity)
            .order_by_desc(user_model::Column::CreatedAt)
            .order_by_asc(user_model::Column::Id)
            .order_by_asc(upload_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }
}

/// ユーザー作成用構造体
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub image: Option<String>,
    /// 指定がなければ現在時刻
    pub created_at: Option<chrono::DateTime<Utc>>,
}
