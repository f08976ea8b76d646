// src/repository/upload_repository.rs

use crate::domain::upload_model::{self, ActiveModel as UploadActiveModel, UploadType};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, Set};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UploadRepository {
    db: DbConn,
}

impl UploadRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(&self, create_upload: CreateUpload) -> Result<upload_model::Model, DbErr> {
        let now = Utc::now();
        let new_upload = UploadActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(create_upload.user_id),
            key: Set(create_upload.key),
            url: Set(create_upload.url),
            upload_type: Set(create_upload.upload_type),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_upload.insert(&self.db).await
    }
}

/// アップロード作成用構造体
#[derive(Debug, Clone)]
pub struct CreateUpload {
    pub user_id: Uuid,
    pub key: String,
    pub url: String,
    pub upload_type: UploadType,
}
