// tests/common/test_data.rs

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use storefront_backend::domain::upload_model::{self, UploadType};
use storefront_backend::domain::user_model;
use storefront_backend::repository::upload_repository::{CreateUpload, UploadRepository};
use storefront_backend::repository::user_repository::{CreateUser, UserRepository};

/// 指定日数前に作成されたユーザーを登録
pub async fn create_user(
    db: &DatabaseConnection,
    name: &str,
    created_days_ago: i64,
) -> user_model::Model {
    UserRepository::new(db.clone())
        .create(CreateUser {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            email_verified: true,
            image: None,
            created_at: Some(Utc::now() - Duration::days(created_days_ago)),
        })
        .await
        .unwrap()
}

pub async fn create_upload(
    db: &DatabaseConnection,
    user: &user_model::Model,
    key: &str,
    upload_type: UploadType,
) -> upload_model::Model {
    UploadRepository::new(db.clone())
        .create(CreateUpload {
            user_id: user.id,
            key: key.to_string(),
            url: format!("https://cdn.example.com/{}", key),
            upload_type,
        })
        .await
        .unwrap()
}
