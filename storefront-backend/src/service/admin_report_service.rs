// src/service/admin_report_service.rs

use crate::db::DbPool;
use crate::domain::upload_model;
use crate::domain::user_model;
use crate::error::AppResult;
use crate::repository::user_repository::UserRepository;
use serde::Serialize;
use std::sync::Arc;

/// ユーザーとそのアップロード一覧
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserWithUploads {
    #[serde(flatten)]
    pub user: user_model::Model,
    pub uploads: Vec<upload_model::Model>,
}

#[derive(Clone)]
pub struct AdminReportService {
    user_repo: Arc<UserRepository>,
}

impl AdminReportService {
    pub fn new(db: DbPool) -> Self {
        Self {
            user_repo: Arc::new(UserRepository::new(db)),
        }
    }

    /// 全ユーザーをアップロード付きで取得（作成日の降順）
    pub async fn get_users_with_uploads(&self) -> AppResult<Vec<UserWithUploads>> {
        let rows = self.user_repo.find_all_with_uploads().await?;
        let users = group_by_user(rows);

        tracing::debug!(user_count = users.len(), "Admin upload report built");
        Ok(users)
    }
}

/// JOIN結果の行をユーザーごとにまとめる（行の順序を保持）
fn group_by_user(
    rows: Vec<(user_model::Model, Option<upload_model::Model>)>,
) -> Vec<UserWithUploads> {
    let mut grouped: Vec<UserWithUploads> = Vec::new();

    for (user, upload) in rows {
        let same_user = grouped.last().is_some_and(|last| last.user.id == user.id);
        if !same_user {
            grouped.push(UserWithUploads {
                user,
                uploads: Vec::new(),
            });
        }

        if let (Some(upload), Some(entry)) = (upload, grouped.last_mut()) {
            entry.uploads.push(upload);
        }
    }

    grouped
}
