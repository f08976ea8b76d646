// src/api/dto/admin_dto.rs

use crate::service::admin_report_service::UserWithUploads;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AdminSummaryResponse {
    pub total_users: usize,
    pub total_uploads: usize,
    pub users: Vec<UserWithUploads>,
}

impl From<Vec<UserWithUploads>> for AdminSummaryResponse {
    fn from(users: Vec<UserWithUploads>) -> Self {
        Self {
            total_users: users.len(),
            total_uploads: users.iter().map(|u| u.uploads.len()).sum(),
            users,
        }
    }
}
