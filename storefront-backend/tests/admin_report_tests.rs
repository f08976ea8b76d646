// tests/admin_report_tests.rs

mod common;

use common::db::TestDatabase;
use common::test_data::{create_upload, create_user};
use storefront_backend::domain::upload_model::UploadType;
use storefront_backend::service::admin_report_service::AdminReportService;

#[tokio::test]
async fn test_users_with_uploads_newest_first() {
    let db = TestDatabase::new().await;
    let service = AdminReportService::new(db.connection.clone());

    let old = create_user(&db.connection, "old", 10).await;
    let mid = create_user(&db.connection, "mid", 5).await;
    let new = create_user(&db.connection, "new", 0).await;

    create_upload(&db.connection, &old, "old-1.png", UploadType::Image).await;
    create_upload(&db.connection, &new, "new-1.png", UploadType::Image).await;
    create_upload(&db.connection, &new, "new-2.mp4", UploadType::Video).await;

    let report = service.get_users_with_uploads().await.unwrap();

    let names: Vec<&str> = report.iter().map(|u| u.user.name.as_str()).collect();
    assert_eq!(names, vec!["new", "mid", "old"]);

    let new_keys: Vec<&str> = report[0].uploads.iter().map(|u| u.key.as_str()).collect();
    assert_eq!(new_keys, vec!["new-1.png", "new-2.mp4"]);
    assert_eq!(report[0].uploads[1].upload_type, UploadType::Video);

    assert_eq!(report[1].user.id, mid.id);
    assert!(report[1].uploads.is_empty());
    assert_eq!(report[2].uploads.len(), 1);
}

#[tokio::test]
async fn test_users_with_uploads_empty_database() {
    let db = TestDatabase::new().await;
    let service = AdminReportService::new(db.connection.clone());

    assert!(service.get_users_with_uploads().await.unwrap().is_empty());
}
