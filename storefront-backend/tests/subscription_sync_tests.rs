// tests/subscription_sync_tests.rs

mod common;

use common::app_helper::setup_sync_service;
use common::test_data::create_user;
use sea_orm::{EntityTrait, PaginatorTrait};
use storefront_backend::domain::polar_subscription_model::Entity as SubscriptionEntity;
use uuid::Uuid;

#[tokio::test]
async fn test_sync_inserts_then_updates_single_row() {
    let (service, db, _polar) = setup_sync_service().await;
    let user = create_user(&db.connection, "alice", 0).await;

    let first = service
        .sync_subscription(user.id, "cus_1", "sub_1", "prod_pro", "active")
        .await
        .unwrap();
    assert!(first.created);
    assert_eq!(first.previous_status, None);
    assert_eq!(first.subscription.status, "active");

    let second = service
        .sync_subscription(user.id, "cus_1", "sub_1", "prod_pro", "canceled")
        .await
        .unwrap();
    assert!(!second.created);
    assert_eq!(second.previous_status.as_deref(), Some("active"));
    assert_eq!(second.subscription.status, "canceled");
    assert_eq!(second.subscription.id, first.subscription.id);
    assert_eq!(second.subscription.created_at, first.subscription.created_at);
    assert!(second.subscription.updated_at >= first.subscription.updated_at);

    let count = SubscriptionEntity::find()
        .count(&db.connection)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_sync_update_only_changes_status() {
    let (service, db, _polar) = setup_sync_service().await;
    let user = create_user(&db.connection, "bob", 0).await;

    service
        .sync_subscription(user.id, "cus_1", "sub_1", "prod_basic", "trialing")
        .await
        .unwrap();

    let outcome = service
        .sync_subscription(user.id, "cus_other", "sub_1", "prod_other", "active")
        .await
        .unwrap();

    assert_eq!(outcome.subscription.customer_id, "cus_1");
    assert_eq!(outcome.subscription.product_id, "prod_basic");
    assert_eq!(outcome.subscription.status, "active");
}

#[tokio::test]
async fn test_concurrent_sync_keeps_one_row() {
    let (service, db, _polar) = setup_sync_service().await;
    let user = create_user(&db.connection, "carol", 0).await;

    let (a, b) = tokio::join!(
        service.sync_subscription(user.id, "cus_1", "sub_race", "prod_pro", "active"),
        service.sync_subscription(user.id, "cus_1", "sub_race", "prod_pro", "past_due"),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    // どちらか一方だけが新規作成になる
    assert_ne!(a.created, b.created);
    assert_eq!(a.subscription.id, b.subscription.id);

    // 後から書き込んだ側は先行側のステータスを更新前の値として受け取る
    let (inserted, updated) = if a.created { (a, b) } else { (b, a) };
    assert_eq!(inserted.previous_status, None);
    assert_eq!(
        updated.previous_status.as_deref(),
        Some(inserted.subscription.status.as_str())
    );

    let subscriptions = service.get_user_subscriptions(user.id).await.unwrap();
    assert_eq!(subscriptions.len(), 1);
}

#[tokio::test]
async fn test_has_active_subscription() {
    let (service, db, _polar) = setup_sync_service().await;
    let user = create_user(&db.connection, "dave", 0).await;

    assert!(!service.has_active_subscription(user.id).await.unwrap());

    service
        .sync_subscription(user.id, "cus_1", "sub_1", "prod_pro", "Active")
        .await
        .unwrap();
    assert!(!service.has_active_subscription(user.id).await.unwrap());

    service
        .sync_subscription(user.id, "cus_1", "sub_2", "prod_pro", "active")
        .await
        .unwrap();
    assert!(service.has_active_subscription(user.id).await.unwrap());

    service
        .sync_subscription(user.id, "cus_1", "sub_2", "prod_pro", "canceled")
        .await
        .unwrap();
    assert!(!service.has_active_subscription(user.id).await.unwrap());
}

#[tokio::test]
async fn test_get_user_subscriptions_in_creation_order() {
    let (service, db, _polar) = setup_sync_service().await;
    let user = create_user(&db.connection, "erin", 0).await;
    let other = create_user(&db.connection, "frank", 0).await;

    for id in ["sub_a", "sub_b", "sub_c"] {
        service
            .sync_subscription(user.id, "cus_1", id, "prod_pro", "active")
            .await
            .unwrap();
    }
    service
        .sync_subscription(other.id, "cus_2", "sub_other", "prod_pro", "active")
        .await
        .unwrap();

    let ids: Vec<String> = service
        .get_user_subscriptions(user.id)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.subscription_id)
        .collect();
    assert_eq!(ids, vec!["sub_a", "sub_b", "sub_c"]);

    assert!(service
        .get_user_subscriptions(Uuid::new_v4())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_get_customer_by_user_id_absent_is_none() {
    let (service, db, _polar) = setup_sync_service().await;
    let user = create_user(&db.connection, "grace", 0).await;

    let customer = service.get_customer_by_user_id(user.id).await.unwrap();
    assert!(customer.is_none());
}
