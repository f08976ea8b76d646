// src/api/dto/subscription_dto.rs

use crate::domain::polar_subscription_model;
use crate::service::subscription_sync_service::SyncOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Polarから受け取ったサブスクリプションの同期リクエスト
#[derive(Debug, Deserialize, Validate)]
pub struct SyncSubscriptionRequest {
    pub user_id: Uuid,
    #[validate(length(min = 1, message = "Customer ID is required"))]
    pub customer_id: String,
    #[validate(length(min = 1, message = "Subscription ID is required"))]
    pub subscription_id: String,
    #[validate(length(min = 1, message = "Product ID is required"))]
    pub product_id: String,
    #[validate(length(min = 1, max = 64, message = "Status must be 1-64 characters"))]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub customer_id: String,
    pub subscription_id: String,
    pub product_id: String,
    pub status: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<polar_subscription_model::Model> for SubscriptionResponse {
    fn from(model: polar_subscription_model::Model) -> Self {
        Self {
            is_active: model.is_active(),
            id: model.id,
            user_id: model.user_id,
            customer_id: model.customer_id,
            subscription_id: model.subscription_id,
            product_id: model.product_id,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActiveSubscriptionResponse {
    pub user_id: Uuid,
    pub has_active_subscription: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SyncSubscriptionResponse {
    pub subscription: SubscriptionResponse,
    pub previous_status: Option<String>,
    pub created: bool,
}

impl From<SyncOutcome> for SyncSubscriptionResponse {
    fn from(outcome: SyncOutcome) -> Self {
        Self {
            subscription: outcome.subscription.into(),
            previous_status: outcome.previous_status,
            created: outcome.created,
        }
    }
}
