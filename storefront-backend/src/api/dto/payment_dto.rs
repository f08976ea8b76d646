// src/api/dto/payment_dto.rs

use crate::domain::polar_customer_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    pub user_id: Uuid,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCheckoutRequest {
    #[validate(length(min = 1, message = "Customer ID is required"))]
    pub customer_id: String,
    #[validate(length(min = 1, max = 128, message = "Product slug must be 1-128 characters"))]
    pub product_slug: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCheckoutResponse {
    pub checkout_url: String,
}

/// ローカルに保存された顧客の対応
#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub customer_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<polar_customer_model::Model> for CustomerResponse {
    fn from(model: polar_customer_model::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            customer_id: model.customer_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
