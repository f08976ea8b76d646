// src/service/subscription_sync_service.rs

use crate::db::DbPool;
use crate::domain::polar_customer_model;
use crate::domain::polar_subscription_model;
use crate::error::{AppError, AppResult};
use crate::repository::polar_customer_repository::PolarCustomerRepository;
use crate::repository::polar_subscription_repository::{
    PolarSubscriptionRepository, UpsertPolarSubscription,
};
use crate::service::polar_client::{
    CreateCheckoutParams, CreateCustomerParams, PolarClient, PolarCustomer, PolarCustomerState,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// サブスクリプション同期の結果
#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    /// 書き込み後の行
    pub subscription: polar_subscription_model::Model,
    /// 更新前のステータス（新規作成時はNone）
    pub previous_status: Option<String>,
    pub created: bool,
}

/// Polar上の顧客・サブスクリプションとローカルDBの同期
#[derive(Clone)]
pub struct SubscriptionSyncService {
    customer_repo: Arc<PolarCustomerRepository>,
    subscription_repo: Arc<PolarSubscriptionRepository>,
    polar: Arc<dyn PolarClient>,
}

impl SubscriptionSyncService {
    pub fn new(db: DbPool, polar: Arc<dyn PolarClient>) -> Self {
        Self {
            customer_repo: Arc::new(PolarCustomerRepository::new(db.clone())),
            subscription_repo: Arc::new(PolarSubscriptionRepository::new(db)),
            polar,
        }
    }

    /// Polarに顧客を作成し、ローカルに対応を保存する
    pub async fn create_customer(
        &self,
        user_id: Uuid,
        email: &str,
        name: Option<&str>,
    ) -> AppResult<PolarCustomer> {
        // リモートに孤立した顧客を作らないよう先に確認
        if let Some(existing) = self.customer_repo.find_by_user_id(user_id).await? {
            return Err(AppError::Conflict(format!(
                "User {} already has Polar customer {}",
                user_id, existing.customer_id
            )));
        }

        let params = CreateCustomerParams {
            email: email.to_string(),
            external_id: user_id.to_string(),
            name: name.unwrap_or(email).to_string(),
        };

        let customer = self.polar.create_customer(params).await.map_err(|e| {
            tracing::error!(user_id = %user_id, error = %e, "Failed to create Polar customer");
            e
        })?;

        if let Err(e) = self.customer_repo.create(user_id, &customer.id).await {
            tracing::error!(
                user_id = %user_id,
                customer_id = %customer.id,
                error = %e,
                "Polar customer created but local record could not be saved"
            );
            return Err(e.into());
        }

        tracing::info!(
            user_id = %user_id,
            customer_id = %customer.id,
            "Polar customer created"
        );

        Ok(customer)
    }

    /// チェックアウトURLを取得
    pub async fn get_checkout_url(&self, customer_id: &str, product_slug: &str) -> AppResult<String> {
        let checkout = self
            .polar
            .create_checkout(CreateCheckoutParams {
                customer_id: customer_id.to_string(),
                products: vec![product_slug.to_string()],
            })
            .await
            .map_err(|e| {
                tracing::error!(
                    customer_id = %customer_id,
                    product = %product_slug,
                    error = %e,
                    "Failed to create Polar checkout"
                );
                e
            })?;

        checkout.url.ok_or_else(|| {
            AppError::ExternalServiceError(format!(
                "Polar checkout {} has no URL",
                checkout.id
            ))
        })
    }

    pub async fn get_customer_by_user_id(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<polar_customer_model::Model>> {
        Ok(self.customer_repo.find_by_user_id(user_id).await?)
    }

    /// ローカルに顧客がなければNone
    pub async fn get_customer_state(&self, user_id: Uuid) -> AppResult<Option<PolarCustomerState>> {
        let Some(customer) = self.customer_repo.find_by_user_id(user_id).await? else {
            return Ok(None);
        };

        let state = self.polar.get_customer(&customer.customer_id).await?;
        Ok(Some(state))
    }

    pub async fn get_user_subscriptions(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<polar_subscription_model::Model>> {
        Ok(self.subscription_repo.find_by_user_id(user_id).await?)
    }

    pub async fn has_active_subscription(&self, user_id: Uuid) -> AppResult<bool> {
        let subscriptions = self.subscription_repo.find_by_user_id(user_id).await?;
        Ok(subscriptions.iter().any(|s| s.is_active()))
    }

    /// subscription_idをキーにサブスクリプションを作成または更新
    pub async fn sync_subscription(
        &self,
        user_id: Uuid,
        customer_id: &str,
        subscription_id: &str,
        product_id: &str,
        status: &str,
    ) -> AppResult<SyncOutcome> {
        let result = self
            .subscription_repo
            .upsert(UpsertPolarSubscription {
                user_id,
                customer_id: customer_id.to_string(),
                subscription_id: subscription_id.to_string(),
                product_id: product_id.to_string(),
                status: status.to_string(),
            })
            .await?;

        tracing::info!(
            user_id = %user_id,
            subscription_id = %subscription_id,
            status = %status,
            previous_status = ?result.previous_status,
            created = result.created,
            "Subscription synced"
        );

        Ok(SyncOutcome {
            subscription: result.subscription,
            previous_status: result.previous_status,
            created: result.created,
        })
    }
}
