// src/service/polar_client.rs

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::PolarConfig;
use crate::error::{AppError, AppResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Polarの顧客
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarCustomer {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
}

/// Polarから取得した顧客の現在の状態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarCustomerState {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarCheckout {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCustomerParams {
    pub email: String,
    pub external_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCheckoutParams {
    pub customer_id: String,
    pub products: Vec<String>,
}

/// 決済プロバイダー（Polar）APIのトレイト定義
#[async_trait]
pub trait PolarClient: Send + Sync {
    /// 顧客を作成
    async fn create_customer(&self, params: CreateCustomerParams) -> AppResult<PolarCustomer>;

    /// 顧客の状態を取得
    async fn get_customer(&self, customer_id: &str) -> AppResult<PolarCustomerState>;

    /// チェックアウトセッションを作成
    async fn create_checkout(&self, params: CreateCheckoutParams) -> AppResult<PolarCheckout>;
}

/// 設定に応じたクライアントを作成
pub fn polar_client_from_config(config: &PolarConfig) -> AppResult<Arc<dyn PolarClient>> {
    if config.development_mode {
        return Ok(Arc::new(DevelopmentPolarClient::new()));
    }
    Ok(Arc::new(HttpPolarClient::new(config)?))
}

/// Polar REST APIクライアント
pub struct HttpPolarClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl HttpPolarClient {
    pub fn new(config: &PolarConfig) -> AppResult<Self> {
        Self::with_base_url(config, config.base_url())
    }

    pub fn with_base_url(config: &PolarConfig, base_url: &str) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                AppError::InternalServerError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> AppResult<T> {
        let response = request
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(context = %context, error = %e, "Polar request failed");
                AppError::ExternalServiceError(format!("Polar error ({}): {}", context, e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Polar error ({}): {}", context, e))
        })?;

        if !status.is_success() {
            tracing::error!(
                context = %context,
                status = %status,
                body = %body,
                "Polar API returned an error"
            );
            return Err(AppError::ExternalServiceError(format!(
                "Polar error ({}): HTTP {}: {}",
                context, status, body
            )));
        }

        parse_response(&body, context)
    }
}

fn parse_response<T: DeserializeOwned>(body: &str, context: &str) -> AppResult<T> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(context = %context, error = %e, "Unexpected Polar response body");
        AppError::ExternalServiceError(format!(
            "Polar error ({}): invalid response: {}",
            context, e
        ))
    })
}

#[async_trait]
impl PolarClient for HttpPolarClient {
    async fn create_customer(&self, params: CreateCustomerParams) -> AppResult<PolarCustomer> {
        let request = self.client.post(self.url("customers/")).json(&params);
        self.send(request, "customers.create").await
    }

    async fn get_customer(&self, customer_id: &str) -> AppResult<PolarCustomerState> {
        let request = self.client.get(self.url(&format!("customers/{}", customer_id)));
        self.send(request, "customers.get").await
    }

    async fn create_checkout(&self, params: CreateCheckoutParams) -> AppResult<PolarCheckout> {
        let request = self.client.post(self.url("checkouts/")).json(&params);
        self.send(request, "checkouts.create").await
    }
}

/// 開発モード用クライアント（ネットワークに出ない）
#[derive(Default)]
pub struct DevelopmentPolarClient {
    customers: Mutex<HashMap<String, PolarCustomer>>,
}

impl DevelopmentPolarClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PolarClient for DevelopmentPolarClient {
    async fn create_customer(&self, params: CreateCustomerParams) -> AppResult<PolarCustomer> {
        tracing::info!("Development mode: creating mock Polar customer");
        let customer = PolarCustomer {
            id: format!("dev_cus_{}", Uuid::new_v4().simple()),
            email: params.email,
            name: Some(params.name),
            external_id: Some(params.external_id),
        };
        self.customers
            .lock()
            .await
            .insert(customer.id.clone(), customer.clone());
        Ok(customer)
    }

    async fn get_customer(&self, customer_id: &str) -> AppResult<PolarCustomerState> {
        let customers = self.customers.lock().await;
        let customer = customers.get(customer_id).ok_or_else(|| {
            AppError::ExternalServiceError(format!(
                "Polar error (customers.get): unknown customer {}",
                customer_id
            ))
        })?;

        Ok(PolarCustomerState {
            id: customer.id.clone(),
            email: customer.email.clone(),
            name: customer.name.clone(),
            external_id: customer.external_id.clone(),
            created_at: None,
            metadata: HashMap::new(),
        })
    }

    async fn create_checkout(&self, params: CreateCheckoutParams) -> AppResult<PolarCheckout> {
        tracing::info!("Development mode: returning mock checkout URL");
        Ok(PolarCheckout {
            id: format!("dev_chk_{}", Uuid::new_v4().simple()),
            url: Some(format!(
                "http://localhost:3000/mock-checkout?customer_id={}&products={}",
                params.customer_id,
                params.products.join(",")
            )),
        })
    }
}
