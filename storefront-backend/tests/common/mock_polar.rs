// tests/common/mock_polar.rs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use storefront_backend::error::{AppError, AppResult};
use storefront_backend::service::polar_client::{
    CreateCheckoutParams, CreateCustomerParams, PolarCheckout, PolarClient, PolarCustomer,
    PolarCustomerState,
};

#[derive(Default)]
struct MockState {
    customers: HashMap<String, PolarCustomer>,
    create_customer_calls: Vec<CreateCustomerParams>,
    checkout_calls: Vec<CreateCheckoutParams>,
    fail_remote: bool,
    omit_checkout_url: bool,
}

/// テスト用のモックPolarクライアント
#[derive(Clone, Default)]
pub struct MockPolarClient {
    state: Arc<Mutex<MockState>>,
}

impl MockPolarClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以降のリモート呼び出しを全て失敗させる
    pub fn fail_remote_calls(&self) {
        self.state.lock().unwrap().fail_remote = true;
    }

    pub fn omit_checkout_url(&self) {
        self.state.lock().unwrap().omit_checkout_url = true;
    }

    pub fn create_customer_calls(&self) -> Vec<CreateCustomerParams> {
        self.state.lock().unwrap().create_customer_calls.clone()
    }

    pub fn checkout_calls(&self) -> Vec<CreateCheckoutParams> {
        self.state.lock().unwrap().checkout_calls.clone()
    }

    fn remote_error(context: &str) -> AppError {
        AppError::ExternalServiceError(format!("Polar error ({}): HTTP 503", context))
    }
}

#[async_trait]
impl PolarClient for MockPolarClient {
    async fn create_customer(&self, params: CreateCustomerParams) -> AppResult<PolarCustomer> {
        let mut state = self.state.lock().unwrap();
        state.create_customer_calls.push(params.clone());
        if state.fail_remote {
            return Err(Self::remote_error("customers.create"));
        }

        let customer = PolarCustomer {
            id: format!("cus_mock_{}", state.create_customer_calls.len()),
            email: params.email,
            name: Some(params.name),
            external_id: Some(params.external_id),
        };
        state.customers.insert(customer.id.clone(), customer.clone());
        Ok(customer)
    }

    async fn get_customer(&self, customer_id: &str) -> AppResult<PolarCustomerState> {
        let state = self.state.lock().unwrap();
        if state.fail_remote {
            return Err(Self::remote_error("customers.get"));
        }

        let customer = state
            .customers
            .get(customer_id)
            .ok_or_else(|| Self::remote_error("customers.get"))?;

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
        let mut state = self.state.lock().unwrap();
        state.checkout_calls.push(params.clone());
        if state.fail_remote {
            return Err(Self::remote_error("checkouts.create"));
        }

        let url = (!state.omit_checkout_url).then(|| {
            format!(
                "https://sandbox.polar.sh/checkout/{}?product={}",
                params.customer_id,
                params.products.join(",")
            )
        });

        Ok(PolarCheckout {
            id: format!("chk_mock_{}", state.checkout_calls.len()),
            url,
        })
    }
}
