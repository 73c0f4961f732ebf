use std::sync::Arc;

use gcp_auth::TokenProvider;
use reqwest::{Client, RequestBuilder};

use crate::error::PredictionError;
use crate::models::prediction::{PredictRequest, PredictResponse, Product};

const DEFAULT_ENDPOINT: &str = "https://retail.googleapis.com/v2";
const AUTH_SCOPES: &[&str] = &["https://www.googleapis.com/auth/cloud-platform"];

/// Thin client for the prediction service. One instance per run owns the
/// connection pool; credentials come from ambient discovery unless the
/// endpoint was overridden.
pub struct RetailClient {
    client: Client,
    base_url: String,
    auth: Option<Arc<dyn TokenProvider>>,
}

impl RetailClient {
    /// Client against the production endpoint, authenticated through
    /// ambient credential discovery.
    pub async fn new() -> Result<Self, PredictionError> {
        let auth = gcp_auth::provider().await.map_err(|err| {
            PredictionError::RemoteCall(format!("Establishing service credentials failed: {err}"))
        })?;
        Ok(Self {
            client: Client::new(),
            base_url: DEFAULT_ENDPOINT.to_string(),
            auth: Some(auth),
        })
    }

    /// Client against an explicit endpoint, without credentials. Mock-server
    /// tests use this.
    pub fn new_with_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            auth: None,
        }
    }

    /// Request predictions for one user event from the given serving config.
    pub async fn predict(
        &self,
        placement: &str,
        request: &PredictRequest,
    ) -> Result<PredictResponse, PredictionError> {
        let url = format!("{}/{}:predict", self.base_url, placement);
        let response = self
            .authorized(self.client.post(&url))
            .await?
            .json(request)
            .send()
            .await
            .map_err(|err| {
                PredictionError::RemoteCall(format!("Prediction request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PredictionError::RemoteCall(format!(
                "Prediction request failed: {status} - {error_text}"
            )));
        }

        response.json().await.map_err(|err| {
            PredictionError::RemoteCall(format!("Parsing the prediction response failed: {err}"))
        })
    }

    /// Resolve one product resource path to its catalog entry.
    pub async fn get_product(&self, name: &str) -> Result<Product, PredictionError> {
        let url = format!("{}/{}", self.base_url, name);
        let response = self
            .authorized(self.client.get(&url))
            .await?
            .send()
            .await
            .map_err(|err| PredictionError::RemoteCall(format!("Product request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PredictionError::RemoteCall(format!(
                "Product request failed: {status} - {error_text}"
            )));
        }

        response.json().await.map_err(|err| {
            PredictionError::RemoteCall(format!("Parsing the product response failed: {err}"))
        })
    }

    async fn authorized(
        &self,
        builder: RequestBuilder,
    ) -> Result<RequestBuilder, PredictionError> {
        match &self.auth {
            Some(provider) => {
                let token = provider.token(AUTH_SCOPES).await.map_err(|err| {
                    PredictionError::RemoteCall(format!("Fetching an access token failed: {err}"))
                })?;
                Ok(builder.bearer_auth(token.as_str()))
            }
            None => Ok(builder),
        }
    }
}
