use tracing::{debug, info};

use crate::api::retail::RetailClient;
use crate::config::PredictionConfig;
use crate::error::PredictionError;
use crate::models::prediction::{PredictRequest, PredictionResult};
use crate::models::user_event::UserEvent;

/// Issues one prediction call per record, strictly in order. The first
/// failed call aborts the run; later records are never attempted.
pub struct PredictionRunner<'a> {
    client: &'a RetailClient,
    config: &'a PredictionConfig,
}

impl<'a> PredictionRunner<'a> {
    pub fn new(client: &'a RetailClient, config: &'a PredictionConfig) -> Self {
        Self { client, config }
    }

    /// Run every record in sequence and collect the results in call order.
    pub async fn execute_all(
        &self,
        user_events: &[UserEvent],
    ) -> Result<Vec<PredictionResult>, PredictionError> {
        let placement = self.config.placement();
        let mut results = Vec::new();
        for (index, user_event) in user_events.iter().enumerate() {
            results.extend(self.execute_one(&placement, index + 1, user_event).await?);
        }
        Ok(results)
    }

    async fn execute_one(
        &self,
        placement: &str,
        number: usize,
        user_event: &UserEvent,
    ) -> Result<Vec<PredictionResult>, PredictionError> {
        let request = PredictRequest::for_event(self.config, user_event.clone());
        let parameters = serde_json::to_string(user_event).map_err(PredictionError::Decode)?;
        info!(number, "Initiating prediction request");
        debug!(parameters = %parameters, "Request parameters");

        let response = self.client.predict(placement, &request).await?;
        if !response.attribution_token.is_empty() {
            debug!(attribution_token = %response.attribution_token, "Prediction response");
        }

        let mut results = Vec::with_capacity(response.results.len());
        for item in response.results {
            // One lookup per result item, repeated ids included.
            let title = match self.config.product_name(&item.id) {
                Some(name) => Some(
                    self.client
                        .get_product(&name)
                        .await
                        .map_err(|err| {
                            PredictionError::RemoteCall(format!(
                                "Getting the product title failed: {err}"
                            ))
                        })?
                        .title,
                ),
                None => None,
            };
            let result = PredictionResult { id: item.id, title };
            let encoded = serde_json::to_string(&result).map_err(PredictionError::Decode)?;
            info!(result = %encoded, "Prediction result");
            results.push(result);
        }
        Ok(results)
    }
}
