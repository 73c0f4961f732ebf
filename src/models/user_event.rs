use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::PredictionError;

/// One unit of work, shaped after the service's user-event schema. Batch
/// files carry these verbatim; beyond decoding, field content is whatever
/// the file holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserEvent {
    pub event_type: String,
    pub visitor_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_details: Vec<ProductDetail>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub experiment_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDetail {
    pub product: ProductRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRef {
    pub id: String,
}

impl UserEvent {
    /// Synthesize the single record the `predict` subcommand sends: one
    /// product-detail entry and zero or one experiment id.
    pub fn for_product(
        event_type: &str,
        visitor_id: &str,
        product_id: &str,
        experiment: Option<&str>,
    ) -> Self {
        Self {
            event_type: event_type.to_string(),
            visitor_id: visitor_id.to_string(),
            product_details: vec![ProductDetail {
                product: ProductRef {
                    id: product_id.to_string(),
                },
                quantity: None,
            }],
            experiment_ids: experiment.map(str::to_string).into_iter().collect(),
        }
    }

    /// Load an ordered batch of user events from a JSON array file.
    pub async fn load_batch(path: &Path) -> Result<Vec<Self>, PredictionError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| PredictionError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&content).map_err(PredictionError::Decode)
    }
}
