use serde::{Deserialize, Serialize};

use crate::config::PredictionConfig;
use crate::models::user_event::UserEvent;

/// Body of one predict call. The placement travels in the URL.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub user_event: UserEvent,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub validate_only: bool,
}

impl PredictRequest {
    pub fn for_event(config: &PredictionConfig, user_event: UserEvent) -> Self {
        Self {
            user_event,
            page_size: config.page_size(),
            filter: config.filter().map(str::to_string),
            validate_only: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictResponse {
    pub results: Vec<PredictResultItem>,
    pub attribution_token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PredictResultItem {
    pub id: String,
}

/// What a run reports for one recommendation: the product id and, when the
/// run carries a branch, its resolved title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Catalog entry returned by the product lookup. Only the fields this tool
/// reads; everything else in the response is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub title: String,
}
