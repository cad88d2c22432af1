use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppLog {
    pub id: String,
    pub action: String,
    pub user_id: Option<u64>,
    #[schema(value_type = Object)]
    pub details: serde_json::Map<String, serde_json::Value>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub timestamp: DateTime<Utc>,
}
