pub mod in_memory;

use crate::core::errors::LifeFlowError;
use crate::core::models::AppLog;
use async_trait::async_trait;

#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        user_id: Option<u64>,
    ) -> Result<(), LifeFlowError>;
    async fn get_logs(&self) -> Result<Vec<AppLog>, LifeFlowError>;
}
