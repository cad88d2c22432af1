use crate::core::errors::LifeFlowError;
use crate::core::models::AppLog;
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryLogging {
    logs: Arc<RwLock<Vec<AppLog>>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        user_id: Option<u64>,
    ) -> Result<(), LifeFlowError> {
        let details = match details {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(LifeFlowError::LoggingError(format!(
                    "Log details must be a JSON object, got {}",
                    other
                )));
            }
        };
        let mut logs = self.logs.write().await;
        logs.push(AppLog {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            user_id,
            details,
            timestamp: chrono::Utc::now(),
        });
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AppLog>, LifeFlowError> {
        let logs = self.logs.read().await;
        Ok(logs.clone())
    }
}
