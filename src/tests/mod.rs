mod auth_tests;
mod dashboard_tests;

use crate::auth::jwt::Claims;
use crate::core::services::{LifeFlowService, LoginForm};
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub const TEST_SECRET: &str = "test-secret";

pub fn create_test_service() -> LifeFlowService<InMemoryLogging, InMemoryStorage> {
    let storage = InMemoryStorage::with_fixtures();
    let logging = InMemoryLogging::new();
    LifeFlowService::new(storage, logging, TEST_SECRET.to_string(), 3600)
}

pub fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

pub async fn claims_for(
    service: &LifeFlowService<InMemoryLogging, InMemoryStorage>,
    email: &str,
    password: &str,
) -> Claims {
    let login = service.login(login_form(email, password)).await.unwrap();
    service.validate_token(&login.token).unwrap()
}
