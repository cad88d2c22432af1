pub mod api;
pub mod auth;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::LifeFlowError;
pub use crate::core::services::LifeFlowService;
pub use crate::infrastructure::logging::in_memory::InMemoryLogging;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
