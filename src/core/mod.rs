pub mod dashboard;
pub mod errors;
pub mod fixtures;
pub mod models;
pub mod search;
pub mod services;
