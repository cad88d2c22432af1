use crate::core::errors::LifeFlowError;
use crate::core::models::{
    Appointment, BloodBank, BloodRequest, DonationRecord, DonorListing, NewUser, Notification, User, UserUpdate,
};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, LifeFlowError>;
    async fn find_user_by_id(&self, user_id: u64) -> Result<Option<User>, LifeFlowError>;
    async fn list_users(&self) -> Result<Vec<User>, LifeFlowError>;
    /// Assigns `max(id) + 1` and inserts, rejecting a taken email in the same critical section.
    async fn add_user(&self, user: NewUser) -> Result<User, LifeFlowError>;
    async fn update_user(&self, user_id: u64, update: UserUpdate) -> Result<Option<User>, LifeFlowError>;
    async fn delete_user(&self, user_id: u64) -> Result<bool, LifeFlowError>;

    async fn appointments_for(&self, user_id: u64) -> Result<Vec<Appointment>, LifeFlowError>;
    async fn donations_for(&self, user_id: u64) -> Result<Vec<DonationRecord>, LifeFlowError>;
    async fn requests_for(&self, user_id: u64) -> Result<Vec<BloodRequest>, LifeFlowError>;
    async fn notifications_for(&self, user_id: u64) -> Result<Vec<Notification>, LifeFlowError>;

    async fn blood_banks(&self) -> Result<Vec<BloodBank>, LifeFlowError>;
    async fn donor_directory(&self) -> Result<Vec<DonorListing>, LifeFlowError>;
}

pub mod in_memory;
