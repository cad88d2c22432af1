use crate::core::errors::LifeFlowError;
use crate::core::fixtures;
use crate::core::models::{
    Appointment, BloodBank, BloodRequest, DonationRecord, DonorListing, NewUser, Notification, User, UserUpdate,
};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<Vec<User>>>,
    appointments: Arc<RwLock<Vec<Appointment>>>,
    donations: Arc<RwLock<Vec<DonationRecord>>>,
    requests: Arc<RwLock<Vec<BloodRequest>>>,
    notifications: Arc<RwLock<Vec<Notification>>>,
    blood_banks: Arc<RwLock<Vec<BloodBank>>>,
    donors: Arc<RwLock<Vec<DonorListing>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-loaded with the seed users, auxiliary tables and search directory.
    pub fn with_fixtures() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(fixtures::users())),
            appointments: Arc::new(RwLock::new(fixtures::appointments())),
            donations: Arc::new(RwLock::new(fixtures::donation_history())),
            requests: Arc::new(RwLock::new(fixtures::blood_requests())),
            notifications: Arc::new(RwLock::new(fixtures::notifications())),
            blood_banks: Arc::new(RwLock::new(fixtures::blood_banks())),
            donors: Arc::new(RwLock::new(fixtures::donor_directory())),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, LifeFlowError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, user_id: u64) -> Result<Option<User>, LifeFlowError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, LifeFlowError> {
        Ok(self.users.read().await.clone())
    }

    async fn add_user(&self, user: NewUser) -> Result<User, LifeFlowError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(LifeFlowError::EmailAlreadyRegistered(user.email));
        }
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let created = user.into_user(next_id);
        users.push(created.clone());
        Ok(created)
    }

    async fn update_user(&self, user_id: u64, update: UserUpdate) -> Result<Option<User>, LifeFlowError> {
        let mut users = self.users.write().await;
        if let Some(email) = &update.email {
            if users.iter().any(|u| u.id != user_id && &u.email == email) {
                return Err(LifeFlowError::EmailAlreadyRegistered(email.clone()));
            }
        }
        Ok(users.iter_mut().find(|u| u.id == user_id).map(|user| {
            update.apply(user);
            user.clone()
        }))
    }

    async fn delete_user(&self, user_id: u64) -> Result<bool, LifeFlowError> {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.id == user_id) {
            Some(index) => {
                users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn appointments_for(&self, user_id: u64) -> Result<Vec<Appointment>, LifeFlowError> {
        let appointments = self.appointments.read().await;
        Ok(appointments.iter().filter(|a| a.user_id == user_id).cloned().collect())
    }

    async fn donations_for(&self, user_id: u64) -> Result<Vec<DonationRecord>, LifeFlowError> {
        let donations = self.donations.read().await;
        Ok(donations.iter().filter(|d| d.user_id == user_id).cloned().collect())
    }

    async fn requests_for(&self, user_id: u64) -> Result<Vec<BloodRequest>, LifeFlowError> {
        let requests = self.requests.read().await;
        Ok(requests.iter().filter(|r| r.user_id == user_id).cloned().collect())
    }

    async fn notifications_for(&self, user_id: u64) -> Result<Vec<Notification>, LifeFlowError> {
        let notifications = self.notifications.read().await;
        Ok(notifications.iter().filter(|n| n.user_id == user_id).cloned().collect())
    }

    async fn blood_banks(&self) -> Result<Vec<BloodBank>, LifeFlowError> {
        Ok(self.blood_banks.read().await.clone())
    }

    async fn donor_directory(&self) -> Result<Vec<DonorListing>, LifeFlowError> {
        Ok(self.donors.read().await.clone())
    }
}
