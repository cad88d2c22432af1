use super::blood_type::BloodType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    Recipient,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Donor => "donor",
            Role::Recipient => "recipient",
            Role::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donor" => Ok(Role::Donor),
            "recipient" => Ok(Role::Recipient),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// A stored user record. The password is kept in plaintext and must never
/// leave the service; convert to [`UserProfile`] before responding.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub blood_type: Option<BloodType>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub medical_id: Option<String>,
    pub hospital: Option<String>,
    pub last_donation: Option<NaiveDate>,
    pub total_donations: Option<u32>,
    pub eligible_to_donate_days: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Everything a user record holds except its id, which the store assigns.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub blood_type: Option<BloodType>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub medical_id: Option<String>,
    pub hospital: Option<String>,
    pub last_donation: Option<NaiveDate>,
    pub total_donations: Option<u32>,
    pub eligible_to_donate_days: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            blood_type: self.blood_type,
            phone: self.phone,
            address: self.address,
            date_of_birth: self.date_of_birth,
            medical_id: self.medical_id,
            hospital: self.hospital,
            last_donation: self.last_donation,
            total_donations: self.total_donations,
            eligible_to_donate_days: self.eligible_to_donate_days,
            created_at: self.created_at,
        }
    }
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
    pub blood_type: Option<BloodType>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[schema(value_type = Option<String>, example = "1990-07-22")]
    pub date_of_birth: Option<NaiveDate>,
    pub medical_id: Option<String>,
    pub hospital: Option<String>,
    #[schema(value_type = Option<String>, example = "2023-05-15")]
    pub last_donation: Option<NaiveDate>,
    pub total_donations: Option<u32>,
    pub eligible_to_donate_days: Option<i32>,
}

impl UserUpdate {
    pub fn apply(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if self.blood_type.is_some() {
            user.blood_type = self.blood_type;
        }
        if self.phone.is_some() {
            user.phone = self.phone;
        }
        if self.address.is_some() {
            user.address = self.address;
        }
        if self.date_of_birth.is_some() {
            user.date_of_birth = self.date_of_birth;
        }
        if self.medical_id.is_some() {
            user.medical_id = self.medical_id;
        }
        if self.hospital.is_some() {
            user.hospital = self.hospital;
        }
        if self.last_donation.is_some() {
            user.last_donation = self.last_donation;
        }
        if self.total_donations.is_some() {
            user.total_donations = self.total_donations;
        }
        if self.eligible_to_donate_days.is_some() {
            user.eligible_to_donate_days = self.eligible_to_donate_days;
        }
    }
}

/// Outward-facing view of a user: the record without its password.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<BloodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "1985-03-15")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2023-05-15")]
    pub last_donation: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_donations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_to_donate_days: Option<i32>,
    #[schema(value_type = String, example = "2023-02-01T00:00:00Z")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            blood_type: user.blood_type,
            phone: user.phone,
            address: user.address,
            date_of_birth: user.date_of_birth,
            medical_id: user.medical_id,
            hospital: user.hospital,
            last_donation: user.last_donation,
            total_donations: user.total_donations,
            eligible_to_donate_days: user.eligible_to_donate_days,
            created_at: user.created_at,
        }
    }
}
