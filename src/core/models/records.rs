use super::blood_type::BloodType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Scheduled and confirmed appointments still lie ahead of the donor.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, AppointmentStatus::Scheduled | AppointmentStatus::Confirmed)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    pub user_id: u64,
    #[schema(value_type = String, example = "2023-06-20")]
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub status: AppointmentStatus,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Completed,
    Deferred,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub id: u64,
    pub user_id: u64,
    #[schema(value_type = String, example = "2023-05-15")]
    pub date: NaiveDate,
    pub location: String,
    pub status: DonationStatus,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Fulfilled,
    Rejected,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    pub id: u64,
    pub user_id: u64,
    pub blood_type: BloodType,
    pub quantity: u32,
    pub urgency: Urgency,
    pub status: RequestStatus,
    #[schema(value_type = String, example = "2023-06-05")]
    pub request_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2023-05-21")]
    pub approved_date: Option<NaiveDate>,
    pub reason: String,
    pub hospital: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Appointment,
    General,
    Request,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub user_id: u64,
    pub message: String,
    #[schema(value_type = String, example = "2023-06-19")]
    pub date: NaiveDate,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

impl std::str::FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Urgency::Low),
            "medium" => Ok(Urgency::Medium),
            "high" => Ok(Urgency::High),
            other => Err(format!("Unknown urgency: {}", other)),
        }
    }
}
