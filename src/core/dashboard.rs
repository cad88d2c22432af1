use crate::core::models::{
    Appointment, BloodRequest, DonationRecord, Notification, RequestStatus, UserProfile,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The user together with every auxiliary row that belongs to them.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    #[serde(flatten)]
    pub user: UserProfile,
    pub appointments: Vec<Appointment>,
    pub donation_history: Vec<DonationRecord>,
    pub requests: Vec<BloodRequest>,
    pub notifications: Vec<Notification>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonorDashboard {
    pub profile: UserProfile,
    pub eligible: bool,
    pub days_until_eligible: u32,
    pub next_appointment: Option<Appointment>,
    pub appointments: Vec<Appointment>,
    pub donation_history: Vec<DonationRecord>,
    pub notifications: Vec<Notification>,
    pub unread_notifications: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipientDashboard {
    pub profile: UserProfile,
    pub requests: Vec<BloodRequest>,
    pub pending_requests: usize,
    pub notifications: Vec<Notification>,
    pub unread_notifications: usize,
}

/// A donor with no recorded waiting period counts as eligible.
pub fn is_eligible(eligible_to_donate_days: Option<i32>) -> bool {
    eligible_to_donate_days.unwrap_or(0) <= 0
}

pub fn days_until_eligible(eligible_to_donate_days: Option<i32>) -> u32 {
    eligible_to_donate_days.unwrap_or(0).max(0) as u32
}

pub fn next_appointment(appointments: &[Appointment]) -> Option<&Appointment> {
    appointments.iter().find(|a| a.status.is_upcoming())
}

pub fn pending_request_count(requests: &[BloodRequest]) -> usize {
    requests.iter().filter(|r| r.status == RequestStatus::Pending).count()
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

impl DonorDashboard {
    pub fn from_session(session: SessionPayload) -> Self {
        let days = session.user.eligible_to_donate_days;
        DonorDashboard {
            eligible: is_eligible(days),
            days_until_eligible: days_until_eligible(days),
            next_appointment: next_appointment(&session.appointments).cloned(),
            unread_notifications: unread_count(&session.notifications),
            profile: session.user,
            appointments: session.appointments,
            donation_history: session.donation_history,
            notifications: session.notifications,
        }
    }
}

impl RecipientDashboard {
    pub fn from_session(session: SessionPayload) -> Self {
        RecipientDashboard {
            pending_requests: pending_request_count(&session.requests),
            unread_notifications: unread_count(&session.notifications),
            profile: session.user,
            requests: session.requests,
            notifications: session.notifications,
        }
    }
}
