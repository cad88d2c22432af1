//! Seed data loaded into the in-memory store at start-up.

use crate::core::models::{
    Appointment, AppointmentStatus, BloodBank, BloodRequest, BloodType, DonationRecord, DonationStatus, DonorListing,
    Notification, NotificationKind, RequestStatus, Role, Urgency, User,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::collections::BTreeMap;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    date(y, m, d).and_time(NaiveTime::MIN).and_utc()
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            email: "admin@lifeflow.com".to_string(),
            password: "admin123".to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            role: Role::Admin,
            blood_type: None,
            phone: Some("(555) 000-0001".to_string()),
            address: Some("100 Admin Street, City".to_string()),
            date_of_birth: Some(date(1980, 1, 1)),
            medical_id: None,
            hospital: None,
            last_donation: None,
            total_donations: None,
            eligible_to_donate_days: None,
            created_at: midnight(2023, 1, 1),
        },
        User {
            id: 2,
            email: "john.doe@email.com".to_string(),
            password: "donor123".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            role: Role::Donor,
            blood_type: Some(BloodType::OPositive),
            phone: Some("(555) 111-0001".to_string()),
            address: Some("123 Donor Lane, City".to_string()),
            date_of_birth: Some(date(1985, 3, 15)),
            medical_id: None,
            hospital: None,
            last_donation: Some(date(2023, 5, 15)),
            total_donations: Some(8),
            eligible_to_donate_days: Some(0),
            created_at: midnight(2023, 2, 1),
        },
        User {
            id: 3,
            email: "jane.smith@email.com".to_string(),
            password: "donor123".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            role: Role::Donor,
            blood_type: Some(BloodType::ANegative),
            phone: Some("(555) 111-0002".to_string()),
            address: Some("456 Blood Street, City".to_string()),
            date_of_birth: Some(date(1990, 7, 22)),
            medical_id: None,
            hospital: None,
            last_donation: Some(date(2023, 4, 20)),
            total_donations: Some(12),
            eligible_to_donate_days: Some(25),
            created_at: midnight(2023, 1, 15),
        },
        User {
            id: 4,
            email: "sarah.johnson@email.com".to_string(),
            password: "recipient123".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            role: Role::Recipient,
            blood_type: Some(BloodType::BNegative),
            phone: Some("(555) 222-0001".to_string()),
            address: Some("111 Patient Street, City".to_string()),
            date_of_birth: Some(date(1995, 12, 8)),
            medical_id: Some("MED-2023-001".to_string()),
            hospital: Some("General Hospital".to_string()),
            last_donation: None,
            total_donations: None,
            eligible_to_donate_days: None,
            created_at: midnight(2023, 3, 1),
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            user_id: 2,
            date: date(2023, 6, 20),
            time: "10:30 AM".to_string(),
            location: "Central Blood Bank".to_string(),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: 2,
            user_id: 3,
            date: date(2023, 6, 21),
            time: "2:00 PM".to_string(),
            location: "Community Hospital".to_string(),
            status: AppointmentStatus::Confirmed,
        },
    ]
}

pub fn donation_history() -> Vec<DonationRecord> {
    vec![
        DonationRecord {
            id: 1,
            user_id: 2,
            date: date(2023, 5, 15),
            location: "Central Blood Bank".to_string(),
            status: DonationStatus::Completed,
        },
        DonationRecord {
            id: 2,
            user_id: 2,
            date: date(2023, 2, 10),
            location: "Mobile Drive - City Hall".to_string(),
            status: DonationStatus::Completed,
        },
        DonationRecord {
            id: 3,
            user_id: 3,
            date: date(2023, 4, 20),
            location: "Memorial Hospital".to_string(),
            status: DonationStatus::Completed,
        },
    ]
}

pub fn blood_requests() -> Vec<BloodRequest> {
    vec![
        BloodRequest {
            id: 1,
            user_id: 4,
            blood_type: BloodType::BNegative,
            quantity: 2,
            urgency: Urgency::High,
            status: RequestStatus::Pending,
            request_date: date(2023, 6, 5),
            approved_date: None,
            reason: "Surgery preparation".to_string(),
            hospital: "General Hospital".to_string(),
        },
        BloodRequest {
            id: 2,
            user_id: 4,
            blood_type: BloodType::BNegative,
            quantity: 1,
            urgency: Urgency::Medium,
            status: RequestStatus::Approved,
            request_date: date(2023, 5, 20),
            approved_date: Some(date(2023, 5, 21)),
            reason: "Emergency treatment".to_string(),
            hospital: "General Hospital".to_string(),
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            user_id: 2,
            message: "Your blood donation appointment is tomorrow at 10:30 AM".to_string(),
            date: date(2023, 6, 19),
            read: false,
            kind: NotificationKind::Appointment,
        },
        Notification {
            id: 2,
            user_id: 2,
            message: "Thank you for your recent donation! Your blood has helped save 3 lives.".to_string(),
            date: date(2023, 5, 16),
            read: true,
            kind: NotificationKind::General,
        },
        Notification {
            id: 3,
            user_id: 3,
            message: "You are eligible to donate blood again. Schedule your next appointment.".to_string(),
            date: date(2023, 6, 1),
            read: false,
            kind: NotificationKind::General,
        },
        Notification {
            id: 4,
            user_id: 4,
            message: "Your blood request has been approved and is being processed".to_string(),
            date: date(2023, 6, 5),
            read: false,
            kind: NotificationKind::Request,
        },
    ]
}

fn inventory(units: [u32; 8]) -> BTreeMap<BloodType, u32> {
    BloodType::ALL.into_iter().zip(units).collect()
}

pub fn blood_banks() -> Vec<BloodBank> {
    vec![
        BloodBank {
            id: 1,
            name: "Central Blood Bank".to_string(),
            address: "123 Main Street, Downtown".to_string(),
            phone: "(555) 123-4567".to_string(),
            distance: "0.5 miles".to_string(),
            hours: "24/7".to_string(),
            inventory: inventory([15, 8, 12, 3, 6, 2, 20, 10]),
        },
        BloodBank {
            id: 2,
            name: "Community Hospital Blood Center".to_string(),
            address: "456 Hospital Drive, Midtown".to_string(),
            phone: "(555) 234-5678".to_string(),
            distance: "1.2 miles".to_string(),
            hours: "6:00 AM - 10:00 PM".to_string(),
            inventory: inventory([10, 5, 8, 1, 4, 1, 15, 7]),
        },
        BloodBank {
            id: 3,
            name: "Memorial Hospital Blood Bank".to_string(),
            address: "789 Medical Plaza, Uptown".to_string(),
            phone: "(555) 345-6789".to_string(),
            distance: "2.1 miles".to_string(),
            hours: "8:00 AM - 8:00 PM".to_string(),
            inventory: inventory([12, 6, 9, 2, 3, 1, 18, 8]),
        },
    ]
}

pub fn donor_directory() -> Vec<DonorListing> {
    vec![
        DonorListing {
            id: 1,
            name: "John D.".to_string(),
            blood_type: BloodType::OPositive,
            location: "Downtown".to_string(),
            last_donation: date(2023, 3, 15),
            total_donations: 8,
            available: true,
        },
        DonorListing {
            id: 2,
            name: "Sarah M.".to_string(),
            blood_type: BloodType::ANegative,
            location: "Midtown".to_string(),
            last_donation: date(2023, 4, 20),
            total_donations: 12,
            available: true,
        },
        DonorListing {
            id: 3,
            name: "Michael R.".to_string(),
            blood_type: BloodType::BPositive,
            location: "Uptown".to_string(),
            last_donation: date(2023, 2, 10),
            total_donations: 15,
            available: false,
        },
        DonorListing {
            id: 4,
            name: "Emily K.".to_string(),
            blood_type: BloodType::AbNegative,
            location: "Downtown".to_string(),
            last_donation: date(2023, 5, 5),
            total_donations: 6,
            available: true,
        },
    ]
}
