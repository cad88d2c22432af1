use crate::constants::{APPOINTMENT_SCHEDULED, BLOOD_REQUEST_SUBMITTED};
use crate::core::dashboard::{is_eligible, next_appointment, pending_request_count};
use crate::core::errors::LifeFlowError;
use crate::core::fixtures;
use crate::core::models::{AppointmentStatus, BloodType, RequestStatus, Role, Urgency, UserUpdate};
use crate::core::services::{AppointmentForm, BloodRequestForm};
use crate::tests::{claims_for, create_test_service};

#[test]
fn test_eligibility_threshold() {
    assert!(is_eligible(Some(0)));
    assert!(is_eligible(Some(-3)));
    assert!(is_eligible(None));
    assert!(!is_eligible(Some(1)));
}

#[test]
fn test_next_appointment_skips_finished_ones() {
    let mut appointments = fixtures::appointments();
    appointments[0].status = AppointmentStatus::Completed;
    let next = next_appointment(&appointments).unwrap();
    assert_eq!(next.id, 2);

    appointments[1].status = AppointmentStatus::Cancelled;
    assert!(next_appointment(&appointments).is_none());
}

#[test]
fn test_pending_request_count() {
    assert_eq!(pending_request_count(&fixtures::blood_requests()), 1);
}

#[tokio::test]
async fn test_donor_dashboard_for_eligible_donor() {
    let service = create_test_service();
    let claims = claims_for(&service, "john.doe@email.com", "donor123").await;
    let dashboard = service.donor_dashboard(&claims).await.unwrap();

    assert!(dashboard.eligible);
    assert_eq!(dashboard.days_until_eligible, 0);
    assert_eq!(dashboard.next_appointment.as_ref().map(|a| a.id), Some(1));
    assert_eq!(dashboard.donation_history.len(), 2);
    assert_eq!(dashboard.unread_notifications, 1);
}

#[tokio::test]
async fn test_donor_dashboard_for_waiting_donor() {
    let service = create_test_service();
    let claims = claims_for(&service, "jane.smith@email.com", "donor123").await;
    let dashboard = service.donor_dashboard(&claims).await.unwrap();

    assert!(!dashboard.eligible);
    assert_eq!(dashboard.days_until_eligible, 25);
    assert_eq!(
        dashboard.next_appointment.map(|a| a.status),
        Some(AppointmentStatus::Confirmed)
    );
}

#[tokio::test]
async fn test_dashboards_enforce_role() {
    let service = create_test_service();
    let recipient = claims_for(&service, "sarah.johnson@email.com", "recipient123").await;
    let donor = claims_for(&service, "john.doe@email.com", "donor123").await;

    assert!(matches!(
        service.donor_dashboard(&recipient).await,
        Err(LifeFlowError::Forbidden(_))
    ));
    assert!(matches!(
        service.recipient_dashboard(&donor).await,
        Err(LifeFlowError::Forbidden(_))
    ));
}

#[tokio::test]
async fn test_recipient_dashboard() {
    let service = create_test_service();
    let claims = claims_for(&service, "sarah.johnson@email.com", "recipient123").await;
    let dashboard = service.recipient_dashboard(&claims).await.unwrap();

    assert_eq!(dashboard.profile.role, Role::Recipient);
    assert_eq!(dashboard.requests.len(), 2);
    assert_eq!(dashboard.pending_requests, 1);
    assert_eq!(dashboard.unread_notifications, 1);
}

#[tokio::test]
async fn test_session_for_deleted_user_is_unauthorized() {
    let service = create_test_service();
    let admin = claims_for(&service, "admin@lifeflow.com", "admin123").await;
    let donor = claims_for(&service, "jane.smith@email.com", "donor123").await;

    service.delete_user(&admin, 3).await.unwrap();
    assert!(matches!(
        service.session(&donor).await,
        Err(LifeFlowError::Unauthorized(_))
    ));
}

#[tokio::test]
async fn test_role_is_read_from_current_record() {
    let service = create_test_service();
    let admin = claims_for(&service, "admin@lifeflow.com", "admin123").await;
    let donor = claims_for(&service, "john.doe@email.com", "donor123").await;

    let update = UserUpdate {
        role: Some(Role::Recipient),
        ..Default::default()
    };
    service.update_user(&admin, 2, update).await.unwrap();

    assert!(matches!(
        service.donor_dashboard(&donor).await,
        Err(LifeFlowError::Forbidden(_))
    ));
    assert!(service.recipient_dashboard(&donor).await.is_ok());
}

#[tokio::test]
async fn test_schedule_appointment() {
    let service = create_test_service();
    let donor = claims_for(&service, "john.doe@email.com", "donor123").await;
    let form = AppointmentForm {
        date: Some("2023-07-01".to_string()),
        time: Some("9:00 AM".to_string()),
        location: Some("Central Blood Bank".to_string()),
        notes: Some("  ".to_string()),
    };
    let appointment = service.schedule_appointment(&donor, form).await.unwrap();
    assert_eq!(appointment.user_id, 2);
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.notes, None);

    // Acknowledged only; the dashboard still shows the seeded appointment
    let dashboard = service.donor_dashboard(&donor).await.unwrap();
    assert_eq!(dashboard.appointments.len(), 1);

    let admin = claims_for(&service, "admin@lifeflow.com", "admin123").await;
    let logs = service.get_app_logs(&admin).await.unwrap();
    assert!(logs.iter().any(|l| l.action == APPOINTMENT_SCHEDULED && l.user_id == Some(2)));
}

#[tokio::test]
async fn test_schedule_appointment_validation() {
    let service = create_test_service();
    let donor = claims_for(&service, "john.doe@email.com", "donor123").await;

    let form = AppointmentForm {
        date: Some("2023-07-01".to_string()),
        time: None,
        location: Some("Central Blood Bank".to_string()),
        notes: None,
    };
    assert!(matches!(
        service.schedule_appointment(&donor, form).await,
        Err(LifeFlowError::MissingFields(_))
    ));

    let form = AppointmentForm {
        date: Some("07/01/2023".to_string()),
        time: Some("9:00 AM".to_string()),
        location: Some("Central Blood Bank".to_string()),
        notes: None,
    };
    assert!(matches!(
        service.schedule_appointment(&donor, form).await,
        Err(LifeFlowError::InvalidInput(ref field, _)) if field == "date"
    ));
}

fn request_form(quantity: u32) -> BloodRequestForm {
    BloodRequestForm {
        blood_type: Some("B-".to_string()),
        quantity: Some(quantity),
        urgency: Some("high".to_string()),
        reason: Some("Surgery".to_string()),
        hospital: Some("General Hospital".to_string()),
    }
}

#[tokio::test]
async fn test_submit_blood_request() {
    let service = create_test_service();
    let recipient = claims_for(&service, "sarah.johnson@email.com", "recipient123").await;
    let request = service
        .submit_blood_request(&recipient, request_form(3))
        .await
        .unwrap();

    assert_eq!(request.user_id, 4);
    assert_eq!(request.blood_type, BloodType::BNegative);
    assert_eq!(request.urgency, Urgency::High);
    assert_eq!(request.status, RequestStatus::Pending);

    let dashboard = service.recipient_dashboard(&recipient).await.unwrap();
    assert_eq!(dashboard.requests.len(), 2);

    let admin = claims_for(&service, "admin@lifeflow.com", "admin123").await;
    let logs = service.get_app_logs(&admin).await.unwrap();
    assert!(logs.iter().any(|l| l.action == BLOOD_REQUEST_SUBMITTED));
}

#[tokio::test]
async fn test_submit_blood_request_validation() {
    let service = create_test_service();
    let recipient = claims_for(&service, "sarah.johnson@email.com", "recipient123").await;

    assert!(matches!(
        service.submit_blood_request(&recipient, request_form(0)).await,
        Err(LifeFlowError::InvalidInput(ref field, _)) if field == "quantity"
    ));

    let mut form = request_form(1);
    form.urgency = Some("critical".to_string());
    assert!(matches!(
        service.submit_blood_request(&recipient, form).await,
        Err(LifeFlowError::InvalidInput(ref field, _)) if field == "urgency"
    ));

    let mut form = request_form(1);
    form.hospital = None;
    assert!(matches!(
        service.submit_blood_request(&recipient, form).await,
        Err(LifeFlowError::MissingFields(_))
    ));

    let donor = claims_for(&service, "john.doe@email.com", "donor123").await;
    assert!(matches!(
        service.submit_blood_request(&donor, request_form(1)).await,
        Err(LifeFlowError::Forbidden(_))
    ));
}

#[tokio::test]
async fn test_admin_operations_require_admin() {
    let service = create_test_service();
    let donor = claims_for(&service, "john.doe@email.com", "donor123").await;
    assert!(matches!(service.list_users(&donor).await, Err(LifeFlowError::Forbidden(_))));
    assert!(matches!(service.delete_user(&donor, 3).await, Err(LifeFlowError::Forbidden(_))));
    assert!(matches!(service.get_app_logs(&donor).await, Err(LifeFlowError::Forbidden(_))));

    let admin = claims_for(&service, "admin@lifeflow.com", "admin123").await;
    assert_eq!(service.list_users(&admin).await.unwrap().len(), 4);
    assert!(matches!(
        service.delete_user(&admin, 42).await,
        Err(LifeFlowError::UserNotFound(42))
    ));
    assert!(matches!(
        service.update_user(&admin, 42, UserUpdate::default()).await,
        Err(LifeFlowError::UserNotFound(42))
    ));
}

#[tokio::test]
async fn test_update_user_rejects_blank_required_fields() {
    let service = create_test_service();
    let admin = claims_for(&service, "admin@lifeflow.com", "admin123").await;

    let blank_updates = [
        ("email", UserUpdate { email: Some(String::new()), ..Default::default() }),
        ("password", UserUpdate { password: Some(String::new()), ..Default::default() }),
        ("firstName", UserUpdate { first_name: Some("   ".to_string()), ..Default::default() }),
        ("lastName", UserUpdate { last_name: Some(String::new()), ..Default::default() }),
    ];
    for (expected, update) in blank_updates {
        assert!(matches!(
            service.update_user(&admin, 2, update).await,
            Err(LifeFlowError::InvalidInput(ref field, _)) if field == expected
        ));
    }

    // Nothing was written; the account still logs in
    let donor = claims_for(&service, "john.doe@email.com", "donor123").await;
    assert_eq!(donor.user_id().unwrap(), 2);

    let renamed = service
        .update_user(
            &admin,
            2,
            UserUpdate {
                first_name: Some("Johnny".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.first_name, "Johnny");
}
