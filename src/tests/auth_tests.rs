use crate::auth::jwt::JwtService;
use crate::constants::{LOGIN_FAILED, LOGIN_SUCCEEDED, USER_REGISTERED};
use crate::core::errors::LifeFlowError;
use crate::core::models::{BloodType, Role};
use crate::core::services::{LoginForm, RegistrationForm};
use crate::tests::{claims_for, create_test_service, login_form};

fn registration(email: &str, role: &str, blood_type: Option<&str>) -> RegistrationForm {
    RegistrationForm {
        first_name: Some("A".to_string()),
        last_name: Some("B".to_string()),
        email: Some(email.to_string()),
        password: Some("x".to_string()),
        role: Some(role.to_string()),
        blood_type: blood_type.map(String::from),
    }
}

#[tokio::test]
async fn test_register_donor_assigns_next_id() {
    let service = create_test_service();
    let registered = service
        .register(registration("a@b.com", "donor", Some("O+")))
        .await
        .unwrap();

    assert_eq!(registered.user.id, 5);
    assert_eq!(registered.user.role, Role::Donor);
    assert_eq!(registered.user.blood_type, Some(BloodType::OPositive));
    assert_eq!(registered.user.total_donations, Some(0));
    assert_eq!(registered.user.eligible_to_donate_days, Some(0));

    let json = serde_json::to_value(&registered.user).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["bloodType"], "O+");
}

#[tokio::test]
async fn test_register_ids_strictly_increase() {
    let service = create_test_service();
    let mut last = 4;
    for i in 0..5 {
        let registered = service
            .register(registration(&format!("user{}@example.com", i), "recipient", None))
            .await
            .unwrap();
        assert!(registered.user.id > last);
        last = registered.user.id;
    }
}

#[tokio::test]
async fn test_register_recipient_drops_blood_type() {
    let service = create_test_service();
    let registered = service
        .register(registration("r@b.com", "recipient", Some("A+")))
        .await
        .unwrap();
    assert_eq!(registered.user.blood_type, None);
    assert_eq!(registered.user.total_donations, None);
    assert_eq!(registered.user.eligible_to_donate_days, None);
}

#[tokio::test]
async fn test_register_duplicate_email_is_conflict_regardless_of_fields() {
    let service = create_test_service();
    for role in ["donor", "recipient", "admin"] {
        let result = service
            .register(registration("john.doe@email.com", role, Some("AB-")))
            .await;
        assert!(matches!(result, Err(LifeFlowError::EmailAlreadyRegistered(_))));
    }
}

#[tokio::test]
async fn test_register_missing_fields() {
    let service = create_test_service();

    let mut form = registration("m@b.com", "donor", None);
    form.last_name = None;
    let result = service.register(form).await;
    assert!(matches!(result, Err(LifeFlowError::MissingFields(_))));

    let mut form = registration("m@b.com", "donor", None);
    form.password = Some(String::new());
    let result = service.register(form).await;
    assert!(matches!(result, Err(LifeFlowError::MissingFields(_))));

    let result = service.register(RegistrationForm::default()).await;
    assert!(matches!(result, Err(LifeFlowError::MissingFields(_))));
}

#[tokio::test]
async fn test_register_rejects_unknown_role_and_blood_type() {
    let service = create_test_service();
    let result = service.register(registration("x@b.com", "nurse", None)).await;
    assert!(matches!(result, Err(LifeFlowError::InvalidInput(ref field, _)) if field == "role"));

    let result = service.register(registration("x@b.com", "donor", Some("Z+"))).await;
    assert!(matches!(result, Err(LifeFlowError::InvalidInput(ref field, _)) if field == "bloodType"));
}

#[tokio::test]
async fn test_registered_user_can_log_in() {
    let service = create_test_service();
    service
        .register(registration("new@b.com", "donor", Some("B+")))
        .await
        .unwrap();
    let login = service.login(login_form("new@b.com", "x")).await.unwrap();
    assert_eq!(login.session.user.email, "new@b.com");
    assert!(login.session.appointments.is_empty());
}

#[tokio::test]
async fn test_login_returns_only_own_rows() {
    let service = create_test_service();
    let login = service.login(login_form("john.doe@email.com", "donor123")).await.unwrap();
    let session = login.session;

    assert_eq!(session.user.id, 2);
    assert_eq!(session.appointments.len(), 1);
    assert_eq!(session.donation_history.len(), 2);
    assert!(session.requests.is_empty());
    assert_eq!(session.notifications.len(), 2);
    assert!(session.appointments.iter().all(|a| a.user_id == 2));
    assert!(session.donation_history.iter().all(|d| d.user_id == 2));
    assert!(session.notifications.iter().all(|n| n.user_id == 2));
}

#[tokio::test]
async fn test_login_payload_is_flat_camel_case_without_password() {
    let service = create_test_service();
    let login = service
        .login(login_form("sarah.johnson@email.com", "recipient123"))
        .await
        .unwrap();
    let json = serde_json::to_value(&login.session).unwrap();

    assert!(json.get("password").is_none());
    assert_eq!(json["firstName"], "Sarah");
    assert_eq!(json["medicalId"], "MED-2023-001");
    assert_eq!(json["requests"].as_array().unwrap().len(), 2);
    assert_eq!(json["requests"][1]["approvedDate"], "2023-05-21");
    assert!(json["requests"][0].get("approvedDate").is_none());
    assert_eq!(json["notifications"][0]["type"], "request");
    assert!(json["donationHistory"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let service = create_test_service();
    let result = service.login(login_form("john.doe@email.com", "wrong")).await;
    assert!(matches!(result, Err(LifeFlowError::InvalidPassword)));

    let err = result.err().unwrap().to_string();
    assert!(!err.contains("donor123"));
}

#[tokio::test]
async fn test_login_unknown_email() {
    let service = create_test_service();
    let result = service.login(login_form("nobody@email.com", "donor123")).await;
    assert!(matches!(result, Err(LifeFlowError::UnknownEmail(_))));
}

#[tokio::test]
async fn test_login_missing_fields() {
    let service = create_test_service();
    let result = service
        .login(LoginForm {
            email: Some("john.doe@email.com".to_string()),
            password: None,
        })
        .await;
    assert!(matches!(result, Err(LifeFlowError::MissingFields(_))));

    let result = service.login(login_form("", "donor123")).await;
    assert!(matches!(result, Err(LifeFlowError::MissingFields(_))));
}

#[tokio::test]
async fn test_token_carries_user_and_role() {
    let service = create_test_service();
    let claims = claims_for(&service, "jane.smith@email.com", "donor123").await;
    assert_eq!(claims.user_id().unwrap(), 3);
    assert_eq!(claims.role, Role::Donor);

    let result = service.validate_token("not-a-token");
    assert!(matches!(result, Err(LifeFlowError::Unauthorized(_))));
}

#[tokio::test]
async fn test_auth_events_are_logged_without_passwords() {
    let service = create_test_service();
    service
        .register(registration("logged@b.com", "donor", None))
        .await
        .unwrap();
    let _ = service.login(login_form("logged@b.com", "bad")).await;
    let admin = claims_for(&service, "admin@lifeflow.com", "admin123").await;

    let logs = service.get_app_logs(&admin).await.unwrap();
    let actions: Vec<&str> = logs.iter().map(|l| l.action.as_str()).collect();
    assert_eq!(actions, vec![USER_REGISTERED, LOGIN_FAILED, LOGIN_SUCCEEDED]);
    assert_eq!(logs[1].details["reason"], "invalid_password");
    for log in &logs {
        let raw = serde_json::to_string(&log.details).unwrap();
        assert!(!raw.contains("admin123"));
        assert!(!raw.contains("\"bad\""));
    }
}

#[test]
fn test_token_expiry_saturates_for_huge_ttl() {
    let jwt = JwtService::new("test-secret".to_string(), u64::MAX);
    let token = jwt.generate_token(2, Role::Donor).unwrap();
    let claims = jwt.validate_token(&token).unwrap();
    assert_eq!(claims.user_id().unwrap(), 2);
    assert_eq!(claims.exp as u64, u64::MAX);
}
