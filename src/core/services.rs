use crate::auth::jwt::{Claims, JwtService};
use crate::constants::{
    APPOINTMENT_SCHEDULED, BLOOD_REQUEST_SUBMITTED, LOGIN_FAILED, LOGIN_SUCCEEDED, MSG_LOGIN_MISSING_FIELDS,
    MSG_REGISTER_MISSING_FIELDS, MSG_REQUEST_MISSING_FIELDS, MSG_SCHEDULE_MISSING_FIELDS, USER_DELETED,
    USER_REGISTERED, USER_UPDATED,
};
use crate::core::dashboard::{DonorDashboard, RecipientDashboard, SessionPayload};
use crate::core::errors::LifeFlowError;
use crate::core::models::{
    AppLog, AppointmentStatus, BloodType, DonorListing, NewUser, RequestStatus, Role, Urgency, User, UserProfile,
    UserUpdate,
};
use crate::core::search::{self, BloodBankFilter, BloodBankResult, DonorFilter};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

// Incoming forms keep every field optional so absent and empty values
// surface as the same validation error instead of a body rejection.

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub blood_type: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct AppointmentForm {
    /// Calendar date as `YYYY-MM-DD`
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequestForm {
    pub blood_type: Option<String>,
    pub quantity: Option<u32>,
    pub urgency: Option<String>,
    pub reason: Option<String>,
    pub hospital: Option<String>,
}

/// An appointment accepted for the donor; it is acknowledged, not stored.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledAppointment {
    pub user_id: u64,
    #[schema(value_type = String, example = "2023-07-01")]
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: AppointmentStatus,
}

/// A blood request accepted for the recipient; it is acknowledged, not stored.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRequest {
    pub user_id: u64,
    pub blood_type: BloodType,
    pub quantity: u32,
    pub urgency: Urgency,
    pub status: RequestStatus,
    #[schema(value_type = String, example = "2023-07-01")]
    pub request_date: NaiveDate,
    pub reason: String,
    pub hospital: String,
}

pub struct RegisteredUser {
    pub user: UserProfile,
    pub token: String,
}

pub struct LoginSession {
    pub session: SessionPayload,
    pub token: String,
}

/// Trimmed value of a form field, `None` when absent or blank.
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Untrimmed value, for credentials that are compared byte for byte.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Fields an account cannot exist without may be changed but not blanked.
fn check_required_fields(update: &UserUpdate) -> Result<(), LifeFlowError> {
    let blanked = [
        ("email", update.email.is_some() && present(&update.email).is_none()),
        ("password", update.password.is_some() && present(&update.password).is_none()),
        ("firstName", update.first_name.is_some() && filled(&update.first_name).is_none()),
        ("lastName", update.last_name.is_some() && filled(&update.last_name).is_none()),
    ];
    match blanked.into_iter().find(|(_, blank)| *blank) {
        Some((field, _)) => Err(LifeFlowError::invalid(field, format!("{} must not be empty", field))),
        None => Ok(()),
    }
}

pub struct LifeFlowService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
    jwt_service: JwtService,
}

impl<L: LoggingService, S: Storage> LifeFlowService<L, S> {
    pub fn new(storage: S, logging: L, jwt_secret: String, session_ttl_secs: u64) -> Self {
        LifeFlowService {
            storage,
            logging,
            jwt_service: JwtService::new(jwt_secret, session_ttl_secs),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, LifeFlowError> {
        self.jwt_service.validate_token(token)
    }

    pub async fn register(&self, form: RegistrationForm) -> Result<RegisteredUser, LifeFlowError> {
        let (Some(first_name), Some(last_name), Some(email), Some(password), Some(role)) = (
            filled(&form.first_name),
            filled(&form.last_name),
            present(&form.email),
            present(&form.password),
            filled(&form.role),
        ) else {
            return Err(LifeFlowError::MissingFields(MSG_REGISTER_MISSING_FIELDS.to_string()));
        };

        let role: Role = role.parse().map_err(|e| LifeFlowError::invalid("role", e))?;
        let blood_type = filled(&form.blood_type)
            .map(str::parse::<BloodType>)
            .transpose()
            .map_err(|e| LifeFlowError::invalid("bloodType", e))?;

        info!("Registering {} account for {}", role, email);
        let is_donor = role == Role::Donor;
        let new_user = NewUser {
            email: email.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role,
            blood_type: blood_type.filter(|_| is_donor),
            phone: None,
            address: None,
            date_of_birth: None,
            medical_id: None,
            hospital: None,
            last_donation: None,
            total_donations: is_donor.then_some(0),
            eligible_to_donate_days: is_donor.then_some(0),
            created_at: Utc::now(),
        };

        let created = self.storage.add_user(new_user).await.inspect_err(|e| {
            if let LifeFlowError::EmailAlreadyRegistered(_) = e {
                warn!("Registration rejected, email {} already in use", email);
            }
        })?;
        debug!("User registered with ID: {}", created.id);

        self.logging
            .log_action(
                USER_REGISTERED,
                json!({ "user_id": created.id, "email": created.email, "role": created.role }),
                Some(created.id),
            )
            .await?;

        let token = self.jwt_service.generate_token(created.id, created.role)?;
        Ok(RegisteredUser {
            user: created.into(),
            token,
        })
    }

    pub async fn login(&self, form: LoginForm) -> Result<LoginSession, LifeFlowError> {
        let (Some(email), Some(password)) = (
            present(&form.email),
            present(&form.password),
        ) else {
            return Err(LifeFlowError::MissingFields(MSG_LOGIN_MISSING_FIELDS.to_string()));
        };

        let Some(user) = self.storage.find_user_by_email(email).await? else {
            warn!("Login attempt for unknown email {}", email);
            self.logging
                .log_action(LOGIN_FAILED, json!({ "email": email, "reason": "unknown_email" }), None)
                .await?;
            return Err(LifeFlowError::UnknownEmail(email.to_string()));
        };

        if user.password != password {
            warn!("Invalid password for user {}", user.id);
            self.logging
                .log_action(
                    LOGIN_FAILED,
                    json!({ "email": email, "reason": "invalid_password" }),
                    Some(user.id),
                )
                .await?;
            return Err(LifeFlowError::InvalidPassword);
        }

        info!("User {} logged in", user.id);
        self.logging
            .log_action(LOGIN_SUCCEEDED, json!({ "email": email }), Some(user.id))
            .await?;

        let token = self.jwt_service.generate_token(user.id, user.role)?;
        let session = self.assemble_session(user).await?;
        Ok(LoginSession { session, token })
    }

    async fn assemble_session(&self, user: User) -> Result<SessionPayload, LifeFlowError> {
        let appointments = self.storage.appointments_for(user.id).await?;
        let donation_history = self.storage.donations_for(user.id).await?;
        let requests = self.storage.requests_for(user.id).await?;
        let notifications = self.storage.notifications_for(user.id).await?;
        Ok(SessionPayload {
            user: user.into(),
            appointments,
            donation_history,
            requests,
            notifications,
        })
    }

    /// Resolves the token's subject to a live user record.
    async fn current_user(&self, claims: &Claims) -> Result<User, LifeFlowError> {
        let user_id = claims.user_id()?;
        self.storage
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| LifeFlowError::Unauthorized(format!("User {} no longer exists", user_id)))
    }

    /// Checks the role on the stored record, which may have changed since the token was issued.
    async fn user_with_role(&self, claims: &Claims, role: Role) -> Result<User, LifeFlowError> {
        let user = self.current_user(claims).await?;
        if user.role != role {
            warn!("User {} with role {} attempted a {} operation", user.id, user.role, role);
            return Err(LifeFlowError::Forbidden(format!("Requires {} role", role)));
        }
        Ok(user)
    }

    pub async fn session(&self, claims: &Claims) -> Result<SessionPayload, LifeFlowError> {
        let user = self.current_user(claims).await?;
        self.assemble_session(user).await
    }

    pub async fn donor_dashboard(&self, claims: &Claims) -> Result<DonorDashboard, LifeFlowError> {
        let user = self.user_with_role(claims, Role::Donor).await?;
        let session = self.assemble_session(user).await?;
        Ok(DonorDashboard::from_session(session))
    }

    pub async fn recipient_dashboard(&self, claims: &Claims) -> Result<RecipientDashboard, LifeFlowError> {
        let user = self.user_with_role(claims, Role::Recipient).await?;
        let session = self.assemble_session(user).await?;
        Ok(RecipientDashboard::from_session(session))
    }

    pub async fn schedule_appointment(
        &self,
        claims: &Claims,
        form: AppointmentForm,
    ) -> Result<ScheduledAppointment, LifeFlowError> {
        let user = self.user_with_role(claims, Role::Donor).await?;
        let (Some(date), Some(time), Some(location)) =
            (filled(&form.date), filled(&form.time), filled(&form.location))
        else {
            return Err(LifeFlowError::MissingFields(MSG_SCHEDULE_MISSING_FIELDS.to_string()));
        };
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| LifeFlowError::invalid("date", format!("Expected YYYY-MM-DD: {}", e)))?;

        let appointment = ScheduledAppointment {
            user_id: user.id,
            date,
            time: time.to_string(),
            location: location.to_string(),
            notes: filled(&form.notes).map(String::from),
            status: AppointmentStatus::Scheduled,
        };
        info!("Donor {} scheduled an appointment on {} at {}", user.id, date, appointment.time);

        self.logging
            .log_action(
                APPOINTMENT_SCHEDULED,
                json!({ "date": appointment.date, "time": appointment.time, "location": appointment.location }),
                Some(user.id),
            )
            .await?;
        Ok(appointment)
    }

    pub async fn submit_blood_request(
        &self,
        claims: &Claims,
        form: BloodRequestForm,
    ) -> Result<SubmittedRequest, LifeFlowError> {
        let user = self.user_with_role(claims, Role::Recipient).await?;
        let (Some(blood_type), Some(quantity), Some(urgency), Some(reason), Some(hospital)) = (
            filled(&form.blood_type),
            form.quantity,
            filled(&form.urgency),
            filled(&form.reason),
            filled(&form.hospital),
        ) else {
            return Err(LifeFlowError::MissingFields(MSG_REQUEST_MISSING_FIELDS.to_string()));
        };
        if quantity == 0 {
            return Err(LifeFlowError::invalid("quantity", "Quantity must be at least one unit"));
        }
        let blood_type: BloodType = blood_type.parse().map_err(|e| LifeFlowError::invalid("bloodType", e))?;
        let urgency: Urgency = urgency.parse().map_err(|e| LifeFlowError::invalid("urgency", e))?;

        let request = SubmittedRequest {
            user_id: user.id,
            blood_type,
            quantity,
            urgency,
            status: RequestStatus::Pending,
            request_date: Utc::now().date_naive(),
            reason: reason.to_string(),
            hospital: hospital.to_string(),
        };
        info!("Recipient {} requested {} unit(s) of {}", user.id, quantity, blood_type);

        self.logging
            .log_action(
                BLOOD_REQUEST_SUBMITTED,
                json!({ "blood_type": blood_type, "quantity": quantity, "urgency": urgency, "hospital": request.hospital }),
                Some(user.id),
            )
            .await?;
        Ok(request)
    }

    pub async fn search_blood_banks(&self, filter: &BloodBankFilter) -> Result<Vec<BloodBankResult>, LifeFlowError> {
        let banks = self.storage.blood_banks().await?;
        let matches = search::filter_blood_banks(&banks, filter);
        debug!("Blood bank search {:?} matched {} of {}", filter, matches.len(), banks.len());
        Ok(matches.into_iter().map(BloodBankResult::from).collect())
    }

    pub async fn search_donors(&self, filter: &DonorFilter) -> Result<Vec<DonorListing>, LifeFlowError> {
        let donors = self.storage.donor_directory().await?;
        let matches = search::filter_donors(&donors, filter);
        debug!("Donor search {:?} matched {} of {}", filter, matches.len(), donors.len());
        Ok(matches)
    }

    // ADMIN

    pub async fn list_users(&self, claims: &Claims) -> Result<Vec<UserProfile>, LifeFlowError> {
        self.user_with_role(claims, Role::Admin).await?;
        let users = self.storage.list_users().await?;
        Ok(users.into_iter().map(UserProfile::from).collect())
    }

    pub async fn update_user(
        &self,
        claims: &Claims,
        user_id: u64,
        update: UserUpdate,
    ) -> Result<UserProfile, LifeFlowError> {
        let admin = self.user_with_role(claims, Role::Admin).await?;
        check_required_fields(&update)?;
        let updated = self
            .storage
            .update_user(user_id, update)
            .await?
            .ok_or(LifeFlowError::UserNotFound(user_id))?;
        info!("Admin {} updated user {}", admin.id, user_id);
        self.logging
            .log_action(USER_UPDATED, json!({ "user_id": user_id }), Some(admin.id))
            .await?;
        Ok(updated.into())
    }

    pub async fn delete_user(&self, claims: &Claims, user_id: u64) -> Result<(), LifeFlowError> {
        let admin = self.user_with_role(claims, Role::Admin).await?;
        if !self.storage.delete_user(user_id).await? {
            return Err(LifeFlowError::UserNotFound(user_id));
        }
        info!("Admin {} deleted user {}", admin.id, user_id);
        self.logging
            .log_action(USER_DELETED, json!({ "user_id": user_id }), Some(admin.id))
            .await?;
        Ok(())
    }

    pub async fn get_app_logs(&self, claims: &Claims) -> Result<Vec<AppLog>, LifeFlowError> {
        self.user_with_role(claims, Role::Admin).await?;
        self.logging.get_logs().await
    }
}
