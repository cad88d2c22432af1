use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{
    api::models::{AppointmentResponse, BloodRequestResponse, ErrorResponse, LoginResponse, RegisterResponse},
    core::{
        dashboard::{DonorDashboard, RecipientDashboard, SessionPayload},
        models::{
            AppLog, Appointment, BloodBank, BloodRequest, BloodType, DonationRecord, DonorListing, Notification, Role,
            UserProfile, UserUpdate,
        },
        search::BloodBankResult,
        services::{
            AppointmentForm, BloodRequestForm, LoginForm, RegistrationForm, ScheduledAppointment, SubmittedRequest,
        },
    },
};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "Bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::register,
        super::handlers::login,
        super::handlers::search_blood_banks,
        super::handlers::search_donors,
        super::handlers::get_session,
        super::handlers::get_donor_dashboard,
        super::handlers::schedule_appointment,
        super::handlers::get_recipient_dashboard,
        super::handlers::submit_blood_request,
        super::handlers::list_users,
        super::handlers::update_user,
        super::handlers::delete_user,
        super::handlers::get_app_logs
    ),
    components(schemas(
        RegistrationForm,
        LoginForm,
        AppointmentForm,
        BloodRequestForm,
        RegisterResponse,
        LoginResponse,
        AppointmentResponse,
        BloodRequestResponse,
        ErrorResponse,
        UserProfile,
        UserUpdate,
        Role,
        BloodType,
        SessionPayload,
        DonorDashboard,
        RecipientDashboard,
        Appointment,
        DonationRecord,
        BloodRequest,
        Notification,
        BloodBank,
        BloodBankResult,
        DonorListing,
        ScheduledAppointment,
        SubmittedRequest,
        AppLog
    )),
    modifiers(&BearerAuth),
    info(
        title = "LifeFlow API",
        description = "Blood donation coordination: accounts, dashboards and blood bank search",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
