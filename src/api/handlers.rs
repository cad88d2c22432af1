use crate::{
    api::models::*,
    auth::jwt::Claims,
    constants::{MSG_REQUEST_SUBMITTED, MSG_USER_REGISTERED},
    core::{
        dashboard::{DonorDashboard, RecipientDashboard, SessionPayload},
        errors::LifeFlowError,
        models::{AppLog, DonorListing, UserProfile, UserUpdate},
        search::{self, BloodBankFilter, BloodBankResult, DonorFilter},
        services::{AppointmentForm, BloodRequestForm, LifeFlowService, LoginForm, RegistrationForm},
    },
    infrastructure::{logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage},
};
use axum::{
    Extension, Json, Router,
    extract::{
        Path, Query, Request, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
};
use http::header;

use std::sync::Arc;

pub type SharedService = Arc<LifeFlowService<InMemoryLogging, InMemoryStorage>>;

// Middleware to validate the session token
async fn auth_middleware(
    State(service): State<SharedService>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| LifeFlowError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| LifeFlowError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = service.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(service: SharedService) -> Router {
    let protected_routes = Router::new()
        .route("/me", axum::routing::get(get_session))
        .route("/donor/dashboard", axum::routing::get(get_donor_dashboard))
        .route("/donor/appointments", axum::routing::post(schedule_appointment))
        .route("/recipient/dashboard", axum::routing::get(get_recipient_dashboard))
        .route("/recipient/requests", axum::routing::post(submit_blood_request))
        .route("/admin/users", axum::routing::get(list_users))
        .route(
            "/admin/users/{user_id}",
            axum::routing::patch(update_user).delete(delete_user),
        )
        .route("/admin/logs", axum::routing::get(get_app_logs))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/auth/register", axum::routing::post(register))
        .route("/auth/login", axum::routing::post(login))
        .route("/search/blood-banks", axum::routing::get(search_blood_banks))
        .route("/search/donors", axum::routing::get(search_donors))
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegistrationForm,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Missing fields, invalid input or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn register(
    State(service): State<SharedService>,
    payload: Result<Json<RegistrationForm>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let Json(form) = payload?;
    let registered = service.register(form).await?;
    Ok(Json(RegisterResponse {
        message: MSG_USER_REGISTERED.to_string(),
        user: registered.user,
        token: registered.token,
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 401, description = "Unknown email or invalid password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn login(
    State(service): State<SharedService>,
    payload: Result<Json<LoginForm>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(form) = payload?;
    let login = service.login(form).await?;
    Ok(Json(LoginResponse {
        session: login.session,
        token: login.token,
    }))
}

#[utoipa::path(
    get,
    path = "/api/search/blood-banks",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching blood banks", body = Vec<BloodBankResult>),
        (status = 400, description = "Unknown blood type", body = ErrorResponse)
    )
)]
pub async fn search_blood_banks(
    State(service): State<SharedService>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<BloodBankResult>>, ApiError> {
    let Query(params) = query?;
    let filter = BloodBankFilter {
        blood_type: search::parse_blood_type_filter(params.blood_type.as_deref())?,
        location: params.location,
    };
    Ok(Json(service.search_blood_banks(&filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/search/donors",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching donors", body = Vec<DonorListing>),
        (status = 400, description = "Unknown blood type or availability", body = ErrorResponse)
    )
)]
pub async fn search_donors(
    State(service): State<SharedService>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<DonorListing>>, ApiError> {
    let Query(params) = query?;
    let filter = DonorFilter {
        blood_type: search::parse_blood_type_filter(params.blood_type.as_deref())?,
        location: params.location,
        available_only: search::parse_availability_filter(params.availability.as_deref())?,
    };
    Ok(Json(service.search_donors(&filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Current user with related records", body = SessionPayload),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_session(
    State(service): State<SharedService>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<SessionPayload>, ApiError> {
    Ok(Json(service.session(&claims).await?))
}

#[utoipa::path(
    get,
    path = "/api/donor/dashboard",
    responses(
        (status = 200, description = "Donor dashboard", body = DonorDashboard),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Not a donor", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_donor_dashboard(
    State(service): State<SharedService>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<DonorDashboard>, ApiError> {
    Ok(Json(service.donor_dashboard(&claims).await?))
}

#[utoipa::path(
    post,
    path = "/api/donor/appointments",
    request_body = AppointmentForm,
    responses(
        (status = 200, description = "Appointment accepted", body = AppointmentResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Not a donor", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn schedule_appointment(
    State(service): State<SharedService>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<AppointmentForm>, JsonRejection>,
) -> Result<Json<AppointmentResponse>, ApiError> {
    let Json(form) = payload?;
    let appointment = service.schedule_appointment(&claims, form).await?;
    Ok(Json(AppointmentResponse {
        message: format!(
            "Appointment scheduled successfully for {} at {}",
            appointment.date.format("%B %-d, %Y"),
            appointment.time
        ),
        appointment,
    }))
}

#[utoipa::path(
    get,
    path = "/api/recipient/dashboard",
    responses(
        (status = 200, description = "Recipient dashboard", body = RecipientDashboard),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Not a recipient", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_recipient_dashboard(
    State(service): State<SharedService>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<RecipientDashboard>, ApiError> {
    Ok(Json(service.recipient_dashboard(&claims).await?))
}

#[utoipa::path(
    post,
    path = "/api/recipient/requests",
    request_body = BloodRequestForm,
    responses(
        (status = 200, description = "Blood request accepted", body = BloodRequestResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Not a recipient", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn submit_blood_request(
    State(service): State<SharedService>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<BloodRequestForm>, JsonRejection>,
) -> Result<Json<BloodRequestResponse>, ApiError> {
    let Json(form) = payload?;
    let request = service.submit_blood_request(&claims, form).await?;
    Ok(Json(BloodRequestResponse {
        message: MSG_REQUEST_SUBMITTED.to_string(),
        request,
    }))
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "All users", body = Vec<UserProfile>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn list_users(
    State(service): State<SharedService>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    Ok(Json(service.list_users(&claims).await?))
}

#[utoipa::path(
    patch,
    path = "/api/admin/users/{user_id}",
    request_body = UserUpdate,
    params(
        ("user_id" = u64, Path, description = "ID of the user to update")
    ),
    responses(
        (status = 200, description = "User updated", body = UserProfile),
        (status = 400, description = "Blank required field, email already registered or malformed id", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn update_user(
    State(service): State<SharedService>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let Path(user_id) = path?;
    let Json(update) = payload?;
    Ok(Json(service.update_user(&claims, user_id, update).await?))
}

#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}",
    params(
        ("user_id" = u64, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn delete_user(
    State(service): State<SharedService>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(user_id) = path?;
    service.delete_user(&claims, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/logs",
    responses(
        (status = 200, description = "Activity log", body = Vec<AppLog>),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_app_logs(
    State(service): State<SharedService>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<AppLog>>, ApiError> {
    Ok(Json(service.get_app_logs(&claims).await?))
}
