use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::core::dashboard::SessionPayload;
use crate::core::errors::LifeFlowError;
use crate::core::models::UserProfile;
use crate::core::services::{ScheduledAppointment, SubmittedRequest};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserProfile,
    pub token: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub session: SessionPayload,
    pub token: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AppointmentResponse {
    pub message: String,
    pub appointment: ScheduledAppointment,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BloodRequestResponse {
    pub message: String,
    pub request: SubmittedRequest,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Blood type such as `O+`, or `all`. An unencoded `+` is accepted as well as `%2B`
    pub blood_type: Option<String>,
    /// Case-insensitive substring of the address or area
    pub location: Option<String>,
    /// `available` or `all`; donor search only
    pub availability: Option<String>,
}

// Error response struct
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

// Newtype wrapper for LifeFlowError to implement IntoResponse
#[derive(Debug)]
pub struct ApiError(pub LifeFlowError);

impl From<LifeFlowError> for ApiError {
    fn from(err: LifeFlowError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(LifeFlowError::InvalidRequestBody(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(LifeFlowError::InvalidRequestParameters(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(LifeFlowError::InvalidRequestParameters(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            LifeFlowError::MissingFields(_)
            | LifeFlowError::InvalidInput(..)
            | LifeFlowError::InvalidRequestParameters(_)
            | LifeFlowError::InvalidRequestBody(_)
            | LifeFlowError::EmailAlreadyRegistered(_) => StatusCode::BAD_REQUEST,
            LifeFlowError::UnknownEmail(_) | LifeFlowError::InvalidPassword | LifeFlowError::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            LifeFlowError::Forbidden(_) => StatusCode::FORBIDDEN,
            LifeFlowError::UserNotFound(_) => StatusCode::NOT_FOUND,
            LifeFlowError::InternalServerError(_)
            | LifeFlowError::StorageError(_)
            | LifeFlowError::LoggingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self.0 {
            LifeFlowError::MissingFields(msg) => msg,
            LifeFlowError::InvalidInput(_, description) => description,
            LifeFlowError::InvalidRequestParameters(msg) => msg,
            LifeFlowError::InvalidRequestBody(msg) => format!("Invalid request body: {}", msg),
            LifeFlowError::EmailAlreadyRegistered(_) => "User with this email already exists".to_string(),
            LifeFlowError::UnknownEmail(_) => {
                "User not found. Please check your email or register first.".to_string()
            }
            LifeFlowError::InvalidPassword => "Invalid password. Please try again.".to_string(),
            LifeFlowError::Unauthorized(_) => "Not logged in".to_string(),
            LifeFlowError::Forbidden(msg) => msg,
            LifeFlowError::UserNotFound(id) => format!("User {} not found", id),
            err @ (LifeFlowError::InternalServerError(_)
            | LifeFlowError::StorageError(_)
            | LifeFlowError::LoggingError(_)) => {
                error!("Request failed: {}", err);
                "Internal server error".to_string()
            }
        };
        (status, Json(ErrorResponse { message })).into_response()
    }
}
