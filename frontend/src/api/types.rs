use chrono::{NaiveDate, NaiveDateTime};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    #[default]
    Employee,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Employee => "Employee",
        }
    }
}

/// Identity plus bearer token, as returned by login and token validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default)]
    pub token: String,
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub total_vacation_days: i32,
    #[serde(default)]
    pub used_vacation_days: i32,
    #[serde(default)]
    pub available_vacation_days: i32,
}

impl SessionUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VacationStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl VacationStatus {
    pub const ALL: [VacationStatus; 4] = [
        VacationStatus::Pending,
        VacationStatus::Approved,
        VacationStatus::Rejected,
        VacationStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VacationStatus::Pending => "PENDING",
            VacationStatus::Approved => "APPROVED",
            VacationStatus::Rejected => "REJECTED",
            VacationStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Approved, rejected and cancelled requests accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, VacationStatus::Pending)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VacationRequest {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_full_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: VacationStatus,
    #[serde(default)]
    pub admin_comment: Option<String>,
    #[serde(default)]
    pub approved_by_name: Option<String>,
    #[serde(default)]
    pub approved_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub days_count: Option<i64>,
}

impl VacationRequest {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn period_label(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVacationRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: VacationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_comment: Option<String>,
}

/// Envelope returned by vacation mutations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VacationMutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub vacation: Option<VacationRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub total_vacation_days: Option<i32>,
    #[serde(default)]
    pub used_vacation_days: Option<i32>,
    #[serde(default)]
    pub available_vacation_days: Option<i32>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl UserSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub total_vacation_days: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserMutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

/// Error body produced by the backend: `{"error": "...", "message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerErrorBody {
    pub fn human_message(&self) -> Option<String> {
        [self.message.as_ref(), self.error.as_ref()]
            .into_iter()
            .flatten()
            .find(|msg| !msg.trim().is_empty())
            .cloned()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn timeout() -> Self {
        Self::with_code("The server did not respond in time", "TIMEOUT")
    }

    pub fn unauthorized() -> Self {
        Self::with_code("Session expired", "UNAUTHORIZED")
    }

    pub fn server(msg: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            details,
            ..Self::with_code(msg, "SERVER_ERROR")
        }
    }

    /// 401s are handled by the client's response hook and never shown.
    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}
