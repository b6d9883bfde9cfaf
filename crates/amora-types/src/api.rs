use serde::{Deserialize, Serialize};

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

// -- Dashboard --

/// Headline dashboard figures plus growth against the preceding
/// period of equal length.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_users: i64,
    pub active_users: i64,
    pub total_matches: i64,
    pub pending_payments: i64,
    pub user_growth: f64,
    pub active_growth: f64,
    pub matches_growth: f64,
    pub payments_growth: f64,
}

/// Label/value pairs for the dashboard charts, index-aligned.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub data: Vec<i64>,
}

// -- Payments --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentUpdateRequest {
    pub status: String,
    pub admin_notes: Option<String>,
    pub processed_by: i64,
}

// -- Misc --

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
