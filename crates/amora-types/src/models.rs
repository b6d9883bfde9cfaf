use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dating-app end user, as shown to the operator. Records are written
/// by the bot; this API only reads, updates and deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub language: String,
    pub phone: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub religion: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub bio: Option<String>,
    pub photos: Vec<String>,
    pub is_active: bool,
    pub coins: i64,
    pub created_at: DateTime<Utc>,
}

/// Coin-package purchase awaiting (or past) operator review.
/// `username`/`first_name` are joined in from the payer's user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: i64,
    pub package_name: String,
    pub coins_amount: i64,
    pub price: f64,
    pub status: String,
    pub screenshot_file_id: String,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
    pub processed_by: Option<i64>,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: Uuid,
    pub user_id: i64,
    pub reported_user_id: Option<i64>,
    pub complaint_type: String,
    pub complaint_text: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
