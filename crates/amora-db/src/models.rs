/// Database row types — these map directly to SQLite rows.
/// Distinct from amora-types API models to keep the DB layer independent.

pub struct UserRow {
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
    pub photos: String,
    pub is_active: bool,
    pub coins: i64,
    pub created_at: String,
}

pub struct PaymentRow {
    pub id: String,
    pub user_id: i64,
    pub package_name: String,
    pub coins_amount: i64,
    pub price: f64,
    pub status: String,
    pub screenshot_file_id: String,
    pub admin_notes: Option<String>,
    pub created_at: String,
    pub processed_at: Option<String>,
    pub processed_by: Option<i64>,
    // Joined from the payer's user record
    pub username: Option<String>,
    pub first_name: Option<String>,
}

pub struct ComplaintRow {
    pub id: String,
    pub user_id: i64,
    pub reported_user_id: Option<i64>,
    pub complaint_type: String,
    pub complaint_text: String,
    pub status: String,
    pub created_at: String,
}
