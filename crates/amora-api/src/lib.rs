pub mod auth;
pub mod complaints;
pub mod dashboard;
pub mod middleware;
pub mod payments;
pub mod sessions;
pub mod stats;
pub mod users;

/// Parse a timestamp column into UTC, tolerating both RFC 3339 and
/// SQLite's bare `datetime('now')` format.
pub(crate) fn parse_db_time(value: &str) -> chrono::DateTime<chrono::Utc> {
    value
        .parse::<chrono::DateTime<chrono::Utc>>()
        .or_else(|_| {
            // SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without timezone.
            chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::warn!("Corrupt timestamp '{}': {}", value, e);
            chrono::DateTime::default()
        })
}
