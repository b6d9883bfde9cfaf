use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::Deserialize;
use tracing::error;

use amora_db::Database;
use amora_types::api::{ChartData, StatsResponse};

use crate::auth::AppState;
use crate::stats::{self, PREV_MATCHES_OFFSET, PREV_PAYMENTS_OFFSET};

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(default = "default_range")]
    pub range: String,
}

fn default_range() -> String {
    "last7".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RegistrationsQuery {
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    7
}

pub async fn dashboard_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let (start, end) = stats::resolve_range(&query.range, Utc::now());

    let db = state.clone();
    let snapshot = tokio::task::spawn_blocking(move || compute_snapshot(&db.db, start, end))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!("computing dashboard stats failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(snapshot))
}

/// Assemble the snapshot. Headline figures are global; only the growth
/// baselines look at the window, and matches/payments baselines are the
/// fixed-offset approximations.
fn compute_snapshot(
    db: &Database,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> anyhow::Result<StatsResponse> {
    let total_users = db.count_users()?;
    let active_users = db.count_active_users()?;
    let total_matches = stats::count_mutual_matches(&db.like_edges()?);
    let pending_payments = db.count_payments_with_status("pending")?;

    // Window of equal whole-day length immediately before `start`.
    let period_days = (end - start).num_days();
    let prev_start = start - Duration::days(period_days);
    let prev_end = start;

    let prev_total_users = db.count_users_created_between(prev_start, prev_end)?;
    let prev_active_users = db.count_active_users_created_between(prev_start, prev_end)?;
    let prev_total_matches = (total_matches - PREV_MATCHES_OFFSET).max(0);
    let prev_pending_payments = (pending_payments - PREV_PAYMENTS_OFFSET).max(0);

    Ok(StatsResponse {
        total_users,
        active_users,
        total_matches,
        pending_payments,
        user_growth: stats::growth(total_users, prev_total_users),
        active_growth: stats::growth(active_users, prev_active_users),
        matches_growth: stats::growth(total_matches, prev_total_matches),
        payments_growth: stats::growth(pending_payments, prev_pending_payments),
    })
}

pub async fn gender_distribution(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, StatusCode> {
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.gender_counts())
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!("loading gender distribution failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let (labels, data) = stats::gender_chart(rows);
    Ok(Json(ChartData { labels, data }))
}

pub async fn registrations(
    State(state): State<AppState>,
    Query(query): Query<RegistrationsQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let now = Utc::now();
    let today = now.date_naive();
    let days = query.days;

    // The query window opens at midnight of the oldest bucket.
    let first_day = today - Duration::days(days as i64 - 1);
    let start = first_day.and_time(NaiveTime::MIN).and_utc();

    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.registrations_per_day(start, now))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!("loading registration series failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let counts: HashMap<String, i64> = rows.into_iter().collect();
    let (labels, data) = stats::fill_daily_buckets(days, today, &counts);
    Ok(Json(ChartData { labels, data }))
}
