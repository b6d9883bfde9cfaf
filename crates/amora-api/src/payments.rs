use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use amora_db::models::PaymentRow;
use amora_types::api::{PaymentUpdateRequest, StatusMessage};
use amora_types::models::Payment;

use crate::auth::AppState;
use crate::middleware::Operator;
use crate::parse_db_time;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub status: Option<String>,
}

fn default_limit() -> u32 {
    100
}

pub async fn list_payments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let ListQuery { skip, limit, status } = query;

    let db = state.clone();
    let rows =
        tokio::task::spawn_blocking(move || db.db.list_payments(skip, limit, status.as_deref()))
            .await
            .map_err(|e| {
                error!("spawn_blocking join error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .map_err(|e| {
                error!("listing payments failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;

    let payments: Vec<Payment> = rows.into_iter().map(to_payment).collect();
    Ok(Json(payments))
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let db = state.clone();
    let id = payment_id.clone();
    let row = tokio::task::spawn_blocking(move || db.db.get_payment(&id))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!("loading payment {} failed: {}", payment_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(to_payment(row)))
}

pub async fn update_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
    Extension(operator): Extension<Operator>,
    Json(req): Json<PaymentUpdateRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let db = state.clone();
    let id = payment_id.clone();
    let changed = tokio::task::spawn_blocking(move || {
        db.db
            .update_payment_status(&id, &req.status, req.processed_by, req.admin_notes.as_deref())
    })
    .await
    .map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?
    .map_err(|e| {
        error!("updating payment {} failed: {}", payment_id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    if !changed {
        return Err(StatusCode::NOT_FOUND);
    }

    info!("operator {} processed payment {}", operator.0, payment_id);
    Ok(Json(StatusMessage::new("Payment status updated successfully")))
}

fn to_payment(row: PaymentRow) -> Payment {
    Payment {
        id: row.id.parse().unwrap_or_else(|e| {
            warn!("Corrupt payment id '{}': {}", row.id, e);
            Uuid::default()
        }),
        user_id: row.user_id,
        package_name: row.package_name,
        coins_amount: row.coins_amount,
        price: row.price,
        status: row.status,
        screenshot_file_id: row.screenshot_file_id,
        admin_notes: row.admin_notes,
        created_at: parse_db_time(&row.created_at),
        processed_at: row.processed_at.as_deref().map(parse_db_time),
        processed_by: row.processed_by,
        username: row.username,
        first_name: row.first_name,
    }
}
