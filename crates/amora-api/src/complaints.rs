use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use amora_db::models::ComplaintRow;
use amora_types::api::StatusMessage;
use amora_types::models::Complaint;

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

#[derive(Debug, Deserialize)]
pub struct StatusUpdateQuery {
    pub status: String,
}

pub async fn list_complaints(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let ListQuery { skip, limit, status } = query;

    let db = state.clone();
    let rows =
        tokio::task::spawn_blocking(move || db.db.list_complaints(skip, limit, status.as_deref()))
            .await
            .map_err(|e| {
                error!("spawn_blocking join error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .map_err(|e| {
                error!("listing complaints failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;

    let complaints: Vec<Complaint> = rows.into_iter().map(to_complaint).collect();
    Ok(Json(complaints))
}

pub async fn update_complaint(
    State(state): State<AppState>,
    Path(complaint_id): Path<String>,
    Query(query): Query<StatusUpdateQuery>,
    Extension(operator): Extension<Operator>,
) -> Result<impl IntoResponse, StatusCode> {
    let db = state.clone();
    let id = complaint_id.clone();
    let changed =
        tokio::task::spawn_blocking(move || db.db.update_complaint_status(&id, &query.status))
            .await
            .map_err(|e| {
                error!("spawn_blocking join error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .map_err(|e| {
                error!("updating complaint {} failed: {}", complaint_id, e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;

    if !changed {
        return Err(StatusCode::NOT_FOUND);
    }

    info!("operator {} updated complaint {}", operator.0, complaint_id);
    Ok(Json(StatusMessage::new("Complaint status updated successfully")))
}

fn to_complaint(row: ComplaintRow) -> Complaint {
    Complaint {
        id: row.id.parse().unwrap_or_else(|e| {
            warn!("Corrupt complaint id '{}': {}", row.id, e);
            Uuid::default()
        }),
        user_id: row.user_id,
        reported_user_id: row.reported_user_id,
        complaint_type: row.complaint_type,
        complaint_text: row.complaint_text,
        status: row.status,
        created_at: parse_db_time(&row.created_at),
    }
}
