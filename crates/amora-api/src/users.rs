use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use amora_db::models::UserRow;
use amora_types::api::StatusMessage;
use amora_types::models::User;

use crate::auth::AppState;
use crate::middleware::Operator;
use crate::parse_db_time;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub search: Option<String>,
}

fn default_limit() -> u32 {
    100
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let ListQuery { skip, limit, search } = query;

    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.list_users(skip, limit, search.as_deref()))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!("listing users failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let users: Vec<User> = rows.into_iter().map(to_user).collect();
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, StatusCode> {
    let db = state.clone();
    let row = tokio::task::spawn_blocking(move || db.db.get_user(user_id))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!("loading user {} failed: {}", user_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(to_user(row)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Extension(operator): Extension<Operator>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, StatusCode> {
    let db = state.clone();
    let changed = tokio::task::spawn_blocking(move || db.db.update_user(user_id, &fields))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!("updating user {} failed: {}", user_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    if !changed {
        return Err(StatusCode::NOT_FOUND);
    }

    info!("operator {} updated user {}", operator.0, user_id);
    Ok(Json(StatusMessage::new("User updated successfully")))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Extension(operator): Extension<Operator>,
) -> Result<impl IntoResponse, StatusCode> {
    let db = state.clone();
    let deleted = tokio::task::spawn_blocking(move || db.db.delete_user_cascade(user_id))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!("deleting user {} failed: {}", user_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    if !deleted {
        return Err(StatusCode::NOT_FOUND);
    }

    info!("operator {} deleted user {} and dependent records", operator.0, user_id);
    Ok(Json(StatusMessage::new("User deleted successfully")))
}

fn to_user(row: UserRow) -> User {
    let photos: Vec<String> = serde_json::from_str(&row.photos).unwrap_or_else(|e| {
        warn!("Corrupt photos on user {}: {}", row.user_id, e);
        Vec::new()
    });

    User {
        user_id: row.user_id,
        username: row.username,
        first_name: row.first_name,
        last_name: row.last_name,
        language: row.language,
        phone: row.phone,
        age: row.age,
        gender: row.gender,
        religion: row.religion,
        city: row.city,
        latitude: row.latitude,
        longitude: row.longitude,
        bio: row.bio,
        photos,
        is_active: row.is_active,
        coins: row.coins,
        created_at: parse_db_time(&row.created_at),
    }
}
