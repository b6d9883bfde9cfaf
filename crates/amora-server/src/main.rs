use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router, middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use amora_api::auth::{self, AdminCredentials, AppState, AppStateInner};
use amora_api::middleware::require_auth;
use amora_api::sessions::SessionStore;
use amora_api::{complaints, dashboard, payments, users};
use amora_types::api::HealthResponse;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "amora=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("AMORA_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("AMORA_PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()?;
    let db_path = std::env::var("AMORA_DB_PATH").unwrap_or_else(|_| "amora.db".into());
    let admin = AdminCredentials::from_env()?;

    // Init database
    let db = amora_db::Database::open(&PathBuf::from(&db_path))?;

    // Shared state
    let state: AppState = Arc::new(AppStateInner {
        db,
        sessions: SessionStore::new(),
        admin,
    });

    // Routes
    let public_routes = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/health", get(health))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/dashboard/stats", get(dashboard::dashboard_stats))
        .route("/charts/gender-distribution", get(dashboard::gender_distribution))
        .route("/charts/registrations", get(dashboard::registrations))
        .route("/users", get(users::list_users))
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/payments", get(payments::list_payments))
        .route(
            "/payments/{payment_id}",
            get(payments::get_payment).put(payments::update_payment),
        )
        .route("/complaints", get(complaints::list_complaints))
        .route("/complaints/{complaint_id}", put(complaints::update_complaint))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Amora admin API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
    })
}
