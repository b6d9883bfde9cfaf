use std::sync::Arc;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::warn;

use amora_db::Database;
use amora_types::api::{LoginRequest, LoginResponse};

use crate::sessions::SessionStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub sessions: SessionStore,
    pub admin: AdminCredentials,
}

/// The single operator account. Only the argon2 hash of the password
/// is held; login attempts are verified against the hash.
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Reads `AMORA_ADMIN_USER` / `AMORA_ADMIN_PASSWORD_HASH` (a PHC
    /// string). When no hash is configured, a dev default password is
    /// hashed at startup.
    pub fn from_env() -> anyhow::Result<Self> {
        let username = std::env::var("AMORA_ADMIN_USER").unwrap_or_else(|_| "admin".into());
        let password_hash = match std::env::var("AMORA_ADMIN_PASSWORD_HASH") {
            Ok(hash) => hash,
            Err(_) => {
                warn!("AMORA_ADMIN_PASSWORD_HASH not set, falling back to dev credentials");
                hash_password("password123")?
            }
        };
        Ok(Self {
            username,
            password_hash,
        })
    }

    /// Check a login attempt. `Some(identity)` only when both the
    /// username and the password match the configured account.
    pub fn verify(&self, username: &str, password: &str) -> Option<String> {
        if username != self.username {
            return None;
        }
        let parsed = PasswordHash::new(&self.password_hash).ok()?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .ok()?;
        Some(self.username.clone())
    }
}

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {}", e))?;
    Ok(hash.to_string())
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let identity = state
        .admin
        .verify(&req.username, &req.password)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = state.sessions.create(&identity);

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_only_the_configured_pair() {
        let hash = hash_password("hunter2").unwrap();
        let admin = AdminCredentials::new("admin", hash);

        assert_eq!(admin.verify("admin", "hunter2").as_deref(), Some("admin"));
        assert!(admin.verify("admin", "hunter3").is_none());
        assert!(admin.verify("root", "hunter2").is_none());
        assert!(admin.verify("", "").is_none());
    }

    #[test]
    fn verify_tolerates_a_corrupt_stored_hash() {
        let admin = AdminCredentials::new("admin", "not-a-phc-string");
        assert!(admin.verify("admin", "anything").is_none());
    }
}
