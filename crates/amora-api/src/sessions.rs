use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use rand_core::{OsRng, RngCore};
use thiserror::Error;

/// Sessions live this long from issuance; there is no refresh. A
/// process restart drops the whole table and every operator logs in
/// again.
const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("authorization header missing or not a bearer token")]
    MissingToken,
    #[error("unknown session token")]
    InvalidToken,
    #[error("session expired")]
    ExpiredToken,
}

struct Session {
    identity: String,
    issued_at: DateTime<Utc>,
}

/// Process-wide table of opaque bearer tokens. Expiry is enforced on
/// read: the validation that finds an expired entry also removes it,
/// there is no background sweep.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Mint a token for an authenticated operator: 32 bytes from the OS
    /// RNG, hex-encoded. The token goes to the caller once and is never
    /// logged.
    pub fn create(&self, identity: &str) -> String {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        let token = hex::encode(bytes);

        let session = Session {
            identity: identity.to_string(),
            issued_at: Utc::now(),
        };
        self.sessions
            .lock()
            .expect("session table lock poisoned")
            .insert(token.clone(), session);
        token
    }

    /// Resolve a raw Authorization header value to the operator identity.
    pub fn validate(&self, auth_header: Option<&str>) -> Result<String, AuthError> {
        self.validate_at(auth_header, Utc::now())
    }

    fn validate_at(
        &self,
        auth_header: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let token = auth_header
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let mut sessions = self.sessions.lock().expect("session table lock poisoned");
        let session = sessions.get(token).ok_or(AuthError::InvalidToken)?;

        if now - session.issued_at > Duration::hours(SESSION_TTL_HOURS) {
            sessions.remove(token);
            return Err(AuthError::ExpiredToken);
        }

        Ok(session.identity.clone())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    #[test]
    fn create_then_validate_returns_identity() {
        let store = SessionStore::new();
        let token = store.create("admin");
        let header = bearer(&token);
        assert_eq!(token.len(), 64);
        assert_eq!(store.validate(Some(header.as_str())).unwrap(), "admin");
    }

    #[test]
    fn tokens_are_unique() {
        let store = SessionStore::new();
        assert_ne!(store.create("admin"), store.create("admin"));
    }

    #[test]
    fn missing_or_malformed_header_is_rejected() {
        let store = SessionStore::new();
        let token = store.create("admin");
        let bare = token.clone();
        let lowercase = format!("bearer {}", token);
        let wrong_scheme = format!("Basic {}", token);

        assert_eq!(store.validate(None), Err(AuthError::MissingToken));
        assert_eq!(store.validate(Some(bare.as_str())), Err(AuthError::MissingToken));
        assert_eq!(store.validate(Some(lowercase.as_str())), Err(AuthError::MissingToken));
        assert_eq!(store.validate(Some(wrong_scheme.as_str())), Err(AuthError::MissingToken));
    }

    #[test]
    fn unknown_token_is_rejected() {
        let store = SessionStore::new();
        store.create("admin");
        assert_eq!(
            store.validate(Some("Bearer deadbeef")),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn token_survives_just_under_a_day() {
        let store = SessionStore::new();
        let token = store.create("admin");
        let header = bearer(&token);
        let almost = Utc::now() + Duration::hours(24) - Duration::seconds(1);
        assert_eq!(
            store.validate_at(Some(header.as_str()), almost).unwrap(),
            "admin"
        );
    }

    #[test]
    fn expired_token_is_rejected_and_evicted() {
        let store = SessionStore::new();
        let token = store.create("admin");
        let header = bearer(&token);
        let late = Utc::now() + Duration::hours(24) + Duration::seconds(1);

        assert_eq!(
            store.validate_at(Some(header.as_str()), late),
            Err(AuthError::ExpiredToken)
        );
        // the read removed the entry, so the token is now simply unknown
        assert_eq!(
            store.validate_at(Some(header.as_str()), late),
            Err(AuthError::InvalidToken)
        );
    }
}
