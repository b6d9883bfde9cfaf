use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};

use crate::auth::AppState;

/// Identity of the operator whose session authorized the request.
#[derive(Debug, Clone)]
pub struct Operator(pub String);

/// Validate the bearer token on the request against the session table.
/// Every authentication failure collapses to a plain 401; callers learn
/// nothing about which check failed.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let identity = state
        .sessions
        .validate(auth_header)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(Operator(identity));
    Ok(next.run(req).await)
}
