pub mod auth;
pub mod commissions;
pub mod donations;
pub mod donations_summary;
pub mod metrics;

use axum::http::{header, HeaderMap, StatusCode};
use uuid::Uuid;

use crate::app::AppState;
use crate::models::session::Session;

/// Resolves the bearer token once per request; the session value is then
/// passed explicitly to whatever needs identity or role.
pub(crate) fn bearer_session(state: &AppState, headers: &HeaderMap) -> Result<Session, StatusCode> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;
    let token = value
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;
    let token = Uuid::parse_str(token.trim()).map_err(|_| StatusCode::UNAUTHORIZED)?;
    state.sessions.resolve(token).ok_or(StatusCode::UNAUTHORIZED)
}
