use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::app::AppState;
use crate::models::session::Role;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub user_id: Uuid,
    pub role: Role,
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Json<Value> {
    let session = state.sessions.login(payload.user_id, payload.role);

    Json(serde_json::json!({
        "token": session.token,
        "user_id": session.user_id,
        "role": session.role,
        "created_at": session.created_at,
    }))
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    match super::bearer_session(&state, &headers) {
        Ok(session) => {
            state.sessions.logout(session.token);
            StatusCode::NO_CONTENT
        }
        Err(status) => status,
    }
}
