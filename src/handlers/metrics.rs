use axum::{extract::State, response::Json};

use crate::app::AppState;

pub async fn get_metrics(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.donations.metrics().await)
}
