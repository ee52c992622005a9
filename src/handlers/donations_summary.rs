use axum::{
    extract::{Query, State},
    response::Json,
};
use tracing::info;

use crate::app::AppState;
use crate::services::SummaryFilters;

pub async fn get_summary(
    State(state): State<AppState>,
    Query(filters): Query<SummaryFilters>,
) -> Json<serde_json::Value> {
    info!("Getting donations summary");

    let summary = state.donations.summary(filters).await;

    Json(serde_json::json!({
        "count": summary.count,
        "gross_cents": summary.gross_cents,
        "processing_fee_cents": summary.processing_fee_cents,
        "artist_payout_cents": summary.artist_payout_cents,
        "platform_fee_cents": summary.platform_fee_cents,
    }))
}
