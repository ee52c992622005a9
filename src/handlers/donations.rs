use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use crate::app::AppState;
use crate::models::donation::DonationRequest;
use crate::services::DonationError;
use crate::utils::money::cents_to_dollars;

#[derive(Deserialize)]
pub struct QuoteRequest {
    pub base_amount: f64,
}

/// Breakdown preview for the donation form. Open to anyone; nothing is
/// charged or stored.
pub async fn quote_donation(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> Result<Json<Value>, StatusCode> {
    if !payload.base_amount.is_finite() || payload.base_amount < 0.0 {
        error!("Invalid quote amount: {}", payload.base_amount);
        return Err(StatusCode::BAD_REQUEST);
    }

    let breakdown = state.donations.quote(payload.base_amount);
    Ok(Json(serde_json::json!(breakdown)))
}

pub async fn create_donation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let session = super::bearer_session(&state, &headers)?;

    let request: DonationRequest = match serde_json::from_value(payload) {
        Ok(req) => req,
        Err(e) => {
            error!("Invalid donation request: {}", e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    if !request.base_amount.is_finite() {
        return Err(StatusCode::BAD_REQUEST);
    }

    info!(
        "Donation of ${:.2} to artist {} submitted by user {}",
        request.base_amount, request.recipient_artist_id, session.user_id
    );

    match state.donations.donate(request).await {
        Ok(donation) => Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({
                "status": "completed",
                "donation": donation,
            })),
        )),
        Err(DonationError::AmountBelowMinimum { minimum_cents }) => Ok((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "status": "rejected",
                "error": format!("minimum donation is ${:.2}", cents_to_dollars(minimum_cents)),
            })),
        )),
        Err(DonationError::Gateway(e)) => Ok((
            StatusCode::PAYMENT_REQUIRED,
            Json(serde_json::json!({
                "status": "declined",
                "error": e.to_string(),
            })),
        )),
        Err(DonationError::Persistence { id, source }) => Ok((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "status": "pending_persist",
                "donation_id": id,
                "error": source.to_string(),
                "retry": format!("/donations/{}/retry", id),
            })),
        )),
        Err(e) => {
            error!("Failed to process donation: {:?}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Re-attempts persistence for a donation that was charged but not stored.
/// The charge is never repeated.
pub async fn retry_donation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    super::bearer_session(&state, &headers)?;

    match state.donations.retry_persist(id).await {
        Ok(donation) => Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "completed",
                "donation": donation,
            })),
        )),
        Err(DonationError::UnknownDonation(_)) => Err(StatusCode::NOT_FOUND),
        Err(DonationError::Persistence { id, source }) => Ok((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "status": "pending_persist",
                "donation_id": id,
                "error": source.to_string(),
                "retry": format!("/donations/{}/retry", id),
            })),
        )),
        Err(e) => {
            error!("Failed to retry donation {}: {:?}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn get_donation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, StatusCode> {
    super::bearer_session(&state, &headers)?;

    match state.donations.get_donation(id).await {
        Some(donation) => Ok(Json(serde_json::json!(donation))),
        None => Err(StatusCode::NOT_FOUND),
    }
}
