use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde_json::Value;
use tracing::error;

use crate::app::AppState;
use crate::models::commission::{CommissionScenario, ShowScenario};
use crate::pricing::commission::{commission_scenario, monthly_from_shows, show_commission};

/// Monthly two-tier affiliate projection. Artist and venue accounts only.
pub async fn get_scenario(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(scenario): Query<CommissionScenario>,
) -> Result<Json<Value>, StatusCode> {
    let session = super::bearer_session(&state, &headers)?;
    if !session.role.can_view_commissions() {
        return Err(StatusCode::FORBIDDEN);
    }

    if !scenario.avg_donation_per_artist.is_finite() || scenario.avg_donation_per_artist < 0.0 {
        error!(
            "Invalid avg_donation_per_artist: {}",
            scenario.avg_donation_per_artist
        );
        return Err(StatusCode::BAD_REQUEST);
    }

    let earnings = commission_scenario(&scenario);
    Ok(Json(serde_json::json!({
        "scenario": scenario,
        "earnings": earnings,
    })))
}

/// Per-show variant of the projection, composed to a monthly figure with the
/// assumed shows-per-month constant.
pub async fn get_show_projection(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(scenario): Query<ShowScenario>,
) -> Result<Json<Value>, StatusCode> {
    let session = super::bearer_session(&state, &headers)?;
    if !session.role.can_view_commissions() {
        return Err(StatusCode::FORBIDDEN);
    }

    let rate_valid =
        scenario.donation_rate_pct.is_finite() && (0.0..=100.0).contains(&scenario.donation_rate_pct);
    let avg_valid = scenario.avg_donation_amount.is_finite() && scenario.avg_donation_amount >= 0.0;
    if !rate_valid || !avg_valid {
        error!(
            "Invalid show scenario: rate {} avg {}",
            scenario.donation_rate_pct, scenario.avg_donation_amount
        );
        return Err(StatusCode::BAD_REQUEST);
    }

    let show = show_commission(&scenario);
    Ok(Json(serde_json::json!({
        "scenario": scenario,
        "donation_volume": show.donation_volume,
        "per_show_earnings": show.per_show_earnings,
        "monthly_earnings": monthly_from_shows(show.per_show_earnings),
    })))
}
