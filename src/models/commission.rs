use serde::{Deserialize, Serialize};

/// Inputs for the monthly two-tier affiliate projection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CommissionScenario {
    pub referred_artist_count: u32,
    pub second_tier_artist_count: u32,
    pub avg_donation_per_artist: f64,
}

/// Derived earnings for a scenario. Raw arithmetic, not cent-rounded;
/// formatting is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommissionEarnings {
    pub tier1_earnings: f64,
    pub tier2_earnings: f64,
    pub total_monthly: f64,
    pub annual_projection: f64,
}

/// Inputs for the per-show variant: donation volume is derived from
/// attendance instead of a monthly aggregate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShowScenario {
    pub attendees: u32,
    pub donation_rate_pct: f64,
    pub avg_donation_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShowCommission {
    pub donation_volume: f64,
    pub per_show_earnings: f64,
}
