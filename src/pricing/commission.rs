//! Two-tier affiliate commission arithmetic.
//!
//! Referrers earn 2.5% of the donation volume generated by artists they
//! referred (tier 1) and 2.5% of the volume generated by artists those
//! artists referred (tier 2). Two entry points share the rate constant:
//! a monthly aggregate and a per-show projection.

use crate::models::commission::{
    CommissionEarnings, CommissionScenario, ShowCommission, ShowScenario,
};

/// Commission rate per referral tier.
pub const TIER_COMMISSION_RATE: f64 = 0.025;

/// Assumed shows per month when projecting per-show earnings to a monthly figure.
pub const SHOWS_PER_MONTH: f64 = 4.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Projects monthly and annualized affiliate earnings for a referral scenario.
/// Pure arithmetic; range constraints live with the caller.
pub fn commission_scenario(scenario: &CommissionScenario) -> CommissionEarnings {
    let tier1_earnings =
        scenario.referred_artist_count as f64 * scenario.avg_donation_per_artist * TIER_COMMISSION_RATE;
    let tier2_earnings = scenario.second_tier_artist_count as f64
        * scenario.avg_donation_per_artist
        * TIER_COMMISSION_RATE;
    let total_monthly = tier1_earnings + tier2_earnings;

    CommissionEarnings {
        tier1_earnings,
        tier2_earnings,
        total_monthly,
        annual_projection: total_monthly * MONTHS_PER_YEAR,
    }
}

/// Per-show variant: derives the donation volume of one show from attendance
/// and donation rate, then applies the tier commission rate to it.
pub fn show_commission(scenario: &ShowScenario) -> ShowCommission {
    let donation_volume =
        scenario.attendees as f64 * (scenario.donation_rate_pct / 100.0) * scenario.avg_donation_amount;

    ShowCommission {
        donation_volume,
        per_show_earnings: donation_volume * TIER_COMMISSION_RATE,
    }
}

/// Callers compose a monthly figure from a per-show one with this multiplier.
pub fn monthly_from_shows(per_show_earnings: f64) -> f64 {
    per_show_earnings * SHOWS_PER_MONTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_tier_scenario() {
        let earnings = commission_scenario(&CommissionScenario {
            referred_artist_count: 5,
            second_tier_artist_count: 10,
            avg_donation_per_artist: 500.0,
        });
        assert_eq!(earnings.tier1_earnings, 62.5);
        assert_eq!(earnings.tier2_earnings, 125.0);
        assert_eq!(earnings.total_monthly, 187.5);
        assert_eq!(earnings.annual_projection, 2250.0);
    }

    #[test]
    fn no_referrals_no_earnings() {
        let earnings = commission_scenario(&CommissionScenario {
            referred_artist_count: 0,
            second_tier_artist_count: 0,
            avg_donation_per_artist: 500.0,
        });
        assert_eq!(earnings.total_monthly, 0.0);
        assert_eq!(earnings.annual_projection, 0.0);
    }

    #[test]
    fn per_show_scenario() {
        let show = show_commission(&ShowScenario {
            attendees: 100,
            donation_rate_pct: 40.0,
            avg_donation_amount: 20.0,
        });
        assert_eq!(show.donation_volume, 800.0);
        assert_eq!(show.per_show_earnings, 20.0);
    }

    #[test]
    fn monthly_composition_uses_four_shows() {
        let show = show_commission(&ShowScenario {
            attendees: 100,
            donation_rate_pct: 40.0,
            avg_donation_amount: 20.0,
        });
        assert_eq!(monthly_from_shows(show.per_show_earnings), 80.0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let scenario = CommissionScenario {
            referred_artist_count: 7,
            second_tier_artist_count: 3,
            avg_donation_per_artist: 123.45,
        };
        assert_eq!(commission_scenario(&scenario), commission_scenario(&scenario));
    }
}
