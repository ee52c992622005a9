//! Donation fee and payout arithmetic.
//!
//! Every donation surface (modal, embeddable form, dashboards) computes its
//! numbers through [`donation_breakdown`]; the formulas live nowhere else.

use crate::models::donation::DonationBreakdown;
use crate::utils::money::round2;

/// Card-processing surcharge: 2.9% + $0.30, charged on top of the base amount.
pub const PROCESSING_FEE_RATE: f64 = 0.029;
pub const PROCESSING_FEE_FIXED: f64 = 0.30;

/// Revenue split of the base amount. The artist keeps 80%, the platform 20%.
pub const ARTIST_SHARE: f64 = 0.80;
pub const PLATFORM_SHARE: f64 = 0.20;

/// Itemizes a base donation amount into fee, total charged, and the
/// artist/platform split.
///
/// Pure arithmetic: never fails and never validates. Callers enforce the
/// $1.00 minimum at the boundary before invoking.
///
/// The 80% and 20% shares are each rounded to cents independently from the
/// base amount, so `artist_payout + platform_fee` can differ from
/// `base_amount` by one cent. That matches the production billing history
/// and is kept intentionally; deriving the platform fee as a remainder
/// would silently change recorded payouts.
pub fn donation_breakdown(base_amount: f64) -> DonationBreakdown {
    let processing_fee = round2(base_amount * PROCESSING_FEE_RATE + PROCESSING_FEE_FIXED);
    let total_charged = round2(base_amount + processing_fee);
    let artist_payout = round2(base_amount * ARTIST_SHARE);
    let platform_fee = round2(base_amount * PLATFORM_SHARE);

    DonationBreakdown {
        base_amount,
        processing_fee,
        total_charged,
        artist_payout,
        platform_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_amount_still_carries_fixed_fee() {
        let b = donation_breakdown(0.0);
        assert_eq!(b.processing_fee, 0.30);
        assert_eq!(b.total_charged, 0.30);
        assert_eq!(b.artist_payout, 0.00);
        assert_eq!(b.platform_fee, 0.00);
    }

    #[test]
    fn five_dollar_fee_rounds_half_away_from_zero() {
        // 5 * 0.029 + 0.30 = 0.445 -> 0.45
        let b = donation_breakdown(5.0);
        assert_eq!(b.processing_fee, 0.45);
        assert_eq!(b.total_charged, 5.45);
        assert_eq!(b.artist_payout, 4.00);
        assert_eq!(b.platform_fee, 1.00);
    }

    #[test]
    fn ten_dollar_donation_end_to_end() {
        let b = donation_breakdown(10.0);
        assert_eq!(b.processing_fee, 0.59);
        assert_eq!(b.total_charged, 10.59);
        assert_eq!(b.artist_payout, 8.00);
        assert_eq!(b.platform_fee, 2.00);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = donation_breakdown(37.77);
        let b = donation_breakdown(37.77);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn total_matches_fee_formula(base in 0.0f64..100_000.0) {
            let b = donation_breakdown(base);
            prop_assert_eq!(b.processing_fee, round2(base * PROCESSING_FEE_RATE + PROCESSING_FEE_FIXED));
            prop_assert_eq!(b.total_charged, round2(base + b.processing_fee));
        }

        #[test]
        fn shares_round_independently_from_base(base in 0.0f64..100_000.0) {
            let b = donation_breakdown(base);
            prop_assert_eq!(b.artist_payout, round2(base * ARTIST_SHARE));
            prop_assert_eq!(b.platform_fee, round2(base * PLATFORM_SHARE));
            // each share rounds at most half a cent, so the drift is bounded
            prop_assert!((b.artist_payout + b.platform_fee - base).abs() <= 0.01 + 1e-9);
        }

        #[test]
        fn all_components_are_cent_aligned(base in 0.0f64..100_000.0) {
            let b = donation_breakdown(base);
            for v in [b.processing_fee, b.total_charged, b.artist_payout, b.platform_fee] {
                prop_assert_eq!(round2(v), v);
            }
        }
    }
}
