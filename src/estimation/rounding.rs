//! Rounding helpers shared by the calculators.
//!
//! Estimates are reported with half-up rounding (ties go toward positive
//! infinity), so `-2.5` rounds to `-2` and `2.5` rounds to `3`. This differs
//! from [`f64::round`], which rounds ties away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // `value - floor` is exact for every finite f64
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round half-up and convert to a whole count.
///
/// Out-of-range values saturate at the `i64` bounds.
pub fn round_to_int(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// Round to a fixed number of decimal places.
///
/// Ties are decided on the exact binary value and go away from zero, so
/// `1.125` becomes `1.13` and `-0.25` becomes `-0.3`.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    format_fixed(value, places).parse().unwrap_or(value)
}

/// Render `value` with exactly `places` decimals (`1.0` -> `"1.00"`).
pub fn format_fixed(value: f64, places: u32) -> String {
    match fixed_decimal(value, places) {
        Some(decimal) => decimal.to_string(),
        // Non-finite or beyond Decimal range
        None => format!("{value:.prec$}", prec = places as usize),
    }
}

fn fixed_decimal(value: f64, places: u32) -> Option<Decimal> {
    let mut decimal = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    // pad to the requested scale
    decimal.rescale(places);
    Some(decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(0.49), 0.0);
        assert_eq!(round_half_up(232.94), 233.0);
    }

    #[test]
    fn test_round_to_int_saturates() {
        assert_eq!(round_to_int(7200.4), 7200);
        assert_eq!(round_to_int(f64::MAX), i64::MAX);
    }

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to_places(44.424, 2), 44.42);
        assert_eq!(round_to_places(7.766_666, 1), 7.8);
        assert_eq!(round_to_places(72.000_000_000_000_01, 2), 72.0);
    }

    #[test]
    fn test_round_to_places_exact_ties_go_away_from_zero() {
        assert_eq!(round_to_places(0.25, 1), 0.3);
        assert_eq!(round_to_places(1.125, 2), 1.13);
        assert_eq!(round_to_places(-0.25, 1), -0.3);
        assert_eq!(round_to_places(-1.125, 2), -1.13);
    }

    #[test]
    fn test_format_fixed_exact_ties() {
        assert_eq!(format_fixed(1.125, 2), "1.13");
        assert_eq!(format_fixed(0.375, 2), "0.38");
        assert_eq!(format_fixed(-1.125, 2), "-1.13");
        // 1.005 is stored just below the tie
        assert_eq!(format_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_format_fixed_non_finite_falls_back() {
        assert_eq!(format_fixed(f64::INFINITY, 2), "inf");
        assert!(round_to_places(f64::NAN, 1).is_nan());
    }

    #[test]
    fn test_format_fixed_pads() {
        assert_eq!(format_fixed(1.0, 2), "1.00");
        assert_eq!(format_fixed(2.0 / 3.0, 2), "0.67");
    }
}
