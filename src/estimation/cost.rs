//! Cost breakdown.
//!
//! Each share is rounded on its own from the unrounded total, so the four
//! shares need not add back up to `total_cost`.

use super::rounding::round_to_int;
use crate::domain::CostBreakdown;

/// Rate used when the request does not supply one
pub const DEFAULT_RATE_PER_SQFT: f64 = 2200.0;

pub const MATERIAL_SHARE: f64 = 0.6;
pub const LABOUR_SHARE: f64 = 0.25;
pub const OVERHEAD_SHARE: f64 = 0.1;
pub const CONTINGENCY_SHARE: f64 = 0.05;

/// Cost of `area` at `rate`, with the rate scaled up by `compression` for
/// accelerated schedules. Pass `1.0` for a normal schedule.
pub fn cost(area: f64, rate: f64, compression: f64) -> CostBreakdown {
    let adjusted_rate = rate * compression;
    let total = area * adjusted_rate;

    CostBreakdown {
        rate_per_sqft: adjusted_rate,
        total_cost: round_to_int(total),
        material_cost: round_to_int(total * MATERIAL_SHARE),
        labour_cost: round_to_int(total * LABOUR_SHARE),
        overhead: round_to_int(total * OVERHEAD_SHARE),
        contingency: round_to_int(total * CONTINGENCY_SHARE),
    }
}
