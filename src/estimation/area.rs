//! Built-up area, normal duration and schedule compression.

use super::rounding::round_half_up;

/// Built-up area per plot unit per floor
pub const AREA_MULTIPLIER: f64 = 9.0;

/// Base site productivity in area units per day
pub const BASE_PRODUCTIVITY_PER_DAY: f64 = 85.0;

/// Duration overhead added for each floor above the first
pub const PER_FLOOR_OVERHEAD: f64 = 0.1;

/// Total built-up area for a plot and floor count.
///
/// Inputs are not range checked; zero or negative values propagate.
pub fn built_up_area(plot_size: f64, floors: f64) -> f64 {
    plot_size * AREA_MULTIPLIER * floors
}

/// Normal construction duration in whole days.
pub fn estimate_duration(area: f64, floors: f64) -> f64 {
    let floor_factor = 1.0 + (floors - 1.0) * PER_FLOOR_OVERHEAD;
    round_half_up((area / BASE_PRODUCTIVITY_PER_DAY) * floor_factor)
}

/// Duration actually used by the estimate, plus the cost premium for
/// finishing faster than the normal schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationPlan {
    pub normal_days: f64,
    pub effective_days: f64,
    /// `normal_days / effective_days` when compressed, otherwise 1
    pub compression_factor: f64,
}

impl DurationPlan {
    pub fn resolve(normal_days: f64, requested_days: Option<f64>) -> Self {
        match requested_days {
            Some(requested) if requested < normal_days => Self {
                normal_days,
                effective_days: requested,
                compression_factor: normal_days / requested,
            },
            Some(requested) => Self {
                normal_days,
                effective_days: requested,
                compression_factor: 1.0,
            },
            None => Self {
                normal_days,
                effective_days: normal_days,
                compression_factor: 1.0,
            },
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.compression_factor != 1.0
    }
}
