//! Crew sizing and total labour effort.

use crate::domain::Workforce;

/// Area units one mason completes per day
pub const MASON_PRODUCTIVITY: f64 = 120.0;
pub const HELPER_PRODUCTIVITY: f64 = 80.0;
pub const STEEL_WORKER_PRODUCTIVITY: f64 = 250.0;
pub const CARPENTER_PRODUCTIVITY: f64 = 200.0;

/// One supervisor per this much built-up area
pub const AREA_PER_SUPERVISOR: f64 = 15000.0;

fn crew_size(area: f64, productivity: f64, duration: f64) -> i64 {
    (area / (productivity * duration)).ceil() as i64
}

/// Headcount per role needed to build `area` within `duration` days.
pub fn workforce(area: f64, duration: f64) -> Workforce {
    Workforce {
        masons: crew_size(area, MASON_PRODUCTIVITY, duration),
        helpers: crew_size(area, HELPER_PRODUCTIVITY, duration),
        steel_workers: crew_size(area, STEEL_WORKER_PRODUCTIVITY, duration),
        carpenters: crew_size(area, CARPENTER_PRODUCTIVITY, duration),
        supervisors: ((area / AREA_PER_SUPERVISOR).ceil() as i64).max(1),
    }
}

/// Total person-days of labour over the whole project.
pub fn labour_days(workers: &Workforce, duration: f64) -> f64 {
    workers.total() as f64 * duration
}
