//! Optional reports attached to an estimate depending on the scenario.

use super::rounding::{round_half_up, round_to_int};
use crate::domain::{Blueprint, BlueprintLayout, PhaseSchedule};

pub const LIVING_ROOM_SIZE: &str = "18x20 ft";
pub const KITCHEN_SIZE: &str = "12x14 ft";

/// Floor area that supports one bedroom / toilet
const AREA_PER_BEDROOM: f64 = 900.0;
const AREA_PER_TOILET: f64 = 1200.0;
const MIN_BEDROOMS: i64 = 2;
const MIN_TOILETS: i64 = 2;

// Phase shares of the effective duration
const FOUNDATION_SHARE: f64 = 0.15;
const STRUCTURE_SHARE: f64 = 0.35;
const BRICKWORK_PLASTER_SHARE: f64 = 0.2;
const ELECTRICAL_PLUMBING_SHARE: f64 = 0.15;
const FINISHING_SHARE: f64 = 0.15;

/// Per-floor layout sketch.
pub fn blueprint(area: f64, floors: f64) -> Blueprint {
    let floor_area = area / floors;

    Blueprint {
        floor_area_each: round_to_int(floor_area),
        layout: BlueprintLayout {
            living_room: LIVING_ROOM_SIZE.to_string(),
            kitchen: KITCHEN_SIZE.to_string(),
            bedrooms: ((floor_area / AREA_PER_BEDROOM).floor() as i64).max(MIN_BEDROOMS),
            toilets: ((floor_area / AREA_PER_TOILET).floor() as i64).max(MIN_TOILETS),
        },
    }
}

fn phase_days(duration: f64, share: f64) -> String {
    format!("{} days", round_half_up(duration * share) as i64)
}

/// Split the effective duration into the five construction phases.
pub fn schedule(duration: f64) -> PhaseSchedule {
    PhaseSchedule {
        foundation: phase_days(duration, FOUNDATION_SHARE),
        structure: phase_days(duration, STRUCTURE_SHARE),
        brickwork_plaster: phase_days(duration, BRICKWORK_PLASTER_SHARE),
        electrical_plumbing: phase_days(duration, ELECTRICAL_PLUMBING_SHARE),
        finishing: phase_days(duration, FINISHING_SHARE),
    }
}

/// Total cost spread over the plot size.
pub fn cost_per_plot_unit(total_cost: i64, plot_size: f64) -> i64 {
    round_to_int(total_cost as f64 / plot_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blueprint_scales_rooms_with_floor_area() {
        let plan = blueprint(18000.0, 2.0);
        assert_eq!(plan.floor_area_each, 9000);
        assert_eq!(plan.layout.bedrooms, 10);
        assert_eq!(plan.layout.toilets, 7); // 7.5 floors down
        assert_eq!(plan.layout.living_room, "18x20 ft");
        assert_eq!(plan.layout.kitchen, "12x14 ft");
    }

    #[test]
    fn test_blueprint_minimum_rooms() {
        let plan = blueprint(900.0, 1.0);
        assert_eq!(plan.floor_area_each, 900);
        assert_eq!(plan.layout.bedrooms, 2);
        assert_eq!(plan.layout.toilets, 2);
    }

    #[test]
    fn test_schedule_phases() {
        let phases = schedule(100.0);
        assert_eq!(phases.foundation, "15 days");
        assert_eq!(phases.structure, "35 days");
        assert_eq!(phases.brickwork_plaster, "20 days");
        assert_eq!(phases.electrical_plumbing, "15 days");
        assert_eq!(phases.finishing, "15 days");
    }

    #[test]
    fn test_schedule_phases_round_independently() {
        let phases = schedule(233.0);
        assert_eq!(phases.foundation, "35 days"); // 34.95
        assert_eq!(phases.structure, "82 days"); // 81.55
        assert_eq!(phases.brickwork_plaster, "47 days"); // 46.6
        assert_eq!(phases.finishing, "35 days");
        // 35 + 82 + 47 + 35 + 35 = 234, one more than the duration
    }

    #[test]
    fn test_cost_per_plot_unit() {
        assert_eq!(cost_per_plot_unit(19_800_000, 1000.0), 19800);
        assert_eq!(cost_per_plot_unit(1000, 3.0), 333);
    }
}
