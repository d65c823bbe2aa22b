use super::rounding::{round_to_int, round_to_places};
use crate::domain::MaterialsEstimate;

// Quantities per unit of built-up area
pub const CEMENT_BAGS_PER_SQFT: f64 = 0.4;
pub const STEEL_MT_PER_SQFT: f64 = 0.004;
pub const SAND_CFT_PER_SQFT: f64 = 1.2;
pub const WATER_LITERS_PER_SQFT: f64 = 25.0;

pub fn materials(area: f64) -> MaterialsEstimate {
    MaterialsEstimate {
        cement_bags: round_to_int(area * CEMENT_BAGS_PER_SQFT),
        steel_mt: round_to_places(area * STEEL_MT_PER_SQFT, 2),
        sand_cft: round_to_int(area * SAND_CFT_PER_SQFT),
        water_liters: round_to_int(area * WATER_LITERS_PER_SQFT),
    }
}
