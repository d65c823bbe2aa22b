//! Estimate request and report DTOs

use serde::{Deserialize, Deserializer, Serialize};

use super::json_number;

/// Which supplementary report to attach to an estimate.
///
/// On the wire this is the number `1`-`4`, or absent. Any other value
/// selects [`Scenario::Standard`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scenario {
    #[default]
    Standard,
    Blueprint,
    OptimizedSchedule,
    CostPerSqyard,
    DetailedSchedule,
}

impl Scenario {
    pub fn from_tag(tag: f64) -> Self {
        if tag.fract() != 0.0 {
            return Self::Standard;
        }
        match tag as i64 {
            1 => Self::Blueprint,
            2 => Self::OptimizedSchedule,
            3 => Self::CostPerSqyard,
            4 => Self::DetailedSchedule,
            _ => Self::Standard,
        }
    }

    pub fn tag(&self) -> Option<u8> {
        match self {
            Self::Standard => None,
            Self::Blueprint => Some(1),
            Self::OptimizedSchedule => Some(2),
            Self::CostPerSqyard => Some(3),
            Self::DetailedSchedule => Some(4),
        }
    }

    fn deserialize_tag<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(serde_json::Value::as_f64)
            .map(Self::from_tag)
            .unwrap_or_default())
    }
}

/// Request body for `POST /generate`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    #[serde(default, deserialize_with = "Scenario::deserialize_tag")]
    pub scenario: Scenario,
    #[serde(default)]
    pub plot_size: Option<f64>,
    #[serde(default)]
    pub floors: Option<f64>,
    /// Requested duration in days
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub rate_per_sqft: Option<f64>,
}

// ============================================================================
// Report
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    #[serde(serialize_with = "json_number::serialize")]
    pub total_sqft: f64,
    #[serde(serialize_with = "json_number::serialize")]
    pub duration_days: f64,
    pub weeks: i64,
    #[serde(serialize_with = "json_number::serialize")]
    pub months: f64,
}

/// Headcount per trade
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workforce {
    pub masons: i64,
    pub helpers: i64,
    pub steel_workers: i64,
    pub carpenters: i64,
    pub supervisors: i64,
}

impl Workforce {
    pub fn total(&self) -> i64 {
        self.masons + self.helpers + self.steel_workers + self.carpenters + self.supervisors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialsEstimate {
    pub cement_bags: i64,
    /// Metric tonnes, two decimals
    #[serde(serialize_with = "json_number::serialize")]
    pub steel_mt: f64,
    pub sand_cft: i64,
    pub water_liters: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Rate after compression, unrounded
    #[serde(serialize_with = "json_number::serialize")]
    pub rate_per_sqft: f64,
    pub total_cost: i64,
    pub material_cost: i64,
    pub labour_cost: i64,
    pub overhead: i64,
    pub contingency: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintLayout {
    pub living_room: String,
    pub kitchen: String,
    pub bedrooms: i64,
    pub toilets: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blueprint {
    pub floor_area_each: i64,
    pub layout: BlueprintLayout,
}

/// Phase durations rendered as `"<n> days"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseSchedule {
    pub foundation: String,
    pub structure: String,
    pub brickwork_plaster: String,
    pub electrical_plumbing: String,
    pub finishing: String,
}

/// Scenario-specific fields, flattened into the report body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScenarioReport {
    Blueprint {
        blueprint: Blueprint,
    },
    OptimizedSchedule {
        /// Two-decimal string, e.g. `"1.00"`
        compression_factor: String,
        optimized_schedule: PhaseSchedule,
    },
    CostPerSqyard {
        cost_per_sqyard: i64,
    },
    DetailedSchedule {
        detailed_schedule: PhaseSchedule,
    },
}

/// Response body for `POST /generate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResponse {
    pub project_summary: ProjectSummary,
    pub workers: Workforce,
    #[serde(serialize_with = "json_number::serialize")]
    pub total_labour_days: f64,
    pub materials: MaterialsEstimate,
    pub cost: CostBreakdown,
    #[serde(flatten)]
    pub scenario_report: Option<ScenarioReport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> EstimateRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_request_uses_camel_case_fields() {
        let req = parse(json!({
            "scenario": 3,
            "plotSize": 1000,
            "floors": 2,
            "duration": 120.5,
            "ratePerSqft": 1800
        }));
        assert_eq!(req.scenario, Scenario::CostPerSqyard);
        assert_eq!(req.plot_size, Some(1000.0));
        assert_eq!(req.floors, Some(2.0));
        assert_eq!(req.duration, Some(120.5));
        assert_eq!(req.rate_per_sqft, Some(1800.0));
    }

    #[test]
    fn test_request_optional_fields_may_be_absent_or_null() {
        let req = parse(json!({ "floors": 2, "duration": null }));
        assert_eq!(req.scenario, Scenario::Standard);
        assert_eq!(req.plot_size, None);
        assert_eq!(req.duration, None);
        assert_eq!(req.rate_per_sqft, None);
    }

    #[test]
    fn test_scenario_tags() {
        assert_eq!(parse(json!({ "scenario": 1 })).scenario, Scenario::Blueprint);
        assert_eq!(parse(json!({ "scenario": 2.0 })).scenario, Scenario::OptimizedSchedule);
        assert_eq!(parse(json!({ "scenario": 4 })).scenario, Scenario::DetailedSchedule);
    }

    #[test]
    fn test_unrecognised_scenario_is_standard() {
        for tag in [json!(0), json!(5), json!(1.5), json!(-2), json!("1"), json!(null), json!([1])] {
            let req = parse(json!({ "scenario": tag }));
            assert_eq!(req.scenario, Scenario::Standard, "tag {tag}");
        }
    }

    #[test]
    fn test_scenario_tag_round_trips_through_number() {
        for scenario in [
            Scenario::Blueprint,
            Scenario::OptimizedSchedule,
            Scenario::CostPerSqyard,
            Scenario::DetailedSchedule,
        ] {
            let tag = scenario.tag().unwrap();
            assert_eq!(Scenario::from_tag(f64::from(tag)), scenario);
        }
        assert_eq!(Scenario::Standard.tag(), None);
    }

    #[test]
    fn test_scenario_report_is_flattened() {
        let report = ScenarioReport::CostPerSqyard {
            cost_per_sqyard: 19800,
        };
        assert_eq!(serde_json::to_value(&report).unwrap(), json!({ "cost_per_sqyard": 19800 }));
    }
}
