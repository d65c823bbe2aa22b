//! Construction estimate pipeline
//!
//! A pure, stateless calculation: area -> normal duration -> effective
//! duration and compression -> workforce -> materials -> cost, followed by
//! at most one scenario report. No step touches shared state, so the
//! pipeline may be called from any number of requests at once.

pub mod area;
pub mod cost;
pub mod error;
pub mod materials;
pub mod rounding;
pub mod scenarios;
pub mod workforce;

pub use error::{EstimateError, EstimateResult};

use crate::domain::{EstimateRequest, EstimateResponse, ProjectSummary, Scenario, ScenarioReport};
use area::DurationPlan;
use rounding::{format_fixed, round_to_int, round_to_places};

const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// Validated inputs for one estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectInput {
    pub scenario: Scenario,
    pub plot_size: f64,
    pub floors: f64,
    pub requested_duration: Option<f64>,
    pub rate_per_sqft: f64,
}

/// Zero counts as "not supplied", the same as absent or null
fn supplied(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

impl TryFrom<&EstimateRequest> for ProjectInput {
    type Error = EstimateError;

    fn try_from(req: &EstimateRequest) -> EstimateResult<Self> {
        let (Some(plot_size), Some(floors)) = (supplied(req.plot_size), supplied(req.floors))
        else {
            return Err(EstimateError::MissingRequiredInput);
        };

        Ok(Self {
            scenario: req.scenario,
            plot_size,
            floors,
            requested_duration: supplied(req.duration),
            rate_per_sqft: supplied(req.rate_per_sqft).unwrap_or(cost::DEFAULT_RATE_PER_SQFT),
        })
    }
}

/// Validate a request and run the full pipeline.
pub fn generate(req: &EstimateRequest) -> EstimateResult<EstimateResponse> {
    let input = ProjectInput::try_from(req)?;
    Ok(estimate(&input))
}

/// Run the pipeline on already-validated inputs.
pub fn estimate(input: &ProjectInput) -> EstimateResponse {
    let total_area = area::built_up_area(input.plot_size, input.floors);
    let normal_days = area::estimate_duration(total_area, input.floors);
    let plan = DurationPlan::resolve(normal_days, input.requested_duration);
    let duration = plan.effective_days;

    if plan.is_compressed() {
        tracing::debug!(
            normal_days = plan.normal_days,
            requested_days = duration,
            compression_factor = plan.compression_factor,
            "Schedule compressed"
        );
    }

    let workers = workforce::workforce(total_area, duration);
    let total_labour_days = workforce::labour_days(&workers, duration);
    let materials = materials::materials(total_area);
    let cost = cost::cost(total_area, input.rate_per_sqft, plan.compression_factor);

    let scenario_report = match input.scenario {
        Scenario::Standard => None,
        Scenario::Blueprint => Some(ScenarioReport::Blueprint {
            blueprint: scenarios::blueprint(total_area, input.floors),
        }),
        Scenario::OptimizedSchedule => Some(ScenarioReport::OptimizedSchedule {
            compression_factor: format_fixed(plan.compression_factor, 2),
            optimized_schedule: scenarios::schedule(duration),
        }),
        Scenario::CostPerSqyard => Some(ScenarioReport::CostPerSqyard {
            cost_per_sqyard: scenarios::cost_per_plot_unit(cost.total_cost, input.plot_size),
        }),
        Scenario::DetailedSchedule => Some(ScenarioReport::DetailedSchedule {
            detailed_schedule: scenarios::schedule(duration),
        }),
    };

    EstimateResponse {
        project_summary: ProjectSummary {
            total_sqft: total_area,
            duration_days: duration,
            weeks: round_to_int(duration / DAYS_PER_WEEK),
            months: round_to_places(duration / DAYS_PER_MONTH, 1),
        },
        workers,
        total_labour_days,
        materials,
        cost,
        scenario_report,
    }
}
