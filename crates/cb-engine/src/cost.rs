//! Fuel-cost sweep across the burner's firing range.
//!
//! Each sweep point pairs a flow rate with one analyser reading. Efficiency
//! is the measured dry CO2 relative to the dry CO2 of stoichiometric
//! combustion at that flow.

use crate::conditions::CostAnalysisInput;
use crate::config::EngineConfig;
use crate::engine::FuelBasis;
use crate::error::{EngineError, EngineResult};
use crate::result::{CostAnalysisResult, CostPoint};
use crate::sweep::FlowSweep;
use cb_core::numeric::checked_ratio;
use tracing::debug;

/// O2 content of ambient air used by the excess-air estimate [%].
const AMBIENT_O2_PERCENT: f64 = 20.95;

/// Excess air implied by a dry O2 reading; `None` at or above ambient O2.
pub fn estimated_excess_air_percent(o2_percent: f64) -> Option<f64> {
    (o2_percent < AMBIENT_O2_PERCENT).then(|| o2_percent / (AMBIENT_O2_PERCENT - o2_percent) * 100.0)
}

pub(crate) fn analyse(
    basis: &FuelBasis,
    input: &CostAnalysisInput,
    config: &EngineConfig,
) -> EngineResult<CostAnalysisResult> {
    let sweep = FlowSweep::linear(input.min_flow_rate, input.max_flow_rate, config.cost_points);
    debug!(%sweep, unit_cost = input.fuel_unit_cost, "cost analysis");

    let mut points = Vec::with_capacity(config.cost_points);
    for (flow_rate, reading) in sweep.generate_points().into_iter().zip(&input.readings) {
        let fuel_molar_flow = basis.fuel_molar_flow(flow_rate);
        let stoich_co2_percent = basis.stoich_co2_dry_percent(fuel_molar_flow);
        let efficiency_percent = checked_ratio(
            reading.co2_percent,
            stoich_co2_percent,
            "stoichiometric CO2 of the cost sweep",
        )
        .map_err(EngineError::degenerate)?
            * 100.0;
        let cost = checked_ratio(flow_rate, efficiency_percent, "cost sweep efficiency")
            .map_err(EngineError::degenerate)?
            * input.fuel_unit_cost;

        points.push(CostPoint {
            flow_rate,
            measured_o2_percent: reading.o2_percent,
            measured_co2_percent: reading.co2_percent,
            estimated_excess_air_percent: estimated_excess_air_percent(reading.o2_percent),
            fuel_molar_flow,
            stoich_co2_percent,
            efficiency_percent,
            cost,
        });
    }

    let best_point = points
        .iter()
        .enumerate()
        .fold(0, |best, (i, p)| {
            if p.efficiency_percent > points[best].efficiency_percent {
                i
            } else {
                best
            }
        });
    let projected_weekly_savings =
        points.iter().map(|p| p.cost).sum::<f64>() * config.hours_per_week;

    Ok(CostAnalysisResult {
        points,
        flow_unit: basis.flow_mode.unit_label().to_string(),
        hours_per_week: config.hours_per_week,
        projected_weekly_savings,
        best_point,
    })
}
