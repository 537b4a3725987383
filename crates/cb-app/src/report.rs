//! Plain-text calculation report.

use cb_core::units::kelvin_to_celsius;
use cb_engine::{CombustionResult, CostAnalysisResult};
use std::fmt::Write;

/// Human-readable summary of a calculation.
pub fn render_text(result: &CombustionResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut String, r: &CombustionResult) -> std::fmt::Result {
    writeln!(out, "=== Combustion Efficiency and Emissions ===")?;
    writeln!(out)?;
    writeln!(out, "Flow mode: {}", r.flow_mode)?;
    writeln!(
        out,
        "Average Molar Mass of Fuel Mixture: {:.2} g/mol",
        r.average_molar_mass
    )?;
    writeln!(out, "Lower Heating Value (LHV): {:.2} MJ/kg", r.lhv)?;
    writeln!(out, "Higher Heating Value (HHV): {:.2} MJ/kg", r.hhv)?;
    writeln!(out)?;
    writeln!(out, "Molar Flow Rate of Fuel: {:.4} mol/s", r.fuel_molar_flow)?;
    writeln!(out, "Molar Flow Rate of Air Required: {:.4} mol/s", r.air_molar_flow)?;
    writeln!(
        out,
        "Required Air Flow Rate: {:.2} {}",
        r.air_flow_rate, r.air_flow_unit
    )?;
    if r.air_composition.h2o > 0.0 {
        writeln!(
            out,
            "Inlet Air Water Vapour: {:.2} mol %",
            r.air_composition.h2o * 100.0
        )?;
    }
    writeln!(out, "Combustion Efficiency: {:.2}%", r.combustion_efficiency)?;
    writeln!(
        out,
        "Flame Temperature: {:.2} °C",
        kelvin_to_celsius(r.flame_temperature_k)
    )?;
    writeln!(out, "Fuel Gas Density: {:.4} kg/m³", r.fuel_gas_density)?;
    writeln!(out)?;

    writeln!(out, "=== Combustion Products ===")?;
    writeln!(out, "{:<5} {:>12} {:>9} {:>9}", "", "mol/s", "wet %", "dry %")?;
    let wet = r.wet_basis.entries();
    let dry = r.dry_basis.entries();
    for (i, (label, flow)) in r.products.entries().iter().enumerate() {
        writeln!(
            out,
            "{:<5} {:>12.4e} {:>9.3} {:>9.3}",
            label, flow, wet[i].1, dry[i].1
        )?;
    }
    writeln!(out)?;

    let e = &r.emissions;
    writeln!(out, "=== Emissions ===")?;
    writeln!(out, "SOx Emissions: {:.2} ppm", e.sox_ppm)?;
    writeln!(out, "CO Emissions: {:.2} ppm", e.co_ppm)?;
    writeln!(out, "NOx Emissions: {:.2} ppm", e.nox_ppm)?;
    writeln!(out, "NOx (normal conditions): {:.2} mg/Nm³", e.nox_normalized)?;
    writeln!(out, "NOx (flue gas temperature): {:.2} mg/m³", e.nox_flue_gas_temp)?;
    writeln!(
        out,
        "NOx at {:.1}% O₂ (normal conditions): {:.2} mg/Nm³",
        e.reference_o2_percent, e.nox_corrected_o2_normalized
    )?;
    writeln!(
        out,
        "NOx at {:.1}% O₂ (flue gas temperature): {:.2} mg/m³",
        e.reference_o2_percent, e.nox_corrected_o2_actual
    )?;
    writeln!(out)?;

    writeln!(out, "=== Fuel Cost Analysis ===")?;
    match &r.cost_analysis {
        Some(cost) => write_cost(out, cost, r.stoich_co2_dry_percent)?,
        None => writeln!(out, "Fuel cost calculations are disabled.")?,
    }
    Ok(())
}

fn write_cost(out: &mut String, cost: &CostAnalysisResult, stoich_co2: f64) -> std::fmt::Result {
    writeln!(out, "Stoichiometric dry CO₂: {:.2}%", stoich_co2)?;
    for (i, p) in cost.points.iter().enumerate() {
        let marker = if i == cost.best_point { " (best)" } else { "" };
        writeln!(out)?;
        writeln!(
            out,
            "Point {}{}: Flow Rate {:.2} {}",
            i + 1,
            marker,
            p.flow_rate,
            cost.flow_unit
        )?;
        match p.estimated_excess_air_percent {
            Some(ea) => writeln!(out, "  Excess Air: {:.2}%", ea)?,
            None => writeln!(out, "  Excess Air: n/a")?,
        }
        writeln!(out, "  Measured O₂: {:.2}%", p.measured_o2_percent)?;
        writeln!(out, "  Measured CO₂: {:.2}%", p.measured_co2_percent)?;
        writeln!(out, "  Combustion Efficiency: {:.2}%", p.efficiency_percent)?;
        writeln!(out, "  Cost at Point: ${:.2}", p.cost)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Total Cost Savings per Week ({} h): ${:.2}",
        cost.hours_per_week, cost.projected_weekly_savings
    )
}
