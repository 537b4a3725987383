//! Emission correlations and normalizations.

use crate::config::NoxCorrelation;
use cb_core::CoreError;
use cb_core::numeric::checked_ratio;
use cb_core::units::constants::{NORMAL_TEMPERATURE_K, O2_PERCENT_REFERENCE_AIR};

/// Empirical thermal-NOx estimate.
///
/// With the default correlation (`scale = 1`) the figure is the raw
/// correlation value; `scale` rescales it for calibrated constants.
///
/// The excess-air term is floored at zero so deeply air-starved operation
/// (EA below -1 %) predicts no NOx instead of a complex root.
pub fn nox_ppm(correlation: &NoxCorrelation, flame_temperature_k: f64, excess_air_percent: f64) -> f64 {
    let air_term = (excess_air_percent + 1.0).max(0.0).powf(correlation.c);
    correlation.a
        * correlation.scale
        * (correlation.b * (flame_temperature_k - correlation.t_ref_k)).exp()
        * air_term
}

/// Convert a ppm figure to mg/Nm³.
pub fn ppm_to_mg_per_nm3(ppm: f64, mg_per_nm3_per_ppm: f64) -> f64 {
    ppm * mg_per_nm3_per_ppm
}

/// Rescale a normal-condition concentration to the actual flue-gas temperature.
pub fn at_flue_gas_temperature(value_normal: f64, flue_gas_temperature_c: f64) -> Result<f64, CoreError> {
    checked_ratio(
        value_normal * NORMAL_TEMPERATURE_K,
        NORMAL_TEMPERATURE_K + flue_gas_temperature_c,
        "flue-gas temperature correction",
    )
}

/// `(21 − reference O2) / (21 − measured dry O2)`
pub fn o2_correction_factor(reference_o2_percent: f64, measured_dry_o2_percent: f64) -> Result<f64, CoreError> {
    checked_ratio(
        O2_PERCENT_REFERENCE_AIR - reference_o2_percent,
        O2_PERCENT_REFERENCE_AIR - measured_dry_o2_percent,
        "O2 reference correction",
    )
}
