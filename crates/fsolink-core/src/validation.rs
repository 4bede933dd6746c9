//! Input validation
//!
//! Two-phase, collect-then-stop. The presence phase reports every missing
//! required field and aborts before any range check runs; the range phase
//! then accumulates all violations into one error instead of stopping at
//! the first. On success the raw parameters resolve into
//! [`ValidatedParameters`] with every required value concrete, which is the
//! only form the formulas ever see.

use crate::error::{FsoError, FsoResult};
use crate::optical_geometry::GainModel;
use crate::params::InputParameters;

/// Parameter set after both validation phases have passed.
///
/// Required values are concrete, defaults are applied, and every range
/// constraint the formulas rely on holds.
#[derive(Debug, Clone)]
pub struct ValidatedParameters {
    pub tx_power_dbm: f64,
    pub tx_efficiency: f64,
    pub rx_efficiency: f64,
    pub wavelength_m: f64,
    pub tx_diameter_m: f64,
    pub rx_diameter_m: f64,
    pub distance_m: f64,
    pub rx_sensitivity_dbm: Option<f64>,
    pub rx_lna_gain_db: f64,
    pub implementation_loss_db: f64,
    pub coupling_loss_db: f64,
    pub tx_pointing_loss_db: f64,
    pub rx_pointing_loss_db: f64,
    pub tx_pointing_error_rad: Option<f64>,
    pub rx_pointing_error_rad: Option<f64>,
    pub gain_model: GainModel,
}

/// Pull a required field, recording its name when absent.
///
/// The NaN placeholder is never read: any recorded name aborts validation
/// before the range phase.
fn require(value: Option<f64>, name: &str, missing: &mut Vec<String>) -> f64 {
    match value {
        Some(v) => v,
        None => {
            missing.push(format!("Missing required field: {name}"));
            f64::NAN
        }
    }
}

/// Validate an input parameter set and resolve it for computation.
pub fn validate(input: &InputParameters) -> FsoResult<ValidatedParameters> {
    // Presence phase: all required fields, aggregated.
    let mut missing = Vec::new();
    let tx_power_dbm = require(input.tx_power_dbm, "tx_power_dbm", &mut missing);
    let tx_efficiency = require(input.tx_efficiency, "tx_efficiency", &mut missing);
    let rx_efficiency = require(input.rx_efficiency, "rx_efficiency", &mut missing);
    let wavelength_m = require(input.wavelength_m, "wavelength_m", &mut missing);
    let tx_diameter_m = require(input.tx_diameter_m, "tx_diameter_m", &mut missing);
    let rx_diameter_m = require(input.rx_diameter_m, "rx_diameter_m", &mut missing);
    let distance_m = require(input.distance_m, "distance_m", &mut missing);

    if !missing.is_empty() {
        tracing::debug!("input rejected: {} missing field(s)", missing.len());
        return Err(FsoError::validation(missing));
    }

    // Range phase: accumulate every violation.
    let mut errors = Vec::new();

    if !(tx_efficiency > 0.0 && tx_efficiency <= 1.0) {
        errors.push("TX efficiency must be between 0 and 1".to_string());
    }
    if !(rx_efficiency > 0.0 && rx_efficiency <= 1.0) {
        errors.push("RX efficiency must be between 0 and 1".to_string());
    }
    if !(wavelength_m > 0.0) {
        errors.push("Wavelength must be positive".to_string());
    }
    if !(tx_diameter_m > 0.0) {
        errors.push("TX diameter must be positive".to_string());
    }
    if !(rx_diameter_m > 0.0) {
        errors.push("RX diameter must be positive".to_string());
    }
    if !(distance_m > 0.0) {
        errors.push("Distance must be positive".to_string());
    }
    if !(input.rx_lna_gain_db >= 0.0) {
        errors.push("Rx LNA gain must be 0 or positive (enter 0 if no LNA is used)".to_string());
    }
    if !(input.implementation_loss_db >= 0.0) {
        errors.push("Implementation loss must be 0 or positive".to_string());
    }
    if !(input.coupling_loss_db >= 0.0) {
        errors.push("Coupling loss must be 0 or positive".to_string());
    }
    if !(input.tx_pointing_loss_db >= 0.0) {
        errors.push("TX pointing loss must be 0 or positive".to_string());
    }
    if !(input.rx_pointing_loss_db >= 0.0) {
        errors.push("RX pointing loss must be 0 or positive".to_string());
    }
    if let Some(theta) = input.tx_pointing_error_rad {
        if !theta.is_finite() {
            errors.push("TX pointing error must be a finite angle in radians".to_string());
        }
    }
    if let Some(theta) = input.rx_pointing_error_rad {
        if !theta.is_finite() {
            errors.push("RX pointing error must be a finite angle in radians".to_string());
        }
    }

    if !errors.is_empty() {
        tracing::debug!("input rejected: {} range violation(s)", errors.len());
        return Err(FsoError::validation(errors));
    }

    Ok(ValidatedParameters {
        tx_power_dbm,
        tx_efficiency,
        rx_efficiency,
        wavelength_m,
        tx_diameter_m,
        rx_diameter_m,
        distance_m,
        rx_sensitivity_dbm: input.rx_sensitivity_dbm,
        rx_lna_gain_db: input.rx_lna_gain_db,
        implementation_loss_db: input.implementation_loss_db,
        coupling_loss_db: input.coupling_loss_db,
        tx_pointing_loss_db: input.tx_pointing_loss_db,
        rx_pointing_loss_db: input.rx_pointing_loss_db,
        tx_pointing_error_rad: input.tx_pointing_error_rad,
        rx_pointing_error_rad: input.rx_pointing_error_rad,
        gain_model: input.gain_model,
    })
}
