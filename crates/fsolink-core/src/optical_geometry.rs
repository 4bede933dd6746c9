//! Optical aperture geometry: beam divergence and antenna gain
//!
//! A circular aperture of diameter `D` at wavelength `λ` diffracts into a
//! beam of full divergence angle `2.44·λ/D` (the first-null width of the
//! Airy pattern) and concentrates power by `η·(π·D/λ)²` relative to an
//! isotropic radiator. The same gain expression serves both the transmit
//! and receive telescopes.
//!
//! ## Example
//!
//! ```rust
//! use fsolink_core::optical_geometry::{antenna_gain, beam_divergence, GainModel};
//!
//! // 15 cm telescope at 1550 nm
//! let theta = beam_divergence(1.55e-6, 0.15).unwrap();
//! assert!((theta - 2.52e-5).abs() < 1e-7);
//!
//! let gain = antenna_gain(0.5, 1.55e-6, 0.15, GainModel::WithEfficiency).unwrap();
//! assert!((gain.gain_db - 106.6).abs() < 0.1);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{FsoError, FsoResult};
use crate::units::linear_to_db;

/// Which antenna gain expression to apply.
///
/// Both forms circulate in link budget literature; the efficiency-weighted
/// form is the default here, the bare aperture form is kept as an explicit
/// option rather than a silent substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GainModel {
    /// `gain_abs = η·(π·D/λ)²` (default).
    WithEfficiency,
    /// `gain_abs = (π·D/λ)²`, efficiency left out of the gain term.
    ApertureOnly,
}

impl Default for GainModel {
    fn default() -> Self {
        GainModel::WithEfficiency
    }
}

/// Antenna gain in both scales.
///
/// The absolute (linear) value feeds the pointing loss model; the dB value
/// enters the budget sum directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AntennaGain {
    /// Gain in dB.
    pub gain_db: f64,
    /// Absolute (linear) gain.
    pub gain_abs: f64,
}

/// Full beam divergence angle in radians: `2.44·λ/D`.
pub fn beam_divergence(wavelength_m: f64, diameter_m: f64) -> FsoResult<f64> {
    if !(diameter_m > 0.0) {
        return Err(FsoError::InvalidGeometry {
            name: "Diameter",
            value: diameter_m,
        });
    }
    Ok(2.44 * wavelength_m / diameter_m)
}

/// Antenna gain of a circular aperture.
///
/// Efficiency is range-checked in both modes so a budget computed with
/// [`GainModel::ApertureOnly`] still rejects a nonsense efficiency.
pub fn antenna_gain(
    efficiency: f64,
    wavelength_m: f64,
    diameter_m: f64,
    model: GainModel,
) -> FsoResult<AntennaGain> {
    if !(efficiency > 0.0 && efficiency <= 1.0) {
        return Err(FsoError::InvalidEfficiency { value: efficiency });
    }
    if !(diameter_m > 0.0) {
        return Err(FsoError::InvalidGeometry {
            name: "Diameter",
            value: diameter_m,
        });
    }
    if !(wavelength_m > 0.0) {
        return Err(FsoError::InvalidGeometry {
            name: "Wavelength",
            value: wavelength_m,
        });
    }

    let aperture = (PI * diameter_m / wavelength_m).powi(2);
    let gain_abs = match model {
        GainModel::WithEfficiency => efficiency * aperture,
        GainModel::ApertureOnly => aperture,
    };
    let gain_db = linear_to_db(gain_abs)?;
    Ok(AntennaGain { gain_db, gain_abs })
}
