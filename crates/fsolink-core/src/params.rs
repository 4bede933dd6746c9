//! Link budget input parameters
//!
//! [`InputParameters`] is the wire-facing parameter set: required fields are
//! `Option` so the validator can report every missing field by name instead
//! of failing on the first, and the optional dB terms carry their documented
//! defaults. Setters follow the builder style, one per field.
//!
//! ## Example
//!
//! ```rust
//! use fsolink_core::params::InputParameters;
//!
//! let params = InputParameters::new()
//!     .tx_power_dbm(34.0)
//!     .tx_efficiency(0.5)
//!     .rx_efficiency(0.5)
//!     .wavelength_m(1.55e-6)
//!     .tx_diameter_m(0.15)
//!     .rx_diameter_m(0.15)
//!     .distance_m(4.0e7)
//!     .rx_sensitivity_dbm(-60.0)
//!     .rx_lna_gain_db(20.0);
//!
//! assert_eq!(params.distance_m, Some(4.0e7));
//! assert_eq!(params.implementation_loss_db, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::optical_geometry::GainModel;

/// Input parameter set for one link budget invocation.
///
/// Deserializes from a flat JSON object; unknown keys are ignored and
/// absent optional keys take the defaults below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputParameters {
    /// Transmit power in dBm (required).
    pub tx_power_dbm: Option<f64>,
    /// Transmit optical efficiency, open interval (0, 1] (required).
    pub tx_efficiency: Option<f64>,
    /// Receive optical efficiency, open interval (0, 1] (required).
    pub rx_efficiency: Option<f64>,
    /// Optical wavelength in meters, > 0 (required).
    pub wavelength_m: Option<f64>,
    /// Transmit aperture diameter in meters, > 0 (required).
    pub tx_diameter_m: Option<f64>,
    /// Receive aperture diameter in meters, > 0 (required).
    pub rx_diameter_m: Option<f64>,
    /// Link distance in meters, > 0 (required).
    pub distance_m: Option<f64>,

    /// Receiver sensitivity threshold in dBm. Absent: no margin computed.
    #[serde(default)]
    pub rx_sensitivity_dbm: Option<f64>,
    /// Receiver front-end LNA gain in dB, >= 0. 0 means no amplifier.
    #[serde(default)]
    pub rx_lna_gain_db: f64,

    /// Fixed implementation loss in dB, >= 0.
    #[serde(default)]
    pub implementation_loss_db: f64,
    /// Fixed coupling loss in dB, >= 0.
    #[serde(default)]
    pub coupling_loss_db: f64,
    /// Fixed TX pointing loss in dB, >= 0. Overridden by
    /// `tx_pointing_error_rad` when that angle is supplied.
    #[serde(default)]
    pub tx_pointing_loss_db: f64,
    /// Fixed RX pointing loss in dB, >= 0. Overridden by
    /// `rx_pointing_error_rad` when that angle is supplied.
    #[serde(default)]
    pub rx_pointing_loss_db: f64,

    /// TX boresight pointing error in radians (optional).
    #[serde(default)]
    pub tx_pointing_error_rad: Option<f64>,
    /// RX boresight pointing error in radians (optional).
    #[serde(default)]
    pub rx_pointing_error_rad: Option<f64>,

    /// Antenna gain expression to apply.
    #[serde(default)]
    pub gain_model: GainModel,
}

impl InputParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tx_power_dbm(mut self, dbm: f64) -> Self {
        self.tx_power_dbm = Some(dbm);
        self
    }

    pub fn tx_efficiency(mut self, efficiency: f64) -> Self {
        self.tx_efficiency = Some(efficiency);
        self
    }

    pub fn rx_efficiency(mut self, efficiency: f64) -> Self {
        self.rx_efficiency = Some(efficiency);
        self
    }

    pub fn wavelength_m(mut self, wavelength: f64) -> Self {
        self.wavelength_m = Some(wavelength);
        self
    }

    pub fn tx_diameter_m(mut self, diameter: f64) -> Self {
        self.tx_diameter_m = Some(diameter);
        self
    }

    pub fn rx_diameter_m(mut self, diameter: f64) -> Self {
        self.rx_diameter_m = Some(diameter);
        self
    }

    pub fn distance_m(mut self, distance: f64) -> Self {
        self.distance_m = Some(distance);
        self
    }

    pub fn rx_sensitivity_dbm(mut self, dbm: f64) -> Self {
        self.rx_sensitivity_dbm = Some(dbm);
        self
    }

    pub fn rx_lna_gain_db(mut self, gain: f64) -> Self {
        self.rx_lna_gain_db = gain;
        self
    }

    pub fn implementation_loss_db(mut self, loss: f64) -> Self {
        self.implementation_loss_db = loss;
        self
    }

    pub fn coupling_loss_db(mut self, loss: f64) -> Self {
        self.coupling_loss_db = loss;
        self
    }

    pub fn tx_pointing_loss_db(mut self, loss: f64) -> Self {
        self.tx_pointing_loss_db = loss;
        self
    }

    pub fn rx_pointing_loss_db(mut self, loss: f64) -> Self {
        self.rx_pointing_loss_db = loss;
        self
    }

    pub fn tx_pointing_error_rad(mut self, angle: f64) -> Self {
        self.tx_pointing_error_rad = Some(angle);
        self
    }

    pub fn rx_pointing_error_rad(mut self, angle: f64) -> Self {
        self.rx_pointing_error_rad = Some(angle);
        self
    }

    pub fn gain_model(mut self, model: GainModel) -> Self {
        self.gain_model = model;
        self
    }
}
