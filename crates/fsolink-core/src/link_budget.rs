//! End-to-end link budget aggregation
//!
//! Folds the component models into one budget: beam divergence and antenna
//! gain per side, free-space path loss, per-side pointing losses (fixed dB
//! or derived from a boresight error angle), received power with and
//! without the receiver LNA, and link margin against an optional
//! sensitivity threshold. Validation runs first; no formula executes on
//! unchecked input.
//!
//! ## Example
//!
//! ```rust
//! use fsolink_core::link_budget::LinkBudget;
//! use fsolink_core::params::InputParameters;
//!
//! # fn main() -> Result<(), fsolink_core::FsoError> {
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
//! let result = LinkBudget::new(params).compute()?;
//! assert_eq!(result.link_margin.link_viable, Some(true));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FsoResult;
use crate::optical_geometry::{antenna_gain, beam_divergence};
use crate::params::InputParameters;
use crate::path_loss::free_space_path_loss_db;
use crate::pointing_loss::{effective_pointing_loss_db, POINTING_LOSS_CAP_DB};
use crate::units::{dbm_to_mw, dbm_to_w};
use crate::validation;

// ---------------------------------------------------------------------------
// Result blocks
// ---------------------------------------------------------------------------

/// Echo of the inputs with derived conveniences for display layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputEcho {
    pub tx_power_dbm: f64,
    pub tx_power_mw: f64,
    pub tx_efficiency_percent: f64,
    pub rx_efficiency_percent: f64,
    pub wavelength_nm: f64,
    pub wavelength_m: f64,
    pub tx_diameter_m: f64,
    pub rx_diameter_m: f64,
    pub distance_m: f64,
    pub distance_km: f64,
    pub rx_sensitivity_dbm: Option<f64>,
    pub rx_lna_gain_db: f64,
}

/// Antenna gains per side, dB and absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntennaGains {
    pub tx_gain_db: f64,
    pub tx_gain_abs: f64,
    pub rx_gain_db: f64,
    pub rx_gain_abs: f64,
}

/// Beam divergence per side in radians, degrees, and milliradians.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamDivergence {
    pub tx_theta_rad: f64,
    pub tx_theta_deg: f64,
    pub tx_theta_mrad: f64,
    pub rx_theta_rad: f64,
    pub rx_theta_deg: f64,
    pub rx_theta_mrad: f64,
}

/// Every loss term entering the budget, plus their sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossBreakdown {
    pub path_loss_db: f64,
    pub implementation_loss_db: f64,
    pub coupling_loss_db: f64,
    pub tx_pointing_loss_db: f64,
    pub rx_pointing_loss_db: f64,
    pub total_loss_db: f64,
}

/// A power level in dBm with its derived mW and W renderings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerLevels {
    pub power_dbm: f64,
    pub power_mw: f64,
    pub power_w: f64,
}

impl PowerLevels {
    /// Derive the mW and W values from the dBm figure.
    pub fn from_dbm(power_dbm: f64) -> Self {
        Self {
            power_dbm,
            power_mw: dbm_to_mw(power_dbm),
            power_w: dbm_to_w(power_dbm),
        }
    }
}

/// Link margin against the receiver sensitivity, when one was supplied.
///
/// `margin_db` and `link_viable` are populated if and only if
/// `rx_sensitivity_dbm` was present in the input; `margin_available`
/// mirrors that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkMargin {
    pub margin_db: Option<f64>,
    pub margin_available: bool,
    pub link_viable: Option<bool>,
}

/// Complete link budget result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkBudgetResult {
    pub inputs: InputEcho,
    pub antenna_gains: AntennaGains,
    pub beam_divergence: BeamDivergence,
    pub losses: LossBreakdown,
    /// Received power before the LNA.
    pub received_power: PowerLevels,
    /// Received power after the LNA gain is applied.
    pub received_power_with_lna: PowerLevels,
    pub link_margin: LinkMargin,
}

// ---------------------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------------------

/// Link budget calculator over one parameter set.
#[derive(Debug, Clone)]
pub struct LinkBudget {
    params: InputParameters,
}

impl LinkBudget {
    pub fn new(params: InputParameters) -> Self {
        Self { params }
    }

    /// The parameter set this budget was built from.
    pub fn params(&self) -> &InputParameters {
        &self.params
    }

    /// Compute the full budget.
    ///
    /// Validation failures come back as [`crate::FsoError::Validation`].
    /// The formula-level errors cannot fire after validation passes; they
    /// still propagate rather than panic.
    pub fn compute(&self) -> FsoResult<LinkBudgetResult> {
        let p = validation::validate(&self.params)?;

        let tx_theta = beam_divergence(p.wavelength_m, p.tx_diameter_m)?;
        let rx_theta = beam_divergence(p.wavelength_m, p.rx_diameter_m)?;

        let tx_gain = antenna_gain(p.tx_efficiency, p.wavelength_m, p.tx_diameter_m, p.gain_model)?;
        let rx_gain = antenna_gain(p.rx_efficiency, p.wavelength_m, p.rx_diameter_m, p.gain_model)?;

        // Per side: a supplied error angle overrides the fixed dB term.
        let tx_pointing_loss_db = effective_pointing_loss_db(
            tx_gain.gain_abs,
            p.tx_pointing_error_rad,
            p.tx_pointing_loss_db,
        );
        let rx_pointing_loss_db = effective_pointing_loss_db(
            rx_gain.gain_abs,
            p.rx_pointing_error_rad,
            p.rx_pointing_loss_db,
        );
        if tx_pointing_loss_db >= POINTING_LOSS_CAP_DB || rx_pointing_loss_db >= POINTING_LOSS_CAP_DB
        {
            tracing::warn!(
                "pointing loss capped at {} dB (tx {:.1} dB, rx {:.1} dB)",
                POINTING_LOSS_CAP_DB,
                tx_pointing_loss_db,
                rx_pointing_loss_db
            );
        }

        let path_loss_db = free_space_path_loss_db(p.distance_m, p.wavelength_m)?;

        let total_loss_db = path_loss_db
            + p.implementation_loss_db
            + p.coupling_loss_db
            + tx_pointing_loss_db
            + rx_pointing_loss_db;

        let received_power_dbm = p.tx_power_dbm + tx_gain.gain_db + rx_gain.gain_db - total_loss_db;
        let received_power_with_lna_dbm = received_power_dbm + p.rx_lna_gain_db;

        let (margin_db, link_viable) = match p.rx_sensitivity_dbm {
            Some(sensitivity) => {
                let margin = received_power_with_lna_dbm - sensitivity;
                (Some(margin), Some(margin > 0.0))
            }
            None => (None, None),
        };

        tracing::debug!(
            "link budget: rx {:.2} dBm, with LNA {:.2} dBm, total loss {:.2} dB",
            received_power_dbm,
            received_power_with_lna_dbm,
            total_loss_db
        );

        Ok(LinkBudgetResult {
            inputs: InputEcho {
                tx_power_dbm: p.tx_power_dbm,
                tx_power_mw: dbm_to_mw(p.tx_power_dbm),
                tx_efficiency_percent: p.tx_efficiency * 100.0,
                rx_efficiency_percent: p.rx_efficiency * 100.0,
                wavelength_nm: p.wavelength_m * 1e9,
                wavelength_m: p.wavelength_m,
                tx_diameter_m: p.tx_diameter_m,
                rx_diameter_m: p.rx_diameter_m,
                distance_m: p.distance_m,
                distance_km: p.distance_m / 1000.0,
                rx_sensitivity_dbm: p.rx_sensitivity_dbm,
                rx_lna_gain_db: p.rx_lna_gain_db,
            },
            antenna_gains: AntennaGains {
                tx_gain_db: tx_gain.gain_db,
                tx_gain_abs: tx_gain.gain_abs,
                rx_gain_db: rx_gain.gain_db,
                rx_gain_abs: rx_gain.gain_abs,
            },
            beam_divergence: BeamDivergence {
                tx_theta_rad: tx_theta,
                tx_theta_deg: tx_theta.to_degrees(),
                tx_theta_mrad: tx_theta * 1000.0,
                rx_theta_rad: rx_theta,
                rx_theta_deg: rx_theta.to_degrees(),
                rx_theta_mrad: rx_theta * 1000.0,
            },
            losses: LossBreakdown {
                path_loss_db,
                implementation_loss_db: p.implementation_loss_db,
                coupling_loss_db: p.coupling_loss_db,
                tx_pointing_loss_db,
                rx_pointing_loss_db,
                total_loss_db,
            },
            received_power: PowerLevels::from_dbm(received_power_dbm),
            received_power_with_lna: PowerLevels::from_dbm(received_power_with_lna_dbm),
            link_margin: LinkMargin {
                margin_db,
                margin_available: margin_db.is_some(),
                link_viable,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FsoError;
    use crate::optical_geometry::GainModel;

    const EPSILON: f64 = 0.1; // dB tolerance for the reference scenario figures
    const EPSILON_FINE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    /// 34 dBm, 15 cm apertures at 50% efficiency, 1550 nm, 40,000 km,
    /// 1 + 4 + 1.5 + 1.5 dB fixed losses, 20 dB LNA, -60 dBm sensitivity.
    fn geo_crosslink_params() -> InputParameters {
        InputParameters::new()
            .tx_power_dbm(34.0)
            .tx_efficiency(0.5)
            .rx_efficiency(0.5)
            .wavelength_m(1.55e-6)
            .tx_diameter_m(0.15)
            .rx_diameter_m(0.15)
            .distance_m(4.0e7)
            .implementation_loss_db(1.0)
            .coupling_loss_db(4.0)
            .tx_pointing_loss_db(1.5)
            .rx_pointing_loss_db(1.5)
            .rx_lna_gain_db(20.0)
            .rx_sensitivity_dbm(-60.0)
    }

    #[test]
    fn test_geo_crosslink_scenario() {
        let result = LinkBudget::new(geo_crosslink_params()).compute().unwrap();

        // Hand-computed: gain 106.65 dB/side, FSPL 290.22, total 298.22,
        // rx -50.92 dBm, with LNA -30.92 dBm, margin +29.08 dB.
        assert!(
            approx_eq(result.antenna_gains.tx_gain_db, 106.6, EPSILON),
            "tx_gain_db = {:.2}",
            result.antenna_gains.tx_gain_db
        );
        assert!(
            approx_eq(result.antenna_gains.rx_gain_db, 106.6, EPSILON),
            "rx_gain_db = {:.2}",
            result.antenna_gains.rx_gain_db
        );
        assert!(
            approx_eq(result.losses.path_loss_db, 290.2, EPSILON),
            "path_loss_db = {:.2}",
            result.losses.path_loss_db
        );
        assert!(
            approx_eq(result.losses.total_loss_db, 298.2, EPSILON),
            "total_loss_db = {:.2}",
            result.losses.total_loss_db
        );
        assert!(
            approx_eq(result.received_power.power_dbm, -50.9, EPSILON),
            "received_power_dbm = {:.2}",
            result.received_power.power_dbm
        );
        assert!(
            approx_eq(result.received_power_with_lna.power_dbm, -30.9, EPSILON),
            "with_lna_dbm = {:.2}",
            result.received_power_with_lna.power_dbm
        );
        let margin_db = result.link_margin.margin_db.unwrap();
        assert!(
            approx_eq(margin_db, 29.1, EPSILON),
            "margin_db = {margin_db:.2}"
        );
        assert_eq!(result.link_margin.link_viable, Some(true));
        assert!(result.link_margin.margin_available);
    }

    #[test]
    fn test_lna_additivity_is_exact() {
        let result = LinkBudget::new(geo_crosslink_params()).compute().unwrap();
        assert_eq!(
            result.received_power_with_lna.power_dbm,
            result.received_power.power_dbm + 20.0
        );
    }

    #[test]
    fn test_zero_lna_collapses_the_two_powers() {
        let result = LinkBudget::new(geo_crosslink_params().rx_lna_gain_db(0.0))
            .compute()
            .unwrap();
        assert_eq!(
            result.received_power.power_dbm,
            result.received_power_with_lna.power_dbm
        );
    }

    #[test]
    fn test_margin_absent_without_sensitivity() {
        let mut params = geo_crosslink_params();
        params.rx_sensitivity_dbm = None;
        let result = LinkBudget::new(params).compute().unwrap();
        assert!(result.link_margin.margin_db.is_none());
        assert!(result.link_margin.link_viable.is_none());
        assert!(!result.link_margin.margin_available);
    }

    #[test]
    fn test_margin_sign_tracks_viability() {
        // Sensitivity just above the amplified power: not viable.
        let result = LinkBudget::new(geo_crosslink_params().rx_sensitivity_dbm(-20.0))
            .compute()
            .unwrap();
        let margin_db = result.link_margin.margin_db.unwrap();
        assert!(margin_db < 0.0, "margin_db = {margin_db:.2}");
        assert_eq!(result.link_margin.link_viable, Some(false));
    }

    #[test]
    fn test_margin_uses_amplified_power() {
        let result = LinkBudget::new(geo_crosslink_params()).compute().unwrap();
        let margin_db = result.link_margin.margin_db.unwrap();
        assert_eq!(
            margin_db,
            result.received_power_with_lna.power_dbm - (-60.0)
        );
    }

    #[test]
    fn test_power_renderings_are_derived_from_dbm() {
        let result = LinkBudget::new(geo_crosslink_params()).compute().unwrap();
        let p = &result.received_power;
        assert!(approx_eq(p.power_mw, dbm_to_mw(p.power_dbm), EPSILON_FINE));
        assert_eq!(p.power_w, p.power_mw / 1000.0);
    }

    #[test]
    fn test_pointing_angle_overrides_fixed_loss() {
        // TX side switches to the model, RX keeps the fixed 1.5 dB.
        let params = geo_crosslink_params().tx_pointing_error_rad(2.0e-6);
        let result = LinkBudget::new(params).compute().unwrap();

        // |10 log10(exp(-G theta^2))| = 10 G theta^2 log10(e)
        let expected_tx =
            10.0 * result.antenna_gains.tx_gain_abs * 4.0e-12 * std::f64::consts::LOG10_E;
        assert!(
            approx_eq(result.losses.tx_pointing_loss_db, expected_tx, 1e-9),
            "tx pointing = {:.4}, expected {expected_tx:.4}",
            result.losses.tx_pointing_loss_db
        );
        assert_eq!(result.losses.rx_pointing_loss_db, 1.5);
    }

    #[test]
    fn test_zero_angle_falls_back_to_fixed_loss() {
        let params = geo_crosslink_params().tx_pointing_error_rad(0.0);
        let result = LinkBudget::new(params).compute().unwrap();
        assert_eq!(result.losses.tx_pointing_loss_db, 1.5);
    }

    #[test]
    fn test_capped_pointing_loss_flows_into_totals() {
        // A 1 rad error against a 1e10-class gain lands in the capped region.
        let params = geo_crosslink_params().tx_pointing_error_rad(1.0);
        let result = LinkBudget::new(params).compute().unwrap();
        assert_eq!(result.losses.tx_pointing_loss_db, POINTING_LOSS_CAP_DB);
        assert!(result.losses.total_loss_db > POINTING_LOSS_CAP_DB);
        assert_eq!(result.link_margin.link_viable, Some(false));
    }

    #[test]
    fn test_total_loss_is_the_sum_of_terms() {
        let result = LinkBudget::new(geo_crosslink_params()).compute().unwrap();
        let l = &result.losses;
        let sum = l.path_loss_db
            + l.implementation_loss_db
            + l.coupling_loss_db
            + l.tx_pointing_loss_db
            + l.rx_pointing_loss_db;
        assert_eq!(l.total_loss_db, sum);
    }

    #[test]
    fn test_aperture_only_model_raises_both_gains() {
        let with = LinkBudget::new(geo_crosslink_params()).compute().unwrap();
        let bare = LinkBudget::new(geo_crosslink_params().gain_model(GainModel::ApertureOnly))
            .compute()
            .unwrap();
        // Dropping the 0.5 efficiency factor adds 3.01 dB per side.
        let delta = bare.antenna_gains.tx_gain_db - with.antenna_gains.tx_gain_db;
        assert!(approx_eq(delta, 3.0103, 1e-3), "delta = {delta:.4}");
        assert!(
            bare.received_power.power_dbm > with.received_power.power_dbm
        );
    }

    #[test]
    fn test_input_echo_is_consistent() {
        let result = LinkBudget::new(geo_crosslink_params()).compute().unwrap();
        let echo = &result.inputs;
        assert_eq!(echo.tx_power_dbm, 34.0);
        assert!(approx_eq(echo.tx_power_mw, dbm_to_mw(34.0), EPSILON_FINE));
        assert_eq!(echo.tx_efficiency_percent, 50.0);
        assert_eq!(echo.rx_efficiency_percent, 50.0);
        assert!(approx_eq(echo.wavelength_nm, 1550.0, 1e-9));
        assert_eq!(echo.distance_km, 40_000.0);
        assert_eq!(echo.rx_sensitivity_dbm, Some(-60.0));
    }

    #[test]
    fn test_beam_divergence_block() {
        let result = LinkBudget::new(geo_crosslink_params()).compute().unwrap();
        let bd = &result.beam_divergence;
        assert!(approx_eq(bd.tx_theta_rad, 2.5213e-5, 1e-8));
        assert_eq!(bd.tx_theta_mrad, bd.tx_theta_rad * 1000.0);
        assert_eq!(bd.tx_theta_deg, bd.tx_theta_rad.to_degrees());
        // Same apertures on both sides here.
        assert_eq!(bd.rx_theta_rad, bd.tx_theta_rad);
    }

    #[test]
    fn test_validation_failure_aborts_compute() {
        let err = LinkBudget::new(InputParameters::new()).compute().unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(err, FsoError::Validation { .. }));
    }

    #[test]
    fn test_result_serializes_with_null_margin() {
        let mut params = geo_crosslink_params();
        params.rx_sensitivity_dbm = None;
        let result = LinkBudget::new(params).compute().unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["link_margin"]["margin_db"].is_null());
        assert!(json["link_margin"]["link_viable"].is_null());
        assert_eq!(json["link_margin"]["margin_available"], false);
        assert_eq!(json["losses"]["implementation_loss_db"], 1.0);

        // and the whole result round-trips
        let back: LinkBudgetResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.received_power.power_dbm, result.received_power.power_dbm);
    }
}
