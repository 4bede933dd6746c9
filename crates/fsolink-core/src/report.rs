//! Flat report projection for display layers
//!
//! [`crate::link_budget::LinkBudgetResult`] is nested by concern. Frontends
//! and table renderers want one flat key/value record per run; [`flatten`]
//! produces that record. The projection is lossless for every figure a
//! display needs, only the echoed `wavelength_m` and the milliradian
//! divergence renderings are left to the nested form.

use serde::{Deserialize, Serialize};

use crate::link_budget::LinkBudgetResult;
use crate::units::dbm_to_mw;

/// One flat record of a computed link budget.
///
/// Optional fields stay `None` (JSON `null`) when no receiver sensitivity
/// was supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatReport {
    // Input echo
    pub tx_power_dbm: f64,
    pub tx_power_mw: f64,
    pub rx_sensitivity_dbm: Option<f64>,
    pub rx_sensitivity_mw: Option<f64>,
    pub rx_lna_gain_db: f64,
    pub distance_m: f64,
    pub distance_km: f64,
    pub wavelength_nm: f64,
    pub tx_efficiency_percent: f64,
    pub rx_efficiency_percent: f64,

    // Antenna gains
    pub tx_gain_db: f64,
    pub tx_gain_absolute: f64,
    pub rx_gain_db: f64,
    pub rx_gain_absolute: f64,

    // Beam divergence
    pub tx_beam_divergence_rad: f64,
    pub tx_beam_divergence_deg: f64,
    pub rx_beam_divergence_rad: f64,
    pub rx_beam_divergence_deg: f64,

    // Losses
    pub path_loss_db: f64,
    pub impl_loss_db: f64,
    pub coupling_loss_db: f64,
    pub tx_pointing_loss_db: f64,
    pub rx_pointing_loss_db: f64,
    pub total_loss_db: f64,

    // Received power, before the LNA
    pub received_power_dbm: f64,
    pub received_power_mw: f64,
    pub received_power_w: f64,

    // Received power, after the LNA
    pub received_power_lna_dbm: f64,
    pub received_power_lna_mw: f64,
    pub received_power_lna_w: f64,

    // Margin
    pub link_margin_db: Option<f64>,
    pub link_viable: Option<bool>,
}

/// Project a nested result into the flat record.
pub fn flatten(result: &LinkBudgetResult) -> FlatReport {
    let inputs = &result.inputs;
    let gains = &result.antenna_gains;
    let divergence = &result.beam_divergence;
    let losses = &result.losses;
    let rx = &result.received_power;
    let rx_lna = &result.received_power_with_lna;
    let margin = &result.link_margin;

    FlatReport {
        tx_power_dbm: inputs.tx_power_dbm,
        tx_power_mw: inputs.tx_power_mw,
        rx_sensitivity_dbm: inputs.rx_sensitivity_dbm,
        rx_sensitivity_mw: inputs.rx_sensitivity_dbm.map(dbm_to_mw),
        rx_lna_gain_db: inputs.rx_lna_gain_db,
        distance_m: inputs.distance_m,
        distance_km: inputs.distance_km,
        wavelength_nm: inputs.wavelength_nm,
        tx_efficiency_percent: inputs.tx_efficiency_percent,
        rx_efficiency_percent: inputs.rx_efficiency_percent,

        tx_gain_db: gains.tx_gain_db,
        tx_gain_absolute: gains.tx_gain_abs,
        rx_gain_db: gains.rx_gain_db,
        rx_gain_absolute: gains.rx_gain_abs,

        tx_beam_divergence_rad: divergence.tx_theta_rad,
        tx_beam_divergence_deg: divergence.tx_theta_deg,
        rx_beam_divergence_rad: divergence.rx_theta_rad,
        rx_beam_divergence_deg: divergence.rx_theta_deg,

        path_loss_db: losses.path_loss_db,
        impl_loss_db: losses.implementation_loss_db,
        coupling_loss_db: losses.coupling_loss_db,
        tx_pointing_loss_db: losses.tx_pointing_loss_db,
        rx_pointing_loss_db: losses.rx_pointing_loss_db,
        total_loss_db: losses.total_loss_db,

        received_power_dbm: rx.power_dbm,
        received_power_mw: rx.power_mw,
        received_power_w: rx.power_w,

        received_power_lna_dbm: rx_lna.power_dbm,
        received_power_lna_mw: rx_lna.power_mw,
        received_power_lna_w: rx_lna.power_w,

        link_margin_db: margin.margin_db,
        link_viable: margin.link_viable,
    }
}
