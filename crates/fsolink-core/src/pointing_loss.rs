//! Pointing (boresight error) loss model
//!
//! Misalignment between the transmit and receive boresights attenuates the
//! received signal by `exp(-G·θ²)` in linear terms, where `G` is the
//! absolute antenna gain and `θ` the error angle in radians. High-gain
//! optical apertures drive this factor to zero fast: around an exponent of
//! -700 the `exp` underflows to exactly 0.0 and the dB conversion would hit
//! a logarithm of zero. That region is reported as a capped
//! [`POINTING_LOSS_CAP_DB`] instead of a domain error.
//!
//! ## Example
//!
//! ```rust
//! use fsolink_core::pointing_loss::pointing_loss_db;
//!
//! // G = 1e9, theta = 10 urad: exponent -0.1, loss ~0.43 dB
//! let loss = pointing_loss_db(1.0e9, 1.0e-5);
//! assert!((loss - 0.4343).abs() < 1e-3);
//!
//! // zero error angle is zero loss
//! assert_eq!(pointing_loss_db(1.0e9, 0.0), 0.0);
//! ```

/// Exponent below which `exp` underflows to exactly zero in f64.
pub const EXP_UNDERFLOW_EXPONENT: f64 = -700.0;

/// Loss reported when the attenuation underflows past representation.
pub const POINTING_LOSS_CAP_DB: f64 = 1000.0;

/// Pointing loss in dB for an absolute gain and an error angle in radians.
///
/// Non-positive angles (and NaN) mean no model-derived loss and return 0.
/// Never fails: the underflow region returns the cap.
pub fn pointing_loss_db(gain_abs: f64, error_rad: f64) -> f64 {
    if !(error_rad > 0.0) {
        return 0.0;
    }

    let exponent = -gain_abs * error_rad * error_rad;
    if exponent < EXP_UNDERFLOW_EXPONENT {
        return POINTING_LOSS_CAP_DB;
    }

    let loss_linear = exponent.exp();
    if loss_linear <= 0.0 {
        return POINTING_LOSS_CAP_DB;
    }

    (10.0 * loss_linear.log10()).abs()
}

/// Resolve the pointing loss for one side of the link.
///
/// A supplied error angle overrides the fixed dB value for that side;
/// absent, zero, or non-positive angles fall back to `fixed_db`.
pub fn effective_pointing_loss_db(gain_abs: f64, error_rad: Option<f64>, fixed_db: f64) -> f64 {
    match error_rad {
        Some(theta) if theta > 0.0 => pointing_loss_db(gain_abs, theta),
        _ => fixed_db,
    }
}
