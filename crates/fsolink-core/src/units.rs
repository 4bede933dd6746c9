//! Power unit conversions (dBm, mW, W, linear/dB)
//!
//! The canonical conversions used throughout the budget pipeline. The
//! logarithmic directions reject non-positive arguments instead of
//! producing `-inf`; validation upstream makes those rejections
//! unreachable in the normal computation path.
//!
//! ## Example
//!
//! ```rust
//! use fsolink_core::units::{dbm_to_mw, mw_to_dbm, w_to_dbm};
//!
//! // 0 dBm is 1 mW
//! assert!((dbm_to_mw(0.0) - 1.0).abs() < 1e-12);
//! // 100 mW is 20 dBm
//! assert!((mw_to_dbm(100.0).unwrap() - 20.0).abs() < 1e-12);
//! // 1 W is 30 dBm
//! assert!((w_to_dbm(1.0).unwrap() - 30.0).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FsoError, FsoResult};

/// Convert dBm to milliwatts: `10^(dbm/10)`.
#[inline]
pub fn dbm_to_mw(dbm: f64) -> f64 {
    10.0f64.powf(dbm / 10.0)
}

/// Convert milliwatts to dBm: `10*log10(mw)`.
///
/// Fails when `mw` is not strictly positive (NaN included).
pub fn mw_to_dbm(mw: f64) -> FsoResult<f64> {
    if !(mw > 0.0) {
        return Err(FsoError::NonPositiveValue {
            name: "Power",
            value: mw,
        });
    }
    Ok(10.0 * mw.log10())
}

/// Convert watts to dBm.
pub fn w_to_dbm(watts: f64) -> FsoResult<f64> {
    mw_to_dbm(watts * 1000.0)
}

/// Convert dBm to watts.
#[inline]
pub fn dbm_to_w(dbm: f64) -> f64 {
    dbm_to_mw(dbm) / 1000.0
}

/// Convert a linear power ratio to dB: `10*log10(x)`.
///
/// Fails when `x` is not strictly positive (NaN included).
pub fn linear_to_db(linear: f64) -> FsoResult<f64> {
    if !(linear > 0.0) {
        return Err(FsoError::NonPositiveValue {
            name: "Linear value",
            value: linear,
        });
    }
    Ok(10.0 * linear.log10())
}

/// Convert dB back to a linear power ratio: `10^(db/10)`.
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10.0f64.powf(db / 10.0)
}

/// Power unit accepted by [`convert_power`].
///
/// Wire spellings are `"dbm"`, `"mw"`, and `"w"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    /// Decibels relative to 1 milliwatt.
    #[serde(rename = "dbm")]
    Dbm,
    /// Milliwatts.
    #[serde(rename = "mw")]
    MilliWatts,
    /// Watts.
    #[serde(rename = "w")]
    Watts,
}

impl fmt::Display for PowerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerUnit::Dbm => write!(f, "dBm"),
            PowerUnit::MilliWatts => write!(f, "mW"),
            PowerUnit::Watts => write!(f, "W"),
        }
    }
}

impl FromStr for PowerUnit {
    type Err = FsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dbm" => Ok(PowerUnit::Dbm),
            "mw" => Ok(PowerUnit::MilliWatts),
            "w" => Ok(PowerUnit::Watts),
            _ => Err(FsoError::validation(vec![format!("Unknown unit: {s}")])),
        }
    }
}

/// Convert a power value between units, routing through dBm.
///
/// Negative or zero mW/W inputs fail the same way [`mw_to_dbm`] does.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> FsoResult<f64> {
    let dbm = match from {
        PowerUnit::Dbm => value,
        PowerUnit::MilliWatts => mw_to_dbm(value)?,
        PowerUnit::Watts => w_to_dbm(value)?,
    };
    Ok(match to {
        PowerUnit::Dbm => dbm,
        PowerUnit::MilliWatts => dbm_to_mw(dbm),
        PowerUnit::Watts => dbm_to_w(dbm),
    })
}
