//! Free-space path loss
//!
//! Geometric spreading loss over the link distance,
//! `FSPL = 20·log10(4π·d/λ)`. Strictly increasing in distance and strictly
//! decreasing in wavelength.
//!
//! ## Example
//!
//! ```rust
//! use fsolink_core::path_loss::free_space_path_loss_db;
//!
//! // 40,000 km inter-satellite hop at 1550 nm
//! let fspl = free_space_path_loss_db(4.0e7, 1.55e-6).unwrap();
//! assert!((fspl - 290.2).abs() < 0.1);
//! ```

use std::f64::consts::PI;

use crate::error::{FsoError, FsoResult};

/// Free-space path loss in dB (positive value).
pub fn free_space_path_loss_db(distance_m: f64, wavelength_m: f64) -> FsoResult<f64> {
    if !(distance_m > 0.0) {
        return Err(FsoError::InvalidGeometry {
            name: "Distance",
            value: distance_m,
        });
    }
    if !(wavelength_m > 0.0) {
        return Err(FsoError::InvalidGeometry {
            name: "Wavelength",
            value: wavelength_m,
        });
    }
    Ok(20.0 * (4.0 * PI * distance_m / wavelength_m).log10())
}
