//! # Free-Space Optical Link Budget Engine
//!
//! This crate computes link budgets for free-space optical (FSO)
//! communication links such as inter-satellite laser crosslinks and
//! ground-to-space optical uplinks.
//!
//! ## Overview
//!
//! An FSO link budget answers one question: given a transmitter, a
//! receiver, and the geometry between them, how much optical power
//! arrives, and is it enough? This library implements the full chain:
//!
//! - **Optical Geometry**: diffraction-limited antenna gain and beam
//!   divergence from aperture diameter and wavelength
//! - **Path Loss**: free-space spreading loss over the link distance
//! - **Pointing Loss**: fixed allocations or a Gaussian misalignment
//!   model driven by a boresight error angle
//! - **Validation**: presence and range checking with accumulated,
//!   human-readable messages
//! - **Aggregation**: received power with and without the receiver LNA,
//!   and link margin against a sensitivity threshold
//! - **Reporting**: a flat key/value projection for display layers
//!
//! ## Budget Flow
//!
//! ```text
//! Inputs → Validate → Gains + Divergence → Path + Fixed + Pointing Losses
//!        → Received Power → LNA → Margin vs. Sensitivity → Flat Report
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fsolink_core::{InputParameters, LinkBudget};
//!
//! # fn main() -> Result<(), fsolink_core::FsoError> {
//! // A 40,000 km crosslink with 15 cm apertures at 1550 nm
//! let params = InputParameters::new()
//!     .tx_power_dbm(34.0)
//!     .tx_efficiency(0.5)
//!     .rx_efficiency(0.5)
//!     .wavelength_m(1.55e-6)
//!     .tx_diameter_m(0.15)
//!     .rx_diameter_m(0.15)
//!     .distance_m(4.0e7)
//!     .implementation_loss_db(1.0)
//!     .coupling_loss_db(4.0)
//!     .tx_pointing_loss_db(1.5)
//!     .rx_pointing_loss_db(1.5)
//!     .rx_lna_gain_db(20.0)
//!     .rx_sensitivity_dbm(-60.0);
//!
//! let result = LinkBudget::new(params).compute()?;
//!
//! assert_eq!(result.link_margin.link_viable, Some(true));
//! println!(
//!     "received {:.2} dBm, margin {:.2} dB",
//!     result.received_power_with_lna.power_dbm,
//!     result.link_margin.margin_db.unwrap()
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod link_budget;
pub mod observe;
pub mod optical_geometry;
pub mod params;
pub mod path_loss;
pub mod pointing_loss;
pub mod report;
pub mod units;
pub mod validation;

// Re-export main types
pub use error::{FsoError, FsoResult};
pub use link_budget::{
    AntennaGains, BeamDivergence, InputEcho, LinkBudget, LinkBudgetResult, LinkMargin,
    LossBreakdown, PowerLevels,
};
pub use optical_geometry::{antenna_gain, beam_divergence, AntennaGain, GainModel};
pub use params::InputParameters;
pub use path_loss::free_space_path_loss_db;
pub use pointing_loss::{effective_pointing_loss_db, pointing_loss_db, POINTING_LOSS_CAP_DB};
pub use report::{flatten, FlatReport};
pub use units::{convert_power, PowerUnit};
pub use validation::{validate, ValidatedParameters};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{FsoError, FsoResult};
    pub use crate::link_budget::{LinkBudget, LinkBudgetResult};
    pub use crate::optical_geometry::GainModel;
    pub use crate::params::InputParameters;
    pub use crate::report::{flatten, FlatReport};
}
