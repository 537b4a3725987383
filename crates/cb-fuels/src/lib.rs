//! cb-fuels: fuel reference data for combust.
//!
//! Provides:
//! - Fuel records (phase, molar mass, elemental formula, ash/moisture, LHV/HHV)
//! - Mixtures by weight percentage, with mole-fraction reconciliation
//! - A fuel catalog: builtin reference fuels, JSON data files, custom fuels
//!
//! # Example
//!
//! ```
//! use cb_fuels::{FuelCatalog, Mixture, PERCENTAGE_TOLERANCE};
//!
//! let catalog = FuelCatalog::builtin();
//! let mixture = Mixture::default()
//!     .with(catalog.require("methane").unwrap().clone(), 90.0)
//!     .with(catalog.require("ethane").unwrap().clone(), 10.0);
//!
//! mixture.validate(PERCENTAGE_TOLERANCE).unwrap();
//! let x = mixture.mole_fractions().unwrap();
//! assert!(x[0] > 0.9);
//! ```

pub mod catalog;
pub mod error;
pub mod fuel;
pub mod mixture;

// Re-exports for ergonomics
pub use catalog::{CustomFuelSpec, FuelCatalog};
pub use error::{FuelError, FuelResult};
pub use fuel::{Elements, Fuel, FuelPhase, slugify, subscript_symbol};
pub use mixture::{FlowMode, Mixture, MixtureComponent, PERCENTAGE_TOLERANCE};
