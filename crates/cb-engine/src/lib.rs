//! cb-engine: combustion calculations for combust.
//!
//! Provides:
//! - Process conditions and overridable engine constants
//! - The combustion balance: stoichiometric air, speciation, flame
//!   temperature, wet/dry flue-gas composition
//! - NOx/SOx/CO estimates with normalization and O2 correction
//! - An optional fuel-cost sweep from analyser readings
//!
//! # Architecture
//!
//! `compute` is a pure function of its inputs. Every input is validated
//! before any arithmetic, and a call yields either a complete
//! [`CombustionResult`] or an [`EngineError`], never a partial result.
//!
//! # Example
//!
//! ```
//! use cb_engine::{ProcessConditions, compute};
//! use cb_fuels::{FuelCatalog, Mixture};
//!
//! let methane = FuelCatalog::builtin().require("methane").unwrap().clone();
//! let result = compute(&Mixture::pure(methane), &ProcessConditions::default()).unwrap();
//!
//! assert_eq!(result.combustion_efficiency, 100.0);
//! assert!((result.wet_basis.sum() - 100.0).abs() < 1e-9);
//! ```

pub mod air;
pub mod conditions;
pub mod config;
pub mod cost;
pub mod emissions;
pub mod engine;
pub mod error;
pub mod result;
pub mod sweep;

// Re-exports for ergonomics
pub use air::AirComposition;
pub use conditions::{CombustionReading, CostAnalysisInput, ProcessConditions};
pub use config::{EngineConfig, NoxCorrelation, PhasePolicy};
pub use cost::estimated_excess_air_percent;
pub use engine::{CombustionEngine, compute, compute_with_config};
pub use error::{EngineError, EngineResult};
pub use result::{
    CombustionResult, CostAnalysisResult, CostPoint, Emissions, ProductFlows, VolumePercentages,
};
pub use sweep::FlowSweep;
