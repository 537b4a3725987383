//! cb-core: stable foundation for combust.
//!
//! Contains:
//! - units (uom SI types, constructors and the physical constants the engine uses)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
