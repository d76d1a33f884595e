//! eq-core: stable foundation for equiphase.
//!
//! Contains:
//! - timestep (numerically ordered report index)
//! - numeric (Real + tolerances + raw value coercion)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod timestep;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EqError, EqResult};
pub use numeric::*;
pub use timestep::Timestep;
