//! # arq_core - Architecture Calculator Engine
//!
//! `arq_core` is the computational heart of ArqCalc, providing the
//! architecture-oriented calculators behind the app's login wall with a
//! clean, UI-independent API. All inputs and outputs are JSON-serializable,
//! making it easy to drive from any presentation layer (CLI, GUI, web).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Best-Effort**: Calculations never fail; degraded inputs degrade the
//!   result (unknown catalog key yields a zeroed estimate, `NaN` displays
//!   as `"0"`) rather than raising errors
//! - **Thread-Safe by Construction**: No shared mutable state anywhere in
//!   the calculation path
//!
//! ## Quick Start
//!
//! ```rust
//! use arq_core::calculations::geometry::compute_rectangle;
//! use arq_core::units::{convert_length, LengthUnit};
//!
//! let room = compute_rectangle(4.0, 3.0);
//! assert_eq!(room.area, 12.0);
//!
//! let cm = convert_length(1.0, LengthUnit::Meter, LengthUnit::Centimeter);
//! assert_eq!(cm, 100.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Geometry and material-estimation calculators
//! - [`units`] - Length/area unit tables and conversion
//! - [`materials`] - Brick and tile catalogs
//! - [`format`] - Display formatting contracts
//! - [`auth`] - Identity-provider boundary (login wall)
//! - [`errors`] - Structured error types

pub mod auth;
pub mod calculations;
pub mod errors;
pub mod format;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{ArqError, ArqResult};
pub use units::{convert, convert_area, convert_length, AreaUnit, Dimension, LengthUnit, Unit};
