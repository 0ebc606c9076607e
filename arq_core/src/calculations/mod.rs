//! # Calculators
//!
//! This module contains all ArqCalc calculators. Each estimator follows
//! the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Estimate` - Calculation results (JSON-serializable)
//! - `calculate(&input) -> *Estimate` - Pure calculation function
//!
//! Unlike most engineering tooling these functions are infallible:
//! ArqCalc is a best-effort interactive estimator, so nonsensical input
//! flows through the arithmetic (possibly producing negative or zero
//! outputs) and unknown catalog keys yield zeroed results. The display
//! layer's formatting contract absorbs `NaN`/infinite intermediates.
//!
//! ## Available Calculators
//!
//! - [`geometry`] - Area and perimeter for rectangle, triangle, circle
//! - [`bricks`] - Bricks/blocks and mortar for a wall with openings
//! - [`paint`] - Paint volume and can breakdown
//! - [`tiles`] - Tile and box counts for a floor

pub mod bricks;
pub mod geometry;
pub mod paint;
pub mod tiles;

// Re-export commonly used types
pub use bricks::{BrickEstimate, BrickInput};
pub use geometry::{GeometryResult, ShapeSpec};
pub use paint::{PaintEstimate, PaintInput};
pub use tiles::{TileEstimate, TileInput};
