//! # Brick/Block Estimator
//!
//! Estimates masonry units and mortar volume for a wall, deducting fixed
//! allowances for door and window openings.
//!
//! ## Opening Allowances
//!
//! Openings use fixed nominal sizes rather than per-opening dimensions:
//! doors count as 2.1 m × 0.8 m and windows as 1.2 m × 1.0 m. The net
//! wall area is NOT clamped at zero - if the openings exceed the wall,
//! the negative net area (and the negative counts it implies) flow
//! through to the caller, whose job it is to sanity-check the inputs.
//!
//! ## Example
//!
//! ```rust
//! use arq_core::calculations::bricks::{calculate, BrickInput};
//!
//! let input = BrickInput {
//!     wall_length_m: 10.0,
//!     wall_height_m: 2.5,
//!     brick_key: "standard".to_string(),
//!     door_count: 1.0,
//!     window_count: 2.0,
//! };
//! let estimate = calculate(&input);
//! assert_eq!(estimate.brick_count, 523);
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::BrickKind;

/// Deducted area per door opening (2.1 m × 0.8 m)
pub const DOOR_AREA_M2: f64 = 2.1 * 0.8;

/// Deducted area per window opening (1.2 m × 1.0 m)
pub const WINDOW_AREA_M2: f64 = 1.2 * 1.0;

/// Mortar volume per square meter of wall (m³), empirical
pub const MORTAR_M3_PER_M2: f64 = 0.03;

/// Input parameters for the brick/block estimator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wall_length_m": 10.0,
///   "wall_height_m": 2.5,
///   "brick_key": "standard",
///   "door_count": 1.0,
///   "window_count": 2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickInput {
    /// Wall length in meters
    pub wall_length_m: f64,

    /// Wall height in meters
    pub wall_height_m: f64,

    /// Catalog key of the brick/block variant (see [`BrickKind`])
    pub brick_key: String,

    /// Number of door openings to deduct
    ///
    /// Taken at face value like every other input; fractional counts
    /// (e.g. a half-width door) flow through the arithmetic.
    pub door_count: f64,

    /// Number of window openings to deduct
    pub window_count: f64,
}

impl BrickInput {
    /// Gross wall area before openings (m²)
    pub fn gross_area_m2(&self) -> f64 {
        self.wall_length_m * self.wall_height_m
    }

    /// Total deducted opening area (m²)
    pub fn openings_area_m2(&self) -> f64 {
        self.door_count * DOOR_AREA_M2 + self.window_count * WINDOW_AREA_M2
    }

    /// Net wall area (m²), possibly negative when openings exceed the wall
    pub fn net_area_m2(&self) -> f64 {
        self.gross_area_m2() - self.openings_area_m2()
    }
}

/// Results from the brick/block estimator.
///
/// ## JSON Example
///
/// ```json
/// { "brick_count": 523, "mortar_m3": 0.6276 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickEstimate {
    /// Units to purchase, rounded up. Signed: a wall smaller than its
    /// openings yields a negative count (pass-through, not clamped).
    pub brick_count: i64,

    /// Mortar volume in cubic meters
    pub mortar_m3: f64,
}

impl BrickEstimate {
    /// Zeroed estimate for unknown catalog keys
    pub fn zeroed() -> Self {
        BrickEstimate {
            brick_count: 0,
            mortar_m3: 0.0,
        }
    }
}

/// Estimate bricks and mortar for a wall.
///
/// Unknown `brick_key` degrades to a zeroed estimate rather than failing.
pub fn calculate(input: &BrickInput) -> BrickEstimate {
    let Some(kind) = BrickKind::from_key(&input.brick_key) else {
        return BrickEstimate::zeroed();
    };

    let net_area = input.net_area_m2();
    BrickEstimate {
        brick_count: (net_area * kind.entry().units_per_m2).ceil() as i64,
        mortar_m3: net_area * MORTAR_M3_PER_M2,
    }
}
