//! # Tile/Floor Estimator
//!
//! Estimates tile and box counts for a floor, with a percentage markup
//! for cuts and breakage.
//!
//! ## Box Approximation
//!
//! The box count re-divides the marked-up tile count by the same
//! per-square-meter constant, approximating "boxes of roughly 1 m² of
//! coverage". Because the tile count was already rounded up, this is an
//! approximation rather than an exact inverse of the first step.
//!
//! ## Example
//!
//! ```rust
//! use arq_core::calculations::tiles::{calculate, TileInput};
//!
//! let input = TileInput {
//!     floor_area_m2: 20.0,
//!     tile_key: "standard".to_string(),
//!     extra_percent: 10.0,
//! };
//! let estimate = calculate(&input);
//! assert_eq!(estimate.tile_count, 246);
//! assert_eq!(estimate.box_count, 23);
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::TileSizeKind;

/// Input parameters for the tile estimator.
///
/// ## JSON Example
///
/// ```json
/// { "floor_area_m2": 20.0, "tile_key": "standard", "extra_percent": 10.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileInput {
    /// Floor area in square meters
    pub floor_area_m2: f64,

    /// Catalog key of the tile size (see [`TileSizeKind`])
    pub tile_key: String,

    /// Extra tiles for cuts and breakage, as a percentage (10 = +10%)
    pub extra_percent: f64,
}

/// Results from the tile estimator.
///
/// ## JSON Example
///
/// ```json
/// { "tile_count": 246, "box_count": 23 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileEstimate {
    /// Tiles to purchase, including the extra percentage
    pub tile_count: i64,

    /// Boxes to purchase (~1 m² of coverage each, approximate)
    pub box_count: i64,
}

impl TileEstimate {
    /// Zeroed estimate for unknown catalog keys
    pub fn zeroed() -> Self {
        TileEstimate {
            tile_count: 0,
            box_count: 0,
        }
    }
}

/// Estimate tiles and boxes for a floor.
///
/// Unknown `tile_key` degrades to a zeroed estimate rather than failing.
pub fn calculate(input: &TileInput) -> TileEstimate {
    let Some(kind) = TileSizeKind::from_key(&input.tile_key) else {
        return TileEstimate::zeroed();
    };
    let per_m2 = kind.entry().units_per_m2;

    let base_count = (input.floor_area_m2 * per_m2).ceil();
    let tile_count = (base_count * (1.0 + input.extra_percent / 100.0)).ceil();
    let box_count = (tile_count / per_m2).ceil();

    TileEstimate {
        tile_count: tile_count as i64,
        box_count: box_count as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> TileInput {
        TileInput {
            floor_area_m2: 20.0,
            tile_key: "standard".to_string(),
            extra_percent: 10.0,
        }
    }

    #[test]
    fn test_standard_floor() {
        // base = ceil(20 × 11.11) = 223; with +10% → ceil(245.3) = 246;
        // boxes = ceil(246 / 11.11) = 23
        let estimate = calculate(&test_input());
        assert_eq!(estimate.tile_count, 246);
        assert_eq!(estimate.box_count, 23);
    }

    #[test]
    fn test_large_tiles() {
        let input = TileInput {
            floor_area_m2: 20.0,
            tile_key: "large".to_string(),
            extra_percent: 0.0,
        };
        // ceil(20 × 2.78) = 56; boxes = ceil(56 / 2.78) = 21
        let estimate = calculate(&input);
        assert_eq!(estimate.tile_count, 56);
        assert_eq!(estimate.box_count, 21);
    }

    #[test]
    fn test_unknown_key_zeroes() {
        let mut input = test_input();
        input.tile_key = "mosaic".to_string();
        assert_eq!(calculate(&input), TileEstimate::zeroed());
    }

    #[test]
    fn test_extra_percent_only_rounds_up() {
        let no_extra = calculate(&TileInput {
            extra_percent: 0.0,
            ..test_input()
        });
        let with_extra = calculate(&test_input());
        assert!(with_extra.tile_count > no_extra.tile_count);
    }

    #[test]
    fn test_idempotence() {
        let input = test_input();
        assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: TileInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
