//! # Paint Estimator
//!
//! Estimates paint volume for a wall and breaks it into purchasable cans
//! by greedy decomposition over the fixed retail sizes 18 L, 3.6 L, and
//! 0.9 L.
//!
//! ## Rounding Policy
//!
//! The two larger denominations take the floor of the remaining liters;
//! only the final 0.9 L step rounds UP. The asymmetry is the purchasing
//! guarantee: any leftover paint still needs a whole can, so the smallest
//! size covers whatever the larger cans left behind. Swapping to all-ceil
//! would over-buy at every step; all-floor would under-buy.
//!
//! ## Example
//!
//! ```rust
//! use arq_core::calculations::paint::{calculate, PaintInput};
//!
//! let input = PaintInput {
//!     wall_area_m2: 50.0,
//!     coats: 2.0,
//!     yield_m2_per_liter: 10.0,
//! };
//! let estimate = calculate(&input);
//! assert_eq!(estimate.total_liters, 10.0);
//! assert_eq!((estimate.cans_18l, estimate.cans_3_6l, estimate.cans_0_9l), (0, 2, 4));
//! ```

use serde::{Deserialize, Serialize};

/// Retail can sizes in liters, largest first (greedy order)
pub const CAN_SIZES_L: [f64; 3] = [18.0, 3.6, 0.9];

/// Input parameters for the paint estimator.
///
/// ## JSON Example
///
/// ```json
/// { "wall_area_m2": 50.0, "coats": 2.0, "yield_m2_per_liter": 10.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintInput {
    /// Wall area to paint in square meters
    pub wall_area_m2: f64,

    /// Number of coats
    ///
    /// Taken at face value like every other input; fractional or negative
    /// coat counts flow through the arithmetic.
    pub coats: f64,

    /// Coverage of the chosen paint (m² per liter)
    ///
    /// A zero yield divides to infinity; the display contract renders
    /// that as "0" rather than failing.
    pub yield_m2_per_liter: f64,
}

impl PaintInput {
    /// Total liters required before can rounding
    pub fn total_liters(&self) -> f64 {
        (self.wall_area_m2 * self.coats) / self.yield_m2_per_liter
    }
}

/// Results from the paint estimator.
///
/// ## JSON Example
///
/// ```json
/// { "total_liters": 10.0, "cans_18l": 0, "cans_3_6l": 2, "cans_0_9l": 4 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintEstimate {
    /// Exact liters required (unrounded)
    pub total_liters: f64,

    /// 18 L cans (floor of total)
    pub cans_18l: i64,

    /// 3.6 L cans (floor of the 18 L remainder)
    pub cans_3_6l: i64,

    /// 0.9 L cans (ceiling of the final remainder - guarantees coverage)
    pub cans_0_9l: i64,
}

/// Estimate paint volume and can breakdown.
pub fn calculate(input: &PaintInput) -> PaintEstimate {
    let liters = input.total_liters();

    let cans_18l = (liters / CAN_SIZES_L[0]).floor();
    let rem = liters % CAN_SIZES_L[0];

    let cans_3_6l = (rem / CAN_SIZES_L[1]).floor();
    let rem = rem % CAN_SIZES_L[1];

    let cans_0_9l = (rem / CAN_SIZES_L[2]).ceil();

    PaintEstimate {
        total_liters: liters,
        cans_18l: cans_18l as i64,
        cans_3_6l: cans_3_6l as i64,
        cans_0_9l: cans_0_9l as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_breakdown() {
        // 50 m² × 2 coats @ 10 m²/L = 10 L:
        // 0×18, floor(10/3.6)=2 (7.2 L), ceil(2.8/0.9)=4
        let estimate = calculate(&PaintInput {
            wall_area_m2: 50.0,
            coats: 2.0,
            yield_m2_per_liter: 10.0,
        });
        assert_eq!(estimate.total_liters, 10.0);
        assert_eq!(estimate.cans_18l, 0);
        assert_eq!(estimate.cans_3_6l, 2);
        assert_eq!(estimate.cans_0_9l, 4);
    }

    #[test]
    fn test_large_job_uses_big_cans() {
        // 400 m² × 2 coats @ 10 m²/L = 80 L: 4×18=72, rem 8 → 2×3.6=7.2,
        // rem 0.8 → 1×0.9
        let estimate = calculate(&PaintInput {
            wall_area_m2: 400.0,
            coats: 2.0,
            yield_m2_per_liter: 10.0,
        });
        assert_eq!(estimate.total_liters, 80.0);
        assert_eq!(estimate.cans_18l, 4);
        assert_eq!(estimate.cans_3_6l, 2);
        assert_eq!(estimate.cans_0_9l, 1);
    }

    #[test]
    fn test_exact_multiple_needs_no_small_cans() {
        // 18 L exactly: one big can, nothing left over
        let estimate = calculate(&PaintInput {
            wall_area_m2: 90.0,
            coats: 2.0,
            yield_m2_per_liter: 10.0,
        });
        assert_eq!(estimate.total_liters, 18.0);
        assert_eq!(estimate.cans_18l, 1);
        assert_eq!(estimate.cans_3_6l, 0);
        assert_eq!(estimate.cans_0_9l, 0);
    }

    #[test]
    fn test_purchased_volume_covers_requirement() {
        // The floor/floor/ceil policy never under-buys
        let cases = [
            (10.0, 1.0, 10.0),
            (37.5, 2.0, 8.0),
            (12.3, 3.0, 11.0),
            (100.0, 1.5, 16.0),
        ];
        for (area, coats, yield_per_l) in cases {
            let estimate = calculate(&PaintInput {
                wall_area_m2: area,
                coats,
                yield_m2_per_liter: yield_per_l,
            });
            let purchased = estimate.cans_18l as f64 * 18.0
                + estimate.cans_3_6l as f64 * 3.6
                + estimate.cans_0_9l as f64 * 0.9;
            assert!(
                purchased >= estimate.total_liters - 1e-9,
                "area {area}: bought {purchased} of {} L",
                estimate.total_liters
            );
        }
    }

    #[test]
    fn test_fractional_coats_flow_through() {
        // Inputs are coerced numbers, not integers: half a touch-up coat
        // is a legitimate interactive estimate
        let estimate = calculate(&PaintInput {
            wall_area_m2: 10.0,
            coats: 1.5,
            yield_m2_per_liter: 10.0,
        });
        assert_eq!(estimate.total_liters, 1.5);
        assert_eq!(estimate.cans_18l, 0);
        assert_eq!(estimate.cans_3_6l, 0);
        // ceil(1.5 / 0.9) = 2
        assert_eq!(estimate.cans_0_9l, 2);
    }

    #[test]
    fn test_zero_yield_is_non_finite_not_a_panic() {
        let estimate = calculate(&PaintInput {
            wall_area_m2: 50.0,
            coats: 1.0,
            yield_m2_per_liter: 0.0,
        });
        assert!(estimate.total_liters.is_infinite());
    }

    #[test]
    fn test_idempotence() {
        let input = PaintInput {
            wall_area_m2: 63.7,
            coats: 3.0,
            yield_m2_per_liter: 9.0,
        };
        assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn test_serialization() {
        let estimate = calculate(&PaintInput {
            wall_area_m2: 50.0,
            coats: 2.0,
            yield_m2_per_liter: 10.0,
        });
        let json = serde_json::to_string(&estimate).unwrap();
        let roundtrip: PaintEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(estimate, roundtrip);
    }
}
