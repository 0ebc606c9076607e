//! # Geometry Calculator
//!
//! Area and perimeter for the three shapes the area calculator offers:
//! rectangle, triangle, and circle.
//!
//! ## Permissiveness
//!
//! Inputs are taken at face value. Negative or zero dimensions are not
//! rejected; they flow through the closed-form arithmetic and produce
//! mathematically consistent (possibly zero or negative) results. The
//! triangle's base/height pair is likewise not checked against its three
//! side lengths - base/height drive the area, the sides drive the
//! perimeter, and the two sets are independent by policy.
//!
//! ## Example
//!
//! ```rust
//! use arq_core::calculations::geometry::{compute, ShapeSpec};
//!
//! let result = compute(&ShapeSpec::Circle { radius: 1.0 });
//! assert!((result.area - std::f64::consts::PI).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Shape dimensions for the geometry calculator.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Rectangle", "length": 4.0, "width": 3.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeSpec {
    /// Rectangle by side lengths
    Rectangle { length: f64, width: f64 },
    /// Triangle by a base/altitude pair (area) and three sides (perimeter)
    Triangle {
        base: f64,
        height: f64,
        side_a: f64,
        side_b: f64,
        side_c: f64,
    },
    /// Circle by radius
    Circle { radius: f64 },
}

/// Area and perimeter of a shape.
///
/// For circles, `perimeter` is the circumference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryResult {
    pub area: f64,
    pub perimeter: f64,
}

/// Compute area and perimeter for a shape.
pub fn compute(shape: &ShapeSpec) -> GeometryResult {
    match *shape {
        ShapeSpec::Rectangle { length, width } => compute_rectangle(length, width),
        ShapeSpec::Triangle {
            base,
            height,
            side_a,
            side_b,
            side_c,
        } => compute_triangle(base, height, side_a, side_b, side_c),
        ShapeSpec::Circle { radius } => compute_circle(radius),
    }
}

/// Rectangle: `area = l×w`, `perimeter = 2(l+w)`.
pub fn compute_rectangle(length: f64, width: f64) -> GeometryResult {
    GeometryResult {
        area: length * width,
        perimeter: 2.0 * (length + width),
    }
}

/// Triangle: `area = b×h/2`; perimeter is the side sum, reported as `0`
/// unless all three sides are present (non-zero, non-NaN).
///
/// No triangle-inequality or partial-input validation is attempted; an
/// incomplete side set simply reports no perimeter.
pub fn compute_triangle(base: f64, height: f64, side_a: f64, side_b: f64, side_c: f64) -> GeometryResult {
    let sides_present = [side_a, side_b, side_c]
        .iter()
        .all(|s| *s != 0.0 && !s.is_nan());
    GeometryResult {
        area: (base * height) / 2.0,
        perimeter: if sides_present {
            side_a + side_b + side_c
        } else {
            0.0
        },
    }
}

/// Circle: `area = πr²`, `perimeter (circumference) = 2πr`.
pub fn compute_circle(radius: f64) -> GeometryResult {
    GeometryResult {
        area: std::f64::consts::PI * radius * radius,
        perimeter: 2.0 * std::f64::consts::PI * radius,
    }
}
