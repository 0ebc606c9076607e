//! # Unit Tables and Conversion
//!
//! Length and area units for architectural work, with fixed conversion
//! factors to a common base unit (meter / square meter).
//!
//! ## Design Philosophy
//!
//! Conversion goes through the base unit rather than a precomputed pairwise
//! matrix: `result = value * factor(from) / factor(to)`. That keeps the
//! tables at O(units) size for one extra multiply/divide per call, which is
//! irrelevant on an interactive path.
//!
//! ## Example
//!
//! ```rust
//! use arq_core::units::{convert_length, convert_area, LengthUnit, AreaUnit};
//!
//! let cm = convert_length(1.0, LengthUnit::Meter, LengthUnit::Centimeter);
//! assert_eq!(cm, 100.0);
//!
//! let sqft = convert_area(1.0, AreaUnit::SquareMeter, AreaUnit::SquareFoot);
//! assert!((sqft - 10.7639).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ArqError, ArqResult};

/// Physical dimension a unit belongs to.
///
/// Identifies which conversion table applies; units can only be
/// converted within a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Area,
}

impl Dimension {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Area => "area",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Length units (base: meter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    /// All length units for UI selection
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    /// Multiplier to the base unit (meter). Always positive.
    pub fn factor_to_base(&self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
        }
    }

    /// Short symbol (e.g., "mm", "ft")
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "Millimeters",
            LengthUnit::Centimeter => "Centimeters",
            LengthUnit::Meter => "Meters",
            LengthUnit::Kilometer => "Kilometers",
            LengthUnit::Inch => "Inches",
            LengthUnit::Foot => "Feet",
            LengthUnit::Yard => "Yards",
            LengthUnit::Mile => "Miles",
        }
    }

    /// Parse from common string representations (name or symbol)
    pub fn from_str_flexible(s: &str) -> ArqResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "millimeter" | "millimeters" | "mm" => Ok(LengthUnit::Millimeter),
            "centimeter" | "centimeters" | "cm" => Ok(LengthUnit::Centimeter),
            "meter" | "meters" | "m" => Ok(LengthUnit::Meter),
            "kilometer" | "kilometers" | "km" => Ok(LengthUnit::Kilometer),
            "inch" | "inches" | "in" => Ok(LengthUnit::Inch),
            "foot" | "feet" | "ft" => Ok(LengthUnit::Foot),
            "yard" | "yards" | "yd" => Ok(LengthUnit::Yard),
            "mile" | "miles" | "mi" => Ok(LengthUnit::Mile),
            _ => Err(ArqError::unknown_unit(Dimension::Length, s)),
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Area units (base: square meter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AreaUnit {
    SquareMillimeter,
    SquareCentimeter,
    SquareMeter,
    Hectare,
    SquareKilometer,
    SquareInch,
    SquareFoot,
    SquareYard,
    Acre,
    SquareMile,
}

impl AreaUnit {
    /// All area units for UI selection
    pub const ALL: [AreaUnit; 10] = [
        AreaUnit::SquareMillimeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareMeter,
        AreaUnit::Hectare,
        AreaUnit::SquareKilometer,
        AreaUnit::SquareInch,
        AreaUnit::SquareFoot,
        AreaUnit::SquareYard,
        AreaUnit::Acre,
        AreaUnit::SquareMile,
    ];

    /// Multiplier to the base unit (square meter). Always positive.
    pub fn factor_to_base(&self) -> f64 {
        match self {
            AreaUnit::SquareMillimeter => 0.000001,
            AreaUnit::SquareCentimeter => 0.0001,
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::Hectare => 10000.0,
            AreaUnit::SquareKilometer => 1_000_000.0,
            AreaUnit::SquareInch => 0.00064516,
            AreaUnit::SquareFoot => 0.09290304,
            AreaUnit::SquareYard => 0.83612736,
            AreaUnit::Acre => 4046.8564224,
            AreaUnit::SquareMile => 2589988.110336,
        }
    }

    /// Short symbol (e.g., "m²", "ft²")
    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::SquareMillimeter => "mm²",
            AreaUnit::SquareCentimeter => "cm²",
            AreaUnit::SquareMeter => "m²",
            AreaUnit::Hectare => "ha",
            AreaUnit::SquareKilometer => "km²",
            AreaUnit::SquareInch => "in²",
            AreaUnit::SquareFoot => "ft²",
            AreaUnit::SquareYard => "yd²",
            AreaUnit::Acre => "ac",
            AreaUnit::SquareMile => "mi²",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            AreaUnit::SquareMillimeter => "Square millimeters",
            AreaUnit::SquareCentimeter => "Square centimeters",
            AreaUnit::SquareMeter => "Square meters",
            AreaUnit::Hectare => "Hectares",
            AreaUnit::SquareKilometer => "Square kilometers",
            AreaUnit::SquareInch => "Square inches",
            AreaUnit::SquareFoot => "Square feet",
            AreaUnit::SquareYard => "Square yards",
            AreaUnit::Acre => "Acres",
            AreaUnit::SquareMile => "Square miles",
        }
    }

    /// Parse from common string representations (name or symbol)
    pub fn from_str_flexible(s: &str) -> ArqResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "").as_str() {
            "squaremillimeter" | "squaremillimeters" | "mm2" | "mm²" => {
                Ok(AreaUnit::SquareMillimeter)
            }
            "squarecentimeter" | "squarecentimeters" | "cm2" | "cm²" => {
                Ok(AreaUnit::SquareCentimeter)
            }
            "squaremeter" | "squaremeters" | "m2" | "m²" => Ok(AreaUnit::SquareMeter),
            "hectare" | "hectares" | "ha" => Ok(AreaUnit::Hectare),
            "squarekilometer" | "squarekilometers" | "km2" | "km²" => {
                Ok(AreaUnit::SquareKilometer)
            }
            "squareinch" | "squareinches" | "in2" | "in²" => Ok(AreaUnit::SquareInch),
            "squarefoot" | "squarefeet" | "ft2" | "ft²" => Ok(AreaUnit::SquareFoot),
            "squareyard" | "squareyards" | "yd2" | "yd²" => Ok(AreaUnit::SquareYard),
            "acre" | "acres" | "ac" => Ok(AreaUnit::Acre),
            "squaremile" | "squaremiles" | "mi2" | "mi²" => Ok(AreaUnit::SquareMile),
            _ => Err(ArqError::unknown_unit(Dimension::Area, s)),
        }
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A unit of either dimension.
///
/// This is the wire type for generic conversion requests; callers that
/// already know the dimension should use [`convert_length`] or
/// [`convert_area`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Unit {
    Length(LengthUnit),
    Area(AreaUnit),
}

impl Unit {
    /// The dimension this unit belongs to
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Length(_) => Dimension::Length,
            Unit::Area(_) => Dimension::Area,
        }
    }

    /// Multiplier to the dimension's base unit
    pub fn factor_to_base(&self) -> f64 {
        match self {
            Unit::Length(u) => u.factor_to_base(),
            Unit::Area(u) => u.factor_to_base(),
        }
    }

    /// Short symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Length(u) => u.symbol(),
            Unit::Area(u) => u.symbol(),
        }
    }
}

impl From<LengthUnit> for Unit {
    fn from(u: LengthUnit) -> Self {
        Unit::Length(u)
    }
}

impl From<AreaUnit> for Unit {
    fn from(u: AreaUnit) -> Self {
        Unit::Area(u)
    }
}

/// Convert a length value between units.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let base = value * from.factor_to_base();
    base / to.factor_to_base()
}

/// Convert an area value between units.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let base = value * from.factor_to_base();
    base / to.factor_to_base()
}

/// Convert a value between any two units of the same dimension.
///
/// Returns [`ArqError::DimensionMismatch`] when the units belong to
/// different dimensions; within a dimension the conversion is infallible.
///
/// # Example
///
/// ```rust
/// use arq_core::units::{convert, LengthUnit, AreaUnit, Unit};
///
/// let cm = convert(1.0, LengthUnit::Meter.into(), LengthUnit::Centimeter.into()).unwrap();
/// assert_eq!(cm, 100.0);
///
/// let mixed = convert(1.0, LengthUnit::Meter.into(), AreaUnit::SquareMeter.into());
/// assert!(mixed.is_err());
/// ```
pub fn convert(value: f64, from: Unit, to: Unit) -> ArqResult<f64> {
    match (from, to) {
        (Unit::Length(f), Unit::Length(t)) => Ok(convert_length(value, f, t)),
        (Unit::Area(f), Unit::Area(t)) => Ok(convert_area(value, f, t)),
        _ => Err(ArqError::DimensionMismatch {
            from: from.dimension(),
            to: to.dimension(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_to_centimeter() {
        assert_eq!(
            convert_length(1.0, LengthUnit::Meter, LengthUnit::Centimeter),
            100.0
        );
    }

    #[test]
    fn test_square_meter_to_square_foot() {
        let sqft = convert_area(1.0, AreaUnit::SquareMeter, AreaUnit::SquareFoot);
        assert!((sqft - 10.7639).abs() < 1e-3, "got {sqft}");
    }

    #[test]
    fn test_mile_to_kilometer() {
        let km = convert_length(1.0, LengthUnit::Mile, LengthUnit::Kilometer);
        assert!((km - 1.609344).abs() < 1e-12);
    }

    #[test]
    fn test_length_round_trip_all_pairs() {
        let value = 37.25;
        for from in LengthUnit::ALL {
            for to in LengthUnit::ALL {
                let there = convert_length(value, from, to);
                let back = convert_length(there, to, from);
                let rel = ((back - value) / value).abs();
                assert!(rel <= 1e-9, "{from:?} -> {to:?}: rel error {rel}");
            }
        }
    }

    #[test]
    fn test_area_round_trip_all_pairs() {
        let value = 0.875;
        for from in AreaUnit::ALL {
            for to in AreaUnit::ALL {
                let there = convert_area(value, from, to);
                let back = convert_area(there, to, from);
                let rel = ((back - value) / value).abs();
                assert!(rel <= 1e-9, "{from:?} -> {to:?}: rel error {rel}");
            }
        }
    }

    #[test]
    fn test_idempotence() {
        // Same inputs, bit-identical outputs
        let a = convert_length(12.34, LengthUnit::Yard, LengthUnit::Inch);
        let b = convert_length(12.34, LengthUnit::Yard, LengthUnit::Inch);
        assert_eq!(a.to_bits(), b.to_bits());

        let from = Unit::Area(AreaUnit::Acre);
        let to = Unit::Area(AreaUnit::Hectare);
        let a = convert(0.5, from, to).unwrap();
        let b = convert(0.5, from, to).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_factors_positive() {
        for u in LengthUnit::ALL {
            assert!(u.factor_to_base() > 0.0);
        }
        for u in AreaUnit::ALL {
            assert!(u.factor_to_base() > 0.0);
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let result = convert(
            1.0,
            Unit::Length(LengthUnit::Meter),
            Unit::Area(AreaUnit::SquareMeter),
        );
        assert_eq!(
            result.unwrap_err().error_code(),
            "DIMENSION_MISMATCH"
        );
    }

    #[test]
    fn test_generic_convert_matches_typed() {
        let generic = convert(
            2.5,
            Unit::Length(LengthUnit::Foot),
            Unit::Length(LengthUnit::Inch),
        )
        .unwrap();
        let typed = convert_length(2.5, LengthUnit::Foot, LengthUnit::Inch);
        assert_eq!(generic, typed);
        assert_eq!(typed, 30.0);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!(
            LengthUnit::from_str_flexible("cm").unwrap(),
            LengthUnit::Centimeter
        );
        assert_eq!(
            LengthUnit::from_str_flexible("Feet").unwrap(),
            LengthUnit::Foot
        );
        assert_eq!(
            AreaUnit::from_str_flexible("squareFoot").unwrap(),
            AreaUnit::SquareFoot
        );
        assert_eq!(
            AreaUnit::from_str_flexible("m2").unwrap(),
            AreaUnit::SquareMeter
        );
        assert!(LengthUnit::from_str_flexible("furlong").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LengthUnit::Millimeter).unwrap();
        assert_eq!(json, "\"millimeter\"");

        let json = serde_json::to_string(&AreaUnit::SquareFoot).unwrap();
        assert_eq!(json, "\"squareFoot\"");

        let roundtrip: AreaUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, AreaUnit::SquareFoot);

        // Untagged Unit accepts either dimension's spelling
        let unit: Unit = serde_json::from_str("\"kilometer\"").unwrap();
        assert_eq!(unit, Unit::Length(LengthUnit::Kilometer));
    }
}
