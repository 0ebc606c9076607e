//! # Material Catalogs
//!
//! Fixed catalogs of brick/block variants and tile sizes used by the
//! material estimators. Each entry carries two independently tabulated
//! constants: the face area of one unit and the units needed per square
//! meter of coverage.
//!
//! `units_per_m2` is deliberately NOT derived from `unit_area_m2` - the
//! catalog values come from trade practice and already bake in joint
//! spacing and waste (e.g., the standard brick lists 0.0361 m² but 25
//! units/m², not 1/0.0361 ≈ 27.7). Keep both verbatim.
//!
//! ## Example
//!
//! ```rust
//! use arq_core::materials::{BrickKind, TileSizeKind};
//!
//! let brick = BrickKind::from_key("concrete").unwrap();
//! assert_eq!(brick.entry().units_per_m2, 12.5);
//!
//! // Unknown keys are None, never an error - estimators zero out
//! assert!(TileSizeKind::from_key("mosaic").is_none());
//! ```

pub mod bricks;
pub mod tiles;

pub use bricks::BrickKind;
pub use tiles::TileSizeKind;

use serde::Serialize;

/// One brick/block or tile variant from the catalog.
///
/// Entries are compile-time constants; they serialize (for result echoes)
/// but are never deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Stable lookup key (e.g., "standard", "concrete")
    pub key: &'static str,
    /// Human-readable label with nominal dimensions
    pub label: &'static str,
    /// Face area of a single unit (m²)
    pub unit_area_m2: f64,
    /// Units required to cover one square meter (tabulated, not derived)
    pub units_per_m2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_constants_are_independent() {
        // The tabulated coverage is not the reciprocal of the unit area;
        // the gap is the trade allowance for joints and waste.
        let standard = BrickKind::Standard.entry();
        assert_eq!(standard.unit_area_m2, 0.0361);
        assert_eq!(standard.units_per_m2, 25.0);
        assert!((1.0 / standard.unit_area_m2 - standard.units_per_m2).abs() > 1.0);
    }

    #[test]
    fn test_entry_serialization() {
        let entry = TileSizeKind::Large.entry();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"units_per_m2\":2.78"));
    }
}
