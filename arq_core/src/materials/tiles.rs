//! Tile and Floor Catalog
//!
//! The tile sizes offered by the floor estimator, with their tabulated
//! coverage constants.

use serde::{Deserialize, Serialize};

use super::CatalogEntry;

/// Tile size variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TileSizeKind {
    /// 20x20 cm
    Small,
    /// 30x30 cm
    #[default]
    Standard,
    /// 45x45 cm
    Medium,
    /// 60x60 cm
    Large,
    /// 30x60 cm
    Rectangle,
}

impl TileSizeKind {
    /// All tile sizes for UI selection
    pub const ALL: [TileSizeKind; 5] = [
        TileSizeKind::Small,
        TileSizeKind::Standard,
        TileSizeKind::Medium,
        TileSizeKind::Large,
        TileSizeKind::Rectangle,
    ];

    /// Stable catalog key
    pub fn key(&self) -> &'static str {
        self.entry().key
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        self.entry().label
    }

    /// Catalog data for this size
    pub fn entry(&self) -> CatalogEntry {
        match self {
            TileSizeKind::Small => CatalogEntry {
                key: "small",
                label: "Small (20x20 cm)",
                unit_area_m2: 0.04,
                units_per_m2: 25.0,
            },
            TileSizeKind::Standard => CatalogEntry {
                key: "standard",
                label: "Standard (30x30 cm)",
                unit_area_m2: 0.09,
                units_per_m2: 11.11,
            },
            TileSizeKind::Medium => CatalogEntry {
                key: "medium",
                label: "Medium (45x45 cm)",
                unit_area_m2: 0.2025,
                units_per_m2: 4.94,
            },
            TileSizeKind::Large => CatalogEntry {
                key: "large",
                label: "Large (60x60 cm)",
                unit_area_m2: 0.36,
                units_per_m2: 2.78,
            },
            TileSizeKind::Rectangle => CatalogEntry {
                key: "rectangle",
                label: "Rectangular (30x60 cm)",
                unit_area_m2: 0.18,
                units_per_m2: 5.56,
            },
        }
    }

    /// Look up a size by catalog key.
    ///
    /// Unknown keys are `None`, not an error; estimators degrade to a
    /// zeroed result.
    pub fn from_key(key: &str) -> Option<Self> {
        TileSizeKind::ALL.into_iter().find(|k| k.key() == key)
    }
}

impl std::fmt::Display for TileSizeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
