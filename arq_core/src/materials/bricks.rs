//! Brick and Block Catalog
//!
//! The masonry variants offered by the wall estimator, with their
//! tabulated coverage constants.

use serde::{Deserialize, Serialize};

use super::CatalogEntry;

/// Brick/block variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrickKind {
    /// Common brick, 19x19x9 cm
    #[default]
    Standard,
    /// Hollow block, 19x19x14 cm
    Hollow,
    /// Concrete block, 40x20x15 cm
    Concrete,
    /// Ceramic brick, 11.5x7.5x24 cm
    Ceramic,
    /// Glass brick, 19x19x8 cm
    Glass,
}

impl BrickKind {
    /// All brick kinds for UI selection
    pub const ALL: [BrickKind; 5] = [
        BrickKind::Standard,
        BrickKind::Hollow,
        BrickKind::Concrete,
        BrickKind::Ceramic,
        BrickKind::Glass,
    ];

    /// Stable catalog key
    pub fn key(&self) -> &'static str {
        self.entry().key
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        self.entry().label
    }

    /// Catalog data for this kind
    pub fn entry(&self) -> CatalogEntry {
        match self {
            BrickKind::Standard => CatalogEntry {
                key: "standard",
                label: "Common brick (19x19x9 cm)",
                unit_area_m2: 0.0361,
                units_per_m2: 25.0,
            },
            BrickKind::Hollow => CatalogEntry {
                key: "hollow",
                label: "Hollow block (19x19x14 cm)",
                unit_area_m2: 0.0361,
                units_per_m2: 25.0,
            },
            BrickKind::Concrete => CatalogEntry {
                key: "concrete",
                label: "Concrete block (40x20x15 cm)",
                unit_area_m2: 0.08,
                units_per_m2: 12.5,
            },
            BrickKind::Ceramic => CatalogEntry {
                key: "ceramic",
                label: "Ceramic brick (11.5x7.5x24 cm)",
                unit_area_m2: 0.0288,
                units_per_m2: 34.0,
            },
            BrickKind::Glass => CatalogEntry {
                key: "glass",
                label: "Glass brick (19x19x8 cm)",
                unit_area_m2: 0.0361,
                units_per_m2: 25.0,
            },
        }
    }

    /// Look up a kind by catalog key.
    ///
    /// Unknown keys are `None`, not an error; estimators degrade to a
    /// zeroed result.
    pub fn from_key(key: &str) -> Option<Self> {
        BrickKind::ALL.into_iter().find(|k| k.key() == key)
    }
}

impl std::fmt::Display for BrickKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
