//! Static catalog of goods and sectors.
//!
//! Every good the economy trades is described here: which sector family it
//! belongs to, whether it occupies warehouse space, whether shops can stock
//! it, and its reference price. The catalog is fixed at startup and never
//! mutated; per-pass state lives in [`crate::snapshot::CountersSnapshot`].

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Goods
// ---------------------------------------------------------------------------

/// All goods known to the demand engine.
///
/// Grouping mirrors the sector families: commercial goods are sold to
/// citizens and tourists, industrial goods are produced and warehoused,
/// office goods are weightless services produced by office companies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Good {
    // Commercial -- sold over the counter
    ConvenienceFood,
    Meals,
    Lodging,
    Recreation,
    Petrochemicals,
    Furniture,
    // Industrial -- physical production
    Grain,
    Timber,
    Ore,
    Oil,
    Chemicals,
    Textiles,
    Machinery,
    Electronics,
    // Office -- weightless services
    Software,
    Financial,
    Media,
    Telecom,
}

impl Good {
    /// All goods, in stable catalog order (used for iteration and display).
    pub fn all() -> &'static [Good] {
        &[
            Good::ConvenienceFood,
            Good::Meals,
            Good::Lodging,
            Good::Recreation,
            Good::Petrochemicals,
            Good::Furniture,
            Good::Grain,
            Good::Timber,
            Good::Ore,
            Good::Oil,
            Good::Chemicals,
            Good::Textiles,
            Good::Machinery,
            Good::Electronics,
            Good::Software,
            Good::Financial,
            Good::Media,
            Good::Telecom,
        ]
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Good::ConvenienceFood => "Convenience Food",
            Good::Meals => "Meals",
            Good::Lodging => "Lodging",
            Good::Recreation => "Recreation",
            Good::Petrochemicals => "Petrochemicals",
            Good::Furniture => "Furniture",
            Good::Grain => "Grain",
            Good::Timber => "Timber",
            Good::Ore => "Ore",
            Good::Oil => "Oil",
            Good::Chemicals => "Chemicals",
            Good::Textiles => "Textiles",
            Good::Machinery => "Machinery",
            Good::Electronics => "Electronics",
            Good::Software => "Software",
            Good::Financial => "Financial Services",
            Good::Media => "Media",
            Good::Telecom => "Telecom",
        }
    }

    /// Whether this good is sold by commercial companies (shops, hotels,
    /// venues). Commercial goods are scored by the commercial pass and never
    /// by the industrial one, even when industry produces them.
    pub fn is_commercial(self) -> bool {
        matches!(
            self,
            Good::ConvenienceFood
                | Good::Meals
                | Good::Lodging
                | Good::Recreation
                | Good::Petrochemicals
                | Good::Furniture
        )
    }

    /// Whether companies produce this good at all. Pure service goods with
    /// no production chain (hotel nights, venue tickets) return false.
    pub fn is_produceable(self) -> bool {
        !matches!(self, Good::Lodging | Good::Recreation)
    }

    /// Whether this good can be stocked and shipped. Non-tradable goods are
    /// consumed where they are produced and never enter demand scoring.
    pub fn is_tradable(self) -> bool {
        !matches!(self, Good::Recreation)
    }

    /// Cargo weight per unit. Zero means the good is immaterial: it takes no
    /// warehouse space and its producers are office companies.
    pub fn weight(self) -> f32 {
        match self {
            Good::ConvenienceFood => 1.0,
            Good::Meals => 0.5,
            Good::Lodging => 0.0,
            Good::Recreation => 0.0,
            Good::Petrochemicals => 1.2,
            Good::Furniture => 2.0,
            Good::Grain => 1.0,
            Good::Timber => 1.5,
            Good::Ore => 2.5,
            Good::Oil => 1.8,
            Good::Chemicals => 1.2,
            Good::Textiles => 0.8,
            Good::Machinery => 3.0,
            Good::Electronics => 0.6,
            Good::Software => 0.0,
            Good::Financial => 0.0,
            Good::Media => 0.0,
            Good::Telecom => 0.0,
        }
    }

    /// Whether the good occupies physical storage. Immaterial goods route to
    /// the office aggregate and never trigger storage demand.
    pub fn is_material(self) -> bool {
        self.weight() > 0.0
    }

    /// Reference price per unit, for the dashboard's detail table.
    pub fn base_price(self) -> f64 {
        match self {
            Good::ConvenienceFood => 3.0,
            Good::Meals => 7.0,
            Good::Lodging => 60.0,
            Good::Recreation => 12.0,
            Good::Petrochemicals => 8.0,
            Good::Furniture => 25.0,
            Good::Grain => 2.0,
            Good::Timber => 3.0,
            Good::Ore => 4.0,
            Good::Oil => 8.0,
            Good::Chemicals => 9.0,
            Good::Textiles => 6.0,
            Good::Machinery => 14.0,
            Good::Electronics => 12.0,
            Good::Software => 15.0,
            Good::Financial => 11.0,
            Good::Media => 9.0,
            Good::Telecom => 10.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Sectors and residential density tiers
// ---------------------------------------------------------------------------

/// Economic sectors the engine publishes demand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Commercial,
    Industrial,
    Office,
    Storage,
    Residential,
}

impl Sector {
    /// All sectors, for dashboard iteration.
    pub fn all() -> &'static [Sector] {
        &[
            Sector::Commercial,
            Sector::Industrial,
            Sector::Office,
            Sector::Storage,
            Sector::Residential,
        ]
    }

    /// Display name for the UI.
    pub fn name(self) -> &'static str {
        match self {
            Sector::Commercial => "Commercial",
            Sector::Industrial => "Industrial",
            Sector::Office => "Office",
            Sector::Storage => "Storage",
            Sector::Residential => "Residential",
        }
    }
}

/// Residential density tiers. Each tier gets its own building-demand score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityTier {
    Low,
    Medium,
    High,
}

impl DensityTier {
    /// All tiers, lowest density first.
    pub fn all() -> &'static [DensityTier] {
        &[DensityTier::Low, DensityTier::Medium, DensityTier::High]
    }

    /// Display name for the UI.
    pub fn name(self) -> &'static str {
        match self {
            DensityTier::Low => "Low Density",
            DensityTier::Medium => "Medium Density",
            DensityTier::High => "High Density",
        }
    }

    /// Whether households in this tier weigh free study positions when
    /// deciding to move in. Low-density households do not.
    pub fn wants_study_positions(self) -> bool {
        !matches!(self, DensityTier::Low)
    }
}

// ---------------------------------------------------------------------------
// Catalog resource
// ---------------------------------------------------------------------------

/// One row of the goods catalog, as handed to the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoodDescriptor {
    pub good: Good,
    pub weight: f32,
    pub material: bool,
    pub tradable: bool,
    pub produceable: bool,
    pub commercial: bool,
    pub price: f64,
}

/// The full goods catalog, built once at startup from the [`Good`] tables.
///
/// The scoring pass iterates catalog rows rather than the enum directly so
/// that classification lives in one place.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GoodCatalog {
    rows: Vec<GoodDescriptor>,
}

impl Default for GoodCatalog {
    fn default() -> Self {
        let rows = Good::all()
            .iter()
            .map(|&good| GoodDescriptor {
                good,
                weight: good.weight(),
                material: good.is_material(),
                tradable: good.is_tradable(),
                produceable: good.is_produceable(),
                commercial: good.is_commercial(),
                price: good.base_price(),
            })
            .collect();
        Self { rows }
    }
}

impl GoodCatalog {
    /// All catalog rows in stable order.
    pub fn rows(&self) -> &[GoodDescriptor] {
        &self.rows
    }

    /// Descriptor for a single good.
    pub fn descriptor(&self, good: Good) -> &GoodDescriptor {
        // Rows are built in Good::all() order, so position == discriminant.
        &self.rows[good as usize]
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
