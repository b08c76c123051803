//! Named demand factors and their per-sector accumulator.
//!
//! The dashboard's breakdown panel shows *why* a sector wants to grow. Each
//! weighted contribution the scoring pass applies is also recorded here under
//! a named bucket, replacing the integer-indexed factor slots the panel used
//! to bind to.

use serde::{Deserialize, Serialize};

/// Every named contribution the scoring pass can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemandFactor {
    /// Workforce pressure from the two lowest education tiers.
    UneducatedWorkforce,
    /// Workforce pressure from the three highest education tiers.
    EducatedWorkforce,
    /// Unmet local appetite for a good.
    LocalDemand,
    /// Lodging demand driven by visiting tourists.
    TouristDemand,
    /// Fuel demand recorded separately so the panel can call it out.
    PetrolLocalDemand,
    /// Warehouse shortage pressure.
    LocalStorage,
    /// Penalty recorded when companies scored but no property shortage exists.
    EmptyBuildings,
    /// Tax pressure, positive when below the neutral rate.
    Taxes,
    /// City-modifier points granted to flagship goods.
    CityModifier,
    /// Production shortfall relative to need.
    ProductionShortfall,
    /// Residential: happiness above/below the neutral point.
    Happiness,
    /// Residential: homelessness rate deviation.
    Homelessness,
    /// Residential: unemployment rate deviation.
    Unemployment,
    /// Residential: free study position pull.
    Students,
}

impl DemandFactor {
    /// Number of factor buckets.
    pub const COUNT: usize = 14;

    /// All factors, in stable display order.
    pub fn all() -> &'static [DemandFactor] {
        &[
            DemandFactor::UneducatedWorkforce,
            DemandFactor::EducatedWorkforce,
            DemandFactor::LocalDemand,
            DemandFactor::TouristDemand,
            DemandFactor::PetrolLocalDemand,
            DemandFactor::LocalStorage,
            DemandFactor::EmptyBuildings,
            DemandFactor::Taxes,
            DemandFactor::CityModifier,
            DemandFactor::ProductionShortfall,
            DemandFactor::Happiness,
            DemandFactor::Homelessness,
            DemandFactor::Unemployment,
            DemandFactor::Students,
        ]
    }

    /// Display name for the breakdown panel.
    pub fn name(self) -> &'static str {
        match self {
            DemandFactor::UneducatedWorkforce => "Uneducated Workforce",
            DemandFactor::EducatedWorkforce => "Educated Workforce",
            DemandFactor::LocalDemand => "Local Demand",
            DemandFactor::TouristDemand => "Tourist Demand",
            DemandFactor::PetrolLocalDemand => "Petrol Demand",
            DemandFactor::LocalStorage => "Local Storage",
            DemandFactor::EmptyBuildings => "Empty Buildings",
            DemandFactor::Taxes => "Taxes",
            DemandFactor::CityModifier => "City Modifier",
            DemandFactor::ProductionShortfall => "Production Shortfall",
            DemandFactor::Happiness => "Happiness",
            DemandFactor::Homelessness => "Homelessness",
            DemandFactor::Unemployment => "Unemployment",
            DemandFactor::Students => "Students",
        }
    }
}

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Accumulated factor points for one sector, in whole demand points.
///
/// Written exactly once per pass and read-only afterward. Values are raw
/// sums; they are deliberately *not* clamped to the published score range so
/// the panel can show how far out of range a pressure really is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorSet {
    values: [i32; DemandFactor::COUNT],
}

impl FactorSet {
    /// Add points to a bucket.
    pub fn add(&mut self, factor: DemandFactor, points: i32) {
        self.values[factor as usize] += points;
    }

    /// Accumulated points for a bucket.
    pub fn get(&self, factor: DemandFactor) -> i32 {
        self.values[factor as usize]
    }

    /// All buckets and their values, in stable display order.
    pub fn iter(&self) -> impl Iterator<Item = (DemandFactor, i32)> + '_ {
        DemandFactor::all().iter().map(|&f| (f, self.get(f)))
    }

    /// Whether no bucket received any points.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|&v| v == 0)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
