//! Published demand scores and diagnostics.
//!
//! Everything here is rebuilt from scratch by each pass and replaces the
//! previous generation wholesale. Readers (the dashboard, host systems
//! ordered after [`crate::DemandSet`]) always see one complete generation,
//! never a partial update.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::{DensityTier, Good, Sector};
use crate::factors::FactorSet;

// ---------------------------------------------------------------------------
// Per-good and per-sector scores
// ---------------------------------------------------------------------------

/// One row of the dashboard's per-good detail table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoodDemand {
    pub good: Good,
    /// Company demand, 0-100.
    pub demand: i32,
    /// Building demand, 0-100.
    pub building_demand: i32,
    /// Vacant properties for this good's companies.
    pub free_properties: i32,
    /// Active companies trading the good.
    pub companies: i32,
    /// Workers employed by those companies.
    pub workers: i32,
    /// Workplace utilization in percent.
    pub capacity_percent: i32,
    /// Tax pressure in factor points, negative above the neutral rate.
    pub tax_factor: i32,
}

/// Company and building demand for one sector, both 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorDemand {
    pub company: i32,
    pub building: i32,
}

/// Residential scores: one household-level demand (0-200) plus one
/// building demand per density tier (0-100 each).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentialDemand {
    pub household: i32,
    pub tiers: [i32; 3],
}

impl ResidentialDemand {
    /// Building demand for one density tier.
    pub fn tier(&self, tier: DensityTier) -> i32 {
        self.tiers[tier as usize]
    }
}

// ---------------------------------------------------------------------------
// The published report
// ---------------------------------------------------------------------------

/// The engine's primary output: sector demand indices plus the per-good
/// detail table.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemandReport {
    pub commercial: SectorDemand,
    pub industrial: SectorDemand,
    pub office: SectorDemand,
    pub storage: SectorDemand,
    pub residential: ResidentialDemand,
    /// Detail rows for every good the snapshot carried, in catalog order.
    pub goods: Vec<GoodDemand>,
    /// Goods that did not score this pass: no counter record, or demand
    /// ended at zero. Catalog order, for stable display.
    pub excluded: Vec<Good>,
}

impl DemandReport {
    /// Company/building demand for a company sector. Residential publishes a
    /// different shape; read [`Self::residential`] directly.
    pub fn sector(&self, sector: Sector) -> Option<SectorDemand> {
        match sector {
            Sector::Commercial => Some(self.commercial),
            Sector::Industrial => Some(self.industrial),
            Sector::Office => Some(self.office),
            Sector::Storage => Some(self.storage),
            Sector::Residential => None,
        }
    }

    /// Detail row for one good, if it had a counter record this pass.
    pub fn good(&self, good: Good) -> Option<&GoodDemand> {
        self.goods.iter().find(|row| row.good == good)
    }

    /// Whether a good sat out the pass.
    pub fn is_excluded(&self, good: Good) -> bool {
        self.excluded.contains(&good)
    }
}

/// Per-sector factor breakdowns for the dashboard's "why" panel.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemandBreakdown {
    pub commercial: FactorSet,
    pub industrial: FactorSet,
    pub office: FactorSet,
    pub storage: FactorSet,
    pub residential: FactorSet,
}

impl DemandBreakdown {
    /// Factor set for one sector.
    pub fn sector(&self, sector: Sector) -> &FactorSet {
        match sector {
            Sector::Commercial => &self.commercial,
            Sector::Industrial => &self.industrial,
            Sector::Office => &self.office,
            Sector::Storage => &self.storage,
            Sector::Residential => &self.residential,
        }
    }
}

/// Pass bookkeeping for host diagnostics: which snapshot generation was
/// consumed last and how many passes have run.
#[derive(Resource, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PassLog {
    pub last_generation: u64,
    pub passes_run: u64,
}

// ---------------------------------------------------------------------------
// Calculator outcomes (pre-publication)
// ---------------------------------------------------------------------------

/// Scores one calculator produced for a single good.
#[derive(Debug, Clone, Copy)]
pub struct GoodScore {
    pub good: Good,
    pub demand: i32,
    pub building_demand: i32,
}

/// Everything one sector calculator produces in a pass. The pass system
/// merges outcomes into [`DemandReport`] and [`DemandBreakdown`].
#[derive(Debug, Clone, Default)]
pub struct SectorOutcome {
    pub company: i32,
    pub building: i32,
    pub factors: FactorSet,
    pub scores: Vec<GoodScore>,
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
