//! Per-pass input counters, assembled by the host simulation.
//!
//! The engine never walks live world state. Each recompute pass reads one
//! immutable [`CountersSnapshot`] that the host publishes by overwriting the
//! resource and bumping its generation stamp. An unchanged stamp means no
//! fresh data arrived and the pass is skipped.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::{DensityTier, Good};

/// Number of citizen education tiers the host reports workforce counters for.
pub const EDUCATION_TIERS: usize = 5;

/// Number of residential tax brackets averaged into the residential tax factor.
pub const RESIDENTIAL_TAX_BRACKETS: usize = 5;

// ---------------------------------------------------------------------------
// Per-good counters
// ---------------------------------------------------------------------------

/// Counters for a single good, gathered by the host from companies,
/// buildings and storage yards.
///
/// All fields are plain counts for one tick. `free_storage_slots` may go
/// negative when warehouses are over-committed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GoodCounters {
    /// Units consumers asked for this tick. Zero is treated as "no data yet"
    /// by the scoring pass, not as zero appetite.
    pub need: i32,
    /// Units currently on shelves or in stock.
    pub available: i32,
    /// Units per tick the existing companies could produce at full staff.
    pub produce_capacity: i32,
    /// Units actually produced this tick.
    pub production: i32,
    /// Vacant properties zoned for this good's companies.
    pub free_properties: i32,
    /// Active companies waiting for a property.
    pub propertyless_companies: i32,
    /// Active companies trading this good.
    pub companies: i32,
    /// Workers currently employed by those companies.
    pub workers: i32,
    /// Worker slots those companies offer in total.
    pub max_workers: i32,
    /// Warehouse units allocated to this good.
    pub storage_capacity: i32,
    /// Unclaimed warehouse slots; negative when over-committed.
    pub free_storage_slots: i32,
    /// Sales tax rate for this good, in whole percent.
    pub tax_rate: i32,
}

// ---------------------------------------------------------------------------
// City-level counters
// ---------------------------------------------------------------------------

/// Residential counters for one density tier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ResidentialTierCounters {
    /// How many free homes the city wants to keep available in this tier.
    pub required_free_homes: i32,
    /// Free homes actually available.
    pub free_homes: i32,
    /// Whether this tier is zoned and allowed to grow. Disabled tiers
    /// publish zero demand regardless of the formula.
    pub enabled: bool,
}

/// City-wide scalars feeding the residential pass and the cross-sector
/// factors (workforce pressure, tourism, zoning unlocks).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityCounters {
    /// Average citizen happiness, 0-100.
    pub avg_happiness: f32,
    /// Households registered as homeless.
    pub homeless_households: i32,
    /// Households that have moved in over the city's lifetime.
    pub moved_in_households: i32,
    /// Households queued to move in but not yet housed.
    pub moving_in_backlog: i32,
    /// Tourists currently visiting.
    pub tourists: i32,
    /// Hotel room units currently operating.
    pub lodging_units: i32,
    /// Unemployment rate in percent.
    pub unemployment_rate: f32,
    /// Free study positions per education tier; the residential student
    /// factor sums these.
    pub free_study_positions: [i32; EDUCATION_TIERS],
    /// Employable citizens per education tier.
    pub employable: [i32; EDUCATION_TIERS],
    /// Unfilled workplaces per education tier.
    pub free_workplaces: [i32; EDUCATION_TIERS],
    /// Residential tax rates per bracket, in whole percent.
    pub residential_tax_rates: [i32; RESIDENTIAL_TAX_BRACKETS],
    /// Additive demand points for the industry flagship good (Electronics).
    pub industry_modifier_points: i32,
    /// Additive demand points for the office flagship good (Software).
    pub office_modifier_points: i32,
    /// Sector zoning unlocks. Building demand for a locked sector is 0.
    pub commercial_unlocked: bool,
    pub industrial_unlocked: bool,
    pub office_unlocked: bool,
    pub storage_unlocked: bool,
    /// Per-density-tier residential counters, lowest density first.
    pub residential_tiers: [ResidentialTierCounters; 3],
}

impl Default for CityCounters {
    fn default() -> Self {
        Self {
            avg_happiness: 0.0,
            homeless_households: 0,
            moved_in_households: 0,
            moving_in_backlog: 0,
            tourists: 0,
            lodging_units: 0,
            unemployment_rate: 0.0,
            free_study_positions: [0; EDUCATION_TIERS],
            employable: [0; EDUCATION_TIERS],
            free_workplaces: [0; EDUCATION_TIERS],
            residential_tax_rates: [0; RESIDENTIAL_TAX_BRACKETS],
            industry_modifier_points: 0,
            office_modifier_points: 0,
            commercial_unlocked: true,
            industrial_unlocked: true,
            office_unlocked: true,
            storage_unlocked: true,
            residential_tiers: [ResidentialTierCounters {
                required_free_homes: 0,
                free_homes: 0,
                enabled: true,
            }; 3],
        }
    }
}

impl CityCounters {
    /// Counters for one residential density tier.
    pub fn tier(&self, tier: DensityTier) -> &ResidentialTierCounters {
        &self.residential_tiers[tier as usize]
    }
}

// ---------------------------------------------------------------------------
// The snapshot resource
// ---------------------------------------------------------------------------

/// One pass worth of input data.
///
/// The host owns the recompute cadence: it gathers counters on its own
/// schedule, overwrites this resource and bumps `generation`. Generation 0 is
/// the initial empty snapshot; producers start stamping at 1. Goods without a
/// counter record are skipped for the pass and reported on the excluded list.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountersSnapshot {
    /// Stamp the producer bumps on every publish. The pass runs at most once
    /// per stamp value.
    pub generation: u64,
    /// City-level scalars.
    pub city: CityCounters,
    goods: HashMap<Good, GoodCounters>,
}

impl CountersSnapshot {
    /// Counter record for a good, if the host supplied one.
    pub fn good(&self, good: Good) -> Option<&GoodCounters> {
        self.goods.get(&good)
    }

    /// Insert or replace the counter record for a good.
    pub fn set_good(&mut self, good: Good, counters: GoodCounters) {
        self.goods.insert(good, counters);
    }

    /// Builder-style variant of [`Self::set_good`] for test and host setup.
    pub fn with_good(mut self, good: Good, counters: GoodCounters) -> Self {
        self.set_good(good, counters);
        self
    }

    /// Number of goods with counter records.
    pub fn good_count(&self) -> usize {
        self.goods.len()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
