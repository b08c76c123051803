//! Commercial demand scoring.
//!
//! Scores every tradable commercial good from its need/availability balance
//! and tax pressure, with one special case: while tourists outnumber hotel
//! capacity, lodging demand pegs at maximum. Per-good scores aggregate into
//! the commercial sector's company and building demand.

use crate::catalog::{Good, GoodCatalog};
use crate::factors::{DemandFactor, FactorSet};
use crate::params::{CommercialParams, DemandParams};
use crate::report::{GoodScore, SectorOutcome};
use crate::score;
use crate::snapshot::{CityCounters, CountersSnapshot};

/// Factor bucket a commercial good's scored demand lands in. Lodging and
/// fuel get their own buckets so the breakdown panel can call them out.
fn local_demand_bucket(good: Good) -> DemandFactor {
    match good {
        Good::Lodging => DemandFactor::TouristDemand,
        Good::Petrochemicals => DemandFactor::PetrolLocalDemand,
        _ => DemandFactor::LocalDemand,
    }
}

/// Whether tourists currently want more hotel rooms than the city operates.
pub(crate) fn lodging_shortage(city: &CityCounters, params: &CommercialParams) -> bool {
    city.tourists as f32 * params.hotel_room_fraction - city.lodging_units as f32 > 0.0
}

/// Score all tradable commercial goods and aggregate the sector.
///
/// Goods without a counter record are skipped. Only goods that scored above
/// zero count toward the sector average; a pass where nothing scored
/// publishes 0/0.
pub fn score_commercial(
    catalog: &GoodCatalog,
    snapshot: &CountersSnapshot,
    params: &DemandParams,
) -> SectorOutcome {
    let mut sum = 0;
    let mut building_sum = 0;
    let mut count = 0;
    let mut factors = FactorSet::default();
    let mut scores = Vec::new();

    for row in catalog.rows() {
        if !row.commercial || !row.tradable {
            continue;
        }
        let Some(counters) = snapshot.good(row.good) else {
            continue;
        };

        let effect = score::tax_effect(counters.tax_rate, &params.scoring);
        // Lodging keeps its real need: zero tourists genuinely means zero
        // appetite, unlike shop goods where zero means "no data yet".
        let need = if row.good == Good::Lodging {
            counters.need
        } else {
            score::effective_need(counters.need, params.scoring.default_need)
        };
        let available =
            score::effective_available(counters.available, counters.produce_capacity);
        let pressure = params.commercial.base_demand * need as f32 - available as f32;
        let mut raw = score::demand_score(pressure, effect);

        if row.good == Good::Lodging && lodging_shortage(&snapshot.city, &params.commercial) {
            raw = 100;
        }

        if raw == 0 {
            continue;
        }

        let building = score::building_demand(
            raw,
            counters.free_properties,
            counters.propertyless_companies,
        );
        let tax_points = score::tax_factor_points(effect);

        sum += raw;
        building_sum += building;
        count += 1;
        factors.add(local_demand_bucket(row.good), raw);
        factors.add(DemandFactor::Taxes, tax_points);
        factors.add(
            DemandFactor::EmptyBuildings,
            score::empty_buildings_penalty(building, raw, tax_points),
        );
        scores.push(GoodScore {
            good: row.good,
            demand: raw,
            building_demand: building,
        });
    }

    if count == 0 {
        return SectorOutcome::default();
    }

    let company = (sum / count).clamp(0, 100);
    let building = if snapshot.city.commercial_unlocked {
        (building_sum / count).clamp(0, 100)
    } else {
        0
    };

    SectorOutcome {
        company,
        building,
        factors,
        scores,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
