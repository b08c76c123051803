//! Industrial, office and storage demand scoring.
//!
//! One pipeline scores every produceable non-commercial good: the
//! commercial need/availability core plus workforce pressure, flagship
//! city-modifier points and the production shortfall factor. Materiality
//! routes each good into the industrial or office aggregate; material
//! tradable goods additionally feed the storage sub-score off the demand
//! they scored in the same pass.

use crate::catalog::{Good, GoodCatalog};
use crate::factors::{DemandFactor, FactorSet};
use crate::params::{DemandParams, IndustrialParams, StorageParams};
use crate::report::{GoodScore, SectorOutcome};
use crate::score;
use crate::snapshot::{CityCounters, CountersSnapshot, GoodCounters, EDUCATION_TIERS};

/// First education tier of the educated workforce band.
const EDUCATED_BAND_START: usize = 2;

// ---------------------------------------------------------------------------
// Per-pass factors
// ---------------------------------------------------------------------------

/// Pressure from one workforce band: positive when employable citizens
/// outnumber open workplaces. The +1 denominator keeps an empty band finite.
fn band_pressure(employable: i32, free_workplaces: i32, coef: f32, range: (f32, f32)) -> f32 {
    let ratio = (employable - free_workplaces) as f32 / (1 + employable).max(1) as f32;
    (coef * ratio).clamp(range.0, range.1)
}

/// Workforce pressure split into (uneducated, educated) bands. Computed once
/// per pass; the same values feed every scored good.
pub(crate) fn workforce_pressure(city: &CityCounters, params: &IndustrialParams) -> (f32, f32) {
    let band_totals = |tiers: std::ops::Range<usize>| {
        tiers.fold((0, 0), |(emp, free), t| {
            (emp + city.employable[t], free + city.free_workplaces[t])
        })
    };
    let (emp_low, free_low) = band_totals(0..EDUCATED_BAND_START);
    let (emp_high, free_high) = band_totals(EDUCATED_BAND_START..EDUCATION_TIERS);

    (
        band_pressure(
            emp_low,
            free_low,
            params.workforce_coef,
            params.uneducated_pressure_range,
        ),
        band_pressure(
            emp_high,
            free_high,
            params.workforce_coef,
            params.educated_pressure_range,
        ),
    )
}

/// City-modifier points for flagship goods; zero for everything else.
fn city_modifier_points(good: Good, city: &CityCounters) -> i32 {
    match good {
        Good::Electronics => city.industry_modifier_points,
        Good::Software => city.office_modifier_points,
        _ => 0,
    }
}

/// Production shortfall factor: positive while production trails need.
fn production_shortfall(need: i32, production: i32, params: &IndustrialParams) -> f32 {
    let ratio = (need - production) as f32 / (1 + need).max(1) as f32;
    (params.production_coef * ratio).clamp(-params.production_limit, params.production_limit)
}

/// Storage scores for one good as (company, building) demand points.
///
/// Company demand triggers when the good's same-pass demand clears the
/// threshold and warehouse capacity falls short of the implied requirement.
/// Building demand triggers on over-committed storage slots, independent of
/// the demand score.
fn storage_scores(raw_demand: i32, counters: &GoodCounters, params: &StorageParams) -> (i32, i32) {
    let required_units = raw_demand * params.units_per_demand_point;
    let company = if raw_demand > params.trigger_threshold
        && counters.storage_capacity < required_units
    {
        ((required_units - counters.storage_capacity) / params.units_per_demand_point.max(1))
            .clamp(0, 100)
    } else {
        0
    };
    let building = if counters.free_storage_slots < 0 {
        counters.free_storage_slots.saturating_neg().min(100)
    } else {
        0
    };
    (company, building)
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Accum {
    sum: i32,
    building_sum: i32,
    count: i32,
}

/// Aggregate scaling used by the industrial and storage sectors.
fn single_scaled(sum: i32, count: i32) -> i32 {
    (2 * sum / count.max(1)).clamp(0, 100)
}

/// Office company aggregate. Self-multiplicative: the summed score is scaled
/// by its own average, so one strong office good saturates the sector much
/// faster than the industrial curve. Balance is tuned against this curve; do
/// not unify with [`single_scaled`] without a retune.
fn office_scaled(sum: i32, count: i32) -> i32 {
    if count == 0 {
        return 0;
    }
    let inner = 2 * sum / count.max(1);
    (sum * inner).clamp(0, 100)
}

// ---------------------------------------------------------------------------
// The pass
// ---------------------------------------------------------------------------

/// Score all produceable non-commercial goods. Returns the industrial,
/// office and storage outcomes, in that order.
pub fn score_industrial(
    catalog: &GoodCatalog,
    snapshot: &CountersSnapshot,
    params: &DemandParams,
) -> (SectorOutcome, SectorOutcome, SectorOutcome) {
    let (uneducated, educated) = workforce_pressure(&snapshot.city, &params.industrial);

    let mut ind = Accum::default();
    let mut ofc = Accum::default();
    let mut sto = Accum::default();
    let mut ind_factors = FactorSet::default();
    let mut ofc_factors = FactorSet::default();
    let mut sto_factors = FactorSet::default();
    let mut ind_scores = Vec::new();
    let mut ofc_scores = Vec::new();

    for row in catalog.rows() {
        if !row.produceable || row.commercial {
            continue;
        }
        let Some(counters) = snapshot.good(row.good) else {
            continue;
        };

        let effect = score::tax_effect(counters.tax_rate, &params.scoring);
        let need = score::effective_need(counters.need, params.scoring.default_need);
        let available =
            score::effective_available(counters.available, counters.produce_capacity);
        let modifier = city_modifier_points(row.good, &snapshot.city);
        let shortfall = production_shortfall(need, counters.production, &params.industrial);

        let pressure = params.industrial.base_demand * need as f32 - available as f32
            + uneducated
            + educated
            + modifier as f32
            + shortfall;
        let raw = score::demand_score(pressure, effect);

        // Storage reads the demand scored in this very pass, never a cached
        // one. The building trigger fires even for goods that scored zero.
        if row.tradable && row.material {
            let (s_company, s_building) = storage_scores(raw, counters, &params.storage);
            if s_company > 0 {
                sto.sum += s_company;
                sto.count += 1;
                sto_factors.add(DemandFactor::LocalStorage, s_company);
            }
            if s_building > 0 {
                sto.building_sum += s_building;
                sto_factors.add(DemandFactor::LocalStorage, s_building);
            }
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

        // Immaterial goods belong to office companies; everything else is
        // industry. Counts and divisors stay independent per aggregate.
        let (accum, factors, scores) = if row.material {
            (&mut ind, &mut ind_factors, &mut ind_scores)
        } else {
            (&mut ofc, &mut ofc_factors, &mut ofc_scores)
        };
        accum.sum += raw;
        accum.building_sum += building;
        accum.count += 1;
        factors.add(DemandFactor::LocalDemand, raw);
        factors.add(DemandFactor::UneducatedWorkforce, uneducated.round() as i32);
        factors.add(DemandFactor::EducatedWorkforce, educated.round() as i32);
        factors.add(DemandFactor::CityModifier, modifier);
        factors.add(DemandFactor::ProductionShortfall, shortfall.round() as i32);
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

    let industrial = SectorOutcome {
        company: if ind.count == 0 {
            0
        } else {
            single_scaled(ind.sum, ind.count)
        },
        building: if snapshot.city.industrial_unlocked {
            single_scaled(ind.building_sum, ind.count)
        } else {
            0
        },
        factors: ind_factors,
        scores: ind_scores,
    };
    let office = SectorOutcome {
        company: office_scaled(ofc.sum, ofc.count),
        building: if snapshot.city.office_unlocked {
            single_scaled(ofc.building_sum, ofc.count)
        } else {
            0
        },
        factors: ofc_factors,
        scores: ofc_scores,
    };
    let storage = SectorOutcome {
        company: single_scaled(sto.sum, sto.count),
        building: if snapshot.city.storage_unlocked {
            single_scaled(sto.building_sum, sto.count)
        } else {
            0
        },
        factors: sto_factors,
        scores: Vec::new(),
    };

    (industrial, office, storage)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
