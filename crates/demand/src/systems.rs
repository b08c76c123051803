//! The recompute pass.
//!
//! One system gates on the snapshot generation stamp, runs the sector
//! calculators and publishes their results by overwriting [`DemandReport`]
//! and [`DemandBreakdown`] wholesale. Readers never observe a half-updated
//! report, and an unchanged stamp costs nothing but the comparison.

use bevy::prelude::*;

use crate::catalog::GoodCatalog;
use crate::commercial::score_commercial;
use crate::industrial::score_industrial;
use crate::params::DemandParams;
use crate::report::{
    DemandBreakdown, DemandReport, GoodDemand, GoodScore, PassLog, ResidentialDemand, SectorDemand,
};
use crate::residential::score_residential;
use crate::score;
use crate::snapshot::CountersSnapshot;

/// Recompute all demand indices from the current counter snapshot.
///
/// Skips silently while the snapshot generation matches the last scored one,
/// so the host controls the cadence purely by publishing.
pub fn run_demand_pass(
    snapshot: Res<CountersSnapshot>,
    catalog: Res<GoodCatalog>,
    params: Res<DemandParams>,
    mut report: ResMut<DemandReport>,
    mut breakdown: ResMut<DemandBreakdown>,
    mut log: ResMut<PassLog>,
) {
    if snapshot.generation == log.last_generation {
        return;
    }

    let commercial = score_commercial(&catalog, &snapshot, &params);
    let (industrial, office, storage) = score_industrial(&catalog, &snapshot, &params);
    let residential = score_residential(&snapshot.city, &params);

    // Per-good scores arrive from three calculators; index them by good so
    // the dashboard rows come out in catalog order no matter who scored what.
    let mut scored: Vec<Option<GoodScore>> = vec![None; catalog.rows().len()];
    for score in commercial
        .scores
        .iter()
        .chain(industrial.scores.iter())
        .chain(office.scores.iter())
    {
        scored[score.good as usize] = Some(*score);
    }

    let mut goods = Vec::with_capacity(snapshot.good_count());
    let mut excluded = Vec::new();
    for row in catalog.rows() {
        let Some(counters) = snapshot.good(row.good) else {
            warn!("snapshot carries no counters for {}", row.good.name());
            excluded.push(row.good);
            continue;
        };
        let (demand, building_demand) = scored[row.good as usize]
            .map(|s| (s.demand, s.building_demand))
            .unwrap_or((0, 0));
        let effect = score::tax_effect(counters.tax_rate, &params.scoring);
        goods.push(GoodDemand {
            good: row.good,
            demand,
            building_demand,
            free_properties: counters.free_properties,
            companies: counters.companies,
            workers: counters.workers,
            capacity_percent: score::capacity_percent(counters.workers, counters.max_workers),
            tax_factor: score::tax_factor_points(effect),
        });
        if demand == 0 {
            excluded.push(row.good);
        }
    }

    *report = DemandReport {
        commercial: SectorDemand {
            company: commercial.company,
            building: commercial.building,
        },
        industrial: SectorDemand {
            company: industrial.company,
            building: industrial.building,
        },
        office: SectorDemand {
            company: office.company,
            building: office.building,
        },
        storage: SectorDemand {
            company: storage.company,
            building: storage.building,
        },
        residential: ResidentialDemand {
            household: residential.household,
            tiers: residential.tiers,
        },
        goods,
        excluded,
    };
    *breakdown = DemandBreakdown {
        commercial: commercial.factors,
        industrial: industrial.factors,
        office: office.factors,
        storage: storage.factors,
        residential: residential.factors,
    };

    log.last_generation = snapshot.generation;
    log.passes_run += 1;
    debug!(
        "demand pass {} for generation {}: commercial {} industrial {} office {} storage {} household {}",
        log.passes_run,
        log.last_generation,
        report.commercial.company,
        report.industrial.company,
        report.office.company,
        report.storage.company,
        report.residential.household,
    );
}
