//! Integration tests for the demand engine using the `TestBench` harness.
//!
//! These tests spin up a headless Bevy App with `DemandPlugin` and verify
//! the publish/score/read cycle end to end: generation gating, report
//! assembly, factor breakdowns and serialization.

use crate::catalog::{DensityTier, Good, GoodCatalog, Sector};
use crate::factors::DemandFactor;
use crate::params::DemandParams;
use crate::report::{DemandBreakdown, DemandReport};
use crate::snapshot::{CountersSnapshot, GoodCounters, RESIDENTIAL_TAX_BRACKETS};
use crate::test_bench::{busy_city_snapshot, TestBench};

/// Counters that score demand 100 at neutral tax: need 200 against 100 on
/// shelves, production covering need so no shortfall interferes.
fn hot_seller() -> GoodCounters {
    GoodCounters {
        need: 200,
        available: 100,
        production: 200,
        tax_rate: 10,
        ..Default::default()
    }
}

// ===========================================================================
// 1. Bootstrap
// ===========================================================================

#[test]
fn plugin_installs_default_resources() {
    let bench = TestBench::new();

    let report = bench.report();
    assert!(report.goods.is_empty(), "nothing scored yet");
    assert!(report.excluded.is_empty());
    assert_eq!(report.commercial.company, 0);
    assert_eq!(report.residential.household, 0);

    assert_eq!(bench.pass_log().passes_run, 0);
    assert_eq!(bench.pass_log().last_generation, 0);
    assert_eq!(
        bench.resource::<GoodCatalog>().rows().len(),
        Good::all().len()
    );
    assert_eq!(bench.resource::<DemandParams>().scoring.neutral_tax_rate, 10);
}

#[test]
fn no_pass_runs_without_a_publish() {
    let mut bench = TestBench::new();
    bench.tick(5);
    assert_eq!(
        bench.pass_log().passes_run,
        0,
        "generation 0 must never be scored"
    );
}

// ===========================================================================
// 2. Generation gating
// ===========================================================================

#[test]
fn first_publish_scores_one_pass() {
    let mut bench = TestBench::new();
    bench.score(CountersSnapshot::default().with_good(Good::Meals, hot_seller()));

    assert_eq!(bench.pass_log().passes_run, 1);
    assert_eq!(bench.pass_log().last_generation, 1);
    bench.assert_good_demand(Good::Meals, 100);
}

#[test]
fn each_publish_and_tick_cycle_scores_exactly_once() {
    let mut bench = TestBench::new();
    for expected in 1..=3u64 {
        bench.publish(CountersSnapshot::default().with_good(Good::Meals, hot_seller()));
        bench.tick(1);
        assert_eq!(
            bench.pass_log().passes_run,
            expected,
            "a single tick must run the pass for a fresh generation"
        );
    }
}

#[test]
fn repeat_ticks_do_not_rescore() {
    let mut bench = TestBench::new();
    bench.score(CountersSnapshot::default().with_good(Good::Meals, hot_seller()));
    bench.tick(10);

    assert_eq!(
        bench.pass_log().passes_run,
        1,
        "an unchanged generation is skipped"
    );
}

#[test]
fn stale_republish_keeps_previous_report() {
    let mut bench = TestBench::new();
    bench.score(CountersSnapshot::default().with_good(Good::Meals, hot_seller()));

    // Same generation, very different counters: the pass must not consume it.
    bench.publish_stale(CountersSnapshot::default().with_good(
        Good::Meals,
        GoodCounters {
            need: 120,
            available: 120,
            production: 120,
            tax_rate: 10,
            ..Default::default()
        },
    ));
    bench.tick(1);

    bench.assert_good_demand(Good::Meals, 100);
    assert_eq!(bench.pass_log().passes_run, 1);
}

#[test]
fn fresh_generation_rescores() {
    let mut bench = TestBench::new();
    bench.score(CountersSnapshot::default().with_good(Good::Meals, hot_seller()));
    bench.score(CountersSnapshot::default().with_good(
        Good::Meals,
        GoodCounters {
            need: 120,
            available: 120,
            production: 120,
            tax_rate: 10,
            ..Default::default()
        },
    ));

    assert_eq!(bench.pass_log().passes_run, 2);
    assert_eq!(bench.pass_log().last_generation, 2);
    bench.assert_good_demand(Good::Meals, 0);
    bench.assert_excluded(Good::Meals);
}

#[test]
fn only_latest_publish_is_scored() {
    let mut bench = TestBench::new();
    bench.publish(CountersSnapshot::default().with_good(Good::Meals, hot_seller()));
    bench.publish(CountersSnapshot::default().with_good(Good::Furniture, hot_seller()));
    bench.tick(1);

    assert_eq!(bench.pass_log().passes_run, 1);
    assert_eq!(bench.pass_log().last_generation, 2);
    bench.assert_good_demand(Good::Furniture, 100);
    bench.assert_excluded(Good::Meals);
}

// ===========================================================================
// 3. Report assembly
// ===========================================================================

#[test]
fn rows_follow_catalog_order() {
    let mut bench = TestBench::new();
    bench.score(busy_city_snapshot());

    let report = bench.report();
    assert_eq!(report.goods.len(), Good::all().len());
    for (row, &good) in report.goods.iter().zip(Good::all()) {
        assert_eq!(row.good, good);
    }
}

#[test]
fn dashboard_row_carries_company_counters() {
    let mut bench = TestBench::new();
    bench.score(CountersSnapshot::default().with_good(
        Good::Meals,
        GoodCounters {
            need: 200,
            available: 100,
            production: 200,
            free_properties: 2,
            propertyless_companies: 1,
            companies: 4,
            workers: 30,
            max_workers: 60,
            tax_rate: 20,
            ..Default::default()
        },
    ));

    let row = bench.report().good(Good::Meals).unwrap();
    assert_eq!(row.demand, 50, "tax effect -0.5 halves the clamped 100");
    assert_eq!(row.building_demand, 0, "a free property is still open");
    assert_eq!(row.free_properties, 2);
    assert_eq!(row.companies, 4);
    assert_eq!(row.workers, 30);
    assert_eq!(row.capacity_percent, 50);
    assert_eq!(row.tax_factor, -50);
    assert_eq!(bench.breakdown().commercial.get(DemandFactor::Taxes), -50);
}

#[test]
fn missing_goods_are_excluded() {
    let mut bench = TestBench::new();
    bench.score(CountersSnapshot::default().with_good(Good::Meals, hot_seller()));

    let report = bench.report();
    assert!(!report.is_excluded(Good::Meals));
    assert_eq!(
        report.excluded.len(),
        Good::all().len() - 1,
        "every good without counters sits on the excluded list"
    );
    bench.assert_excluded(Good::Grain);
    bench.assert_excluded(Good::Software);
}

#[test]
fn zero_demand_goods_join_the_excluded_list() {
    let mut bench = TestBench::new();
    bench.score(
        CountersSnapshot::default()
            .with_good(Good::Meals, hot_seller())
            // Fully stocked: scores zero but still gets a dashboard row.
            .with_good(
                Good::ConvenienceFood,
                GoodCounters {
                    need: 50,
                    available: 200,
                    production: 50,
                    tax_rate: 10,
                    ..Default::default()
                },
            ),
    );

    bench.assert_good_demand(Good::ConvenienceFood, 0);
    bench.assert_excluded(Good::ConvenienceFood);
    assert!(!bench.report().is_excluded(Good::Meals));
}

#[test]
fn hotel_shortage_pegs_lodging_demand() {
    let mut bench = TestBench::new();
    let mut snapshot =
        CountersSnapshot::default().with_good(Good::Lodging, GoodCounters::default());
    snapshot.city.tourists = 1000;
    snapshot.city.lodging_units = 100;
    bench.score(snapshot);

    bench.assert_good_demand(Good::Lodging, 100);
    assert_eq!(
        bench.breakdown().commercial.get(DemandFactor::TouristDemand),
        100
    );
}

#[test]
fn sector_indices_publish_through_the_report() {
    let mut bench = TestBench::new();
    bench.score(
        CountersSnapshot::default()
            .with_good(Good::Furniture, hot_seller())
            .with_good(
                Good::Grain,
                GoodCounters {
                    need: 160,
                    available: 60,
                    production: 160,
                    storage_capacity: 700,
                    tax_rate: 10,
                    ..Default::default()
                },
            )
            .with_good(
                Good::Media,
                GoodCounters {
                    need: 105,
                    available: 100,
                    production: 105,
                    tax_rate: 10,
                    ..Default::default()
                },
            ),
    );

    let report = bench.report();
    assert_eq!(report.sector(Sector::Commercial).map(|s| s.company), Some(100));
    assert_eq!(report.sector(Sector::Industrial).map(|s| s.company), Some(100));
    assert_eq!(report.sector(Sector::Office).map(|s| s.company), Some(50));
    assert_eq!(report.sector(Sector::Storage).map(|s| s.company), Some(60));
    assert!(
        report.sector(Sector::Residential).is_none(),
        "residential publishes households and tiers, not company demand"
    );
}

#[test]
fn residential_outcome_flows_into_report_and_breakdown() {
    let mut bench = TestBench::new();
    let mut snapshot = CountersSnapshot::default();
    snapshot.city.avg_happiness = 70.0;
    snapshot.city.homeless_households = 40;
    snapshot.city.moved_in_households = 999;
    snapshot.city.residential_tax_rates = [10; RESIDENTIAL_TAX_BRACKETS];
    snapshot.city.unemployment_rate = 2.0;
    snapshot.city.free_study_positions = [200; 5];
    for tier in &mut snapshot.city.residential_tiers {
        tier.required_free_homes = 100;
        tier.free_homes = 0;
    }
    bench.score(snapshot);

    let report = bench.report();
    assert_eq!(report.residential.household, 45);
    assert_eq!(report.residential.tier(DensityTier::Low), 100);
    assert_eq!(report.residential.tier(DensityTier::High), 100);

    let factors = &bench.breakdown().residential;
    assert_eq!(factors.get(DemandFactor::Happiness), 40);
    assert_eq!(factors.get(DemandFactor::Homelessness), -3);
    assert_eq!(factors.get(DemandFactor::Unemployment), 3);
    assert_eq!(factors.get(DemandFactor::Students), 5);
}

#[test]
fn params_override_changes_scoring() {
    let mut params = DemandParams::default();
    params.scoring.neutral_tax_rate = 0;
    let mut bench = TestBench::new().with_params(params);
    bench.score(CountersSnapshot::default().with_good(Good::Meals, hot_seller()));

    // With neutral at 0, the 10% rate now reads as a -0.5 effect.
    bench.assert_good_demand(Good::Meals, 50);
}

// ===========================================================================
// 4. Serialization
// ===========================================================================

#[test]
fn report_serialization_is_idempotent() {
    let mut bench = TestBench::new();
    bench.score(busy_city_snapshot());

    let json = serde_json::to_string(bench.report()).unwrap();
    let back: DemandReport = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string(&back).unwrap(), json);
}

#[test]
fn breakdown_serialization_is_idempotent() {
    let mut bench = TestBench::new();
    bench.score(busy_city_snapshot());

    let json = serde_json::to_string(bench.breakdown()).unwrap();
    let back: DemandBreakdown = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string(&back).unwrap(), json);
}

// ===========================================================================
// 5. Busy city sanity
// ===========================================================================

#[test]
fn busy_city_pass_stays_in_range() {
    let mut bench = TestBench::new();
    bench.score(busy_city_snapshot());

    let report = bench.report();
    for row in &report.goods {
        assert!(
            (0..=100).contains(&row.demand),
            "{} demand {} out of range",
            row.good.name(),
            row.demand
        );
        assert!((0..=100).contains(&row.building_demand));
    }
    for sector in [
        report.commercial,
        report.industrial,
        report.office,
        report.storage,
    ] {
        assert!((0..=100).contains(&sector.company));
        assert!((0..=100).contains(&sector.building));
    }
    assert!((0..=200).contains(&report.residential.household));
    for tier in report.residential.tiers {
        assert!((0..=100).contains(&tier));
    }
}

#[test]
fn busy_city_pass_is_deterministic() {
    let mut first = TestBench::new();
    first.score(busy_city_snapshot());
    let mut second = TestBench::new();
    second.score(busy_city_snapshot());

    assert_eq!(
        serde_json::to_string(first.report()).unwrap(),
        serde_json::to_string(second.report()).unwrap()
    );
    assert_eq!(
        serde_json::to_string(first.breakdown()).unwrap(),
        serde_json::to_string(second.breakdown()).unwrap()
    );
}
