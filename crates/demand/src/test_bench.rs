//! # TestBench — headless harness for demand engine tests
//!
//! Wraps `bevy::app::App` + `DemandPlugin` so tests and benches can drive
//! recompute passes without a host simulation: build a snapshot, publish it,
//! tick, read the report back.

use bevy::app::App;
use bevy::prelude::*;

use crate::catalog::Good;
use crate::params::DemandParams;
use crate::report::{DemandBreakdown, DemandReport, PassLog};
use crate::snapshot::{CountersSnapshot, GoodCounters};
use crate::DemandPlugin;

/// A headless Bevy App wrapping `DemandPlugin`.
///
/// The bench owns the generation counter: every [`TestBench::publish`] stamps
/// the snapshot with the next generation, exactly like a host simulation
/// publishing fresh counters.
pub struct TestBench {
    app: App,
    generation: u64,
}

impl TestBench {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// A bench with every resource at its default. No pass has run yet.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(DemandPlugin);
        // One update so startup schedules and plugin setup complete before
        // the first publish.
        app.update();
        Self { app, generation: 0 }
    }

    /// Replace the tuning parameters before scoring anything.
    pub fn with_params(mut self, params: DemandParams) -> Self {
        self.app.world_mut().insert_resource(params);
        self
    }

    // -----------------------------------------------------------------------
    // Driving the engine
    // -----------------------------------------------------------------------

    /// Publish a snapshot stamped with the next generation.
    pub fn publish(&mut self, mut snapshot: CountersSnapshot) {
        self.generation += 1;
        snapshot.generation = self.generation;
        self.app.world_mut().insert_resource(snapshot);
    }

    /// Overwrite the snapshot's counters without bumping the generation, the
    /// way a host republishing unchanged data would.
    pub fn publish_stale(&mut self, mut snapshot: CountersSnapshot) {
        snapshot.generation = self.generation;
        self.app.world_mut().insert_resource(snapshot);
    }

    /// Run the `FixedUpdate` schedule N times, one recompute opportunity
    /// each. Driven directly on the world: headless updates report near-zero
    /// frame deltas, so the fixed-timestep accumulator would never fire.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Publish a snapshot and tick once so the pass consumes it.
    pub fn score(&mut self, snapshot: CountersSnapshot) {
        self.publish(snapshot);
        self.tick(1);
    }

    // -----------------------------------------------------------------------
    // Reading results
    // -----------------------------------------------------------------------

    pub fn report(&self) -> &DemandReport {
        self.app.world().resource::<DemandReport>()
    }

    pub fn breakdown(&self) -> &DemandBreakdown {
        self.app.world().resource::<DemandBreakdown>()
    }

    pub fn pass_log(&self) -> &PassLog {
        self.app.world().resource::<PassLog>()
    }

    /// Get a reference to any resource.
    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    /// Access the ECS world mutably.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    /// Assert the published demand index for a good.
    pub fn assert_good_demand(&self, good: Good, expected: i32) {
        let actual = self.report().good(good).map(|row| row.demand);
        assert_eq!(
            actual,
            Some(expected),
            "Expected demand {expected} for {}, got {actual:?}",
            good.name()
        );
    }

    /// Assert a good sits on the excluded list.
    pub fn assert_excluded(&self, good: Good) {
        assert!(
            self.report().is_excluded(good),
            "Expected {} on the excluded list, got {:?}",
            good.name(),
            self.report().excluded
        );
    }
}

// ---------------------------------------------------------------------------
// Canned snapshots
// ---------------------------------------------------------------------------

/// A busy mid-game snapshot with counters for every catalog good and a
/// populated city. Values vary per good so aggregates exercise real mixes.
pub fn busy_city_snapshot() -> CountersSnapshot {
    let mut snapshot = CountersSnapshot::default();

    let city = &mut snapshot.city;
    city.avg_happiness = 68.0;
    city.homeless_households = 25;
    city.moved_in_households = 1800;
    city.tourists = 400;
    city.lodging_units = 150;
    city.unemployment_rate = 4.5;
    city.free_study_positions = [300, 200, 150, 100, 50];
    city.employable = [800, 500, 300, 200, 100];
    city.free_workplaces = [120, 80, 60, 40, 20];
    city.residential_tax_rates = [9, 10, 11, 10, 12];
    city.industry_modifier_points = 10;
    city.office_modifier_points = 5;
    for tier in &mut city.residential_tiers {
        tier.required_free_homes = 120;
        tier.free_homes = 40;
    }

    for (i, &good) in Good::all().iter().enumerate() {
        let i = i as i32;
        snapshot.set_good(
            good,
            GoodCounters {
                need: 120 + 35 * i,
                available: 40 + 20 * (i % 5),
                produce_capacity: 90 + 10 * i,
                production: 60 + 15 * (i % 4),
                free_properties: i % 3,
                propertyless_companies: (i + 1) % 4,
                companies: 3 + i,
                workers: 40 + 12 * i,
                max_workers: 60 + 12 * i,
                storage_capacity: 400 + 100 * i,
                free_storage_slots: 50 - 10 * (i % 7),
                tax_rate: 8 + (i % 5),
            },
        );
    }

    snapshot
}
