//! Demand scoring for the city economy.
//!
//! Converts per-tick counters published by the host simulation into 0-100
//! demand indices per good and per sector, plus the factor breakdown the
//! economy dashboard renders. The engine is a pure consumer of counters: the
//! host gathers a [`snapshot::CountersSnapshot`], overwrites the resource
//! with a bumped generation stamp, and reads [`report::DemandReport`] back
//! out after the next fixed tick. Nothing in here walks live world state.

use bevy::prelude::*;

pub mod catalog;
pub mod commercial;
pub mod factors;
pub mod industrial;
pub mod params;
pub mod report;
pub mod residential;
pub mod score;
pub mod snapshot;
pub mod systems;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_bench;

/// Label for the recompute pass. Hosts schedule snapshot producers before
/// this set and report consumers after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DemandSet;

/// Installs the demand engine: all resources at their defaults plus the
/// recompute pass on [`FixedUpdate`].
///
/// The report starts out at its all-zero default; nothing is scored until
/// the host publishes a snapshot with a fresh generation stamp.
pub struct DemandPlugin;

impl Plugin for DemandPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<catalog::GoodCatalog>()
            .init_resource::<params::DemandParams>()
            .init_resource::<snapshot::CountersSnapshot>()
            .init_resource::<report::DemandReport>()
            .init_resource::<report::DemandBreakdown>()
            .init_resource::<report::PassLog>()
            .add_systems(FixedUpdate, systems::run_demand_pass.in_set(DemandSet));
    }
}
