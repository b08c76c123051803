//! Data-driven demand tunables.
//!
//! Every coefficient, neutral point and clamp bound the scoring pass uses
//! lives in one [`DemandParams`] resource so hosts can rebalance without
//! recompilation. Systems read `Res<DemandParams>`; no module-level balance
//! constants exist. Defaults encode the shipped balance values.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shared scoring parameters
// ---------------------------------------------------------------------------

/// Tunables shared by the commercial and industrial scoring pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringParams {
    /// Demand change per percent of tax above the neutral rate. Negative:
    /// higher taxes suppress demand.
    pub tax_coef: f32,
    /// Tax rate in percent at which taxes neither help nor hurt demand.
    pub neutral_tax_rate: i32,
    /// Need substituted when a good reports zero need. Zero need means "no
    /// data yet", so scoring assumes a neutral baseline appetite instead.
    pub default_need: i32,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            tax_coef: -0.05,
            neutral_tax_rate: 10,
            default_need: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// Commercial parameters
// ---------------------------------------------------------------------------

/// Tunables for the commercial pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommercialParams {
    /// Multiplier on effective need before available stock is subtracted.
    pub base_demand: f32,
    /// Hotel rooms wanted per tourist. Lodging demand is forced to maximum
    /// while `tourists * fraction` exceeds operating lodging units.
    pub hotel_room_fraction: f32,
}

impl Default for CommercialParams {
    fn default() -> Self {
        Self {
            base_demand: 1.0,
            hotel_room_fraction: 0.5,
        }
    }
}

// ---------------------------------------------------------------------------
// Industrial / office parameters
// ---------------------------------------------------------------------------

/// Tunables for the industrial and office pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustrialParams {
    /// Multiplier on effective need before available stock is subtracted.
    pub base_demand: f32,
    /// Scale on the per-band workforce surplus ratio.
    pub workforce_coef: f32,
    /// Clamp range for the uneducated-band workforce pressure (tiers 0-1).
    pub uneducated_pressure_range: (f32, f32),
    /// Clamp range for the educated-band workforce pressure (tiers 2-4).
    pub educated_pressure_range: (f32, f32),
    /// Scale on the production shortfall ratio.
    pub production_coef: f32,
    /// Symmetric clamp bound for the production shortfall factor.
    pub production_limit: f32,
}

impl Default for IndustrialParams {
    fn default() -> Self {
        Self {
            base_demand: 1.0,
            workforce_coef: 20.0,
            uneducated_pressure_range: (-10.0, 15.0),
            educated_pressure_range: (-10.0, 10.0),
            production_coef: 30.0,
            production_limit: 20.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Storage parameters
// ---------------------------------------------------------------------------

/// Tunables for the storage sub-score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageParams {
    /// Minimum same-pass demand before a good can trigger storage demand.
    pub trigger_threshold: i32,
    /// Warehouse units a good should have per point of demand.
    pub units_per_demand_point: i32,
}

impl Default for StorageParams {
    fn default() -> Self {
        Self {
            trigger_threshold: 20,
            units_per_demand_point: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// Residential parameters
// ---------------------------------------------------------------------------

/// Tunables for the residential pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResidentialParams {
    /// Scale on happiness above/below the neutral point.
    pub happiness_coef: f32,
    /// Floor applied to average happiness before the factor is computed.
    pub min_happiness: f32,
    /// Happiness at which the factor is zero.
    pub neutral_happiness: f32,
    /// Scale on the homelessness rate deviation.
    pub homeless_coef: f32,
    /// Homeless households per 100 moved-in households considered normal.
    pub neutral_homelessness: f32,
    /// Symmetric clamp bound for the homelessness factor.
    pub homeless_factor_limit: f32,
    /// Scale on the averaged residential tax deviation.
    pub tax_coef: f32,
    /// Scale on the free-study-position pressure.
    pub student_coef: f32,
    /// Divisor applied to summed free study positions before clamping.
    pub student_pressure_divisor: f32,
    /// Upper clamp bound for the student factor (lower bound is zero).
    pub student_factor_limit: f32,
    /// Unemployment rate in percent at which the factor is zero.
    pub neutral_unemployment: f32,
    /// Household demand is forced to zero while more households than this
    /// are queued to move in. Guards against runaway immigration loops.
    pub backlog_hard_cap: i32,
}

impl Default for ResidentialParams {
    fn default() -> Self {
        Self {
            happiness_coef: 2.0,
            min_happiness: 20.0,
            neutral_happiness: 50.0,
            homeless_coef: 1.5,
            neutral_homelessness: 2.0,
            homeless_factor_limit: 30.0,
            tax_coef: 1.5,
            student_coef: 1.0,
            student_pressure_divisor: 200.0,
            student_factor_limit: 20.0,
            neutral_unemployment: 5.0,
            backlog_hard_cap: 500,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level DemandParams resource
// ---------------------------------------------------------------------------

/// Central resource holding all demand tunables.
///
/// Hosts may overwrite this wholesale (settings screen, difficulty preset,
/// mod data); the next pass picks the new values up automatically.
#[derive(Resource, Debug, Clone, Serialize, Deserialize, Default)]
pub struct DemandParams {
    pub scoring: ScoringParams,
    pub commercial: CommercialParams,
    pub industrial: IndustrialParams,
    pub storage: StorageParams,
    pub residential: ResidentialParams,
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_shipped_balance() {
        let params = DemandParams::default();

        // Shared scoring
        assert!((params.scoring.tax_coef + 0.05).abs() < f32::EPSILON);
        assert_eq!(params.scoring.neutral_tax_rate, 10);
        assert_eq!(params.scoring.default_need, 100);

        // Commercial
        assert!((params.commercial.base_demand - 1.0).abs() < f32::EPSILON);
        assert!((params.commercial.hotel_room_fraction - 0.5).abs() < f32::EPSILON);

        // Industrial
        assert!((params.industrial.base_demand - 1.0).abs() < f32::EPSILON);
        assert!((params.industrial.workforce_coef - 20.0).abs() < f32::EPSILON);
        assert_eq!(params.industrial.uneducated_pressure_range, (-10.0, 15.0));
        assert_eq!(params.industrial.educated_pressure_range, (-10.0, 10.0));
        assert!((params.industrial.production_coef - 30.0).abs() < f32::EPSILON);
        assert!((params.industrial.production_limit - 20.0).abs() < f32::EPSILON);

        // Storage
        assert_eq!(params.storage.trigger_threshold, 20);
        assert_eq!(params.storage.units_per_demand_point, 10);

        // Residential
        assert!((params.residential.happiness_coef - 2.0).abs() < f32::EPSILON);
        assert!((params.residential.min_happiness - 20.0).abs() < f32::EPSILON);
        assert!((params.residential.neutral_happiness - 50.0).abs() < f32::EPSILON);
        assert!((params.residential.homeless_coef - 1.5).abs() < f32::EPSILON);
        assert!((params.residential.neutral_homelessness - 2.0).abs() < f32::EPSILON);
        assert!((params.residential.homeless_factor_limit - 30.0).abs() < f32::EPSILON);
        assert!((params.residential.tax_coef - 1.5).abs() < f32::EPSILON);
        assert!((params.residential.student_coef - 1.0).abs() < f32::EPSILON);
        assert!((params.residential.student_pressure_divisor - 200.0).abs() < f32::EPSILON);
        assert!((params.residential.student_factor_limit - 20.0).abs() < f32::EPSILON);
        assert!((params.residential.neutral_unemployment - 5.0).abs() < f32::EPSILON);
        assert_eq!(params.residential.backlog_hard_cap, 500);
    }

    #[test]
    fn params_survive_serde_roundtrip() {
        let mut params = DemandParams::default();
        params.commercial.base_demand = 1.4;
        params.residential.backlog_hard_cap = 1200;

        let json = serde_json::to_string(&params).unwrap();
        let restored: DemandParams = serde_json::from_str(&json).unwrap();

        assert!((restored.commercial.base_demand - 1.4).abs() < f32::EPSILON);
        assert_eq!(restored.residential.backlog_hard_cap, 1200);
    }
}
