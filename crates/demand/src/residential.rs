//! Residential demand scoring.
//!
//! One household-level demand score from city mood (happiness,
//! homelessness, taxes, unemployment, study positions), then one building
//! demand score per density tier from the tier's free-home gap plus its
//! share of the mood factors. A hard cap on the move-in backlog zeroes
//! household demand while the city cannot absorb arrivals.

use crate::catalog::DensityTier;
use crate::factors::{DemandFactor, FactorSet};
use crate::params::{DemandParams, ResidentialParams};
use crate::snapshot::{CityCounters, ResidentialTierCounters, RESIDENTIAL_TAX_BRACKETS};

// ---------------------------------------------------------------------------
// Mood factors (pure, city-level)
// ---------------------------------------------------------------------------

/// Happiness deviation from the neutral point, floored first so a miserable
/// city bottoms out instead of going arbitrarily negative.
fn happiness_factor(city: &CityCounters, params: &ResidentialParams) -> f32 {
    params.happiness_coef * (city.avg_happiness.max(params.min_happiness) - params.neutral_happiness)
}

/// Homelessness rate deviation, negative while homelessness runs above the
/// neutral rate. The +1 offset keeps a fresh city finite.
fn homelessness_factor(city: &CityCounters, params: &ResidentialParams) -> f32 {
    let rate =
        100.0 * city.homeless_households as f32 / (1 + city.moved_in_households).max(1) as f32;
    (-params.homeless_coef * (rate - params.neutral_homelessness))
        .clamp(-params.homeless_factor_limit, params.homeless_factor_limit)
}

/// Averaged residential tax deviation across all brackets, sign-flipped so
/// taxes below the neutral rate attract households.
fn tax_factor(city: &CityCounters, params: &ResidentialParams, neutral_rate: i32) -> f32 {
    let sum: i32 = city
        .residential_tax_rates
        .iter()
        .map(|&rate| -(rate - neutral_rate))
        .sum();
    params.tax_coef * sum as f32 / RESIDENTIAL_TAX_BRACKETS as f32
}

/// Pull from free study positions. Only medium and high density households
/// weigh this; the caller applies it per tier.
fn student_factor(city: &CityCounters, params: &ResidentialParams) -> f32 {
    let pressure: i32 = city.free_study_positions.iter().sum();
    params.student_coef
        * (pressure as f32 / params.student_pressure_divisor).clamp(0.0, params.student_factor_limit)
}

/// Unemployment deviation: positive while unemployment runs below neutral.
fn unemployment_factor(city: &CityCounters, params: &ResidentialParams) -> f32 {
    params.neutral_unemployment - city.unemployment_rate
}

/// Free-home gap for one tier, in percent of the required buffer. Negative
/// when the tier holds more free homes than required.
fn tier_gap(tier: &ResidentialTierCounters) -> i32 {
    100 * (tier.required_free_homes - tier.free_homes) / tier.required_free_homes.max(1)
}

// ---------------------------------------------------------------------------
// The pass
// ---------------------------------------------------------------------------

/// Everything the residential calculator produces in a pass.
#[derive(Debug, Clone, Default)]
pub struct ResidentialOutcome {
    /// Household-level demand, 0-200.
    pub household: i32,
    /// Building demand per density tier, 0-100 each.
    pub tiers: [i32; 3],
    pub factors: FactorSet,
}

/// Score household and per-tier residential demand.
pub fn score_residential(city: &CityCounters, params: &DemandParams) -> ResidentialOutcome {
    let res = &params.residential;
    let happiness = happiness_factor(city, res);
    let homelessness = homelessness_factor(city, res);
    let taxes = tax_factor(city, res, params.scoring.neutral_tax_rate);
    let students = student_factor(city, res);
    let unemployment = unemployment_factor(city, res);

    // The backlog guard wins over the formula: a city that cannot house the
    // queue must not advertise for more households.
    let household = if city.moving_in_backlog > res.backlog_hard_cap {
        0
    } else {
        ((happiness + homelessness + taxes + unemployment + students).round() as i32).clamp(0, 200)
    };

    let mut tiers = [0; 3];
    for &tier in DensityTier::all() {
        let counters = city.tier(tier);
        if !counters.enabled {
            continue;
        }
        let gap = tier_gap(counters);
        let mut factor_sum = happiness + homelessness + taxes + unemployment;
        if tier.wants_study_positions() {
            factor_sum += students;
        }
        // A net-negative mood must not mask a real housing shortage.
        let factor_points = if factor_sum < 0.0 {
            0
        } else {
            factor_sum.round() as i32
        };
        tiers[tier as usize] = (household / 2 + gap + factor_points).clamp(0, 100);
    }

    let mut factors = FactorSet::default();
    factors.add(DemandFactor::Happiness, happiness.round() as i32);
    factors.add(DemandFactor::Homelessness, homelessness.round() as i32);
    factors.add(DemandFactor::Taxes, taxes.round() as i32);
    factors.add(DemandFactor::Unemployment, unemployment.round() as i32);
    factors.add(DemandFactor::Students, students.round() as i32);

    ResidentialOutcome {
        household,
        tiers,
        factors,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
