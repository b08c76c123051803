//! Scoring primitives shared by the commercial and industrial passes.
//!
//! Both pipelines run the same core step: build a pressure term from need
//! and availability, scale it by tax pressure, round, and clamp into the
//! published 0-100 range. The sector modules add their own factors to the
//! pressure term before calling into these helpers.

use crate::params::ScoringParams;

/// Fractional demand multiplier from a good's tax rate. Zero at the neutral
/// rate, negative above it, positive below.
pub fn tax_effect(tax_rate: i32, scoring: &ScoringParams) -> f32 {
    scoring.tax_coef * (tax_rate - scoring.neutral_tax_rate) as f32
}

/// Tax pressure in whole factor points, for the diagnostics breakdown.
pub fn tax_factor_points(effect: f32) -> i32 {
    (100.0 * effect).round() as i32
}

/// Reported need with the zero-means-no-data substitution applied. A good
/// that reports zero need has no consumption data yet, so scoring assumes a
/// neutral baseline appetite instead of zero demand.
pub fn effective_need(need: i32, default_need: i32) -> i32 {
    if need == 0 {
        default_need
    } else {
        need
    }
}

/// Stock on hand, falling back to production capacity when shelves are
/// empty. A brand-new company has capacity but no inventory yet; treating
/// that as zero supply would spike demand for a good already covered.
pub fn effective_available(available: i32, produce_capacity: i32) -> i32 {
    if available == 0 {
        produce_capacity
    } else {
        available
    }
}

/// Final demand step: clamp the pressure term, apply the tax multiplier,
/// round, and clamp into the published 0-100 range.
pub fn demand_score(pressure: f32, tax_effect: f32) -> i32 {
    let scaled = (1.0 + tax_effect) * pressure.clamp(0.0, 100.0);
    (scaled.round() as i32).clamp(0, 100)
}

/// Building demand: a company-demand score carries over to building demand
/// only while no free property is left for a propertyless company.
pub fn building_demand(raw_demand: i32, free_properties: i32, propertyless_companies: i32) -> i32 {
    if free_properties - propertyless_companies <= 0 {
        raw_demand
    } else {
        0
    }
}

/// Penalty recorded when building demand fell short of company demand plus
/// tax pressure, i.e. companies want to grow but properties stand empty.
/// Never positive.
pub fn empty_buildings_penalty(building_demand: i32, raw_demand: i32, tax_factor: i32) -> i32 {
    (building_demand - (raw_demand + tax_factor)).min(0)
}

/// Workplace utilization percent for the detail table.
pub fn capacity_percent(workers: i32, max_workers: i32) -> i32 {
    100 * workers / max_workers.max(1)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
