// faraid — estate distribution engine
// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Moroya Sakamoto

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjust::{apply_awl, apply_radd, FRACTION_EPSILON};
use crate::fixed::compute_fixed_shares;
use crate::fnv1a;
use crate::heir::{HeirCategory, HeirProfile, InputError};
use crate::residuary::distribute_residue;
use crate::trail::{DecisionTrail, TrailEvent};

// ── Configuration ──────────────────────────────────────────────────────

/// Configuration for the distribution engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Absolute tolerance, in currency units, within which the distributed
    /// total must match the estate for the result to count as fully
    /// distributed.
    pub rounding_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rounding_tolerance: 0.01,
        }
    }
}

// ── Result types ───────────────────────────────────────────────────────

/// A final allocation for one heir category, in estate currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Which heir category.
    pub category: HeirCategory,
    /// Number of members covered by the amount.
    pub count: u32,
    /// Final fraction of the estate, after all adjustments.
    pub fraction: f64,
    /// Collective monetary amount, `fraction × estate`.
    pub amount: f64,
}

impl Allocation {
    /// Per-member amount (per wife, per son, ...).
    #[inline]
    pub fn amount_each(&self) -> f64 {
        self.amount / f64::from(self.count.max(1))
    }
}

/// Result of distributing an estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// The estate value presented to the engine.
    pub estate: f64,
    /// One allocation per eligible heir category.
    pub allocations: Vec<Allocation>,
    /// Sum of all allocated amounts.
    pub total_distributed: f64,
    /// Estate value no heir could absorb (zero when any heir exists).
    pub undistributed: f64,
    /// True when the distributed total matches the estate within the
    /// configured tolerance.
    pub fully_distributed: bool,
    /// Ordered narrative of every allocation decision.
    pub trail: DecisionTrail,
    /// Deterministic content hash.
    pub content_hash: u64,
}

impl Distribution {
    /// Amount allocated to a category, or `None` when it holds nothing.
    pub fn amount_for(&self, category: HeirCategory) -> Option<f64> {
        self.allocations
            .iter()
            .find(|a| a.category == category)
            .map(|a| a.amount)
    }
}

/// Working line threaded through the pipeline stages in fraction space.
#[derive(Debug, Clone)]
struct ShareLine {
    category: HeirCategory,
    count: u32,
    fraction: f64,
}

// ── Distribution Engine ────────────────────────────────────────────────

/// Estate distribution engine.
///
/// Runs the fixed-share rule table, the Awl reduction, the mother's
/// deferred third, the residuary cascade, and the Radd return, in that
/// order, threading an explicit running remainder between the stages.
/// Each invocation is pure and independent; the engine holds no mutable
/// state and may be shared freely across threads.
pub struct DistributionEngine {
    config: EngineConfig,
}

impl DistributionEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Access the current configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Distribute an estate among the heirs described by the profile.
    ///
    /// Returns `Err` only for malformed input; expected domain states —
    /// no eligible heirs, an undistributed remainder — are reported on the
    /// returned [`Distribution`], never raised.
    pub fn distribute(&self, profile: &HeirProfile) -> Result<Distribution, InputError> {
        profile.validate()?;

        let estate = profile.estate;
        let mut trail = DecisionTrail::new();

        // Stage 1: fixed-share rule table. Trail entries carry the raw
        // entitlements; any Awl scaling is recorded as its own event.
        let fixed = compute_fixed_shares(profile);
        for share in &fixed {
            trail.record(TrailEvent::FixedShare {
                category: share.category,
                count: share.count,
                fraction: share.fraction,
                amount: share.fraction * estate,
                rule: share.rule,
            });
        }
        debug!(fixed_shares = fixed.len(), "rule table evaluated");

        // Stage 2: Awl — collapse an over-subscribed table to exactly 1.
        let mut fractions: Vec<f64> = fixed.iter().map(|s| s.fraction).collect();
        if let Some(awl) = apply_awl(&mut fractions) {
            trail.record(TrailEvent::AwlApplied {
                oversubscribed: awl.oversubscribed,
                factor: awl.factor,
            });
            debug!(
                oversubscribed = awl.oversubscribed,
                factor = awl.factor,
                "awl reduction applied"
            );
        }

        let mut lines: Vec<ShareLine> = fixed
            .iter()
            .zip(&fractions)
            .map(|(share, &fraction)| ShareLine {
                category: share.category,
                count: share.count,
                fraction,
            })
            .collect();

        let mut remainder = 1.0 - fractions.iter().sum::<f64>();
        if remainder < 0.0 {
            // Post-Awl the fixed total never exceeds 1; only float noise
            // can land here.
            debug_assert!(remainder > -FRACTION_EPSILON);
            remainder = 0.0;
        }

        // Stage 3: the mother's deferred third of the post-spouse
        // remainder. The eligibility condition is the exact complement of
        // her fixed sixth, so she appears in at most one stage.
        if profile.mother && !profile.has_descendants() && profile.full_sibling_count() < 2 {
            let spouse_fraction = lines
                .iter()
                .find(|l| {
                    matches!(l.category, HeirCategory::Husband | HeirCategory::Wives)
                })
                .map(|l| l.fraction)
                .unwrap_or(0.0);
            let remainder_after_spouse = 1.0 - spouse_fraction;
            let fraction = remainder_after_spouse / 3.0;

            lines.push(ShareLine {
                category: HeirCategory::Mother,
                count: 1,
                fraction,
            });
            remainder -= fraction;
            trail.record(TrailEvent::MotherRemainderThird {
                remainder_after_spouse,
                fraction,
                amount: fraction * estate,
            });
            debug!(fraction, "mother's deferred third assigned");
        }

        // Stage 4: residuary cascade.
        if remainder > FRACTION_EPSILON {
            if let Some(residue) = distribute_residue(profile, remainder) {
                for share in &residue.shares {
                    trail.record(TrailEvent::ResiduaryShare {
                        category: share.category,
                        count: share.count,
                        tier: residue.tier,
                        fraction: share.fraction,
                        amount: share.fraction * estate,
                        rule: share.rule,
                    });
                    lines.push(ShareLine {
                        category: share.category,
                        count: share.count,
                        fraction: share.fraction,
                    });
                }
                debug!(tier = ?residue.tier, consumed = residue.consumed, "residue distributed");
                remainder = 0.0;
            }
        }

        // Stage 5: Radd — return any unclaimed remainder to the share
        // holders, or report it when nobody exists to take it.
        if remainder > FRACTION_EPSILON {
            let mut held: Vec<f64> = lines.iter().map(|l| l.fraction).collect();
            if let Some(radd) = apply_radd(&mut held, remainder) {
                for (line, &fraction) in lines.iter_mut().zip(&held) {
                    line.fraction = fraction;
                }
                trail.record(TrailEvent::RaddApplied {
                    unclaimed: radd.unclaimed,
                    factor: radd.factor,
                });
                debug!(
                    unclaimed = radd.unclaimed,
                    factor = radd.factor,
                    "radd return applied"
                );
                remainder = 0.0;
            } else {
                trail.record(TrailEvent::UndistributedRemainder {
                    fraction: remainder,
                    amount: remainder * estate,
                });
                debug!(remainder, "no heir to absorb remainder");
            }
        }

        // Final conversion to estate currency.
        let allocations: Vec<Allocation> = lines
            .iter()
            .map(|l| Allocation {
                category: l.category,
                count: l.count,
                fraction: l.fraction,
                amount: l.fraction * estate,
            })
            .collect();

        let total_distributed: f64 = allocations.iter().map(|a| a.amount).sum();
        let undistributed = estate - total_distributed;
        let fully_distributed = undistributed.abs() <= self.config.rounding_tolerance;

        // Over-allocation past Awl is an internal defect, not a domain state.
        debug_assert!(undistributed >= -self.config.rounding_tolerance);

        Ok(Distribution {
            estate,
            allocations,
            total_distributed,
            undistributed,
            fully_distributed,
            trail,
            content_hash: Self::compute_hash(estate, total_distributed),
        })
    }

    fn compute_hash(estate: f64, total: f64) -> u64 {
        let mut data = [0u8; 16];
        data[0..8].copy_from_slice(&estate.to_bits().to_le_bytes());
        data[8..16].copy_from_slice(&total.to_bits().to_le_bytes());
        fnv1a(&data)
    }
}

impl Default for DistributionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
