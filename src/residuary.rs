// faraid — residuary (asaba) distribution cascade
// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Moroya Sakamoto

use serde::{Deserialize, Serialize};

use crate::adjust::FRACTION_EPSILON;
use crate::heir::{HeirCategory, HeirProfile};
use crate::trail::Rule;

// ── Types ──────────────────────────────────────────────────────────────

/// The residuary tiers, in agnatic priority order. The first tier with a
/// living member consumes the whole remainder; later tiers take nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ResiduaryTier {
    /// Tier 1: sons and daughters, two units to one.
    Descendants = 0,
    /// Tier 2: the father, when he holds no fixed sixth.
    Father = 1,
    /// Tier 3: the grandfather, standing in the absent father's place.
    Grandfather = 2,
    /// Tier 4: full brothers and sisters, two units to one.
    FullSiblings = 3,
    /// Tier 5: paternal half-siblings, two units to one.
    PaternalHalfSiblings = 4,
}

/// A residuary share carved out of the remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResiduaryShare {
    /// Which heir category takes the share.
    pub category: HeirCategory,
    /// Number of members covered.
    pub count: u32,
    /// Unit weight total for the category (members × per-member weight).
    pub units: u32,
    /// Fraction of the estate, collective for the category.
    pub fraction: f64,
    /// The rule that assigned it.
    pub rule: Rule,
}

/// Result of running the remainder through the cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResiduaryDistribution {
    /// The tier that absorbed the remainder.
    pub tier: ResiduaryTier,
    /// Per-category shares; their fractions sum to the consumed remainder.
    pub shares: Vec<ResiduaryShare>,
    /// Fraction of the estate consumed (the full remainder).
    pub consumed: f64,
}

// ── Cascade ────────────────────────────────────────────────────────────

/// Allocate the remaining fraction of the estate to the highest-priority
/// residuary tier with a living member.
///
/// Male members weigh two units, female members one; the remainder is split
/// by `remainder / total_units` with real-number division, so the tier
/// always exhausts it exactly. Returns `None` when the remainder is not
/// positive or no residuary heir exists — the caller then falls back to
/// [`apply_radd`](crate::adjust::apply_radd).
pub fn distribute_residue(
    profile: &HeirProfile,
    remainder: f64,
) -> Option<ResiduaryDistribution> {
    if remainder <= FRACTION_EPSILON {
        return None;
    }

    if profile.has_descendants() {
        return Some(ResiduaryDistribution {
            tier: ResiduaryTier::Descendants,
            shares: unit_split(
                remainder,
                (profile.sons, HeirCategory::Sons),
                (profile.daughters, HeirCategory::Daughters),
                Rule::DescendantsResiduary,
            ),
            consumed: remainder,
        });
    }

    if profile.father {
        return Some(sole_taker(
            ResiduaryTier::Father,
            HeirCategory::Father,
            Rule::FatherResiduary,
            remainder,
        ));
    }

    if profile.grandfather {
        return Some(sole_taker(
            ResiduaryTier::Grandfather,
            HeirCategory::Grandfather,
            Rule::GrandfatherResiduary,
            remainder,
        ));
    }

    if profile.full_sibling_count() > 0 {
        return Some(ResiduaryDistribution {
            tier: ResiduaryTier::FullSiblings,
            shares: unit_split(
                remainder,
                (profile.brothers, HeirCategory::Brothers),
                (profile.sisters, HeirCategory::Sisters),
                Rule::FullSiblingsResiduary,
            ),
            consumed: remainder,
        });
    }

    if profile.paternal_half_sibling_count() > 0 {
        return Some(ResiduaryDistribution {
            tier: ResiduaryTier::PaternalHalfSiblings,
            shares: unit_split(
                remainder,
                (profile.halfbrothers_father, HeirCategory::PaternalHalfBrothers),
                (profile.halfsisters_father, HeirCategory::PaternalHalfSisters),
                Rule::PaternalHalfSiblingsResiduary,
            ),
            consumed: remainder,
        });
    }

    None
}

/// A tier where a single heir absorbs the whole remainder.
fn sole_taker(
    tier: ResiduaryTier,
    category: HeirCategory,
    rule: Rule,
    remainder: f64,
) -> ResiduaryDistribution {
    ResiduaryDistribution {
        tier,
        shares: vec![ResiduaryShare {
            category,
            count: 1,
            units: 1,
            fraction: remainder,
            rule,
        }],
        consumed: remainder,
    }
}

/// Split a remainder between a male and a female category at two units to
/// one per member.
fn unit_split(
    remainder: f64,
    (males, male_category): (u32, HeirCategory),
    (females, female_category): (u32, HeirCategory),
    rule: Rule,
) -> Vec<ResiduaryShare> {
    let male_units = males * 2;
    let total_units = male_units + females;
    debug_assert!(total_units > 0);
    let unit_value = remainder / f64::from(total_units);

    let mut shares = Vec::with_capacity(2);
    if males > 0 {
        shares.push(ResiduaryShare {
            category: male_category,
            count: males,
            units: male_units,
            fraction: unit_value * f64::from(male_units),
            rule,
        });
    }
    if females > 0 {
        shares.push(ResiduaryShare {
            category: female_category,
            count: females,
            units: females,
            fraction: unit_value * f64::from(females),
            rule,
        });
    }
    shares
}

// ── Tests ──────────────────────────────────────────────────────────────
