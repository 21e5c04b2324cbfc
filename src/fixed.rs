/*
    faraid
    Copyright (C) 2026 Moroya Sakamoto
*/

use serde::{Deserialize, Serialize};

use crate::heir::{HeirCategory, HeirProfile};
use crate::trail::Rule;

/// A fixed fractional entitlement assigned by the rule table.
///
/// The fraction is the collective share of the whole category; per-member
/// amounts are derived by dividing by `count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedShare {
    /// Which heir category holds the share.
    pub category: HeirCategory,
    /// Number of members covered by the share.
    pub count: u32,
    /// Fraction of the estate, before any Awl scaling.
    pub fraction: f64,
    /// The rule that assigned it.
    pub rule: Rule,
}

/// Evaluate the fixed-share rule table against an heir profile.
///
/// Rules are applied in precedence order; later rules depend on facts the
/// earlier ones establish (presence of descendants, sibling counts). The
/// returned fractions are raw entitlements: they may sum above 1 in
/// principle, which the caller resolves with
/// [`apply_awl`](crate::adjust::apply_awl).
///
/// Heirs whose entitlement is residual (the father without descendants, the
/// grandfather) or deferred (the mother's one-third of the remainder) do not
/// appear here.
pub fn compute_fixed_shares(profile: &HeirProfile) -> Vec<FixedShare> {
    let mut shares = Vec::new();
    let has_descendants = profile.has_descendants();

    // Spouse. Exactly one of husband / wives can be present (validated).
    if profile.husband {
        let (fraction, rule) = if has_descendants {
            (1.0 / 4.0, Rule::HusbandQuarter)
        } else {
            (1.0 / 2.0, Rule::HusbandHalf)
        };
        shares.push(FixedShare {
            category: HeirCategory::Husband,
            count: 1,
            fraction,
            rule,
        });
    } else if profile.wives > 0 {
        // The fraction is collective for all wives.
        let (fraction, rule) = if has_descendants {
            (1.0 / 8.0, Rule::WivesEighth)
        } else {
            (1.0 / 4.0, Rule::WivesQuarter)
        };
        shares.push(FixedShare {
            category: HeirCategory::Wives,
            count: profile.wives,
            fraction,
            rule,
        });
    }

    // Mother: 1/6 with descendants or two-plus full siblings. Otherwise her
    // one-third of the remainder is deferred past the spouse deduction and
    // handled by the engine.
    if profile.mother && (has_descendants || profile.full_sibling_count() >= 2) {
        shares.push(FixedShare {
            category: HeirCategory::Mother,
            count: 1,
            fraction: 1.0 / 6.0,
            rule: Rule::MotherSixth,
        });
    }

    // Grandmother: 1/6, blocked by the mother.
    if profile.grandmother && !profile.mother {
        shares.push(FixedShare {
            category: HeirCategory::Grandmother,
            count: 1,
            fraction: 1.0 / 6.0,
            rule: Rule::GrandmotherSixth,
        });
    }

    // Father: fixed 1/6 only alongside descendants; otherwise he takes the
    // residue instead.
    if profile.father && has_descendants {
        shares.push(FixedShare {
            category: HeirCategory::Father,
            count: 1,
            fraction: 1.0 / 6.0,
            rule: Rule::FatherSixth,
        });
    }

    // Maternal half-siblings: blocked by descendants and by the father.
    // One takes 1/6; two or more take 1/3 collectively, shared equally.
    let maternal = profile.maternal_sibling_count();
    if maternal > 0 && !has_descendants && !profile.father {
        let (fraction, rule) = if maternal == 1 {
            (1.0 / 6.0, Rule::MaternalSiblingSixth)
        } else {
            (1.0 / 3.0, Rule::MaternalSiblingsThird)
        };
        shares.push(FixedShare {
            category: HeirCategory::MaternalSiblings,
            count: maternal,
            fraction,
            rule,
        });
    }

    shares
}
