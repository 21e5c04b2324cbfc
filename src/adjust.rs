// faraid — Awl and Radd proportional share adjustments
// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Moroya Sakamoto

use serde::{Deserialize, Serialize};

/// Fractions below this are treated as zero when deciding whether an
/// adjustment applies.
pub(crate) const FRACTION_EPSILON: f64 = 1e-9;

// ── Types ──────────────────────────────────────────────────────────────

/// Record of an Awl reduction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AwlAdjustment {
    /// Sum of the fixed fractions before scaling (> 1).
    pub oversubscribed: f64,
    /// Common scale factor applied to every share, `1 / oversubscribed`.
    pub factor: f64,
}

/// Record of a Radd enlargement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaddAdjustment {
    /// Unclaimed fraction returned to the share holders.
    pub unclaimed: f64,
    /// Common growth factor applied to every share,
    /// `(total + unclaimed) / total`.
    pub factor: f64,
}

// ── Awl (reduction) ────────────────────────────────────────────────────

/// Scale over-subscribed fixed shares back down to a total of exactly 1.
///
/// When the fixed fractions sum above 1, every share is multiplied by
/// `1 / sum`, preserving the relative proportion between heirs while
/// collapsing the total to the whole estate. Must run before the residuary
/// stage, because it redefines how much the fixed heirs truly receive.
///
/// Returns `None` when the shares already fit within the estate.
pub fn apply_awl(fractions: &mut [f64]) -> Option<AwlAdjustment> {
    let total: f64 = fractions.iter().sum();
    if total <= 1.0 + FRACTION_EPSILON {
        return None;
    }

    let factor = 1.0 / total;
    for f in fractions.iter_mut() {
        *f *= factor;
    }

    Some(AwlAdjustment {
        oversubscribed: total,
        factor,
    })
}

// ── Radd (enlargement) ─────────────────────────────────────────────────

/// Return an unclaimed remainder proportionally to the existing shares.
///
/// Each share grows by `share / total × unclaimed`, which is a common
/// `(total + unclaimed) / total` scale. Applies only when at least one
/// share is held and the remainder is positive; with no residuary heir this
/// exhausts the remainder to zero.
///
/// Returns `None` when there is nothing to return or nobody to return it to.
pub fn apply_radd(fractions: &mut [f64], unclaimed: f64) -> Option<RaddAdjustment> {
    if unclaimed <= FRACTION_EPSILON {
        return None;
    }
    let total: f64 = fractions.iter().sum();
    if total <= FRACTION_EPSILON {
        return None;
    }

    let factor = (total + unclaimed) / total;
    for f in fractions.iter_mut() {
        *f *= factor;
    }

    Some(RaddAdjustment { unclaimed, factor })
}

// ── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn awl_no_op_when_under_one() {
        let mut fractions = [0.25, 0.5];
        assert!(apply_awl(&mut fractions).is_none());
        assert_eq!(fractions, [0.25, 0.5]);
    }

    #[test]
    fn awl_no_op_at_exactly_one() {
        let mut fractions = [0.5, 1.0 / 6.0, 1.0 / 3.0];
        assert!(apply_awl(&mut fractions).is_none());
    }

    #[test]
    fn awl_scales_to_exactly_one() {
        // Husband 1/2 plus two sister-class sixths pushed past the whole.
        let mut fractions = [0.5, 1.0 / 6.0 * 2.0, 1.0 / 4.0];
        let adjustment = apply_awl(&mut fractions).unwrap();

        assert!(adjustment.oversubscribed > 1.0);
        assert!(close(adjustment.factor, 1.0 / adjustment.oversubscribed));
        assert!(close(fractions.iter().sum::<f64>(), 1.0));
    }

    #[test]
    fn awl_preserves_relative_proportions() {
        let original = [0.5, 0.375, 1.0 / 3.0];
        let mut scaled = original;
        apply_awl(&mut scaled).unwrap();

        for i in 0..original.len() {
            for j in 0..original.len() {
                assert!(close(
                    original[i] / original[j],
                    scaled[i] / scaled[j]
                ));
            }
        }
    }

    #[test]
    fn awl_empty_shares() {
        let mut fractions: [f64; 0] = [];
        assert!(apply_awl(&mut fractions).is_none());
    }

    #[test]
    fn radd_distributes_whole_remainder() {
        // Lone husband at 1/2: Radd hands him the other half.
        let mut fractions = [0.5];
        let adjustment = apply_radd(&mut fractions, 0.5).unwrap();
        assert!(close(adjustment.factor, 2.0));
        assert!(close(fractions[0], 1.0));
    }

    #[test]
    fn radd_proportional_to_held_shares() {
        // Mother 1/3 and a maternal-sibling 1/6 split the remaining 1/2
        // at a 2:1 ratio.
        let mut fractions = [1.0 / 3.0, 1.0 / 6.0];
        apply_radd(&mut fractions, 0.5).unwrap();
        assert!(close(fractions[0], 2.0 / 3.0));
        assert!(close(fractions[1], 1.0 / 3.0));
        assert!(close(fractions.iter().sum::<f64>(), 1.0));
    }

    #[test]
    fn radd_no_op_without_remainder() {
        let mut fractions = [0.5, 0.5];
        assert!(apply_radd(&mut fractions, 0.0).is_none());
        assert!(apply_radd(&mut fractions, -0.1).is_none());
        assert_eq!(fractions, [0.5, 0.5]);
    }

    #[test]
    fn radd_no_op_without_holders() {
        let mut fractions: [f64; 0] = [];
        assert!(apply_radd(&mut fractions, 1.0).is_none());

        let mut zeroed = [0.0, 0.0];
        assert!(apply_radd(&mut zeroed, 0.5).is_none());
    }
}
