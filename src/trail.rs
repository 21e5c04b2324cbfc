/*
    faraid
    Copyright (C) 2026 Moroya Sakamoto
*/

use serde::{Deserialize, Serialize};

use crate::heir::HeirCategory;
use crate::residuary::ResiduaryTier;

/// The inheritance rule that produced an allocation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Husband's half when no descendants exist.
    HusbandHalf,
    /// Husband's quarter alongside descendants.
    HusbandQuarter,
    /// Wives' collective quarter when no descendants exist.
    WivesQuarter,
    /// Wives' collective eighth alongside descendants.
    WivesEighth,
    /// Mother's sixth alongside descendants or two-plus siblings.
    MotherSixth,
    /// Mother's third of the remainder after the spouse's deduction.
    MotherThirdOfRemainder,
    /// Grandmother's sixth in the mother's absence.
    GrandmotherSixth,
    /// Father's sixth alongside descendants.
    FatherSixth,
    /// A single maternal half-sibling's sixth.
    MaternalSiblingSixth,
    /// Two or more maternal half-siblings' collective third.
    MaternalSiblingsThird,
    /// Residue to sons and daughters at two units to one.
    DescendantsResiduary,
    /// Father absorbs the residue when no descendants exist.
    FatherResiduary,
    /// Grandfather stands in the absent father's place for the residue.
    GrandfatherResiduary,
    /// Residue to full brothers and sisters at two units to one.
    FullSiblingsResiduary,
    /// Residue to paternal half-siblings at two units to one.
    PaternalHalfSiblingsResiduary,
    /// Proportional reduction of over-subscribed fixed shares.
    AwlReduction,
    /// Proportional return of an unclaimed remainder to the share holders.
    RaddReturn,
}

impl Rule {
    /// Citation text backing the rule, for the explanation trail.
    pub fn citation(&self) -> &'static str {
        match self {
            Rule::HusbandHalf | Rule::HusbandQuarter => "Qur'an, an-Nisa 4:12",
            Rule::WivesQuarter | Rule::WivesEighth => "Qur'an, an-Nisa 4:12",
            Rule::MotherSixth => "Qur'an, an-Nisa 4:11",
            Rule::MotherThirdOfRemainder => "Qur'an, an-Nisa 4:11",
            Rule::GrandmotherSixth => "Sunnah (Abu Dawud 2894)",
            Rule::FatherSixth => "Qur'an, an-Nisa 4:11",
            Rule::MaternalSiblingSixth | Rule::MaternalSiblingsThird => {
                "Qur'an, an-Nisa 4:12 (kalala)"
            }
            Rule::DescendantsResiduary => "Qur'an, an-Nisa 4:11",
            Rule::FatherResiduary => "Qur'an, an-Nisa 4:11",
            Rule::GrandfatherResiduary => "Sunnah (grandfather in the father's place)",
            Rule::FullSiblingsResiduary => "Qur'an, an-Nisa 4:176 (kalala)",
            Rule::PaternalHalfSiblingsResiduary => "Qur'an, an-Nisa 4:176 (kalala)",
            Rule::AwlReduction => "consensus of the companions ('awl, Umar's precedent)",
            Rule::RaddReturn => "juristic consensus (radd to the share holders)",
        }
    }
}

/// Events recorded on the decision trail, in the order the engine applied
/// them. Amounts are in estate currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TrailEvent {
    /// A fixed fractional share assigned by the rule table, pre-Awl.
    FixedShare {
        category: HeirCategory,
        count: u32,
        fraction: f64,
        amount: f64,
        rule: Rule,
    },
    /// Fixed shares over-subscribed the estate and were scaled down.
    AwlApplied {
        /// Sum of the fixed fractions before scaling (> 1).
        oversubscribed: f64,
        /// Common scale factor, `1 / oversubscribed`.
        factor: f64,
    },
    /// The mother's deferred third of the post-spouse remainder.
    MotherRemainderThird {
        /// Fraction of the estate left after the spouse's fixed share.
        remainder_after_spouse: f64,
        fraction: f64,
        amount: f64,
    },
    /// A residuary share consumed from the remainder.
    ResiduaryShare {
        category: HeirCategory,
        count: u32,
        tier: ResiduaryTier,
        fraction: f64,
        amount: f64,
        rule: Rule,
    },
    /// An unclaimed remainder returned proportionally to the share holders.
    RaddApplied {
        /// Unclaimed fraction of the estate.
        unclaimed: f64,
        /// Common growth factor applied to every held share.
        factor: f64,
    },
    /// Terminal condition: no heir could absorb the remainder.
    UndistributedRemainder { fraction: f64, amount: f64 },
}

impl TrailEvent {
    /// The rule behind this event, if it is rule-driven.
    pub fn rule(&self) -> Option<Rule> {
        match self {
            TrailEvent::FixedShare { rule, .. } => Some(*rule),
            TrailEvent::AwlApplied { .. } => Some(Rule::AwlReduction),
            TrailEvent::MotherRemainderThird { .. } => Some(Rule::MotherThirdOfRemainder),
            TrailEvent::ResiduaryShare { rule, .. } => Some(*rule),
            TrailEvent::RaddApplied { .. } => Some(Rule::RaddReturn),
            TrailEvent::UndistributedRemainder { .. } => None,
        }
    }
}

/// A single trail entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailEntry {
    /// Sequential entry number, 1-based.
    pub sequence: u64,
    /// The recorded decision.
    pub event: TrailEvent,
}

/// Append-only, ordered trail of allocation decisions.
///
/// Sequence numbers start at 1 and increment monotonically. The trail never
/// removes entries; it is the engine's narrative output for presentation
/// layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionTrail {
    entries: Vec<TrailEntry>,
}

impl DecisionTrail {
    /// Create an empty trail. The first recorded entry has sequence 1.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a decision to the trail.
    pub fn record(&mut self, event: TrailEvent) {
        let sequence = self.entries.len() as u64 + 1;
        self.entries.push(TrailEntry { sequence, event });
    }

    /// All entries in the order they were recorded.
    #[inline(always)]
    pub fn entries(&self) -> &[TrailEntry] {
        &self.entries
    }

    /// Number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry, or `None` when empty.
    #[inline(always)]
    pub fn last_entry(&self) -> Option<&TrailEntry> {
        self.entries.last()
    }
}
