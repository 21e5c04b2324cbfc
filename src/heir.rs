/*
    faraid
    Copyright (C) 2026 Moroya Sakamoto
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gender of the deceased. Determines which spouse category is eligible:
/// a female deceased may leave a husband, a male deceased may leave wives,
/// never both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeceasedGender {
    #[default]
    Male,
    Female,
}

/// Stable heir-category identity.
///
/// Categories identify heirs independently of display text or member counts;
/// an [`Allocation`](crate::engine::Allocation) pairs a category with the
/// number of members it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeirCategory {
    Husband,
    Wives,
    Mother,
    Father,
    Grandfather,
    Grandmother,
    Sons,
    Daughters,
    /// Full brothers.
    Brothers,
    /// Full sisters.
    Sisters,
    PaternalHalfBrothers,
    PaternalHalfSisters,
    /// Siblings through the mother only. Brothers and sisters of this class
    /// share equally, so a single category covers both.
    MaternalSiblings,
}

impl HeirCategory {
    /// Human-readable label for presentation layers.
    pub fn label(&self) -> &'static str {
        match self {
            HeirCategory::Husband => "husband",
            HeirCategory::Wives => "wives",
            HeirCategory::Mother => "mother",
            HeirCategory::Father => "father",
            HeirCategory::Grandfather => "grandfather",
            HeirCategory::Grandmother => "grandmother",
            HeirCategory::Sons => "sons",
            HeirCategory::Daughters => "daughters",
            HeirCategory::Brothers => "full brothers",
            HeirCategory::Sisters => "full sisters",
            HeirCategory::PaternalHalfBrothers => "paternal half-brothers",
            HeirCategory::PaternalHalfSisters => "paternal half-sisters",
            HeirCategory::MaternalSiblings => "maternal half-siblings",
        }
    }
}

/// Error returned when an heir profile fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The estate must be a positive amount.
    #[error("estate must be positive, got {0}")]
    NonPositiveEstate(f64),
    /// The estate must be a finite number.
    #[error("estate must be a finite number")]
    NonFiniteEstate,
    /// A husband can only survive a female deceased.
    #[error("husband flag set for a male deceased")]
    HusbandForMaleDeceased,
    /// Wives can only survive a male deceased.
    #[error("wife count {0} set for a female deceased")]
    WivesForFemaleDeceased(u32),
}

/// Normalized description of the surviving heirs for one computation.
///
/// The profile is constructed once from validated input, read by the rule
/// table and the residuary cascade, and discarded after the distribution is
/// produced. Counts use `u32`, so negative counts are unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeirProfile {
    /// Total estate value to distribute.
    pub estate: f64,
    /// Gender of the deceased.
    pub deceased_gender: DeceasedGender,
    /// Surviving husband (female deceased only).
    pub husband: bool,
    /// Number of surviving wives (male deceased only).
    pub wives: u32,
    /// Father of the deceased.
    pub father: bool,
    /// Mother of the deceased.
    pub mother: bool,
    /// Paternal grandfather.
    pub grandfather: bool,
    /// Grandmother.
    pub grandmother: bool,
    /// Number of sons.
    pub sons: u32,
    /// Number of daughters.
    pub daughters: u32,
    /// Number of full brothers.
    pub brothers: u32,
    /// Number of full sisters.
    pub sisters: u32,
    /// Half-brothers through the father.
    pub halfbrothers_father: u32,
    /// Half-sisters through the father.
    pub halfsisters_father: u32,
    /// Half-brothers through the mother.
    pub halfbrothers_mother: u32,
    /// Half-sisters through the mother.
    pub halfsisters_mother: u32,
}

impl HeirProfile {
    /// True when the deceased left direct descendants.
    #[inline(always)]
    pub fn has_descendants(&self) -> bool {
        self.sons > 0 || self.daughters > 0
    }

    /// Number of full siblings (brothers + sisters).
    #[inline(always)]
    pub fn full_sibling_count(&self) -> u32 {
        self.brothers + self.sisters
    }

    /// Number of paternal half-siblings.
    #[inline(always)]
    pub fn paternal_half_sibling_count(&self) -> u32 {
        self.halfbrothers_father + self.halfsisters_father
    }

    /// Number of maternal half-siblings.
    #[inline(always)]
    pub fn maternal_sibling_count(&self) -> u32 {
        self.halfbrothers_mother + self.halfsisters_mother
    }

    /// Validate the profile before computation.
    ///
    /// Rejects non-positive or non-finite estates and spouse flags that
    /// contradict the deceased's gender. Everything downstream of a
    /// successful validation is a domain outcome, never an error.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.estate.is_finite() {
            return Err(InputError::NonFiniteEstate);
        }
        if self.estate <= 0.0 {
            return Err(InputError::NonPositiveEstate(self.estate));
        }
        match self.deceased_gender {
            DeceasedGender::Male if self.husband => Err(InputError::HusbandForMaleDeceased),
            DeceasedGender::Female if self.wives > 0 => {
                Err(InputError::WivesForFemaleDeceased(self.wives))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = HeirProfile {
            estate: 900_000.0,
            deceased_gender: DeceasedGender::Female,
            husband: true,
            sons: 1,
            ..Default::default()
        };
        assert!(profile.validate().is_ok());
        assert!(profile.has_descendants());
        assert_eq!(profile.full_sibling_count(), 0);
    }

    #[test]
    fn test_zero_estate_rejected() {
        let profile = HeirProfile {
            estate: 0.0,
            ..Default::default()
        };
        assert_eq!(
            profile.validate(),
            Err(InputError::NonPositiveEstate(0.0))
        );
    }

    #[test]
    fn test_negative_estate_rejected() {
        let profile = HeirProfile {
            estate: -5.0,
            ..Default::default()
        };
        assert_eq!(
            profile.validate(),
            Err(InputError::NonPositiveEstate(-5.0))
        );
    }

    #[test]
    fn test_non_finite_estate_rejected() {
        for estate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let profile = HeirProfile {
                estate,
                ..Default::default()
            };
            assert_eq!(profile.validate(), Err(InputError::NonFiniteEstate));
        }
    }

    #[test]
    fn test_husband_requires_female_deceased() {
        let profile = HeirProfile {
            estate: 1_000.0,
            deceased_gender: DeceasedGender::Male,
            husband: true,
            ..Default::default()
        };
        assert_eq!(
            profile.validate(),
            Err(InputError::HusbandForMaleDeceased)
        );
    }

    #[test]
    fn test_wives_require_male_deceased() {
        let profile = HeirProfile {
            estate: 1_000.0,
            deceased_gender: DeceasedGender::Female,
            wives: 2,
            ..Default::default()
        };
        assert_eq!(
            profile.validate(),
            Err(InputError::WivesForFemaleDeceased(2))
        );
    }

    #[test]
    fn test_sibling_counters() {
        let profile = HeirProfile {
            estate: 1.0,
            brothers: 2,
            sisters: 1,
            halfbrothers_father: 1,
            halfsisters_mother: 3,
            ..Default::default()
        };
        assert_eq!(profile.full_sibling_count(), 3);
        assert_eq!(profile.paternal_half_sibling_count(), 1);
        assert_eq!(profile.maternal_sibling_count(), 3);
    }

    #[test]
    fn test_category_labels_distinct() {
        let categories = [
            HeirCategory::Husband,
            HeirCategory::Wives,
            HeirCategory::Mother,
            HeirCategory::Father,
            HeirCategory::Grandfather,
            HeirCategory::Grandmother,
            HeirCategory::Sons,
            HeirCategory::Daughters,
            HeirCategory::Brothers,
            HeirCategory::Sisters,
            HeirCategory::PaternalHalfBrothers,
            HeirCategory::PaternalHalfSisters,
            HeirCategory::MaternalSiblings,
        ];
        for (i, a) in categories.iter().enumerate() {
            for b in &categories[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
