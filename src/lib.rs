/*
    faraid
    Copyright (C) 2026 Moroya Sakamoto
*/

//! # faraid
//!
//! Islamic inheritance (farāʾiḍ) share computation engine: given a
//! description of the surviving heirs, computes each heir category's share
//! of the estate under the fixed-share rules, the Awl reduction, the
//! residuary (asaba) cascade, and the Radd return, together with an ordered
//! explanation trail.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`heir`] | `HeirProfile` input record, heir categories, validation |
//! | [`fixed`] | Fixed-share rule table (spouse, parents, maternal siblings) |
//! | [`adjust`] | Awl (proportional reduction) and Radd (proportional return) |
//! | [`residuary`] | Asaba cascade with 2:1 male:female unit weights |
//! | [`trail`] | Ordered decision trail with rule citations |
//! | [`engine`] | `DistributionEngine` running the full pipeline |
//!
//! # Quick Start
//!
//! ```rust
//! use faraid::engine::DistributionEngine;
//! use faraid::heir::{HeirCategory, HeirProfile};
//!
//! let profile = HeirProfile {
//!     estate: 900_000.0,
//!     father: true,
//!     mother: true,
//!     sons: 1,
//!     ..Default::default()
//! };
//!
//! let engine = DistributionEngine::default();
//! let dist = engine.distribute(&profile).unwrap();
//!
//! assert!(dist.fully_distributed);
//! let father = dist.amount_for(HeirCategory::Father).unwrap();
//! let sons = dist.amount_for(HeirCategory::Sons).unwrap();
//! assert!((father - 150_000.0).abs() <= 0.01); // fixed sixth
//! assert!((sons - 600_000.0).abs() <= 0.01); // residue
//! ```

pub mod adjust;
pub mod engine;
pub mod fixed;
pub mod heir;
/// Residuary (asaba) distribution cascade.
pub mod residuary;
/// Ordered decision trail with rule citations.
pub mod trail;

pub use adjust::{apply_awl, apply_radd, AwlAdjustment, RaddAdjustment};
pub use engine::{Allocation, Distribution, DistributionEngine, EngineConfig};
pub use fixed::{compute_fixed_shares, FixedShare};
pub use heir::{DeceasedGender, HeirCategory, HeirProfile, InputError};
pub use residuary::{distribute_residue, ResiduaryDistribution, ResiduaryShare, ResiduaryTier};
pub use trail::{DecisionTrail, Rule, TrailEntry, TrailEvent};

/// FNV-1a hash (crate-internal shared utility).
#[inline(always)]
pub(crate) fn fnv1a(data: &[u8]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in data {
        h ^= b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    h
}
