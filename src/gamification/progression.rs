// ABOUTME: Tier engine mapping XP totals to progression ranks
// ABOUTME: Pure functions for tier derivation and progress-to-next-tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

//! Tier engine
//!
//! Pure mapping from an XP total to a named tier plus progress toward the
//! next tier. Invoked by the profile update path whenever XP changes; no
//! other code path assigns `Profile::tier`.

use crate::models::Tier;

/// Highest tier whose threshold is at or below the given XP
///
/// Total over all XP values; every value maps to exactly one tier.
#[must_use]
pub const fn tier_for_xp(xp: u32) -> Tier {
    Tier::for_xp(xp)
}

/// XP threshold of the next tier, saturating at Diamond's threshold
#[must_use]
pub const fn next_tier_threshold(tier: Tier) -> u32 {
    match tier.next() {
        Some(next) => next.threshold(),
        None => tier.threshold(),
    }
}

/// Percentage progress from the current tier toward the next, in [0, 100]
///
/// Diamond is terminal and always reports 100.
#[must_use]
pub fn progress_to_next_tier(xp: u32, tier: Tier) -> f64 {
    let Some(next) = tier.next() else {
        return 100.0;
    };
    let current = f64::from(tier.threshold());
    let target = f64::from(next.threshold());
    let progress = (f64::from(xp) - current) / (target - current) * 100.0;
    progress.clamp(0.0, 100.0)
}
