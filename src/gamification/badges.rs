// ABOUTME: Badge engine computing newly earned badges from catalog requirements
// ABOUTME: Idempotent eligibility evaluation over current profile stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

//! Badge engine
//!
//! Evaluates catalog definitions against current profile stats and returns
//! the badges that newly qualify. Each definition is independently eligible
//! or not; result order follows catalog order. Re-running against an
//! unmodified profile returns nothing, so the check-then-append performed by
//! the update path is idempotent per badge id.

use chrono::{DateTime, Utc};

use crate::catalog::BadgeCatalog;
use crate::models::{Badge, Profile};

/// Badges the profile newly qualifies for, with `earned_at` set to `now`
///
/// Definitions already held (by id) are skipped; `Manual` requirements are
/// never awarded here.
#[must_use]
pub fn newly_earned_badges(
    profile: &Profile,
    catalog: &BadgeCatalog,
    now: DateTime<Utc>,
) -> Vec<Badge> {
    catalog
        .iter()
        .filter(|definition| !profile.has_badge(&definition.id))
        .filter(|definition| definition.requirement.is_met(profile))
        .map(|definition| definition.earned(now))
        .collect()
}
