// ABOUTME: Badge models for one-time-earned achievements
// ABOUTME: Earned badge records, catalog definitions, and structured eligibility requirements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Profile;

/// Eligibility requirement attached to a badge definition
///
/// The badge engine dispatches on this structured tag instead of matching
/// badge names, so catalogs can add badges without engine changes.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeRequirement {
    /// Earned once total XP reaches the threshold
    XpThreshold {
        /// Minimum XP required
        min_xp: u32,
    },
    /// Earned once the login streak reaches a length in days
    Streak {
        /// Minimum consecutive-day streak
        min_days: u32,
    },
    /// Earned once the user has joined enough groups
    GroupCount {
        /// Minimum number of joined groups
        min_groups: u32,
    },
    /// Earned once the user has completed enough challenges
    ChallengeCount {
        /// Minimum number of completed challenges
        min_completed: u32,
    },
    /// Never awarded automatically; granted explicitly (e.g. at signup)
    Manual,
}

impl BadgeRequirement {
    /// Evaluate this requirement against current profile stats
    #[must_use]
    pub fn is_met(&self, profile: &Profile) -> bool {
        match *self {
            Self::XpThreshold { min_xp } => profile.xp >= min_xp,
            Self::Streak { min_days } => profile.streak_count >= min_days,
            Self::GroupCount { min_groups } => {
                profile.joined_groups.len() >= min_groups as usize
            }
            Self::ChallengeCount { min_completed } => {
                profile.completed_challenge_count() >= min_completed as usize
            }
            Self::Manual => false,
        }
    }
}

/// Catalog entry describing a badge and its eligibility requirement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeDefinition {
    /// Stable badge identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description shown to the user
    pub description: String,
    /// Icon name used by presentation layers
    pub icon: String,
    /// When this badge is earned
    pub requirement: BadgeRequirement,
}

impl BadgeDefinition {
    /// Materialize an earned badge from this definition
    #[must_use]
    pub fn earned(&self, now: DateTime<Utc>) -> Badge {
        Badge {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            earned_at: now,
        }
    }
}

/// An earned badge on a profile
///
/// `earned_at` is set exactly once, at the moment the badge engine determines
/// eligibility (or at the explicit grant for manual badges).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Badge {
    /// Stable badge identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description shown to the user
    pub description: String,
    /// Icon name used by presentation layers
    pub icon: String,
    /// When the badge was earned
    pub earned_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_serialization_tag() {
        let req = BadgeRequirement::Streak { min_days: 7 };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"kind\":\"streak\""));
        assert!(json.contains("\"min_days\":7"));
    }

    #[test]
    fn test_manual_requirement_never_met() {
        let profile = Profile::new("ada@example.com".into(), None);
        assert!(!BadgeRequirement::Manual.is_met(&profile));
    }

    #[test]
    fn test_xp_threshold_requirement() {
        let mut profile = Profile::new("ada@example.com".into(), None);
        profile.xp = 99;
        assert!(!BadgeRequirement::XpThreshold { min_xp: 100 }.is_met(&profile));
        profile.xp = 100;
        assert!(BadgeRequirement::XpThreshold { min_xp: 100 }.is_met(&profile));
    }
}
