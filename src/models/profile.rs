// ABOUTME: Profile aggregate and tier rank for the gamification domain
// ABOUTME: Profile, Tier, and the first-login grant applied at profile creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{rewards, tiers};
use crate::errors::AppError;

use super::{Badge, UserChallenge};

/// Named progression rank, derived solely from XP
///
/// Ordered Bronze < Silver < Gold < Platinum < Diamond. Each tier except
/// Bronze has an XP threshold at which it is entered.
#[non_exhaustive]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Entry tier, 0 XP
    #[default]
    Bronze,
    /// Entered at 300 XP
    Silver,
    /// Entered at 600 XP
    Gold,
    /// Entered at 1200 XP
    Platinum,
    /// Terminal tier, entered at 2000 XP
    Diamond,
}

impl Tier {
    /// XP at which this tier is entered
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        match self {
            Self::Bronze => tiers::BRONZE_XP,
            Self::Silver => tiers::SILVER_XP,
            Self::Gold => tiers::GOLD_XP,
            Self::Platinum => tiers::PLATINUM_XP,
            Self::Diamond => tiers::DIAMOND_XP,
        }
    }

    /// The next tier up, or `None` at Diamond
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Bronze => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => Some(Self::Platinum),
            Self::Platinum => Some(Self::Diamond),
            Self::Diamond => None,
        }
    }

    /// Highest tier whose threshold is at or below the given XP
    #[must_use]
    pub const fn for_xp(xp: u32) -> Self {
        if xp >= tiers::DIAMOND_XP {
            Self::Diamond
        } else if xp >= tiers::PLATINUM_XP {
            Self::Platinum
        } else if xp >= tiers::GOLD_XP {
            Self::Gold
        } else if xp >= tiers::SILVER_XP {
            Self::Silver
        } else {
            Self::Bronze
        }
    }

    /// Get display name for this tier
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Diamond => "Diamond",
        }
    }

    /// Convert to string for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => tiers::BRONZE,
            Self::Silver => tiers::SILVER,
            Self::Gold => tiers::GOLD,
            Self::Platinum => tiers::PLATINUM,
            Self::Diamond => tiers::DIAMOND,
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            tiers::BRONZE => Ok(Self::Bronze),
            tiers::SILVER => Ok(Self::Silver),
            tiers::GOLD => Ok(Self::Gold),
            tiers::PLATINUM => Ok(Self::Platinum),
            tiers::DIAMOND => Ok(Self::Diamond),
            _ => Err(AppError::invalid_input(format!("Invalid tier: {s}"))),
        }
    }
}

/// The per-user aggregate all engines read and mutate
///
/// Invariants upheld by the update path in [`crate::gamification`]:
/// - `tier` is always the result of [`Tier::for_xp`] applied to current `xp`;
///   no other code path assigns it
/// - `badges` never contains duplicate ids; once earned, a badge is never
///   removed
/// - `streak_count` is only mutated by login accounting, once per distinct
///   calendar day
/// - `active_challenges` has at most one entry per challenge id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique user identifier
    pub id: Uuid,
    /// User email address (used for identification)
    pub email: String,
    /// Display name
    pub display_name: Option<String>,
    /// Spendable in-app currency
    pub coins: u32,
    /// Accumulated experience points, monotonically non-decreasing
    pub xp: u32,
    /// Progression rank derived from `xp`
    pub tier: Tier,
    /// Consecutive-day login count
    pub streak_count: u32,
    /// Last login instant, absent before the first recorded login
    pub last_login: Option<DateTime<Utc>>,
    /// Earned badges, unique by id, append-only
    pub badges: Vec<Badge>,
    /// Opaque ids of groups the user has joined
    pub joined_groups: HashSet<String>,
    /// Per-challenge progress, keyed by challenge id
    pub active_challenges: HashMap<String, UserChallenge>,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile with the first-login grant applied
    ///
    /// Starts at 5 XP / 10 coins / Bronze with a one-day streak. The welcome
    /// badge is granted by the engine's profile-creation path, which owns
    /// the badge catalog.
    #[must_use]
    pub fn new(email: String, display_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            coins: rewards::SIGNUP_COINS,
            xp: rewards::SIGNUP_XP,
            tier: Tier::for_xp(rewards::SIGNUP_XP),
            streak_count: 1,
            last_login: Some(now),
            badges: Vec::new(),
            joined_groups: HashSet::new(),
            active_challenges: HashMap::new(),
            created_at: now,
        }
    }

    /// Check whether a badge with the given id has been earned
    #[must_use]
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.iter().any(|b| b.id == badge_id)
    }

    /// Append a badge unless one with the same id is already held
    ///
    /// Returns whether the badge was added.
    pub fn grant_badge(&mut self, badge: Badge) -> bool {
        if self.has_badge(&badge.id) {
            return false;
        }
        self.badges.push(badge);
        true
    }

    /// Number of challenges the user has completed
    #[must_use]
    pub fn completed_challenge_count(&self) -> usize {
        self.active_challenges
            .values()
            .filter(|c| c.completed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Bronze < Tier::Silver);
        assert!(Tier::Platinum < Tier::Diamond);
    }

    #[test]
    fn test_tier_string_round_trip() {
        for tier in [
            Tier::Bronze,
            Tier::Silver,
            Tier::Gold,
            Tier::Platinum,
            Tier::Diamond,
        ] {
            let restored: Tier = tier.as_str().parse().unwrap();
            assert_eq!(tier, restored);
        }
        assert!("mythril".parse::<Tier>().is_err());
    }

    #[test]
    fn test_new_profile_grant() {
        let profile = Profile::new("ada@example.com".into(), Some("Ada".into()));
        assert_eq!(profile.coins, 10);
        assert_eq!(profile.xp, 5);
        assert_eq!(profile.tier, Tier::Bronze);
        assert_eq!(profile.streak_count, 1);
        assert!(profile.last_login.is_some());
        assert!(profile.active_challenges.is_empty());
    }

    #[test]
    fn test_grant_badge_is_idempotent() {
        let mut profile = Profile::new("ada@example.com".into(), None);
        let badge = Badge {
            id: "welcome".into(),
            name: "Welcome Warrior".into(),
            description: "Complete your first login".into(),
            icon: "award".into(),
            earned_at: Utc::now(),
        };
        assert!(profile.grant_badge(badge.clone()));
        assert!(!profile.grant_badge(badge));
        assert_eq!(profile.badges.len(), 1);
    }
}
