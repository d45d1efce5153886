// ABOUTME: Badge and challenge catalog collaborators
// ABOUTME: Read-only reference data with the built-in YouMatter catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

//! # Catalogs
//!
//! Read-only reference data consumed by the engines: ordered badge
//! definitions and the challenge roster. The built-in catalogs ship the
//! stock YouMatter content; deployments can construct catalogs from their
//! own definitions instead.

use crate::models::{BadgeDefinition, BadgeRequirement, Challenge, ChallengeCadence};

/// Id of the badge pre-granted at profile creation
pub const WELCOME_BADGE_ID: &str = "welcome";

/// Ordered collection of badge definitions
///
/// Order is preserved into the badge engine's results; it does not affect
/// eligibility.
#[derive(Debug, Clone, Default)]
pub struct BadgeCatalog {
    definitions: Vec<BadgeDefinition>,
}

impl BadgeCatalog {
    /// Build a catalog from caller-supplied definitions
    #[must_use]
    pub fn new(definitions: Vec<BadgeDefinition>) -> Self {
        Self { definitions }
    }

    /// The stock YouMatter badge catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            badge(
                WELCOME_BADGE_ID,
                "Welcome Warrior",
                "Complete your first login",
                "award",
                BadgeRequirement::Manual,
            ),
            badge(
                "bronze-champion",
                "Bronze Champion",
                "Reach 100 XP",
                "medal",
                BadgeRequirement::XpThreshold { min_xp: 100 },
            ),
            badge(
                "silver-star",
                "Silver Star",
                "Reach Silver tier",
                "star",
                BadgeRequirement::XpThreshold { min_xp: 300 },
            ),
            badge(
                "gold-legend",
                "Gold Legend",
                "Reach Gold tier",
                "trophy",
                BadgeRequirement::XpThreshold { min_xp: 600 },
            ),
            badge(
                "streak-master",
                "Streak Master",
                "Maintain a 7-day streak",
                "flame",
                BadgeRequirement::Streak { min_days: 7 },
            ),
            badge(
                "community-builder",
                "Community Builder",
                "Join 3 groups",
                "users",
                BadgeRequirement::GroupCount { min_groups: 3 },
            ),
            badge(
                "challenge-crusher",
                "Challenge Crusher",
                "Complete 5 challenges",
                "target",
                BadgeRequirement::ChallengeCount { min_completed: 5 },
            ),
            badge(
                "wellness-guru",
                "Wellness Guru",
                "Reach 1000 XP",
                "heart",
                BadgeRequirement::XpThreshold { min_xp: 1_000 },
            ),
        ])
    }

    /// Look up a definition by id
    #[must_use]
    pub fn get(&self, badge_id: &str) -> Option<&BadgeDefinition> {
        self.definitions.iter().find(|d| d.id == badge_id)
    }

    /// Iterate definitions in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &BadgeDefinition> {
        self.definitions.iter()
    }

    /// Number of definitions in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn badge(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    requirement: BadgeRequirement,
) -> BadgeDefinition {
    BadgeDefinition {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        icon: icon.to_owned(),
        requirement,
    }
}

/// Challenge roster, read-only reference data
#[derive(Debug, Clone, Default)]
pub struct ChallengeCatalog {
    challenges: Vec<Challenge>,
}

impl ChallengeCatalog {
    /// Build a catalog from caller-supplied challenges
    #[must_use]
    pub fn new(challenges: Vec<Challenge>) -> Self {
        Self { challenges }
    }

    /// The stock YouMatter challenge roster
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Challenge {
                id: "meditation-streak".to_owned(),
                name: "7-Day Meditation Streak".to_owned(),
                description: "Meditate for 10 minutes daily for 7 consecutive days".to_owned(),
                category: "meditation".to_owned(),
                target_value: 7.0,
                reward_coins: 100,
                reward_xp: 50,
                duration_days: 7,
                cadence: ChallengeCadence::OneShot,
            },
            Challenge {
                id: "walking-challenge".to_owned(),
                name: "30-Day Walking Challenge".to_owned(),
                description: "Walk at least 10,000 steps daily for 30 days".to_owned(),
                category: "walking".to_owned(),
                target_value: 30.0,
                reward_coins: 500,
                reward_xp: 200,
                duration_days: 30,
                cadence: ChallengeCadence::OneShot,
            },
            Challenge {
                id: "hydration-hero".to_owned(),
                name: "Hydration Hero".to_owned(),
                description: "Drink 8 glasses of water daily for 14 days".to_owned(),
                category: "hydration".to_owned(),
                target_value: 14.0,
                reward_coins: 150,
                reward_xp: 75,
                duration_days: 14,
                cadence: ChallengeCadence::OneShot,
            },
            Challenge {
                id: "sleep-master".to_owned(),
                name: "Sleep Master".to_owned(),
                description: "Get 8 hours of sleep for 7 nights".to_owned(),
                category: "sleep".to_owned(),
                target_value: 7.0,
                reward_coins: 120,
                reward_xp: 60,
                duration_days: 7,
                cadence: ChallengeCadence::OneShot,
            },
            Challenge {
                id: "insurance-saver".to_owned(),
                name: "Insurance Saver".to_owned(),
                description: "Walk 100,000 steps this month for 2% off insurance renewal"
                    .to_owned(),
                category: "insurance".to_owned(),
                target_value: 100_000.0,
                reward_coins: 1_000,
                reward_xp: 500,
                duration_days: 30,
                cadence: ChallengeCadence::OneShot,
            },
        ])
    }

    /// Look up a challenge by id
    #[must_use]
    pub fn get(&self, challenge_id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == challenge_id)
    }

    /// Iterate challenges in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter()
    }

    /// Number of challenges in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}
