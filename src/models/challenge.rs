// ABOUTME: Challenge models for goal tracking
// ABOUTME: Challenge reference data, repeat cadence, and per-user progress records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// How often a challenge can be re-completed
///
/// Repeatable cadences define a cooldown interval after each completion;
/// the lifecycle refuses to re-arm a challenge before the interval elapses.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeCadence {
    /// Completable once, stays terminal
    #[default]
    OneShot,
    /// Re-completable one hour after completion
    Hourly,
    /// Re-completable 24 hours after completion
    Daily,
    /// Re-completable seven days after completion
    Weekly,
}

impl ChallengeCadence {
    /// Cooldown interval after a completion, `None` for one-shot challenges
    #[must_use]
    pub fn cooldown(&self) -> Option<Duration> {
        match self {
            Self::OneShot => None,
            Self::Hourly => Some(Duration::hours(1)),
            Self::Daily => Some(Duration::hours(24)),
            Self::Weekly => Some(Duration::days(7)),
        }
    }

    /// Whether this challenge can be completed more than once
    #[must_use]
    pub const fn is_repeatable(&self) -> bool {
        !matches!(self, Self::OneShot)
    }

    /// Storage string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneShot => "one_shot",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl Display for ChallengeCadence {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChallengeCadence {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "one_shot" => Ok(Self::OneShot),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            _ => Err(AppError::invalid_input(format!(
                "Invalid challenge cadence: {s}"
            ))),
        }
    }
}

/// Challenge reference data, read-only to this crate
///
/// Owned by the challenge catalog collaborator; the core only consumes it to
/// compute completion thresholds and rewards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    /// Stable challenge identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description shown to the user
    pub description: String,
    /// Domain category (walking, hydration, sleep, ...)
    pub category: String,
    /// Progress value at which the challenge completes, in the challenge's
    /// target unit (steps, days, ounces, ...)
    pub target_value: f64,
    /// Coins credited on completion
    pub reward_coins: u32,
    /// XP credited on completion
    pub reward_xp: u32,
    /// Nominal duration in days
    pub duration_days: u32,
    /// Repeat cadence
    pub cadence: ChallengeCadence,
}

/// Per-user progress toward a challenge
///
/// `completed` is monotonic false-to-true; `completed_at` is set exactly once
/// on that transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserChallenge {
    /// Challenge this entry tracks (reference, not ownership)
    pub challenge_id: String,
    /// Progress toward the target, in the challenge's target unit
    pub progress: f64,
    /// Whether the target has been reached
    pub completed: bool,
    /// When the user started the challenge
    pub started_at: DateTime<Utc>,
    /// When the target was reached, absent while in progress
    pub completed_at: Option<DateTime<Utc>>,
}

impl UserChallenge {
    /// Fresh entry for a just-started challenge
    #[must_use]
    pub fn start(challenge_id: String, now: DateTime<Utc>) -> Self {
        Self {
            challenge_id,
            progress: 0.0,
            completed: false,
            started_at: now,
            completed_at: None,
        }
    }

    /// When a completed repeatable challenge becomes available again
    ///
    /// `None` while in progress, or when the cadence defines no cooldown.
    #[must_use]
    pub fn next_available_at(&self, cadence: ChallengeCadence) -> Option<DateTime<Utc>> {
        let completed_at = self.completed_at?;
        cadence.cooldown().map(|interval| completed_at + interval)
    }
}
