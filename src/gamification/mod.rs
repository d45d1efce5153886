// ABOUTME: Gamification engines and the invariant-preserving profile update path
// ABOUTME: Tier derivation, streak accounting, badge awards, and challenge lifecycle orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

//! # Gamification Engines
//!
//! The deterministic rules of the platform: tier progression, login streaks,
//! badge eligibility, and the challenge lifecycle. The individual engines are
//! pure and synchronous; [`GamificationEngine`] is the only mutation surface
//! for a [`Profile`] and upholds the aggregate invariants:
//!
//! - every XP or coin change is followed by tier derivation and badge
//!   evaluation (credit happens-before derivation, so tier and badges are
//!   never computed from stale stats)
//! - methods take `&Profile` and return a new value; an error leaves the
//!   input untouched and nothing partial is ever observable
//! - operations take an explicit `now` instant so the rules stay pure and
//!   reproducible under test

pub mod badges;
pub mod challenges;
pub mod progression;
pub mod streak;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::catalog::{BadgeCatalog, ChallengeCatalog, WELCOME_BADGE_ID};
use crate::config::RewardConfig;
use crate::errors::{AppError, AppResult};
use crate::models::Profile;

pub use streak::LoginAccounting;

/// Reward issued for the first login of a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyReward {
    /// Base coins for the daily login
    pub coins: u32,
    /// Base XP for the daily login
    pub xp: u32,
    /// Additional coins from the streak bonus schedule
    pub streak_bonus_coins: u32,
}

/// Result of recording a login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The profile after streak accounting, rewards, and finalization
    pub profile: Profile,
    /// What the streak engine decided
    pub accounting: LoginAccounting,
    /// The daily reward, absent when one was already issued today
    pub reward: Option<DailyReward>,
}

/// Reward credited when a challenge completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeReward {
    /// Coins credited
    pub coins: u32,
    /// XP credited
    pub xp: u32,
}

/// Result of a challenge progress update
#[derive(Debug, Clone)]
pub struct ChallengeUpdate {
    /// The profile after the update
    pub profile: Profile,
    /// Whether this update completed the challenge
    pub completed_now: bool,
    /// The completion reward, present only when `completed_now`
    pub reward: Option<ChallengeReward>,
}

/// The profile update path
///
/// Owns the catalogs and reward tuning; all profile mutation flows through
/// its methods so tier and badge state always reflect just-updated stats.
#[derive(Debug, Clone)]
pub struct GamificationEngine {
    rewards: RewardConfig,
    badges: BadgeCatalog,
    challenges: ChallengeCatalog,
}

impl Default for GamificationEngine {
    fn default() -> Self {
        Self::new(
            RewardConfig::default(),
            BadgeCatalog::builtin(),
            ChallengeCatalog::builtin(),
        )
    }
}

impl GamificationEngine {
    /// Create an engine with explicit reward tuning and catalogs
    #[must_use]
    pub fn new(rewards: RewardConfig, badges: BadgeCatalog, challenges: ChallengeCatalog) -> Self {
        Self {
            rewards,
            badges,
            challenges,
        }
    }

    /// Create an engine with custom catalogs and default reward tuning
    #[must_use]
    pub fn with_catalogs(badges: BadgeCatalog, challenges: ChallengeCatalog) -> Self {
        Self::new(RewardConfig::default(), badges, challenges)
    }

    /// The badge catalog this engine evaluates
    #[must_use]
    pub fn badge_catalog(&self) -> &BadgeCatalog {
        &self.badges
    }

    /// The challenge roster this engine consults
    #[must_use]
    pub fn challenge_catalog(&self) -> &ChallengeCatalog {
        &self.challenges
    }

    /// Create a profile with the first-login grant and the welcome badge
    #[must_use]
    pub fn create_profile(&self, email: String, display_name: Option<String>) -> Profile {
        let mut profile = Profile::new(email, display_name);
        if let Some(definition) = self.badges.get(WELCOME_BADGE_ID) {
            profile.grant_badge(definition.earned(profile.created_at));
        }
        info!(user_id = %profile.id, "created profile");
        profile
    }

    /// Account for a login at `now`
    ///
    /// Applies streak accounting, credits the daily login reward plus streak
    /// bonus at most once per UTC calendar day, stamps `last_login`, and
    /// finalizes.
    pub fn record_login(&self, profile: &Profile, now: DateTime<Utc>) -> AppResult<LoginOutcome> {
        let accounting = streak::account_for_login(profile.last_login, profile.streak_count, now)
            .map_err(|e| e.with_user_id(profile.id))?;

        let mut updated = profile.clone();
        updated.streak_count = accounting.new_streak;

        let reward = if streak::should_grant_daily_reward(profile.last_login, now) {
            let bonus = streak::streak_bonus(accounting.new_streak);
            updated.coins += self.rewards.daily_login_coins + bonus;
            updated.xp += self.rewards.daily_login_xp;
            Some(DailyReward {
                coins: self.rewards.daily_login_coins,
                xp: self.rewards.daily_login_xp,
                streak_bonus_coins: bonus,
            })
        } else {
            debug!(user_id = %profile.id, "daily reward already issued today");
            None
        };

        updated.last_login = Some(now);
        let updated = self.finalize(updated, now);

        info!(
            user_id = %profile.id,
            streak = accounting.new_streak,
            broken = accounting.streak_broken,
            rewarded = reward.is_some(),
            "recorded login"
        );
        Ok(LoginOutcome {
            profile: updated,
            accounting,
            reward,
        })
    }

    /// Credit coins (vitals logging, refunds, ...) and finalize
    #[must_use]
    pub fn add_coins(&self, profile: &Profile, amount: u32, now: DateTime<Utc>) -> Profile {
        let mut updated = profile.clone();
        updated.coins += amount;
        self.finalize(updated, now)
    }

    /// Credit XP and finalize; the tier is re-derived from the new total
    #[must_use]
    pub fn add_xp(&self, profile: &Profile, amount: u32, now: DateTime<Utc>) -> Profile {
        let mut updated = profile.clone();
        updated.xp += amount;
        self.finalize(updated, now)
    }

    /// Join a group, crediting the join reward on first membership
    ///
    /// Idempotent: joining a group already held changes nothing.
    #[must_use]
    pub fn join_group(&self, profile: &Profile, group_id: &str, now: DateTime<Utc>) -> Profile {
        if profile.joined_groups.contains(group_id) {
            debug!(user_id = %profile.id, group_id, "already a member");
            return profile.clone();
        }
        let mut updated = profile.clone();
        updated.joined_groups.insert(group_id.to_owned());
        updated.coins += self.rewards.group_join_coins;
        updated.xp += self.rewards.group_join_xp;
        info!(user_id = %profile.id, group_id, "joined group");
        self.finalize(updated, now)
    }

    /// Leave a group; join rewards are not clawed back
    #[must_use]
    pub fn leave_group(&self, profile: &Profile, group_id: &str, now: DateTime<Utc>) -> Profile {
        if !profile.joined_groups.contains(group_id) {
            return profile.clone();
        }
        let mut updated = profile.clone();
        updated.joined_groups.remove(group_id);
        info!(user_id = %profile.id, group_id, "left group");
        self.finalize(updated, now)
    }

    /// Start a challenge from the roster
    ///
    /// Unknown ids fail with not-found. Starting an in-progress challenge is
    /// an idempotent no-op; a completed repeatable challenge re-arms once its
    /// cooldown elapses and conflicts before that.
    pub fn start_challenge(
        &self,
        profile: &Profile,
        challenge_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Profile> {
        let challenge = self.challenges.get(challenge_id).ok_or_else(|| {
            AppError::not_found(format!("challenge {challenge_id}"))
                .with_user_id(profile.id)
                .with_resource_id(challenge_id)
        })?;

        let existing = profile.active_challenges.get(challenge_id);
        match challenges::start_entry(existing, challenge, now)
            .map_err(|e| e.with_user_id(profile.id))?
        {
            Some(entry) => {
                let mut updated = profile.clone();
                updated
                    .active_challenges
                    .insert(challenge_id.to_owned(), entry);
                info!(user_id = %profile.id, challenge_id, "started challenge");
                Ok(updated)
            }
            None => {
                debug!(user_id = %profile.id, challenge_id, "challenge already active");
                Ok(profile.clone())
            }
        }
    }

    /// Record progress toward a started challenge
    ///
    /// Unknown ids and never-started challenges fail with not-found. On
    /// completion the challenge reward is credited and the profile is
    /// finalized; retries against a completed entry change nothing.
    pub fn update_progress(
        &self,
        profile: &Profile,
        challenge_id: &str,
        new_progress: f64,
        now: DateTime<Utc>,
    ) -> AppResult<ChallengeUpdate> {
        let challenge = self.challenges.get(challenge_id).ok_or_else(|| {
            AppError::not_found(format!("challenge {challenge_id}"))
                .with_user_id(profile.id)
                .with_resource_id(challenge_id)
        })?;

        let entry = profile.active_challenges.get(challenge_id).ok_or_else(|| {
            AppError::not_found(format!("active challenge {challenge_id}"))
                .with_user_id(profile.id)
                .with_resource_id(challenge_id)
        })?;

        let outcome = challenges::apply_progress(entry, challenge, new_progress, now)
            .map_err(|e| e.with_user_id(profile.id))?;

        let mut updated = profile.clone();
        updated
            .active_challenges
            .insert(challenge_id.to_owned(), outcome.entry);

        if !outcome.completed_now {
            return Ok(ChallengeUpdate {
                profile: updated,
                completed_now: false,
                reward: None,
            });
        }

        updated.coins += challenge.reward_coins;
        updated.xp += challenge.reward_xp;
        let updated = self.finalize(updated, now);

        info!(
            user_id = %profile.id,
            challenge_id,
            reward_coins = challenge.reward_coins,
            reward_xp = challenge.reward_xp,
            "completed challenge"
        );
        Ok(ChallengeUpdate {
            profile: updated,
            completed_now: true,
            reward: Some(ChallengeReward {
                coins: challenge.reward_coins,
                xp: challenge.reward_xp,
            }),
        })
    }

    /// Re-derive the tier and append newly earned badges
    ///
    /// Runs after every stat change; callers never assign `tier` or insert
    /// badges themselves.
    fn finalize(&self, mut profile: Profile, now: DateTime<Utc>) -> Profile {
        let tier = progression::tier_for_xp(profile.xp);
        if tier != profile.tier {
            info!(user_id = %profile.id, from = %profile.tier, to = %tier, "tier changed");
            profile.tier = tier;
        }

        for badge in badges::newly_earned_badges(&profile, &self.badges, now) {
            info!(user_id = %profile.id, badge_id = %badge.id, "badge earned");
            profile.badges.push(badge);
        }
        profile
    }
}
