// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Environment variables, deployment modes, and reward tuning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

//! Environment-based configuration management

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::rewards;
use crate::errors::{AppError, AppResult};

/// Environment type for logging and safety defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Reward amounts credited by the update path
///
/// Defaults match the stock platform economy; deployments tune them through
/// `YOUMATTER_*` environment variables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardConfig {
    /// Coins credited once per calendar day on login
    pub daily_login_coins: u32,
    /// XP credited once per calendar day on login
    pub daily_login_xp: u32,
    /// Coins credited when joining a group for the first time
    pub group_join_coins: u32,
    /// XP credited when joining a group for the first time
    pub group_join_xp: u32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            daily_login_coins: rewards::DAILY_LOGIN_COINS,
            daily_login_xp: rewards::DAILY_LOGIN_XP,
            group_join_coins: rewards::GROUP_JOIN_COINS,
            group_join_xp: rewards::GROUP_JOIN_XP,
        }
    }
}

impl RewardConfig {
    /// Load reward tuning from the environment, defaulting unset values
    ///
    /// A variable that is present but unparsable is a configuration error,
    /// not a silent default.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            daily_login_coins: env_u32(
                "YOUMATTER_DAILY_LOGIN_COINS",
                rewards::DAILY_LOGIN_COINS,
            )?,
            daily_login_xp: env_u32("YOUMATTER_DAILY_LOGIN_XP", rewards::DAILY_LOGIN_XP)?,
            group_join_coins: env_u32("YOUMATTER_GROUP_JOIN_COINS", rewards::GROUP_JOIN_COINS)?,
            group_join_xp: env_u32("YOUMATTER_GROUP_JOIN_XP", rewards::GROUP_JOIN_XP)?,
        })
    }
}

/// Top-level configuration for embedders of the core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Reward tuning
    pub rewards: RewardConfig,
}

impl CoreConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::from_str_or_default(
            &env::var("YOUMATTER_ENV").unwrap_or_default(),
        );
        Ok(Self {
            environment,
            rewards: RewardConfig::from_env()?,
        })
    }
}

fn env_u32(name: &str, default: u32) -> AppResult<u32> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| {
            AppError::config(format!("{name} must be a non-negative integer, got {raw:?}"))
        }),
        Err(_) => Ok(default),
    }
}
