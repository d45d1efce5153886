// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Tier thresholds, reward amounts, and streak bonus schedule

//! Constants module
//!
//! Application constants grouped by domain rather than kept in a single
//! large file.

/// Tier names and XP entry thresholds
pub mod tiers {
    pub const BRONZE: &str = "bronze";
    pub const SILVER: &str = "silver";
    pub const GOLD: &str = "gold";
    pub const PLATINUM: &str = "platinum";
    pub const DIAMOND: &str = "diamond";

    /// XP at which each tier is entered
    pub const BRONZE_XP: u32 = 0;
    pub const SILVER_XP: u32 = 300;
    pub const GOLD_XP: u32 = 600;
    pub const PLATINUM_XP: u32 = 1_200;
    pub const DIAMOND_XP: u32 = 2_000;
}

/// Default reward amounts credited by the update path
pub mod rewards {
    /// Coins granted when a profile is first created
    pub const SIGNUP_COINS: u32 = 10;
    /// XP granted when a profile is first created
    pub const SIGNUP_XP: u32 = 5;
    /// Coins credited once per calendar day on login
    pub const DAILY_LOGIN_COINS: u32 = 10;
    /// XP credited once per calendar day on login
    pub const DAILY_LOGIN_XP: u32 = 5;
    /// Coins credited when joining a group for the first time
    pub const GROUP_JOIN_COINS: u32 = 20;
    /// XP credited when joining a group for the first time
    pub const GROUP_JOIN_XP: u32 = 10;
}

/// Streak bonus schedule (non-cumulative, highest matching tier wins)
pub mod streaks {
    /// Monthly streak bonus: 30+ consecutive days
    pub const MONTHLY_STREAK_DAYS: u32 = 30;
    pub const MONTHLY_BONUS_COINS: u32 = 50;
    /// Bi-weekly streak bonus: 14+ consecutive days
    pub const BIWEEKLY_STREAK_DAYS: u32 = 14;
    pub const BIWEEKLY_BONUS_COINS: u32 = 25;
    /// Weekly streak bonus: 7+ consecutive days
    pub const WEEKLY_STREAK_DAYS: u32 = 7;
    pub const WEEKLY_BONUS_COINS: u32 = 15;
    /// Mini streak bonus: 3+ consecutive days
    pub const MINI_STREAK_DAYS: u32 = 3;
    pub const MINI_BONUS_COINS: u32 = 5;
}
