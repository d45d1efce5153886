// ABOUTME: Streak engine for daily-login accounting
// ABOUTME: Calendar-day streak computation, daily reward gating, and streak bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

//! Streak engine
//!
//! Calendar-day login accounting. Day boundaries are pinned to UTC: both the
//! stored last-login instant and the supplied `now` are truncated to their
//! UTC calendar date before comparison, so one global day boundary applies
//! regardless of where a session originates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::streaks;
use crate::errors::{AppError, AppResult};

/// Result of accounting for a login
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginAccounting {
    /// Streak count after this login
    pub new_streak: u32,
    /// Whether this login is the first on its calendar day
    pub is_new_day: bool,
    /// Whether a previously running streak was broken by a gap
    pub streak_broken: bool,
}

/// Account for a login against the stored streak state
///
/// - No previous login, or a zero streak: first login ever, streak starts at 1
/// - Same calendar day: no change
/// - Consecutive day: increment
/// - Gap of two or more days: reset to 1, streak broken
///
/// A last-login timestamp on a later calendar day than `now` is corrupt
/// state (clock skew or a tampered record) and is rejected with a state
/// conflict rather than silently resetting a legitimate streak.
pub fn account_for_login(
    last_login: Option<DateTime<Utc>>,
    current_streak: u32,
    now: DateTime<Utc>,
) -> AppResult<LoginAccounting> {
    let Some(last) = last_login else {
        return Ok(LoginAccounting {
            new_streak: 1,
            is_new_day: true,
            streak_broken: false,
        });
    };

    if current_streak == 0 {
        return Ok(LoginAccounting {
            new_streak: 1,
            is_new_day: true,
            streak_broken: false,
        });
    }

    let days_difference = (now.date_naive() - last.date_naive()).num_days();
    match days_difference {
        0 => Ok(LoginAccounting {
            new_streak: current_streak,
            is_new_day: false,
            streak_broken: false,
        }),
        1 => Ok(LoginAccounting {
            new_streak: current_streak + 1,
            is_new_day: true,
            streak_broken: false,
        }),
        2.. => Ok(LoginAccounting {
            new_streak: 1,
            is_new_day: true,
            streak_broken: true,
        }),
        _ => Err(AppError::state_conflict(format!(
            "last login {last} is after the current instant {now}"
        ))),
    }
}

/// Whether a once-per-day reward may be issued for a login at `now`
///
/// True when no login was ever recorded, or when the last login fell on a
/// different UTC calendar day. Independent of streak bookkeeping.
#[must_use]
pub fn should_grant_daily_reward(last_login: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    last_login.map_or(true, |last| last.date_naive() != now.date_naive())
}

/// Coin bonus for a streak length, non-cumulative
///
/// The highest matching tier wins: 30+ days pays the monthly bonus, 14+ the
/// bi-weekly, 7+ the weekly, 3+ the mini bonus, anything shorter nothing.
#[must_use]
pub const fn streak_bonus(streak: u32) -> u32 {
    if streak >= streaks::MONTHLY_STREAK_DAYS {
        streaks::MONTHLY_BONUS_COINS
    } else if streak >= streaks::BIWEEKLY_STREAK_DAYS {
        streaks::BIWEEKLY_BONUS_COINS
    } else if streak >= streaks::WEEKLY_STREAK_DAYS {
        streaks::WEEKLY_BONUS_COINS
    } else if streak >= streaks::MINI_STREAK_DAYS {
        streaks::MINI_BONUS_COINS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at_noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_first_login_ever() {
        let now = at_noon(2025, 3, 10);
        let accounting = account_for_login(None, 0, now).unwrap();
        assert_eq!(
            accounting,
            LoginAccounting {
                new_streak: 1,
                is_new_day: true,
                streak_broken: false
            }
        );
    }

    #[test]
    fn test_zero_streak_restarts_even_with_timestamp() {
        let now = at_noon(2025, 3, 10);
        let accounting = account_for_login(Some(now - Duration::days(1)), 0, now).unwrap();
        assert_eq!(accounting.new_streak, 1);
        assert!(accounting.is_new_day);
        assert!(!accounting.streak_broken);
    }

    #[test]
    fn test_consecutive_day_increments() {
        let now = at_noon(2025, 3, 10);
        let accounting = account_for_login(Some(now - Duration::days(1)), 5, now).unwrap();
        assert_eq!(
            accounting,
            LoginAccounting {
                new_streak: 6,
                is_new_day: true,
                streak_broken: false
            }
        );
    }

    #[test]
    fn test_same_day_is_unchanged() {
        let now = at_noon(2025, 3, 10);
        let earlier_today = Utc.with_ymd_and_hms(2025, 3, 10, 1, 30, 0).unwrap();
        let accounting = account_for_login(Some(earlier_today), 3, now).unwrap();
        assert_eq!(
            accounting,
            LoginAccounting {
                new_streak: 3,
                is_new_day: false,
                streak_broken: false
            }
        );
    }

    #[test]
    fn test_gap_resets_and_breaks() {
        let now = at_noon(2025, 3, 10);
        let accounting = account_for_login(Some(now - Duration::days(10)), 6, now).unwrap();
        assert_eq!(
            accounting,
            LoginAccounting {
                new_streak: 1,
                is_new_day: true,
                streak_broken: true
            }
        );
    }

    #[test]
    fn test_midnight_boundary_counts_as_consecutive() {
        // 23:59 yesterday followed by 00:01 today is a one-day difference
        let last = Utc.with_ymd_and_hms(2025, 3, 9, 23, 59, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 0, 1, 0).unwrap();
        let accounting = account_for_login(Some(last), 2, now).unwrap();
        assert_eq!(accounting.new_streak, 3);
        assert!(accounting.is_new_day);
    }

    #[test]
    fn test_future_last_login_is_rejected() {
        let now = at_noon(2025, 3, 10);
        let err = account_for_login(Some(now + Duration::days(1)), 4, now).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::StateConflict);
    }

    #[test]
    fn test_daily_reward_gate() {
        let now = at_noon(2025, 3, 10);
        assert!(should_grant_daily_reward(None, now));
        assert!(should_grant_daily_reward(Some(now - Duration::days(1)), now));
        assert!(!should_grant_daily_reward(Some(now), now));
        let earlier_today = Utc.with_ymd_and_hms(2025, 3, 10, 0, 5, 0).unwrap();
        assert!(!should_grant_daily_reward(Some(earlier_today), now));
    }

    #[test]
    fn test_streak_bonus_boundaries() {
        assert_eq!(streak_bonus(0), 0);
        assert_eq!(streak_bonus(2), 0);
        assert_eq!(streak_bonus(3), 5);
        assert_eq!(streak_bonus(6), 5);
        assert_eq!(streak_bonus(7), 15);
        assert_eq!(streak_bonus(13), 15);
        assert_eq!(streak_bonus(14), 25);
        assert_eq!(streak_bonus(29), 25);
        assert_eq!(streak_bonus(30), 50);
        assert_eq!(streak_bonus(365), 50);
    }
}
