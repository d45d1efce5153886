// ABOUTME: Challenge lifecycle state machine primitives
// ABOUTME: Start/re-arm rules, monotonic progress, completion detection, cooldown enforcement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

//! Challenge lifecycle rules
//!
//! State machine: NotStarted -> InProgress -> Completed. Completion is
//! terminal for one-shot challenges; repeatable cadences re-arm to a fresh
//! InProgress entry once their cooldown elapses. These primitives operate on
//! a single [`UserChallenge`] entry; reward crediting and tier/badge
//! re-evaluation are orchestrated by [`crate::gamification::GamificationEngine`].

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::errors::{AppError, AppResult};
use crate::models::{Challenge, UserChallenge};

/// Result of applying a progress value to an entry
#[derive(Debug, Clone)]
pub struct ProgressOutcome {
    /// The entry after the update
    pub entry: UserChallenge,
    /// Whether this update caused the false-to-true completion transition
    pub completed_now: bool,
}

/// Decide what starting a challenge does to its entry
///
/// Returns `Ok(None)` when the operation is an idempotent no-op (an entry is
/// already in progress, or a one-shot challenge is already completed) and
/// `Ok(Some(entry))` when a fresh entry should be stored. A completed
/// repeatable challenge re-arms only after its cooldown; before that the
/// call fails with a state conflict carrying the next-available instant.
pub fn start_entry(
    existing: Option<&UserChallenge>,
    challenge: &Challenge,
    now: DateTime<Utc>,
) -> AppResult<Option<UserChallenge>> {
    let Some(entry) = existing else {
        return Ok(Some(UserChallenge::start(challenge.id.clone(), now)));
    };

    if !entry.completed {
        return Ok(None);
    }

    match entry.next_available_at(challenge.cadence) {
        None => Ok(None),
        Some(available_at) if now >= available_at => {
            Ok(Some(UserChallenge::start(challenge.id.clone(), now)))
        }
        Some(available_at) => Err(AppError::state_conflict(format!(
            "challenge {} is cooling down until {available_at}",
            challenge.id
        ))
        .with_resource_id(challenge.id.clone())
        .with_details(json!({ "next_available_at": available_at.to_rfc3339() }))),
    }
}

/// Apply a caller-supplied progress value to an in-progress entry
///
/// Progress never regresses: the effective value is the maximum of the
/// current and supplied values. A completed entry is left untouched and
/// reports `completed_now == false`, so retries never double-credit.
pub fn apply_progress(
    entry: &UserChallenge,
    challenge: &Challenge,
    new_progress: f64,
    now: DateTime<Utc>,
) -> AppResult<ProgressOutcome> {
    if !new_progress.is_finite() || new_progress < 0.0 {
        return Err(AppError::invalid_input(format!(
            "progress must be a non-negative number, got {new_progress}"
        ))
        .with_resource_id(challenge.id.clone()));
    }

    let mut next = entry.clone();
    if entry.completed {
        return Ok(ProgressOutcome {
            entry: next,
            completed_now: false,
        });
    }

    next.progress = entry.progress.max(new_progress);
    let completed_now = next.progress >= challenge.target_value;
    if completed_now {
        next.completed = true;
        next.completed_at = Some(now);
    }

    Ok(ProgressOutcome {
        entry: next,
        completed_now,
    })
}
