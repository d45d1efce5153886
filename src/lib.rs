// ABOUTME: Main library entry point for the YouMatter gamification core
// ABOUTME: Tier progression, streak accounting, badge eligibility, and challenge lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

#![deny(unsafe_code)]

//! # YouMatter Gamification Core
//!
//! The deterministic rules engine behind the YouMatter wellness platform:
//! users earn coins and XP, progress through tiers, keep daily-login streaks,
//! unlock badges, and complete challenges. This crate owns those rules and
//! nothing else; rendering, routing, and the persistence backend live in the
//! embedding application.
//!
//! ## Architecture
//!
//! - **Models**: `Profile` aggregate, tiers, badges, challenge records
//! - **Gamification**: the four engines and the invariant-preserving update
//!   path (`GamificationEngine`)
//! - **Catalog**: read-only badge and challenge reference data
//! - **Storage**: `ProfileRepository` seam with an in-memory implementation
//! - **Config**: environment-driven reward tuning
//!
//! All engine operations are pure and synchronous; only the storage seam is
//! async. Operations take an explicit `now` instant, so behavior is
//! reproducible under test.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use youmatter_core::errors::AppResult;
//! use youmatter_core::gamification::GamificationEngine;
//!
//! fn main() -> AppResult<()> {
//!     let engine = GamificationEngine::default();
//!     let mut profile = engine.create_profile("ada@example.com".into(), Some("Ada".into()));
//!
//!     // A login on the next calendar day extends the streak and pays the
//!     // daily reward.
//!     let tomorrow = Utc::now() + Duration::days(1);
//!     let outcome = engine.record_login(&profile, tomorrow)?;
//!     profile = outcome.profile;
//!     assert_eq!(profile.streak_count, 2);
//!
//!     // Completing a challenge credits its reward and re-derives the tier.
//!     profile = engine.start_challenge(&profile, "hydration-hero", tomorrow)?;
//!     let update = engine.update_progress(&profile, "hydration-hero", 14.0, tomorrow)?;
//!     assert!(update.completed_now);
//!     Ok(())
//! }
//! ```

/// Badge and challenge catalog collaborators
pub mod catalog;

/// Environment-based configuration management
pub mod config;

/// Domain constants grouped by area
pub mod constants;

/// Unified error handling
pub mod errors;

/// Gamification engines and the profile update path
pub mod gamification;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// Profile persistence abstraction
pub mod storage;

pub use errors::{AppError, AppResult, ErrorCode};
pub use gamification::GamificationEngine;
pub use models::{Profile, Tier};
