// ABOUTME: Core data models for the gamification domain
// ABOUTME: Profile aggregate, tiers, badges, and challenge records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

//! # Data Models
//!
//! Core data structures used throughout the gamification core.
//!
//! ## Design Principles
//!
//! - **Backend Agnostic**: Models carry no persistence concerns; external
//!   repositories serialize them as JSON records
//! - **Serializable**: All models support JSON serialization
//! - **Type Safe**: Strong typing prevents common data handling errors
//!
//! ## Core Models
//!
//! - `Profile`: The per-user aggregate all engines read and mutate
//! - `Tier`: Named progression rank derived solely from XP
//! - `Badge` / `BadgeDefinition`: Earned achievements and their catalog entries
//! - `Challenge` / `UserChallenge`: Reference goals and per-user progress

mod badge;
mod challenge;
mod profile;

pub use badge::{Badge, BadgeDefinition, BadgeRequirement};
pub use challenge::{Challenge, ChallengeCadence, UserChallenge};
pub use profile::{Profile, Tier};
