// ABOUTME: Storage abstraction for profile persistence
// ABOUTME: Repository trait with pluggable backends; in-memory implementation included
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

//! Profile persistence abstraction
//!
//! The core never partially mutates a persisted record: it loads a profile,
//! computes a new value through the engines, and saves the whole value.
//! Concurrent writers to the same profile must be serialized by the backend;
//! this crate assumes a single writer per profile at a time.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Profile;

pub mod memory;

pub use memory::InMemoryProfileStore;

/// Repository abstraction over profile storage
///
/// All backends must implement this trait to provide a consistent interface
/// for the application layer. Operations are atomic at single-profile
/// granularity.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Load a profile by user id
    async fn load(&self, user_id: Uuid) -> Result<Option<Profile>>;

    /// Load a profile by user id, failing if absent
    async fn load_required(&self, user_id: Uuid) -> Result<Profile> {
        self.load(user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("profile {user_id} not found"))
    }

    /// Load a profile by email address
    async fn load_by_email(&self, email: &str) -> Result<Option<Profile>>;

    /// Persist a profile value, replacing any stored version
    async fn save(&self, profile: &Profile) -> Result<()>;

    /// Total number of stored profiles
    async fn count(&self) -> Result<usize>;
}
