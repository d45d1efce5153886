// ABOUTME: In-memory profile store for tests and local development
// ABOUTME: Shared map behind a tokio RwLock implementing ProfileRepository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ProfileRepository;
use crate::models::Profile;

/// In-memory profile store
///
/// Uses `Arc<RwLock<HashMap>>` so clones share the same underlying store,
/// letting tests hand the repository to multiple tasks. Not a durable
/// backend; production deployments implement [`ProfileRepository`] over
/// their own storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<HashMap<Uuid, Profile>>>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&user_id).cloned())
    }

    async fn load_by_email(&self, email: &str) -> Result<Option<Profile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.values().find(|p| p.email == email).cloned())
    }

    async fn save(&self, profile: &Profile) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        let profiles = self.profiles.read().await;
        Ok(profiles.len())
    }
}
