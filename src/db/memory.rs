use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{Category, UserWeightProfile},
};

use super::WeightStore;

/// Volatile weight store held in process memory
///
/// Increments run under the write lock and reads clone under the read lock,
/// so every caller sees whole profiles.
#[derive(Default)]
pub struct InMemoryWeightStore {
    profiles: RwLock<HashMap<String, UserWeightProfile>>,
}

impl InMemoryWeightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a profile
    pub async fn user_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl WeightStore for InMemoryWeightStore {
    async fn increment(
        &self,
        user_id: &str,
        category: Category,
        amount: f64,
    ) -> AppResult<UserWeightProfile> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.entry(user_id.to_string()).or_default();
        profile.add(category, amount);
        Ok(profile.clone())
    }

    async fn get(&self, user_id: &str) -> AppResult<Option<UserWeightProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
