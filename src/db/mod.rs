use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Category, UserWeightProfile},
};

pub mod memory;
pub mod redis;

pub use memory::InMemoryWeightStore;
pub use self::redis::{create_redis_client, RedisWeightStore, WeightKey};

/// Backing storage for per-user category weights
///
/// Implementations own every profile. `increment` must be atomic per user: two
/// concurrent increments for the same user both land. `get` must return a
/// consistent snapshot of one profile, never a mix of pre- and post-increment
/// values.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeightStore: Send + Sync {
    /// Adds `amount` to one category, creating a zeroed profile first if the
    /// user is new. Returns the full profile after the update.
    async fn increment(
        &self,
        user_id: &str,
        category: Category,
        amount: f64,
    ) -> AppResult<UserWeightProfile>;

    /// Reads a user's profile; `None` when the user has never acted
    async fn get(&self, user_id: &str) -> AppResult<Option<UserWeightProfile>>;

    /// Backend name for logging and health output
    fn name(&self) -> &'static str;
}
