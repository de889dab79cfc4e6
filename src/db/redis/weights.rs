use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use redis::Client;
use std::collections::HashMap;
use std::fmt::Display;

use crate::db::WeightStore;
use crate::error::AppResult;
use crate::models::{Category, UserWeightProfile};

/// Redis key holding one user's weights as a hash of category → weight
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeightKey(pub String);

impl Display for WeightKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "weights:{}", self.0)
    }
}

/// Creates a Redis client for the weight store
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Weight store backed by Redis hashes
///
/// Initialisation, increment and read-back run in one MULTI/EXEC block, so
/// concurrent increments from any number of service instances never lose
/// updates.
#[derive(Clone)]
pub struct RedisWeightStore {
    conn: ConnectionManager,
}

impl RedisWeightStore {
    /// Connects to Redis; the connection manager reconnects on its own
    pub async fn connect(client: Client) -> AppResult<Self> {
        let conn = ConnectionManager::new(client).await?;
        tracing::info!("Connected weight store to Redis");
        Ok(Self { conn })
    }

    /// Turns a raw hash into a profile, skipping fields that are not categories
    fn to_profile(user_id: &str, fields: HashMap<String, f64>) -> UserWeightProfile {
        let weights = fields.into_iter().filter_map(|(field, weight)| {
            match field.parse::<Category>() {
                Ok(category) => Some((category, weight)),
                Err(_) => {
                    tracing::warn!(user_id = %user_id, field = %field, "Ignoring unknown category in stored weights");
                    None
                }
            }
        });
        UserWeightProfile::from_weights(weights)
    }
}

#[async_trait]
impl WeightStore for RedisWeightStore {
    async fn increment(
        &self,
        user_id: &str,
        category: Category,
        amount: f64,
    ) -> AppResult<UserWeightProfile> {
        let key = WeightKey(user_id.to_string()).to_string();
        let mut conn = self.conn.clone();

        let mut pipe = redis::pipe();
        pipe.atomic();
        for c in Category::ALL {
            pipe.hset_nx(&key, c.as_str(), 0.0).ignore();
        }
        pipe.hincr(&key, category.as_str(), amount).ignore();
        pipe.hgetall(&key);

        let (fields,): (HashMap<String, f64>,) = pipe.query_async(&mut conn).await?;
        Ok(Self::to_profile(user_id, fields))
    }

    async fn get(&self, user_id: &str) -> AppResult<Option<UserWeightProfile>> {
        let key = WeightKey(user_id.to_string()).to_string();
        let mut conn = self.conn.clone();

        let fields: HashMap<String, f64> = conn.hgetall(&key).await?;
        if fields.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self::to_profile(user_id, fields)))
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
