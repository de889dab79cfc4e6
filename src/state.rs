use std::sync::Arc;

use crate::{
    config::{Config, StoreBackend},
    db::{create_redis_client, InMemoryWeightStore, RedisWeightStore, WeightStore},
    services::{Catalog, InterestTracker, RecommendationService},
};

/// Shared application state
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub tracker: InterestTracker,
    pub recommender: RecommendationService,
}

impl AppState {
    /// Wires the services around a weight store and catalog
    pub fn new(store: Arc<dyn WeightStore>, catalog: Catalog, rng_seed: Option<u64>) -> Self {
        let catalog = Arc::new(catalog);
        let tracker = InterestTracker::new(store);
        let recommender = RecommendationService::with_seed(tracker.clone(), catalog.clone(), rng_seed);

        Self {
            catalog,
            tracker,
            recommender,
        }
    }

    /// Built-in catalog over a fresh in-memory store
    pub fn in_memory(rng_seed: Option<u64>) -> Self {
        Self::new(Arc::new(InMemoryWeightStore::new()), Catalog::builtin(), rng_seed)
    }

    /// Builds the state described by the configuration
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store: Arc<dyn WeightStore> = match config.store_backend {
            StoreBackend::Memory => Arc::new(InMemoryWeightStore::new()),
            StoreBackend::Redis => {
                let client = create_redis_client(&config.redis_url)?;
                Arc::new(RedisWeightStore::connect(client).await?)
            }
        };

        tracing::info!(
            store = store.name(),
            seeded = config.rng_seed.is_some(),
            "Initialized weight store"
        );

        Ok(Self::new(store, Catalog::builtin(), config.rng_seed))
    }
}
