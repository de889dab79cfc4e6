use std::sync::{Arc, Mutex, PoisonError};

use rand::{rngs::StdRng, SeedableRng};

use crate::error::AppResult;

use super::{
    allocator::{self, Allocation},
    catalog::Catalog,
    tracker::InterestTracker,
};

/// Generates category-proportional recommendations
///
/// Reads the user's weights through the tracker and hands them to the
/// allocator together with the shared catalog and the service's random
/// source. Seeding the source makes every response reproducible.
pub struct RecommendationService {
    tracker: InterestTracker,
    catalog: Arc<Catalog>,
    rng: Mutex<StdRng>,
}

impl RecommendationService {
    pub fn new(tracker: InterestTracker, catalog: Arc<Catalog>, rng: StdRng) -> Self {
        Self {
            tracker,
            catalog,
            rng: Mutex::new(rng),
        }
    }

    /// Seeded when `seed` is given, entropy-seeded otherwise
    pub fn with_seed(tracker: InterestTracker, catalog: Arc<Catalog>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(tracker, catalog, rng)
    }

    pub async fn get_recommendations(&self, user_id: &str) -> AppResult<Allocation> {
        let profile = self.tracker.get_weights(user_id).await?;
        let cold_start = profile.as_ref().map_or(true, |p| p.total() == 0.0);

        let allocation = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            allocator::allocate(profile.as_ref(), &self.catalog, &mut *rng)
        };

        tracing::info!(
            user_id = %user_id,
            cold_start,
            product_count = allocation.products.len(),
            "Generated recommendations"
        );

        Ok(allocation)
    }
}
