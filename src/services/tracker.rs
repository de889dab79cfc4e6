use std::sync::Arc;

use crate::{
    db::WeightStore,
    error::{AppError, AppResult},
    models::{ActionKind, Category, UserWeightProfile},
};

/// Records interest signals and serves the accumulated weights
///
/// The tracker is the only writer of weight profiles; everything else reads
/// through [`InterestTracker::get_weights`].
#[derive(Clone)]
pub struct InterestTracker {
    store: Arc<dyn WeightStore>,
}

impl InterestTracker {
    pub fn new(store: Arc<dyn WeightStore>) -> Self {
        Self { store }
    }

    /// Adds the action's weight to the user's interest in `category` and
    /// returns the whole updated profile.
    pub async fn record_action(
        &self,
        user_id: &str,
        category: Category,
        action: &ActionKind,
    ) -> AppResult<UserWeightProfile> {
        validate_user_id(user_id)?;

        let weight = action.weight();
        let profile = self.store.increment(user_id, category, weight).await?;

        tracing::info!(
            user_id = %user_id,
            category = %category,
            action = %action,
            weight,
            category_total = profile.get(category),
            "Recorded user action"
        );

        Ok(profile)
    }

    /// Current weights for a user, or `None` if they have no history
    pub async fn get_weights(&self, user_id: &str) -> AppResult<Option<UserWeightProfile>> {
        validate_user_id(user_id)?;
        self.store.get(user_id).await
    }

    /// Name of the backing store
    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }
}

fn validate_user_id(user_id: &str) -> AppResult<()> {
    if user_id.trim().is_empty() {
        return Err(AppError::InvalidInput("user_id must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{InMemoryWeightStore, MockWeightStore};

    fn tracker() -> InterestTracker {
        InterestTracker::new(Arc::new(InMemoryWeightStore::new()))
    }

    #[tokio::test]
    async fn test_purchase_on_new_user() {
        let tracker = tracker();

        let profile = tracker
            .record_action("new_user", Category::Food, &ActionKind::Purchase)
            .await
            .unwrap();

        assert_eq!(profile.get(Category::Food), 3.0);
        assert_eq!(profile.get(Category::Daily), 0.0);
        assert_eq!(profile.get(Category::Electronics), 0.0);
        assert_eq!(profile.get(Category::Household), 0.0);
    }

    #[tokio::test]
    async fn test_actions_are_additive() {
        let tracker = tracker();
        let actions = [
            ActionKind::View,
            ActionKind::AddToCart,
            ActionKind::Purchase,
            ActionKind::from("share"),
        ];

        let mut previous = 0.0;
        for action in &actions {
            let profile = tracker
                .record_action("alice", Category::Electronics, action)
                .await
                .unwrap();
            let current = profile.get(Category::Electronics);
            assert_eq!(current, previous + action.weight());
            previous = current;
        }

        assert_eq!(previous, 7.0);
    }

    #[tokio::test]
    async fn test_get_weights_unknown_user() {
        let tracker = tracker();
        assert!(tracker.get_weights("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_user_id_is_rejected() {
        let tracker = tracker();

        let result = tracker
            .record_action("  ", Category::Food, &ActionKind::View)
            .await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_passes_action_weight_to_store() {
        let mut store = MockWeightStore::new();
        store
            .expect_increment()
            .withf(|user_id, category, amount| {
                user_id == "alice" && *category == Category::Household && *amount == 2.0
            })
            .times(1)
            .returning(|_, category, amount| {
                Ok(UserWeightProfile::from_weights([(category, amount)]))
            });

        let tracker = InterestTracker::new(Arc::new(store));
        let profile = tracker
            .record_action("alice", Category::Household, &ActionKind::AddToCart)
            .await
            .unwrap();

        assert_eq!(profile.get(Category::Household), 2.0);
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut store = MockWeightStore::new();
        store
            .expect_get()
            .returning(|_| Err(AppError::Internal("store offline".to_string())));

        let tracker = InterestTracker::new(Arc::new(store));
        let result = tracker.get_weights("alice").await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
