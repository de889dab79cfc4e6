use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Category;

/// Accumulated interest per category for one user.
///
/// Keys are always exactly [`Category::ALL`]; iteration follows
/// catalog-definition order because `Category` orders by declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct UserWeightProfile {
    weights: BTreeMap<Category, f64>,
}

impl Default for UserWeightProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl UserWeightProfile {
    /// Creates a profile with every category at zero
    pub fn new() -> Self {
        Self {
            weights: Category::ALL.into_iter().map(|c| (c, 0.0)).collect(),
        }
    }

    /// Builds a profile from partial weights; missing categories are zero
    /// and negative values are clamped to zero.
    pub fn from_weights(weights: impl IntoIterator<Item = (Category, f64)>) -> Self {
        let mut profile = Self::new();
        for (category, weight) in weights {
            profile.weights.insert(category, weight.max(0.0));
        }
        profile
    }

    /// Adds a non-negative amount to a category. Negative amounts are ignored
    /// so weights never decrease.
    pub fn add(&mut self, category: Category, amount: f64) {
        if amount > 0.0 {
            *self.weights.entry(category).or_insert(0.0) += amount;
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.weights.get(&category).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.weights.iter().map(|(c, w)| (*c, *w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_has_all_categories_at_zero() {
        let profile = UserWeightProfile::new();
        assert_eq!(profile.iter().count(), Category::ALL.len());
        assert!(profile.iter().all(|(_, w)| w == 0.0));
        assert_eq!(profile.total(), 0.0);
    }

    #[test]
    fn test_add_accumulates() {
        let mut profile = UserWeightProfile::new();
        profile.add(Category::Food, 3.0);
        profile.add(Category::Food, 1.0);
        assert_eq!(profile.get(Category::Food), 4.0);
        assert_eq!(profile.total(), 4.0);
    }

    #[test]
    fn test_add_never_decreases() {
        let mut profile = UserWeightProfile::from_weights([(Category::Daily, 2.0)]);
        profile.add(Category::Daily, -5.0);
        assert_eq!(profile.get(Category::Daily), 2.0);
    }

    #[test]
    fn test_serializes_in_definition_order() {
        let profile = UserWeightProfile::from_weights([(Category::Household, 1.0)]);
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(
            json,
            r#"{"Daily":0.0,"Food":0.0,"Electronics":0.0,"Household":1.0}"#
        );
    }
}
