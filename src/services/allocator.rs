//! Proportional allocation of recommendation slots.
//!
//! Turns a user's category weights into ratios, the ratios into an exact
//! integer distribution, and the distribution into a deduplicated product list.
//! Everything here is a pure function of its inputs plus the supplied RNG.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;

use crate::models::{Category, Product, UserWeightProfile};

use super::{catalog::Catalog, sampling::sample_without_replacement};

/// Number of products returned per recommendation request
pub const RECOMMENDATION_COUNT: usize = 9;

/// Products drawn per category on the cold-start path
const COLD_START_PER_CATEGORY: usize = 2;

pub type CategoryRatios = BTreeMap<Category, f64>;
pub type CategoryDistribution = BTreeMap<Category, usize>;

/// Outcome of one allocation
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub category_ratios: CategoryRatios,
    pub products: Vec<Product>,
}

/// Allocates recommendations for a profile, falling back to the cold-start
/// set when there is no profile or its total weight is zero.
pub fn allocate<R>(profile: Option<&UserWeightProfile>, catalog: &Catalog, rng: &mut R) -> Allocation
where
    R: Rng + ?Sized,
{
    let profile = match profile {
        Some(p) if p.total() > 0.0 => p,
        _ => return cold_start(catalog, rng),
    };

    let category_ratios = ratios(profile);
    let keyed: Vec<(Category, f64)> = category_ratios.iter().map(|(c, r)| (*c, *r)).collect();
    let distribution: CategoryDistribution =
        distribute(&keyed, RECOMMENDATION_COUNT).into_iter().collect();

    tracing::debug!(?distribution, "Computed category distribution");

    let mut products = select_products(&distribution, catalog, rng);
    backfill(&mut products, catalog, RECOMMENDATION_COUNT, rng);
    products.truncate(RECOMMENDATION_COUNT);

    Allocation {
        category_ratios,
        products,
    }
}

/// Uniform, non-personalised selection for users without signal.
///
/// The reported ratios are always the uniform split, whatever was sampled.
pub fn cold_start<R>(catalog: &Catalog, rng: &mut R) -> Allocation
where
    R: Rng + ?Sized,
{
    let mut products: Vec<Product> = catalog
        .groups()
        .flat_map(|(_, group)| sample_without_replacement(group, COLD_START_PER_CATEGORY, rng))
        .cloned()
        .collect();
    products.truncate(RECOMMENDATION_COUNT);

    let categories: Vec<Category> = catalog.categories().collect();
    let share = 1.0 / categories.len() as f64;

    Allocation {
        category_ratios: categories.into_iter().map(|c| (c, share)).collect(),
        products,
    }
}

/// `weight / total` for every category, zero-weight categories included.
/// Callers guarantee a positive total.
pub fn ratios(profile: &UserWeightProfile) -> CategoryRatios {
    let total = profile.total();
    profile.iter().map(|(c, w)| (c, w / total)).collect()
}

/// Integer distribution of `total` slots over `ratios`.
///
/// Each key gets `floor(total * ratio)`, bumped to 1 when the ratio is
/// positive. A deficit goes entirely to the highest ratio; an excess is taken
/// from the highest count, clamped at zero and cascading to the next highest.
/// Ties resolve to the earliest key in `ratios`. The result always sums to
/// `total` when at least one ratio is positive.
pub fn distribute<K: Copy>(ratios: &[(K, f64)], total: usize) -> Vec<(K, usize)> {
    let mut counts: Vec<(K, usize)> = ratios
        .iter()
        .map(|&(key, ratio)| {
            let mut n = (total as f64 * ratio).floor() as usize;
            if n == 0 && ratio > 0.0 {
                n = 1;
            }
            (key, n)
        })
        .collect();

    let sum: usize = counts.iter().map(|(_, n)| n).sum();

    if sum < total {
        if let Some(idx) = first_max_by(ratios.iter().map(|(_, r)| *r)) {
            counts[idx].1 += total - sum;
        }
    } else if sum > total {
        let mut excess = sum - total;
        while excess > 0 {
            let Some(idx) = first_max_by(counts.iter().map(|(_, n)| *n as f64)) else {
                break;
            };
            let taken = excess.min(counts[idx].1);
            if taken == 0 {
                break;
            }
            counts[idx].1 -= taken;
            excess -= taken;
        }
    }

    counts
}

/// Index of the first maximum; `None` for an empty sequence
fn first_max_by(values: impl Iterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, value) in values.enumerate() {
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Draws each category's share from the catalog, in category order
fn select_products<R>(distribution: &CategoryDistribution, catalog: &Catalog, rng: &mut R) -> Vec<Product>
where
    R: Rng + ?Sized,
{
    let mut selected = Vec::with_capacity(RECOMMENDATION_COUNT);
    for (category, &count) in distribution {
        if count == 0 {
            continue;
        }
        let available = catalog.products(*category);
        if available.is_empty() {
            tracing::debug!(category = %category, "Category out of stock, skipping");
            continue;
        }
        selected.extend(sample_without_replacement(available, count, rng).into_iter().cloned());
    }
    selected
}

/// Tops `selected` up to `target` from products not yet chosen
fn backfill<R>(selected: &mut Vec<Product>, catalog: &Catalog, target: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    if selected.len() >= target {
        return;
    }
    let needed = target - selected.len();

    let taken: HashSet<&str> = selected.iter().map(|p| p.id.as_str()).collect();
    let pool: Vec<&Product> = catalog
        .all_products()
        .filter(|p| !taken.contains(p.id.as_str()))
        .collect();

    let extra: Vec<Product> = sample_without_replacement(&pool, needed, rng)
        .into_iter()
        .map(|p| (*p).clone())
        .collect();

    if extra.len() < needed {
        tracing::warn!(
            needed,
            available = extra.len(),
            "Catalog stock too small to fill recommendations"
        );
    }
    selected.extend(extra);
}
