use rand::{seq::SliceRandom, Rng};

/// Draws `k` distinct items uniformly at random without replacement.
///
/// When `k` exceeds the pool, every item is returned. The returned order is
/// itself random. All product draws (category, backfill, cold start) go
/// through here.
pub fn sample_without_replacement<'a, T, R>(items: &'a [T], k: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let amount = k.min(items.len());
    if amount == 0 {
        return Vec::new();
    }

    let mut pool: Vec<&T> = items.iter().collect();
    let (chosen, _) = pool.partial_shuffle(rng, amount);
    chosen.to_vec()
}
