//! Sampling without replacement.

use rand::Rng;
use rand::seq::index;

/// Copy `amount` distinct vectors chosen uniformly at random.
///
/// The returned vectors are owned copies, they never alias `vecs`.
///
/// # Panics
///
/// Panics if `amount > vecs.len()`.
pub fn subsample<T: Copy, R: Rng + ?Sized>(
    amount: usize,
    vecs: &[Vec<T>],
    rng: &mut R,
) -> Vec<Vec<T>> {
    index::sample(rng, vecs.len(), amount)
        .into_iter()
        .map(|i| vecs[i].clone())
        .collect()
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::subsample;

    #[test]
    fn test_subsample_distinct() {
        let vecs: Vec<Vec<f32>> = (0..100).map(|i| vec![i as f32, -(i as f32)]).collect();
        let mut rng = StdRng::seed_from_u64(42);
        for amount in [1, 10, 50, 100] {
            let picked = subsample(amount, &vecs, &mut rng);
            assert_eq!(picked.len(), amount);
            let unique: HashSet<i64> = picked.iter().map(|v| v[0] as i64).collect();
            assert_eq!(unique.len(), amount);
            assert!(picked.iter().all(|v| vecs.contains(v)));
        }
    }

    #[test]
    fn test_subsample_seeded() {
        let vecs: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64]).collect();
        let lhs = subsample(5, &vecs, &mut StdRng::seed_from_u64(3));
        let rhs = subsample(5, &vecs, &mut StdRng::seed_from_u64(3));
        assert_eq!(lhs, rhs);
    }
}
