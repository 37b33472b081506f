//! In-place Fisher–Yates shuffle over an injected random source

use rand::Rng;

/// Uniformly permute `items` in place
///
/// Walks from the last index down to 1, swapping each element with one drawn
/// uniformly from the positions at or before it.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
