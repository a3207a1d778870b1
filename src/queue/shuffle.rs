//! Fisher-Yates shuffle with an injected random source.
//!
//! The bridge passes `js_sys::Math::random`; tests pass a deterministic
//! closure. Every permutation is equally likely for a uniform source.

/// Shuffle `items` in place. `rand` must return values in [0, 1).
pub fn shuffle<T>(items: &mut [T], mut rand: impl FnMut() -> f64) {
    for i in (1..items.len()).rev() {
        let j = (rand() * (i + 1) as f64) as usize;
        // Guard against a source returning exactly 1.0
        let j = j.min(i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_elements() {
        let mut items: Vec<u32> = (0..20).collect();
        let mut seed = 0.123f64;
        shuffle(&mut items, || {
            // Cheap deterministic sequence in [0, 1)
            seed = (seed * 997.0 + 0.314).fract();
            seed
        });
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_source_rotates_deterministically() {
        // rand() == 0 always swaps with index 0
        let mut items = vec![1u32, 2, 3, 4];
        shuffle(&mut items, || 0.0);
        assert_eq!(items, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_near_one_source_is_identity() {
        // j == i for every step
        let mut items = vec![1u32, 2, 3, 4];
        shuffle(&mut items, || 0.999_999);
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<u32> = vec![];
        shuffle(&mut empty, || 0.5);
        assert!(empty.is_empty());

        let mut one = vec![7u32];
        shuffle(&mut one, || 0.5);
        assert_eq!(one, vec![7]);
    }
}
