use rand::Rng;

/// In-place Fisher–Yates shuffle driven by the given random source.
///
/// Slices of length 0 or 1 are left untouched. With a seeded generator the resulting order is deterministic.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn empty_and_single_are_unchanged() {
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng(1));
        assert_eq!(empty, []);

        let mut single = ["only"];
        shuffle(&mut single, &mut rng(1));
        assert_eq!(single, ["only"]);
    }

    #[test]
    fn output_is_a_permutation() {
        for len in 0..40usize {
            let original: Vec<usize> = (0..len).map(|i| i % 7).collect();
            let mut shuffled = original.clone();
            shuffle(&mut shuffled, &mut rng(len as u64));

            let mut a = original.clone();
            let mut b = shuffled;
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "length {len}");
        }
    }

    #[test]
    fn same_seed_same_order() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();

        shuffle(&mut a, &mut rng(42));
        shuffle(&mut b, &mut rng(42));

        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_moves_something_eventually() {
        let original: Vec<u32> = (0..20).collect();
        let moved = (0..8).any(|seed| {
            let mut items = original.clone();
            shuffle(&mut items, &mut rng(seed));
            items != original
        });
        assert!(moved);
    }
}
