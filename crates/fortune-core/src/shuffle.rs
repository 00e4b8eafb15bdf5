use rand::Rng;

/// Fisher-Yates shuffle, walking from the last index down to 1.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_and_single_are_untouched() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut empty: Vec<u32> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn output_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(1234);
        for len in 2..20 {
            let original: Vec<usize> = (0..len).map(|i| i % 5).collect();
            let mut shuffled = original.clone();
            shuffle(&mut shuffled, &mut rng);

            let (mut a, mut b) = (original.clone(), shuffled.clone());
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "len {len}");
        }
    }

    #[test]
    fn every_ordering_is_reachable() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let mut v = ['a', 'b', 'c'];
            shuffle(&mut v, &mut rng);
            seen.insert(v);
        }
        assert_eq!(seen.len(), 6);
    }
}
