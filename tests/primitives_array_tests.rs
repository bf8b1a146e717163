//! Tests for the eager array helpers.

use vecseq::prelude::*;

/// Test `make` fills by index.
#[test]
fn test_make_fills_by_index() {
    let squares = make(5, |i| (i * i) as f64);
    assert_eq!(squares, vec![0.0, 1.0, 4.0, 9.0, 16.0]);
    assert!(make(0, |i| i).is_empty());
}

#[cfg(feature = "random")]
mod shuffle {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use vecseq::prelude::*;

    /// Test shuffling keeps the same multiset of elements.
    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut xs = make(50, |i| i);

        let shuffled = shuffle_in_place(&mut rng, &mut xs).to_vec();
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();

        assert_eq!(sorted, make(50, |i| i));
        assert_eq!(shuffled, xs);
    }

    /// Test the same seed gives the same order.
    #[test]
    fn test_shuffle_reproducible() {
        let mut a = make(20, |i| i);
        let mut b = make(20, |i| i);
        shuffle_in_place(&mut StdRng::seed_from_u64(7), &mut a);
        shuffle_in_place(&mut StdRng::seed_from_u64(7), &mut b);
        assert_eq!(a, b);
    }

    /// Test every position is reachable for the first element.
    #[test]
    fn test_shuffle_moves_elements() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..400 {
            let mut xs = [0usize, 1, 2, 3];
            shuffle_in_place(&mut rng, &mut xs);
            let pos = xs.iter().position(|&x| x == 0).unwrap();
            seen[pos] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
