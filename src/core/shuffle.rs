use rand::Rng;

/// Uniform index source behind every random decision. Any `rand::Rng` works;
/// tests can implement it directly to script the picks.
pub trait RandomSource {
    /// Uniform index in `[0, upper)`. `upper` is never 0.
    fn pick(&mut self, upper: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn pick(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

// Fisher-Yates 洗牌：從尾端往前，和 [0, i] 內的隨機位置交換。輸入不變。
pub fn shuffle_with<T: Clone>(items: &[T], rng: &mut impl RandomSource) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.pick(i + 1);
        out.swap(i, j);
    }
    out
}

pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Replays a fixed sequence of indices.
    struct Scripted {
        picks: Vec<usize>,
        at: usize,
    }

    impl Scripted {
        fn new(picks: Vec<usize>) -> Self {
            Self { picks, at: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn pick(&mut self, upper: usize) -> usize {
            let v = self.picks[self.at];
            self.at += 1;
            assert!(v < upper, "scripted pick {} out of range {}", v, upper);
            v
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let input: Vec<u32> = (0..100).collect();
        let shuffled = shuffle(&input);

        assert_eq!(shuffled.len(), input.len());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
    }

    #[test]
    fn scripted_source_gives_exact_permutation() {
        // i=3 swaps with 0, i=2 swaps with 2 (self), i=1 swaps with 0.
        let input = vec!["a", "b", "c", "d"];
        let mut rng = Scripted::new(vec![0, 2, 0]);
        let out = shuffle_with(&input, &mut rng);
        assert_eq!(out, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn identity_script_preserves_order() {
        let input = vec![1, 2, 3, 4, 5];
        let mut rng = Scripted::new(vec![4, 3, 2, 1]);
        let out = shuffle_with(&input, &mut rng);
        assert_eq!(out, input);
    }

    #[test]
    fn same_seed_same_order() {
        let input: Vec<u32> = (0..32).collect();
        let a = shuffle_with(&input, &mut StdRng::seed_from_u64(7));
        let b = shuffle_with(&input, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn input_is_untouched() {
        let input = vec![1, 2, 3];
        let _ = shuffle(&input);
        assert_eq!(input, vec![1, 2, 3]);
    }

    #[test]
    fn empty_and_singleton_are_fine() {
        let empty: Vec<u8> = vec![];
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&[42]), vec![42]);
    }
}
