use super::fitness::FitnessFunction;
use super::mutation::Mutator;
use rand::{Rng, RngCore};
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

/// Printable ASCII, the range random DNA is drawn from.
pub const ALPHABET: RangeInclusive<u8> = 32..=126;

/// Fitness of an organism that has not been scored yet.
pub const UNEVALUATED_FITNESS: u64 = u64::MAX;

/// One candidate string and its distance to the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organism {
    dna: Vec<u8>,
    fitness_score: u64,
}

impl Organism {
    pub fn with_random_dna<R: Rng + ?Sized>(dna_len: usize, rng: &mut R) -> Self {
        let dna: Vec<u8> = (0..dna_len).map(|_| rng.gen_range(ALPHABET)).collect();
        Self::from_dna(dna, dna_len)
    }

    /// Panics if `dna` is not exactly `dna_len` bytes long.
    pub fn from_dna(dna: impl Into<Vec<u8>>, dna_len: usize) -> Self {
        let dna = dna.into();
        assert_eq!(dna.len(), dna_len, "dna does not have the declared length");

        Self {
            dna,
            fitness_score: UNEVALUATED_FITNESS,
        }
    }

    pub fn dna(&self) -> &[u8] {
        &self.dna
    }

    pub fn dna_len(&self) -> usize {
        self.dna.len()
    }

    pub fn fitness_score(&self) -> u64 {
        self.fitness_score
    }

    pub fn is_exact_match(&self) -> bool {
        self.fitness_score == 0
    }

    /// DNA rendered one char per byte, so out-of-range codes stay visible.
    pub fn dna_string(&self) -> String {
        self.dna.iter().map(|&b| char::from(b)).collect()
    }

    pub fn calculate_fitness<F: FitnessFunction + ?Sized>(&mut self, target: &[u8], fitness: &F) {
        assert_eq!(self.dna.len(), target.len(), "organism and target lengths differ");
        self.fitness_score = fitness.score(&self.dna, target);
    }

    /// Orders by fitness ascending: the fitter organism compares as `Less`.
    pub fn compare_to(&self, other: &Organism) -> Ordering {
        self.fitness_score.cmp(&other.fitness_score)
    }

    /// Midpoint crossover.
    ///
    /// The child starts as a copy of `self`. When `self` is not fitter than
    /// `mate`, the first half comes from `mate`; otherwise the second half does.
    /// The rule depends on argument order: swapping `self` and `mate` can change
    /// which half is inherited.
    pub fn create_child_with(&self, mate: &Organism) -> Organism {
        assert_eq!(self.dna.len(), mate.dna.len(), "parents have different dna lengths");

        let len = self.dna.len();
        let half = len / 2;
        let range = if self.compare_to(mate) != Ordering::Less {
            0..half
        } else {
            half..len
        };

        let mut child_dna = self.dna.clone();
        child_dna[range.clone()].copy_from_slice(&mate.dna[range]);

        Organism::from_dna(child_dna, len)
    }

    /// Mutates the DNA in place. The fitness score is stale until recalculated.
    pub fn mutate<M: Mutator + ?Sized>(&mut self, mutator: &M, rng: &mut dyn RngCore) {
        mutator.mutate(&mut self.dna, rng);
    }
}

impl fmt::Display for Organism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; {}; score: {}",
            self.dna_len(),
            self.dna_string(),
            self.fitness_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::fitness::SquaredDistance;
    use crate::engines::generation::mutation::PointMutation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scored(dna: &str, target: &str) -> Organism {
        let mut org = Organism::from_dna(dna, dna.len());
        org.calculate_fitness(target.as_bytes(), &SquaredDistance);
        org
    }

    #[test]
    fn test_random_dna_is_printable() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let org = Organism::with_random_dna(13, &mut rng);
            assert_eq!(org.dna_len(), 13);
            assert!(org.dna().iter().all(|b| ALPHABET.contains(b)));
            assert_eq!(org.fitness_score(), UNEVALUATED_FITNESS);
        }
    }

    #[test]
    fn test_from_dna_copies_input() {
        let source = b"Hello".to_vec();
        let org = Organism::from_dna(source.as_slice(), 5);
        assert_eq!(org.dna(), b"Hello");
        assert_eq!(org.dna_string(), "Hello");
    }

    #[test]
    #[should_panic(expected = "declared length")]
    fn test_from_dna_length_mismatch_panics() {
        Organism::from_dna("Hello", 4);
    }

    #[test]
    #[should_panic(expected = "lengths differ")]
    fn test_fitness_length_mismatch_panics() {
        let mut org = Organism::from_dna("Hi", 2);
        org.calculate_fitness(b"Hey", &SquaredDistance);
    }

    #[test]
    fn test_hi_scenario() {
        let exact = scored("Hi", "Hi");
        let near = scored("Hj", "Hi");

        assert_eq!(exact.fitness_score(), 0);
        assert!(exact.is_exact_match());
        assert_eq!(near.fitness_score(), 1);
        assert_eq!(exact.compare_to(&near), Ordering::Less);
    }

    #[test]
    fn test_compare_follows_fitness() {
        let a = scored("Hk", "Hi"); // 4
        let b = scored("Hj", "Hi"); // 1
        let c = scored("Hh", "Hi"); // 1

        assert_eq!(a.compare_to(&b), Ordering::Greater);
        assert_eq!(b.compare_to(&a), Ordering::Less);
        assert_eq!(b.compare_to(&c), Ordering::Equal);
        assert_eq!(a.compare_to(&a), Ordering::Equal);
    }

    #[test]
    fn test_crossover_takes_first_half_from_fitter_mate() {
        // self is worse than mate -> positions [0, half) come from mate
        let worse = scored("abcdef", "uvwxyz");
        let better = scored("uvwabc", "uvwxyz");
        assert_eq!(worse.compare_to(&better), Ordering::Greater);

        let child = worse.create_child_with(&better);
        assert_eq!(child.dna(), b"uvwdef");
        assert_eq!(child.fitness_score(), UNEVALUATED_FITNESS);
    }

    #[test]
    fn test_crossover_takes_second_half_when_self_is_fitter() {
        let better = scored("uvwabc", "uvwxyz");
        let worse = scored("abcdef", "uvwxyz");

        let child = better.create_child_with(&worse);
        assert_eq!(child.dna(), b"uvwdef");
    }

    #[test]
    fn test_crossover_tie_takes_first_half_from_mate() {
        let a = scored("AAAA", "AAAA");
        let mut b = Organism::from_dna("BBBB", 4);
        b.calculate_fitness(b"BBBB", &SquaredDistance);
        assert_eq!(a.compare_to(&b), Ordering::Equal);

        assert_eq!(a.create_child_with(&b).dna(), b"BBAA");
        assert_eq!(b.create_child_with(&a).dna(), b"AABB");
    }

    #[test]
    fn test_crossover_odd_length_split() {
        let worse = scored("aaaaa", "zzzzz");
        let better = scored("yyyyy", "zzzzz");

        // half = 2
        assert_eq!(worse.create_child_with(&better).dna(), b"yyaaa");
        assert_eq!(better.create_child_with(&worse).dna(), b"yyaaa");
    }

    #[test]
    fn test_crossover_never_invents_characters() {
        let mut rng = StdRng::seed_from_u64(3);
        let target = b"Hello, World!";

        for _ in 0..200 {
            let mut a = Organism::with_random_dna(target.len(), &mut rng);
            let mut b = Organism::with_random_dna(target.len(), &mut rng);
            a.calculate_fitness(target, &SquaredDistance);
            b.calculate_fitness(target, &SquaredDistance);

            let child = a.create_child_with(&b);
            assert_eq!(child.dna_len(), a.dna_len());
            for i in 0..child.dna_len() {
                let c = child.dna()[i];
                assert!(c == a.dna()[i] || c == b.dna()[i]);
            }
        }
    }

    #[test]
    #[should_panic(expected = "different dna lengths")]
    fn test_crossover_length_mismatch_panics() {
        let a = Organism::from_dna("abc", 3);
        let b = Organism::from_dna("abcd", 4);
        a.create_child_with(&b);
    }

    #[test]
    fn test_mutate_uses_injected_strategy() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut org = Organism::from_dna("aaaa", 4);

        let uppercase = |dna: &mut [u8], _rng: &mut dyn RngCore| dna.make_ascii_uppercase();
        org.mutate(&uppercase, &mut rng);
        assert_eq!(org.dna(), b"AAAA");

        org.mutate(&PointMutation::new(1), &mut rng);
        assert_eq!(org.dna_len(), 4);
        assert_ne!(org.dna(), b"AAAA");
    }

    #[test]
    fn test_display_format() {
        let org = scored("Hj", "Hi");
        assert_eq!(org.to_string(), "2; Hj; score: 1");
    }
}
