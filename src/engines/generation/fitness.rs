/// Scores a DNA sequence against the target. Lower is fitter, 0 is an exact match.
pub trait FitnessFunction {
    fn score(&self, dna: &[u8], target: &[u8]) -> u64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&[u8], &[u8]) -> u64,
{
    fn score(&self, dna: &[u8], target: &[u8]) -> u64 {
        self(dna, target)
    }
}

/// Sum of squared character-code differences over all positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredDistance;

impl FitnessFunction for SquaredDistance {
    fn score(&self, dna: &[u8], target: &[u8]) -> u64 {
        assert_eq!(dna.len(), target.len(), "dna and target lengths differ");

        dna.iter()
            .zip(target)
            .map(|(&a, &b)| {
                let diff = i64::from(a) - i64::from(b);
                (diff * diff) as u64
            })
            .sum()
    }
}
