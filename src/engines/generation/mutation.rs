use rand::{Rng, RngCore};

/// Randomly perturbs a DNA sequence in place.
pub trait Mutator {
    fn mutate(&self, dna: &mut [u8], rng: &mut dyn RngCore);
}

impl<F> Mutator for F
where
    F: Fn(&mut [u8], &mut dyn RngCore),
{
    fn mutate(&self, dna: &mut [u8], rng: &mut dyn RngCore) {
        self(dna, rng)
    }
}

/// Point mutation: nudge `count` randomly chosen characters up or down by one.
///
/// Positions are drawn independently, so the same character can be hit more
/// than once. Character codes wrap at the byte boundary and are not clamped to
/// the printable range.
#[derive(Debug, Clone, Copy)]
pub struct PointMutation {
    pub count: usize,
}

impl PointMutation {
    pub const DEFAULT_COUNT: usize = 3;

    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Counts outside `1..=len` fall back to a single mutation.
    pub fn effective_count(&self, len: usize) -> usize {
        if self.count < 1 || self.count > len {
            1
        } else {
            self.count
        }
    }
}

impl Default for PointMutation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COUNT)
    }
}

impl Mutator for PointMutation {
    fn mutate(&self, dna: &mut [u8], rng: &mut dyn RngCore) {
        if dna.is_empty() {
            return;
        }

        for _ in 0..self.effective_count(dna.len()) {
            let index = rng.gen_range(0..dna.len());
            dna[index] = if rng.gen_bool(0.5) {
                dna[index].wrapping_add(1)
            } else {
                dna[index].wrapping_sub(1)
            };
        }
    }
}
