use super::fitness::FitnessFunction;
use super::organism::Organism;
use rand::Rng;
use std::fmt;

/// Fixed-size collection of organisms, one per slot.
///
/// The number of slots never changes after construction. Callers keep it
/// sorted by calling [`Population::sort`] after replacing members.
#[derive(Debug, Clone)]
pub struct Population {
    organisms: Vec<Organism>,
}

impl Population {
    /// Builds `size` random organisms and scores each against `target`.
    pub fn new_random<F, R>(size: usize, target: &[u8], fitness: &F, rng: &mut R) -> Self
    where
        F: FitnessFunction + ?Sized,
        R: Rng + ?Sized,
    {
        let organisms = (0..size)
            .map(|_| {
                let mut org = Organism::with_random_dna(target.len(), rng);
                org.calculate_fitness(target, fitness);
                org
            })
            .collect();

        Self { organisms }
    }

    pub fn from_organisms(organisms: Vec<Organism>) -> Self {
        Self { organisms }
    }

    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Organism> {
        self.organisms.iter()
    }

    /// Lowest-ranked slot. Only the fittest organism once sorted.
    pub fn best(&self) -> Option<&Organism> {
        self.organisms.first()
    }

    pub fn worst_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.len() - 1)
    }

    pub fn sort(&mut self) {
        self.organisms.sort_by(|a, b| a.compare_to(b));
    }

    pub fn is_sorted(&self) -> bool {
        self.organisms
            .windows(2)
            .all(|pair| pair[0].compare_to(&pair[1]).is_le())
    }

    /// Every member matches the target exactly.
    pub fn all_evolved(&self) -> bool {
        self.organisms.iter().all(Organism::is_exact_match)
    }

    /// Puts `organism` in slot `index` and hands back the one it displaced.
    ///
    /// Panics if `index` is out of range.
    pub fn replace(&mut self, index: usize, organism: Organism) -> Organism {
        std::mem::replace(&mut self.organisms[index], organism)
    }

    /// Replaces slot `index` only if `child` is strictly fitter than its occupant.
    ///
    /// Returns `true` when the slot changed; a rejected child is dropped.
    pub fn replace_if_fitter(&mut self, index: usize, child: Organism) -> bool {
        if child.compare_to(&self.organisms[index]).is_lt() {
            self.replace(index, child);
            true
        } else {
            false
        }
    }

    /// Rank of a parent drawn as `floor(r1 * r2 * (len - 1))`, `r1, r2` uniform in `[0, 1)`.
    ///
    /// The product of two uniforms leans toward zero, which favours the fitter
    /// end of a sorted population without looking at fitness at all.
    pub fn select_random_parent<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let rand_one: f64 = rng.gen();
        let rand_two: f64 = rng.gen();
        let span = self.organisms.len().saturating_sub(1) as f64;

        (rand_one * rand_two * span) as usize
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Organism;

    fn index(&self, index: usize) -> &Organism {
        &self.organisms[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Organism;
    type IntoIter = std::slice::Iter<'a, Organism>;

    fn into_iter(self) -> Self::IntoIter {
        self.organisms.iter()
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for org in &self.organisms {
            writeln!(f, "{}", org)?;
        }
        Ok(())
    }
}
