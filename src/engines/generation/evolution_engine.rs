use crate::config::evolution::{EvolutionConfig, Variant};
use crate::engines::generation::{
    fitness::{FitnessFunction, SquaredDistance},
    mutation::{Mutator, PointMutation},
    organism::Organism,
    population::Population,
};
use crate::error::HellogenError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Smallest population each variant can breed from.
const MIN_ELITIST_POPULATION: usize = 4;
const MIN_STEADY_STATE_POPULATION: usize = 2;

pub trait ProgressCallback {
    fn on_initial_population(&mut self, population: &Population) -> Result<(), HellogenError>;
    fn on_generation_complete(
        &mut self,
        generation: usize,
        population: &Population,
        replacements: usize,
    ) -> Result<(), HellogenError>;
    fn on_winner(&mut self, generation: usize, winner: &Organism) -> Result<(), HellogenError>;
    fn on_generation_limit(
        &mut self,
        generation: usize,
        best: &Organism,
    ) -> Result<(), HellogenError>;
}

/// Result of a finished run.
#[derive(Debug)]
pub struct EvolutionOutcome {
    /// Number of generations bred before the run stopped
    pub generation: usize,
    /// Best organism at termination, `None` when the generation cap was hit first
    pub winner: Option<Organism>,
    pub population: Population,
}

pub struct EvolutionEngine<F = SquaredDistance, M = PointMutation> {
    variant: Variant,
    max_generations: Option<usize>,
    target: Vec<u8>,
    fitness: F,
    mutator: M,
    rng: StdRng,
}

impl EvolutionEngine {
    /// Engine with the default squared-distance fitness and point mutation.
    pub fn new(config: &EvolutionConfig, target: impl Into<Vec<u8>>) -> Self {
        Self::with_strategies(
            config,
            target,
            SquaredDistance,
            PointMutation::new(config.mutation_count),
        )
    }
}

impl<F: FitnessFunction, M: Mutator> EvolutionEngine<F, M> {
    pub fn with_strategies(
        config: &EvolutionConfig,
        target: impl Into<Vec<u8>>,
        fitness: F,
        mutator: M,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            variant: config.variant,
            max_generations: config.max_generations,
            target: target.into(),
            fitness,
            mutator,
            rng,
        }
    }

    /// Random population of `size` members, scored against the target.
    pub fn initialize_population(&mut self, size: usize) -> Population {
        Population::new_random(size, &self.target, &self.fitness, &mut self.rng)
    }

    /// Evolves `population` until the variant's termination condition holds.
    ///
    /// The elitist variant stops once every member matches the target; the
    /// steady-state variant stops once the best member does.
    pub fn run<C: ProgressCallback>(
        &mut self,
        mut population: Population,
        callback: &mut C,
    ) -> Result<EvolutionOutcome, HellogenError> {
        self.check_population_size(population.len())?;

        log::info!(
            "Evolving {} organisms toward {:?} ({:?} variant)",
            population.len(),
            String::from_utf8_lossy(&self.target),
            self.variant
        );

        population.sort();
        callback.on_initial_population(&population)?;

        let mut generation = 0;

        while !self.is_finished(&population) {
            if self.max_generations.is_some_and(|max| generation >= max) {
                log::warn!("Stopped after {} generations without a winner", generation);
                callback.on_generation_limit(generation, &population[0])?;
                return Ok(EvolutionOutcome {
                    generation,
                    winner: None,
                    population,
                });
            }

            generation += 1;
            let replacements = self.create_next_generation(&mut population);

            log::debug!(
                "Generation {}: {} replacement(s), best score {}",
                generation,
                replacements,
                population[0].fitness_score()
            );
            callback.on_generation_complete(generation, &population, replacements)?;
        }

        let winner = population[0].clone();
        log::info!("Winner after {} generations: {}", generation, winner);
        callback.on_winner(generation, &winner)?;

        Ok(EvolutionOutcome {
            generation,
            winner: Some(winner),
            population,
        })
    }

    /// Breeds one generation in place. Returns how many slots were replaced.
    fn create_next_generation(&mut self, population: &mut Population) -> usize {
        match self.variant {
            Variant::Elitist => self.create_next_generation_elitist(population),
            Variant::SteadyState => self.create_next_generation_steady_state(population),
        }
    }

    fn is_finished(&self, population: &Population) -> bool {
        match self.variant {
            Variant::Elitist => population.all_evolved(),
            Variant::SteadyState => population.best().is_some_and(Organism::is_exact_match),
        }
    }

    fn check_population_size(&self, size: usize) -> Result<(), HellogenError> {
        let min = match self.variant {
            Variant::Elitist => MIN_ELITIST_POPULATION,
            Variant::SteadyState => MIN_STEADY_STATE_POPULATION,
        };

        if size < min {
            return Err(HellogenError::Evolution(format!(
                "{:?} variant needs at least {} organisms, got {}",
                self.variant, min, size
            )));
        }
        Ok(())
    }

    fn create_next_generation_elitist(&mut self, population: &mut Population) -> usize {
        let size = population.len();
        let mut replacements = 0;

        // Only the top quarter breeds; each child challenges the mirrored slot
        // at the bottom of the ranking.
        for i in 0..size / 4 {
            let mut child = population[i].create_child_with(&population[i + 1]);
            child.calculate_fitness(&self.target, &self.fitness);

            if !child.is_exact_match() {
                child.mutate(&self.mutator, &mut self.rng);
                child.calculate_fitness(&self.target, &self.fitness);
            }

            if population.replace_if_fitter(size - 1 - i, child) {
                replacements += 1;
            }
        }

        // An untouched population is still sorted
        if replacements > 0 {
            population.sort();
        }

        replacements
    }

    fn create_next_generation_steady_state(&mut self, population: &mut Population) -> usize {
        let Some(worst) = population.worst_index() else {
            return 0;
        };

        let first = population.select_random_parent(&mut self.rng);
        let second = population.select_random_parent(&mut self.rng);

        let mut child = population[first].create_child_with(&population[second]);
        child.mutate(&self.mutator, &mut self.rng);
        child.calculate_fitness(&self.target, &self.fitness);

        if population.replace_if_fitter(worst, child) {
            population.sort();
            1
        } else {
            0
        }
    }
}
