use super::traits::ConfigSection;
use crate::engines::generation::mutation::PointMutation;
use crate::error::HellogenError;
use serde::{Deserialize, Serialize};

/// String every run evolves toward.
pub const TARGET: &str = "Hello, World!";

pub const ELITIST_POPULATION_SIZE: usize = 1000;
pub const STEADY_STATE_POPULATION_SIZE: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub variant: Variant,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    pub mutation_count: usize,
    /// Stop after this many generations even without a winner
    pub max_generations: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Top quarter breeds in pairs, children challenge the matching bottom slots
    Elitist,
    /// One rank-skewed pairing per generation, child challenges the worst slot
    SteadyState,
}

impl Variant {
    pub fn population_size(self) -> usize {
        match self {
            Variant::Elitist => ELITIST_POPULATION_SIZE,
            Variant::SteadyState => STEADY_STATE_POPULATION_SIZE,
        }
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Elitist,
            seed: None,
            mutation_count: PointMutation::DEFAULT_COUNT,
            max_generations: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), HellogenError> {
        if self.mutation_count < 1 {
            return Err(HellogenError::Configuration(format!(
                "[{}] mutation_count must be at least 1",
                Self::section_name(),
            )));
        }
        if self.mutation_count > TARGET.len() {
            return Err(HellogenError::Configuration(format!(
                "[{}] mutation_count must not exceed the target length ({})",
                Self::section_name(),
                TARGET.len(),
            )));
        }
        if self.max_generations == Some(0) {
            return Err(HellogenError::Configuration(format!(
                "[{}] max_generations must be at least 1 when set",
                Self::section_name(),
            )));
        }
        Ok(())
    }
}
