pub mod evolution_engine;
pub mod fitness;
pub mod mutation;
pub mod organism;
pub mod population;
pub mod progress;

pub use evolution_engine::{EvolutionEngine, EvolutionOutcome, ProgressCallback};
pub use fitness::{FitnessFunction, SquaredDistance};
pub use mutation::{Mutator, PointMutation};
pub use organism::{Organism, ALPHABET, UNEVALUATED_FITNESS};
pub use population::Population;
pub use progress::ConsoleProgressCallback;
