use anyhow::Context;
use hellogen::config::evolution::TARGET;
use hellogen::config::{ConfigManager, Variant};
use hellogen::engines::generation::{ConsoleProgressCallback, EvolutionEngine};
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional path to a TOML config file
    let mut manager = ConfigManager::new();
    if let Some(path) = env::args().nth(1) {
        manager
            .load_from_file(&path)
            .with_context(|| format!("could not load configuration from {}", path))?;
    }
    let config = manager.get();

    let variant = config.evolution.variant;
    let mut engine = EvolutionEngine::new(&config.evolution, TARGET);
    let population = engine.initialize_population(variant.population_size());

    // The steady-state loop always lists its population
    let verbose = config.output.verbose || variant == Variant::SteadyState;
    let mut callback =
        ConsoleProgressCallback::stdout(verbose, config.output.print_initial_population);

    engine.run(population, &mut callback)?;

    Ok(())
}
