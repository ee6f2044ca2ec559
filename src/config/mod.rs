pub mod evolution;
pub mod manager;
pub mod output;
pub mod traits;

pub use evolution::{EvolutionConfig, Variant};
pub use manager::{AppConfig, ConfigManager};
pub use output::OutputConfig;
pub use traits::ConfigSection;
