use super::traits::ConfigSection;
use crate::error::HellogenError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print every organism after every generation
    pub verbose: bool,
    pub print_initial_population: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: cfg!(feature = "verbose"),
            print_initial_population: true,
        }
    }
}

impl ConfigSection for OutputConfig {
    fn section_name() -> &'static str {
        "output"
    }

    fn validate(&self) -> Result<(), HellogenError> {
        Ok(())
    }
}
