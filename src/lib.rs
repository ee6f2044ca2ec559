pub mod config;
pub mod engines;
pub mod error;

pub use error::{HellogenError, Result};
