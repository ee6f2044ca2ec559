use thiserror::Error;

#[derive(Error, Debug)]
pub enum HellogenError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Evolution error: {0}")]
    Evolution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HellogenError>;
