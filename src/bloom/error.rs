use thiserror::Error;

pub type BloomResult<T> = std::result::Result<T, BloomError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BloomError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("At least one hash function is required")]
    NoHashFunctions,

    #[error("Cannot import a filter from an empty byte buffer")]
    EmptyBuffer,

    #[error("Substring window length must be greater than 0")]
    ZeroWindow,
}
