use thiserror::Error;

#[derive(Error, Debug)]
pub enum FossleError {
    /// A guess arrived after the puzzle ended, or named something unguessable.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// An import token that is not base64, not UTF-8 or not JSON.
    #[error("Could not decode save: {0}")]
    Decode(String),

    /// An import token that decodes to JSON of the wrong shape.
    #[error("Save does not look like fossle statistics: {0}")]
    Schema(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FossleError>;
