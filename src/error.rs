//! Error types shared by storage, resolution and the practice flow.

use thiserror::Error;

/// Errors raised while reading or writing a JSON data file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while turning a mistake key into a question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("malformed mistake key '{0}'")]
    MalformedKey(String),

    #[error("mistake key '{key}' points at question {index}, but the bank holds {len}")]
    IndexOutOfRange {
        key: String,
        index: usize,
        len: usize,
    },
}

/// Rejected actions and failures in a practice session.
#[derive(Debug, Error)]
pub enum PracticeError {
    #[error("no mistakes to practice")]
    NothingToPractice,

    #[error("please select at least one answer before submitting")]
    EmptySelection,

    #[error("this question has already been answered")]
    AlreadySubmitted,

    #[error("please submit your answer before moving on")]
    NotSubmitted,

    #[error("the round is still in progress")]
    NotComplete,

    #[error("all mistaken questions have been practiced")]
    Complete,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
