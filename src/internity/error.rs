use thiserror::Error;

#[derive(Error, Debug)]
pub enum InternityError {
    /// A field value breaks an internship invariant. Nothing was changed.
    #[error("{0}")]
    Validation(String),

    /// Carries the 1-based index the user would have typed.
    #[error("Invalid internship index: {0}")]
    InvalidIndex(usize),

    #[error("No internships found")]
    EmptyStore,

    #[error("Invalid storage file format: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0}")]
    Parse(String),
}

impl InternityError {
    pub fn validation(message: impl Into<String>) -> Self {
        InternityError::Validation(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        InternityError::Parse(message.into())
    }
}

pub type Result<T> = std::result::Result<T, InternityError>;
