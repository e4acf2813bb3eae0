use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("selection out of range: {index} not in [0, {count})")]
    OutOfRange { index: usize, count: usize },

    #[error("a form must have at least one question")]
    LastQuestion,

    #[error("a question must have at least one option")]
    LastOption,

    #[error("question '{0}' does not take options")]
    NotAnOptionKind(String),

    #[error("form name must not be empty")]
    EmptyFormName,

    #[error("answer for '{question}': {reason}")]
    InvalidAnswer { question: String, reason: String },

    #[error("submission already {0}")]
    AlreadyReviewed(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Server-reported error, with a generic fallback when the body carried
    /// no message.
    pub fn api(message: Option<String>, fallback: &str) -> Self {
        Error::Api(message.unwrap_or_else(|| fallback.to_owned()))
    }
}
