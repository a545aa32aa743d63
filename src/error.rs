use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to decode poem content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Quiz bank is empty")]
    EmptyQuizBank,

    #[error("Question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    #[error("Failed to build glossary pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<ContentError> for std::io::Error {
    fn from(err: ContentError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}
