use knowledge::KnowledgeError;
use medguard_types::ValueError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("failed to build medicine extractor: {0}")]
    ExtractorBuild(#[from] regex::Error),
}

impl From<ValueError> for EngineError {
    fn from(err: ValueError) -> Self {
        EngineError::InvalidInput(err.to_string())
    }
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
