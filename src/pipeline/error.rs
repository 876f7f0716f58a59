use crate::llm::BackendError;
use thiserror::Error;

/// Everything that can go wrong while running a stage
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required request field is absent
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// The request body was not a JSON object of the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Sanitized model text is not a JSON object of the expected shape
    #[error("Malformed model output in {stage} stage: {message}")]
    MalformedModelOutput {
        stage: &'static str,
        message: String,
    },
}

/// Coarse error classification used at the HTTP boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Validation,
    Backend,
    MalformedModelOutput,
}

impl PipelineError {
    pub fn malformed(stage: &'static str, message: impl Into<String>) -> Self {
        PipelineError::MalformedModelOutput {
            stage,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::MissingField { .. } | PipelineError::InvalidBody(_) => {
                ErrorKind::Validation
            }
            PipelineError::Backend(BackendError::ConfigurationError { .. }) => {
                ErrorKind::Configuration
            }
            PipelineError::Backend(_) => ErrorKind::Backend,
            PipelineError::MalformedModelOutput { .. } => ErrorKind::MalformedModelOutput,
        }
    }
}
