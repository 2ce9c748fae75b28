use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("OPENROUTER_API_KEY is not set")]
    MissingApiKey,

    #[error("Failed to reach the AI service: {0}")]
    OpenRouterError(String),

    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument(msg) => format!("Invalid input: {}", msg),
            Self::MissingField(field) => format!("Product {} is required.", field),
            Self::InvalidFormat(msg) => format!("Invalid value: {}", msg),
            Self::MissingApiKey => "OPENROUTER_API_KEY environment variable not set. \
                 Create a .env file containing OPENROUTER_API_KEY=your-key-here"
                .to_string(),
            Self::OpenRouterError(_) | Self::MalformedResponse(_) => {
                "The AI service is unavailable. Try again later.".to_string()
            }
            Self::Template(msg) => format!("The page template could not be rendered: {}", msg),
            Self::Io(msg) => format!("Could not write the landing page: {}", msg),
        }
    }

    /// Errors raised by input validation, as opposed to infrastructure failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::MissingField(_) | Self::InvalidFormat(_)
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
