use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResendError {
    #[error("API key must start with re_")]
    InvalidApiKey,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NonInteractive(String),

    #[error("No saved key found with name '{0}'.")]
    KeyNotFound(String),

    #[error("No active saved key to log out.")]
    NoActiveKey,

    #[error(
        "API key not found. Please run `resend auth login` or set RESEND_API_KEY environment variable."
    )]
    NotAuthenticated,

    #[error("Cancelled.")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl ResendError {
    /// True for user-initiated aborts, which exit with their own status.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ResendError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, ResendError>;
