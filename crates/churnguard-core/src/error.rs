//! Error types for ChurnGuard

/// Result type alias using ChurnGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ChurnGuard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Model artifact loading errors (missing, unreadable, invalid)
    #[error("model load error: {0}")]
    ModelLoad(String),

    /// Feature schema errors (empty, duplicated, or mismatched columns)
    #[error("schema error: {0}")]
    Schema(String),

    /// Input validation errors (out-of-domain values)
    #[error("input error: {0}")]
    Input(String),

    /// Inference errors raised while scoring a feature vector
    #[error("inference error: {0}")]
    Inference(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new model load error
    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoad(msg.into())
    }

    /// Create a new schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a new input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Whether this error was raised at model load time
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::ModelLoad(_))
    }
}
