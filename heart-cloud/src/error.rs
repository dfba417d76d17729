use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeartCloudError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeartCloudError {
    /// Raised before any sampling work starts.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(
        "rejection sampling accepted {accepted} of {target} particles within {attempts} attempts"
    )]
    GenerationBudgetExceeded {
        target: usize,
        accepted: usize,
        attempts: usize,
    },
}

impl HeartCloudError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
