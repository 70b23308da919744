use crate::validation::report::Rejection;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more blocking rules failed. The display form is the full
    /// rendered message that the host surfaces to the writer.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
