use thiserror::Error;

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Reasons a history operation or configuration load can fail.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The snapshot failed its own validity check.
    #[error("snapshot is not valid")]
    InvalidSnapshot,
    /// The snapshot equals the current element, so there is nothing to record.
    #[error("snapshot is unchanged from the current element")]
    UnchangedSnapshot,
    #[error("invalid history configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("could not read history configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl HistoryError {
    /// True if the error is a rejected insert rather than a configuration problem.
    pub fn is_rejection(&self) -> bool {
        matches!(self, HistoryError::InvalidSnapshot | HistoryError::UnchangedSnapshot)
    }
}
