use crate::process::ProcessId;
use thiserror::Error;

/// Core error types for procull operations
#[derive(Error, Debug)]
pub enum CullError {
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("failed to terminate process {pid}: {reason}")]
    Termination { pid: ProcessId, reason: String },

    #[error("process enumeration failed: {0}")]
    Enumeration(String),

    #[error("{attribute} unavailable for process {pid}")]
    AttributeUnavailable {
        pid: ProcessId,
        attribute: &'static str,
    },

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl CullError {
    /// Check if the scan/kill loops absorb this error by reporting and
    /// moving on to the next node or cycle
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CullError::Other(_))
    }
}
