use std::fmt;

use thiserror::Error;

/// Which implementation runs the background model. Fixed for a whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectorBackend {
    Accelerated,
    Standard,
}

impl fmt::Display for DetectorBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorBackend::Accelerated => write!(f, "accelerated (CUDA)"),
            DetectorBackend::Standard => write!(f, "standard (CPU)"),
        }
    }
}

/// The accelerated backend could not be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("accelerated backend unavailable: {reason}")]
pub struct BackendUnavailable {
    pub reason: String,
}

impl BackendUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
