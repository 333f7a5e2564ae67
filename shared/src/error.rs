use std::fmt;

/// Why a spin request was ignored. This is expected control flow, never a
/// user-facing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRejected {
    AlreadySpinning,
    InsufficientSegments { count: usize },
    OverlayOpen,
}

impl fmt::Display for GuardRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardRejected::AlreadySpinning => write!(f, "a spin is already in progress"),
            GuardRejected::InsufficientSegments { count } => {
                write!(f, "need at least 2 segments to spin, have {}", count)
            }
            GuardRejected::OverlayOpen => write!(f, "an overlay currently owns input"),
        }
    }
}

impl std::error::Error for GuardRejected {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinError {
    Rejected(GuardRejected),
    /// Segments dropped below the spinnable minimum while the wheel was turning.
    InconsistentStateAtResolution { segment_count: usize },
    /// Settle was called for a plan that is no longer in flight.
    StalePlan { plan_id: u64 },
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinError::Rejected(reason) => write!(f, "spin rejected: {}", reason),
            SpinError::InconsistentStateAtResolution { segment_count } => write!(
                f,
                "segments changed during spin ({} left), winner not assigned",
                segment_count
            ),
            SpinError::StalePlan { plan_id } => write!(f, "spin plan {} is not in flight", plan_id),
        }
    }
}

impl std::error::Error for SpinError {}

impl From<GuardRejected> for SpinError {
    fn from(reason: GuardRejected) -> Self {
        SpinError::Rejected(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    Unavailable,
    Serialize(String),
    Deserialize(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Unavailable => write!(f, "storage is not available"),
            PersistenceError::Serialize(e) => write!(f, "failed to serialize state: {}", e),
            PersistenceError::Deserialize(e) => write!(f, "failed to read stored state: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            PersistenceError::Deserialize(err.to_string())
        } else {
            PersistenceError::Serialize(err.to_string())
        }
    }
}
