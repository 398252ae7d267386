//! Application layer errors

use thiserror::Error;
use crate::domain::entities::PermissionLevel;

/// Message content rejected by a room policy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("message is empty")]
    Empty,

    #[error("message contains disallowed term: {0}")]
    Disallowed(String),

    #[error("message is off-topic for this room")]
    MissingTopic,
}

/// Sender not allowed to post
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    #[error("sender is muted")]
    Muted,

    #[error("requires {required} level, sender is {actual}")]
    InsufficientLevel {
        required: PermissionLevel,
        actual: PermissionLevel,
    },

    #[error("message cap reached: {count} sent, limit {limit}")]
    CapacityExceeded { count: u64, limit: u64 },
}

/// Why a room's send workflow stopped before delivery
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    #[error("validation rejected: {0}")]
    Validation(#[from] ValidationError),

    #[error("permission denied: {0}")]
    Permission(#[from] PermissionError),
}

impl RoomError {
    /// Static reason code for logs and tests
    pub fn reason_code(&self) -> &'static str {
        match self {
            RoomError::Validation(_) => "validation_rejected",
            RoomError::Permission(PermissionError::CapacityExceeded { .. }) => "capacity_exceeded",
            RoomError::Permission(_) => "permission_denied",
        }
    }
}

/// Command execution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("room no longer exists")]
    RoomGone,

    #[error("sender no longer exists")]
    SenderGone,

    #[error("message already persisted")]
    AlreadyPersisted,

    #[error(transparent)]
    Rejected(#[from] RoomError),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
