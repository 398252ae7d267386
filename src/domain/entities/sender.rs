use super::PermissionLevel;
use std::fmt;

/// Read-only snapshot of a user, taken at the start of a workflow run.
///
/// Policy hooks only ever see this view, so they can read a sender's
/// standing but cannot change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderView {
    pub name: String,
    pub level: PermissionLevel,
    pub muted: bool,
    pub message_count: u64,
}

impl SenderView {
    pub fn new(name: impl Into<String>, level: PermissionLevel) -> Self {
        Self {
            name: name.into(),
            level,
            muted: false,
            message_count: 0,
        }
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn with_message_count(mut self, count: u64) -> Self {
        self.message_count = count;
        self
    }
}

impl fmt::Display for SenderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
