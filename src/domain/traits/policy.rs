use crate::application::errors::{PermissionError, ValidationError};
use crate::domain::entities::{PermissionLevel, SenderView};

/// RoomPolicy trait - the customizable steps of a room's send workflow
///
/// A room holds exactly one policy for its whole life. The workflow calls
/// `validate` and `check_permission` as gates, then `log_activity` and
/// `post_process` once the message has been delivered. Hooks return the
/// lines they want emitted; the room prefixes them with its name and
/// decides where they go.
pub trait RoomPolicy: Send + Sync {
    /// Short theme label, used in logs and snapshots
    fn theme(&self) -> &'static str;

    /// Lowest level allowed to post in this room
    fn minimum_level(&self) -> PermissionLevel;

    /// Check message content against room rules
    fn validate(&self, message: &str, sender: &SenderView) -> Result<(), ValidationError>;

    /// Check whether the sender may post right now
    fn check_permission(&self, sender: &SenderView) -> Result<(), PermissionError>;

    /// Audit line for an accepted message
    fn log_activity(&self, message: &str, sender: &SenderView) -> String;

    /// Engagement notices for an accepted message, possibly none
    fn post_process(&self, message: &str, sender: &SenderView) -> Vec<String>;

    /// How an accepted message is written into history
    fn history_entry(&self, message: &str, sender: &SenderView) -> String {
        format!("{}: {}", sender.name, message)
    }
}
