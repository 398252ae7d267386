//! Domain entities - Core value types with no I/O

pub mod permission;
pub mod message;
pub mod sender;

pub use permission::PermissionLevel;
pub use message::{HistoryEntry, MessageId};
pub use sender::SenderView;
