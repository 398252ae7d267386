//! Themed chat rooms: mediators running a fixed send workflow with
//! per-room policy hooks, and users that queue commands against them.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{CommandError, ConfigError, PermissionError, RoomError, ValidationError};
pub use application::members::{Command, CommandKind, User};
pub use application::policies::{policy_for, CtrlCatPolicy, DogorithmPolicy, PolicySettings, RoomTheme};
pub use application::rooms::{ChatRoom, RoomSnapshot};
pub use domain::entities::{HistoryEntry, MessageId, PermissionLevel, SenderView};
pub use domain::traits::{RoomPolicy, Sink};
