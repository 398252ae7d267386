use std::sync::{Arc, Weak};

use crate::application::errors::CommandError;
use crate::application::members::User;
use crate::application::rooms::ChatRoom;
use crate::domain::entities::MessageId;

/// Operation a queued command performs against its room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Run the room's full send workflow
    SendMessage,
    /// Persist to room history without broadcasting
    SaveMessage,
}

impl CommandKind {
    pub fn as_str(&self) -> &str {
        match self {
            CommandKind::SendMessage => "send",
            CommandKind::SaveMessage => "save",
        }
    }
}

/// A deferred operation bound to a room, a sender and a message.
///
/// Commands hold weak references, so a queued command never keeps its room
/// or sender alive. If either is gone by execution time the command does
/// nothing.
#[derive(Debug)]
pub struct Command {
    kind: CommandKind,
    id: MessageId,
    room: Weak<ChatRoom>,
    sender: Weak<User>,
    message: String,
}

impl Command {
    fn new(kind: CommandKind, room: &Arc<ChatRoom>, sender: &Arc<User>, message: impl Into<String>) -> Self {
        Self {
            kind,
            id: MessageId::new(),
            room: Arc::downgrade(room),
            sender: Arc::downgrade(sender),
            message: message.into(),
        }
    }

    pub fn send_message(room: &Arc<ChatRoom>, sender: &Arc<User>, message: impl Into<String>) -> Self {
        Self::new(CommandKind::SendMessage, room, sender, message)
    }

    pub fn save_message(room: &Arc<ChatRoom>, sender: &Arc<User>, message: impl Into<String>) -> Self {
        Self::new(CommandKind::SaveMessage, room, sender, message)
    }

    /// Tie this command to an existing message id
    pub fn with_id(mut self, id: MessageId) -> Self {
        self.id = id;
        self
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run the command. Consumes it; a command runs at most once.
    pub fn execute(self) -> Result<(), CommandError> {
        let room = self.room.upgrade().ok_or(CommandError::RoomGone)?;
        let sender = self.sender.upgrade().ok_or(CommandError::SenderGone)?;

        match self.kind {
            CommandKind::SendMessage => {
                room.deliver(self.id, &self.message, &sender)?;
            }
            CommandKind::SaveMessage => {
                if !room.save_message(self.id, &self.message, &sender)? {
                    return Err(CommandError::AlreadyPersisted);
                }
            }
        }
        Ok(())
    }
}
