use parking_lot::{Mutex, MutexGuard};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Weak};

use super::Command;
use crate::application::rooms::ChatRoom;
use crate::domain::entities::{MessageId, PermissionLevel, SenderView};

#[derive(Default)]
struct UserState {
    level: PermissionLevel,
    muted: bool,
    message_count: u64,
    queue: VecDeque<Command>,
    inbox: Vec<String>,
}

/// A chat user. Talks to rooms through queued commands.
pub struct User {
    name: String,
    home: Weak<ChatRoom>,
    state: Mutex<UserState>,
    // Held for a whole workflow run so cap checks and the count increment
    // cannot interleave for the same sender.
    turn: Mutex<()>,
}

impl User {
    /// Create a guest user whose home is `room`. Does not register them.
    pub fn new(room: &Arc<ChatRoom>, name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            home: Arc::downgrade(room),
            state: Mutex::new(UserState::default()),
            turn: Mutex::new(()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn home_room(&self) -> Option<Arc<ChatRoom>> {
        self.home.upgrade()
    }

    /// Send a message: queue a broadcast and a save for it, then run the queue
    pub fn send(self: &Arc<Self>, message: &str, room: &Arc<ChatRoom>) {
        let id = MessageId::new();
        self.add_command(Command::send_message(room, self, message).with_id(id));
        self.add_command(Command::save_message(room, self, message).with_id(id));
        self.execute_all();
    }

    /// Queue a command. `None` is ignored.
    pub fn add_command(&self, command: impl Into<Option<Command>>) {
        if let Some(command) = command.into() {
            self.state.lock().queue.push_back(command);
        }
    }

    /// Run every queued command in order. The queue is empty afterwards.
    pub fn execute_all(&self) {
        let batch = std::mem::take(&mut self.state.lock().queue);
        for command in batch {
            let kind = command.kind();
            let id = command.id();
            match command.execute() {
                Ok(()) => tracing::debug!("{}: {} {} done", self.name, kind.as_str(), id),
                Err(e) => tracing::debug!("{}: {} {} skipped: {}", self.name, kind.as_str(), id, e),
            }
        }
    }

    pub fn pending_commands(&self) -> usize {
        self.state.lock().queue.len()
    }

    pub fn permission_level(&self) -> PermissionLevel {
        self.state.lock().level
    }

    /// Set the level from its raw value; out-of-range values are ignored
    pub fn set_permission_level(&self, level: u8) {
        match PermissionLevel::from_level(level) {
            Some(level) => self.set_level(level),
            None => tracing::debug!("{}: ignoring permission level {}", self.name, level),
        }
    }

    pub fn set_level(&self, level: PermissionLevel) {
        self.state.lock().level = level;
    }

    pub fn is_muted(&self) -> bool {
        self.state.lock().muted
    }

    pub fn set_muted(&self, muted: bool) {
        self.state.lock().muted = muted;
    }

    pub fn message_count(&self) -> u64 {
        self.state.lock().message_count
    }

    /// Called by a room once a message has gone through its whole workflow
    pub(crate) fn increment_message_count(&self) -> u64 {
        let mut state = self.state.lock();
        state.message_count += 1;
        state.message_count
    }

    /// Take delivery of a line broadcast in one of the user's rooms
    pub fn receive(&self, line: &str) {
        self.state.lock().inbox.push(line.to_string());
    }

    pub fn inbox(&self) -> Vec<String> {
        self.state.lock().inbox.clone()
    }

    /// Snapshot handed to room policies
    pub fn view(&self) -> SenderView {
        let state = self.state.lock();
        SenderView::new(self.name.clone(), state.level)
            .with_muted(state.muted)
            .with_message_count(state.message_count)
    }

    pub(crate) fn begin_turn(&self) -> MutexGuard<'_, ()> {
        self.turn.lock()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("User")
            .field("name", &self.name)
            .field("level", &state.level)
            .field("muted", &state.muted)
            .field("message_count", &state.message_count)
            .field("pending", &state.queue.len())
            .finish()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
