//! Chat room mediator - roster, history and the fixed send workflow

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

use crate::application::errors::RoomError;
use crate::application::members::User;
use crate::domain::entities::{HistoryEntry, MessageId, SenderView};
use crate::domain::traits::{RoomPolicy, Sink};

#[derive(Default)]
struct RoomState {
    users: Vec<Arc<User>>,
    history: Vec<HistoryEntry>,
}

/// Serializable view of a room at one point in time
#[derive(Debug, Clone, Serialize)]
pub struct RoomSnapshot {
    pub name: String,
    pub theme: String,
    pub members: Vec<String>,
    pub history: Vec<HistoryEntry>,
}

/// A room mediating all message traffic between its registered users.
///
/// Every message goes through the same eight steps:
///
/// 1. validate (policy) - may reject
/// 2. authorize (policy) - may reject
/// 3. format `[room] user: message`
/// 4. broadcast to the sink and every other member's inbox
/// 5. persist to history
/// 6. log activity (policy)
/// 7. engagement notices (policy)
/// 8. count the message against the sender
///
/// Only steps 1 and 2 can stop a message. A rejection emits one notice and
/// leaves history and counters untouched.
pub struct ChatRoom {
    name: String,
    policy: Box<dyn RoomPolicy>,
    sink: Arc<dyn Sink>,
    state: Mutex<RoomState>,
}

impl ChatRoom {
    pub fn new(name: impl Into<String>, policy: Box<dyn RoomPolicy>, sink: Arc<dyn Sink>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            policy,
            sink,
            state: Mutex::new(RoomState::default()),
        })
    }

    pub fn room_name(&self) -> &str {
        &self.name
    }

    pub fn theme(&self) -> &'static str {
        self.policy.theme()
    }

    /// Add a user to the roster. Returns false if already registered.
    pub fn register_user(&self, user: &Arc<User>) -> bool {
        let mut state = self.state.lock();
        if state.users.iter().any(|u| Arc::ptr_eq(u, user)) {
            return false;
        }
        state.users.push(Arc::clone(user));
        tracing::debug!("[{}] {} joined", self.name, user.name());
        true
    }

    /// Remove a user from the roster. Returns false if they were not in it.
    pub fn remove_user(&self, user: &User) -> bool {
        let mut state = self.state.lock();
        let Some(pos) = state.users.iter().position(|u| std::ptr::eq(Arc::as_ptr(u), user)) else {
            return false;
        };
        state.users.remove(pos);
        tracing::debug!("[{}] {} left", self.name, user.name());
        true
    }

    /// Registered users in join order
    pub fn users(&self) -> Vec<Arc<User>> {
        self.state.lock().users.clone()
    }

    pub fn is_member(&self, user: &User) -> bool {
        self.state.lock().users.iter().any(|u| std::ptr::eq(Arc::as_ptr(u), user))
    }

    /// Formatted history lines in append order
    pub fn history(&self) -> Vec<String> {
        self.state.lock().history.iter().map(|e| e.text.clone()).collect()
    }

    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.state.lock().history.clone()
    }

    pub fn history_len(&self) -> usize {
        self.state.lock().history.len()
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        let state = self.state.lock();
        RoomSnapshot {
            name: self.name.clone(),
            theme: self.policy.theme().to_string(),
            members: state.users.iter().map(|u| u.name().to_string()).collect(),
            history: state.history.clone(),
        }
    }

    /// Run the send workflow for a message from `from`
    pub fn send_message(&self, message: &str, from: &User) -> Result<(), RoomError> {
        self.deliver(MessageId::new(), message, from)
    }

    /// Send workflow for a message that already carries an id
    pub(crate) fn deliver(&self, id: MessageId, message: &str, from: &User) -> Result<(), RoomError> {
        let _turn = from.begin_turn();
        let sender = from.view();

        if let Err(e) = self.policy.validate(message, &sender) {
            return Err(self.reject(&sender, e.into()));
        }
        if let Err(e) = self.policy.check_permission(&sender) {
            return Err(self.reject(&sender, e.into()));
        }

        let formatted = format!("[{}] {}: {}", self.name, sender.name, message);
        self.broadcast(&formatted, from);

        self.append_history(id, self.policy.history_entry(message, &sender));

        self.emit_tagged(&self.policy.log_activity(message, &sender));

        for notice in self.policy.post_process(message, &sender) {
            self.emit_tagged(&notice);
        }

        let count = from.increment_message_count();
        tracing::info!("[{}] delivered {} from {} (count {})", self.name, id, sender.name, count);
        Ok(())
    }

    /// Persist a message without broadcasting it.
    ///
    /// The same validation and permission gates as the send workflow apply,
    /// but a rejection here is silent. Returns `Ok(false)` when the message
    /// id is already in history.
    pub fn save_message(&self, id: MessageId, message: &str, from: &User) -> Result<bool, RoomError> {
        let _turn = from.begin_turn();
        if self.contains_message(id) {
            return Ok(false);
        }

        let sender = from.view();
        self.policy.validate(message, &sender)?;
        self.policy.check_permission(&sender)?;

        Ok(self.append_history(id, self.policy.history_entry(message, &sender)))
    }

    pub fn contains_message(&self, id: MessageId) -> bool {
        self.state.lock().history.iter().any(|e| e.id == id)
    }

    fn append_history(&self, id: MessageId, text: String) -> bool {
        let mut state = self.state.lock();
        if state.history.iter().any(|e| e.id == id) {
            return false;
        }
        tracing::debug!("[{}] history += {}", self.name, text);
        state.history.push(HistoryEntry::new(id, text));
        true
    }

    fn broadcast(&self, formatted: &str, from: &User) {
        self.sink.emit(formatted);
        for member in self.users() {
            if !std::ptr::eq(Arc::as_ptr(&member), from) {
                member.receive(formatted);
            }
        }
    }

    fn reject(&self, sender: &SenderView, err: RoomError) -> RoomError {
        tracing::info!("[{}] {} from {}: {}", self.name, err.reason_code(), sender.name, err);
        self.emit_tagged(&format!("Message from {} rejected: {}", sender.name, err));
        err
    }

    fn emit_tagged(&self, line: &str) {
        self.sink.emit(&format!("[{}] {}", self.name, line));
    }
}

impl std::fmt::Debug for ChatRoom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatRoom")
            .field("name", &self.name)
            .field("theme", &self.policy.theme())
            .finish()
    }
}
