use std::sync::Arc;

use crate::application::errors::ConfigError;
use crate::application::members::User;
use crate::application::policies::policy_for;
use crate::application::rooms::{ChatRoom, RoomSnapshot};
use crate::domain::traits::Sink;
use crate::infrastructure::config::{Config, ScriptStep};

/// Rooms and users built from config, plus a way to drive them
pub struct ScenarioService {
    rooms: Vec<Arc<ChatRoom>>,
    users: Vec<Arc<User>>,
}

impl ScenarioService {
    /// Create every configured room and user, registering users in their home room
    pub fn from_config(config: &Config, sink: Arc<dyn Sink>) -> Result<Self, ConfigError> {
        config.validate()?;

        let rooms: Vec<Arc<ChatRoom>> = config
            .rooms
            .iter()
            .map(|r| ChatRoom::new(r.name.clone(), policy_for(r.theme, &config.policy), Arc::clone(&sink)))
            .collect();

        let mut users = Vec::with_capacity(config.users.len());
        for entry in &config.users {
            let room = rooms
                .iter()
                .find(|r| r.room_name() == entry.room)
                .ok_or_else(|| ConfigError::InvalidValue(format!("unknown room {}", entry.room)))?;

            let user = User::new(room, entry.name.clone());
            user.set_level(entry.level);
            user.set_muted(entry.muted);
            room.register_user(&user);
            users.push(user);
        }

        tracing::info!("Scenario ready: {} rooms, {} users", rooms.len(), users.len());
        Ok(Self { rooms, users })
    }

    pub fn room(&self, name: &str) -> Option<&Arc<ChatRoom>> {
        self.rooms.iter().find(|r| r.room_name() == name)
    }

    pub fn user(&self, name: &str) -> Option<&Arc<User>> {
        self.users.iter().find(|u| u.name() == name)
    }

    pub fn rooms(&self) -> &[Arc<ChatRoom>] {
        &self.rooms
    }

    pub fn users(&self) -> &[Arc<User>] {
        &self.users
    }

    /// Have the step's user send its message to the step's room
    pub fn run_step(&self, step: &ScriptStep) -> Result<(), ConfigError> {
        let user = self
            .user(&step.user)
            .ok_or_else(|| ConfigError::InvalidValue(format!("unknown user {}", step.user)))?;
        let room = self
            .room(&step.room)
            .ok_or_else(|| ConfigError::InvalidValue(format!("unknown room {}", step.room)))?;

        user.send(&step.message, room);
        Ok(())
    }

    pub fn run_script(&self, steps: &[ScriptStep]) -> Result<(), ConfigError> {
        for step in steps {
            self.run_step(step)?;
        }
        Ok(())
    }

    pub fn snapshots(&self) -> Vec<RoomSnapshot> {
        self.rooms.iter().map(|r| r.snapshot()).collect()
    }
}
