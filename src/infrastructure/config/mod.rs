//! Configuration management

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::application::errors::ConfigError;
use crate::application::policies::{PolicySettings, RoomTheme};
use crate::domain::entities::PermissionLevel;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub policy: PolicySettings,
    pub rooms: Vec<RoomConfig>,
    pub users: Vec<UserConfig>,
    #[serde(default)]
    pub script: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Prepended to every console line
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RoomConfig {
    pub name: String,
    pub theme: RoomTheme,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserConfig {
    pub name: String,
    /// Home room; the user is registered there at startup
    pub room: String,
    pub level: PermissionLevel,
    #[serde(default)]
    pub muted: bool,
}

/// One scripted `send` run by the `run` command
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScriptStep {
    pub user: String,
    pub room: String,
    pub message: String,
}

impl ScriptStep {
    fn new(user: &str, room: &str, message: &str) -> Self {
        Self {
            user: user.to_string(),
            room: room.to_string(),
            message: message.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            policy: PolicySettings::default(),
            rooms: vec![
                RoomConfig {
                    name: "CtrlCat".to_string(),
                    theme: RoomTheme::Friendly,
                },
                RoomConfig {
                    name: "Dogorithm".to_string(),
                    theme: RoomTheme::Technical,
                },
            ],
            users: vec![
                UserConfig {
                    name: "Nate".to_string(),
                    room: "CtrlCat".to_string(),
                    level: PermissionLevel::Member,
                    muted: false,
                },
                UserConfig {
                    name: "Dom".to_string(),
                    room: "Dogorithm".to_string(),
                    level: PermissionLevel::Admin,
                    muted: false,
                },
                UserConfig {
                    name: "Luy".to_string(),
                    room: "Dogorithm".to_string(),
                    level: PermissionLevel::Moderator,
                    muted: false,
                },
            ],
            script: vec![
                ScriptStep::new("Nate", "CtrlCat", "Hello chat"),
                ScriptStep::new("Nate", "CtrlCat", "Hello everyone, can you help me debug this?"),
                ScriptStep::new("Dom", "Dogorithm", "Hello Anyone online"),
                ScriptStep::new("Dom", "Dogorithm", "Binary search runs in O(log n)"),
                ScriptStep::new("Luy", "Dogorithm", "Hello Dom, I am, wanna game?"),
                ScriptStep::new("Luy", "Dogorithm", "Is a recursive tree walk efficient here?"),
                ScriptStep::new("Nate", "Dogorithm", "let's discuss this algorithm"),
            ],
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Defaults, with policy overrides taken from the environment
    pub fn load_env() -> Self {
        let mut config = Config::default();

        if let Ok(terms) = std::env::var("CHATROOMS_DENY_LIST") {
            config.policy.deny_list = terms
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
        }

        if let Ok(cap) = std::env::var("CHATROOMS_MEMBER_CAP") {
            match cap.parse() {
                Ok(cap) => config.policy.member_message_cap = cap,
                Err(e) => tracing::warn!("Ignoring CHATROOMS_MEMBER_CAP={}: {}", cap, e),
            }
        }

        config
    }

    /// Check that every name the config refers to is defined
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut rooms = HashSet::new();
        for room in &self.rooms {
            if !rooms.insert(room.name.as_str()) {
                return Err(ConfigError::InvalidValue(format!("duplicate room: {}", room.name)));
            }
        }

        let mut users = HashSet::new();
        for user in &self.users {
            if !users.insert(user.name.as_str()) {
                return Err(ConfigError::InvalidValue(format!("duplicate user: {}", user.name)));
            }
            if !rooms.contains(user.room.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "user {} refers to unknown room {}",
                    user.name, user.room
                )));
            }
        }

        for step in &self.script {
            if !users.contains(step.user.as_str()) {
                return Err(ConfigError::InvalidValue(format!("script refers to unknown user {}", step.user)));
            }
            if !rooms.contains(step.room.as_str()) {
                return Err(ConfigError::InvalidValue(format!("script refers to unknown room {}", step.room)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_and_round_trips() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("theme: friendly"));
        assert!(yaml.contains("level: moderator"));

        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.rooms.len(), 2);
        assert_eq!(parsed.users[0].level, PermissionLevel::Member);
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let yaml = r#"
rooms:
  - name: Lounge
    theme: friendly
users:
  - name: Ann
    room: Lounge
    level: admin
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.policy, PolicySettings::default());
        assert!(config.script.is_empty());
        assert!(!config.users[0].muted);
    }

    #[test]
    fn test_unknown_room_is_rejected() {
        let yaml = r#"
rooms:
  - name: Lounge
    theme: technical
users:
  - name: Ann
    room: Attic
    level: member
"#;
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_bad_level_fails_to_parse() {
        let yaml = r#"
rooms: []
users:
  - name: Ann
    room: Lounge
    level: overlord
"#;
        assert!(matches!(Config::from_yaml(yaml), Err(ConfigError::Parse(_))));
    }
}
