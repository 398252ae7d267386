use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission level of a chat user, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionLevel {
    Guest = 1,
    Member = 2,
    Moderator = 3,
    Admin = 4,
}

impl PermissionLevel {
    /// Map a raw level to a named one. Anything outside 1..=4 yields `None`.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(PermissionLevel::Guest),
            2 => Some(PermissionLevel::Member),
            3 => Some(PermissionLevel::Moderator),
            4 => Some(PermissionLevel::Admin),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionLevel::Guest => "guest",
            PermissionLevel::Member => "member",
            PermissionLevel::Moderator => "moderator",
            PermissionLevel::Admin => "admin",
        }
    }
}

impl Default for PermissionLevel {
    fn default() -> Self {
        PermissionLevel::Guest
    }
}

impl TryFrom<u8> for PermissionLevel {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or(level)
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(PermissionLevel::Guest < PermissionLevel::Member);
        assert!(PermissionLevel::Member < PermissionLevel::Moderator);
        assert!(PermissionLevel::Moderator < PermissionLevel::Admin);
    }

    #[test]
    fn test_out_of_range_levels_are_rejected() {
        assert_eq!(PermissionLevel::from_level(0), None);
        assert_eq!(PermissionLevel::from_level(5), None);
        assert_eq!(PermissionLevel::try_from(3), Ok(PermissionLevel::Moderator));
        assert_eq!(PermissionLevel::Admin.level(), 4);
    }
}
