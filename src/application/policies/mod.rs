//! Room policies - the per-theme behavior plugged into the send workflow

pub mod keywords;
pub mod ctrl_cat;
pub mod dogorithm;

pub use ctrl_cat::CtrlCatPolicy;
pub use dogorithm::DogorithmPolicy;

use serde::{Deserialize, Serialize};
use crate::domain::traits::RoomPolicy;

/// Theme a room is created with. Fixed for the room's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomTheme {
    /// Friendly, open community room
    Friendly,
    /// Strict technical discussion room
    Technical,
}

impl RoomTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomTheme::Friendly => "friendly",
            RoomTheme::Technical => "technical",
        }
    }
}

/// Tunable limits shared by the built-in policies
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PolicySettings {
    /// Members above this count are capped in friendly rooms
    pub member_message_cap: u64,
    /// Anyone above this count is capped in friendly rooms
    pub daily_message_cap: u64,
    /// Moderators above this count are capped in technical rooms
    pub moderator_message_cap: u64,
    /// Substrings a friendly room refuses outright
    pub deny_list: Vec<String>,
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            member_message_cap: 10,
            daily_message_cap: 100,
            moderator_message_cap: 50,
            deny_list: vec![
                "spam".to_string(),
                "scam".to_string(),
                "idiot".to_string(),
            ],
        }
    }
}

/// Build the policy for a theme
pub fn policy_for(theme: RoomTheme, settings: &PolicySettings) -> Box<dyn RoomPolicy> {
    match theme {
        RoomTheme::Friendly => Box::new(CtrlCatPolicy::from_settings(settings)),
        RoomTheme::Technical => Box::new(DogorithmPolicy::from_settings(settings)),
    }
}
