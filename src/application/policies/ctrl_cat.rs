//! CtrlCat - the friendly, open community room

use once_cell::sync::Lazy;

use super::keywords::{collect_notices, KeywordGroup};
use super::PolicySettings;
use crate::application::errors::{PermissionError, ValidationError};
use crate::domain::entities::{PermissionLevel, SenderView};
use crate::domain::traits::RoomPolicy;

static ENGAGEMENT: Lazy<Vec<KeywordGroup>> = Lazy::new(|| {
    vec![
        KeywordGroup::new(
            "bug",
            r"(?i)bug|error|crash|broken",
            &["{name} is hunting bugs. +5 mouse points!", "Every squashed bug makes the litter stronger."],
        ),
        KeywordGroup::new(
            "help",
            r"(?i)help|stuck|question|how do",
            &["{name} asked for help. Paws are on the way!"],
        ),
        KeywordGroup::new(
            "quality",
            r"(?i)clean|refactor|readable|best practice",
            &["Purr-fect attention to quality, {name}."],
        ),
        KeywordGroup::new(
            "learning",
            r"(?i)learn|tutorial|understand|study",
            &["{name} is learning something new. +2 whisker points!", "Curiosity never hurt this cat."],
        ),
        KeywordGroup::new(
            "code",
            r"(?i)code|function|class|compile",
            &["Code spotted. Share a snippet so the litter can review it."],
        ),
        KeywordGroup::new(
            "pun",
            r"(?i)meow|purr|whisker|\bpaws?\b|\bcats?\b",
            &["Meow! Pun appreciated, {name}.", "+1 catnip"],
        ),
    ]
});

/// Friendly room: light content rules, members and up may post within caps
#[derive(Debug, Clone)]
pub struct CtrlCatPolicy {
    deny_list: Vec<String>,
    member_cap: u64,
    daily_cap: u64,
}

impl CtrlCatPolicy {
    pub const MINIMUM_LEVEL: PermissionLevel = PermissionLevel::Member;

    pub fn new() -> Self {
        Self::from_settings(&PolicySettings::default())
    }

    pub fn from_settings(settings: &PolicySettings) -> Self {
        Self {
            deny_list: settings.deny_list.iter().map(|t| t.to_lowercase()).collect(),
            member_cap: settings.member_message_cap,
            daily_cap: settings.daily_message_cap,
        }
    }
}

impl Default for CtrlCatPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomPolicy for CtrlCatPolicy {
    fn theme(&self) -> &'static str {
        "friendly"
    }

    fn minimum_level(&self) -> PermissionLevel {
        Self::MINIMUM_LEVEL
    }

    fn validate(&self, message: &str, _sender: &SenderView) -> Result<(), ValidationError> {
        if message.trim().is_empty() {
            return Err(ValidationError::Empty);
        }

        let lowered = message.to_lowercase();
        if let Some(term) = self.deny_list.iter().find(|t| lowered.contains(t.as_str())) {
            return Err(ValidationError::Disallowed(term.clone()));
        }
        Ok(())
    }

    fn check_permission(&self, sender: &SenderView) -> Result<(), PermissionError> {
        if sender.muted {
            return Err(PermissionError::Muted);
        }
        if sender.level < Self::MINIMUM_LEVEL {
            return Err(PermissionError::InsufficientLevel {
                required: Self::MINIMUM_LEVEL,
                actual: sender.level,
            });
        }
        // Both caps look at the count before this message is accounted
        if sender.level == PermissionLevel::Member && sender.message_count > self.member_cap {
            return Err(PermissionError::CapacityExceeded {
                count: sender.message_count,
                limit: self.member_cap,
            });
        }
        if sender.message_count > self.daily_cap {
            return Err(PermissionError::CapacityExceeded {
                count: sender.message_count,
                limit: self.daily_cap,
            });
        }
        Ok(())
    }

    fn log_activity(&self, _message: &str, sender: &SenderView) -> String {
        format!("Activity: {} shared a message with the litter", sender.name)
    }

    fn post_process(&self, message: &str, sender: &SenderView) -> Vec<String> {
        collect_notices(&ENGAGEMENT, message, sender)
    }
}
