//! Dogorithm - the strict technical discussion room

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::keywords::{collect_notices, KeywordGroup};
use super::PolicySettings;
use crate::application::errors::{PermissionError, ValidationError};
use crate::domain::entities::{PermissionLevel, SenderView};
use crate::domain::traits::RoomPolicy;

/// Messages shorter than this are greetings and skip the topic check
const GREETING_MAX_CHARS: usize = 10;

static TECHNICAL_TOPIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i:algorithm|code|function|loop|recursive|search|sort|optimize|binary|tree|graph|debug|bug|programming|efficient)|O\(",
    )
    .expect("topic pattern must compile")
});

static ENGAGEMENT: Lazy<Vec<KeywordGroup>> = Lazy::new(|| {
    vec![
        KeywordGroup::new(
            "analysis",
            r"O\(",
            &["Complexity analysis tagged on {name}'s message."],
        ),
        KeywordGroup::new(
            "iteration",
            r"(?i)recursi|loop",
            &["Iteration talk! {name}, consider sharing your code."],
        ),
        KeywordGroup::new(
            "optimization",
            r"(?i)optimi|efficien",
            &["Optimization noted. Good dog, {name}!"],
        ),
    ]
});

/// Technical room: on-topic content only, moderators and admins may post
#[derive(Debug, Clone)]
pub struct DogorithmPolicy {
    moderator_cap: u64,
}

impl DogorithmPolicy {
    pub const MINIMUM_LEVEL: PermissionLevel = PermissionLevel::Moderator;

    pub fn new() -> Self {
        Self::from_settings(&PolicySettings::default())
    }

    pub fn from_settings(settings: &PolicySettings) -> Self {
        Self {
            moderator_cap: settings.moderator_message_cap,
        }
    }
}

impl Default for DogorithmPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomPolicy for DogorithmPolicy {
    fn theme(&self) -> &'static str {
        "technical"
    }

    fn minimum_level(&self) -> PermissionLevel {
        Self::MINIMUM_LEVEL
    }

    fn validate(&self, message: &str, _sender: &SenderView) -> Result<(), ValidationError> {
        if message.trim().is_empty() {
            return Err(ValidationError::Empty);
        }
        if message.chars().count() >= GREETING_MAX_CHARS && !TECHNICAL_TOPIC.is_match(message) {
            return Err(ValidationError::MissingTopic);
        }
        Ok(())
    }

    fn check_permission(&self, sender: &SenderView) -> Result<(), PermissionError> {
        if sender.muted {
            return Err(PermissionError::Muted);
        }
        match sender.level {
            PermissionLevel::Admin => Ok(()),
            PermissionLevel::Moderator if sender.message_count > self.moderator_cap => {
                Err(PermissionError::CapacityExceeded {
                    count: sender.message_count,
                    limit: self.moderator_cap,
                })
            }
            PermissionLevel::Moderator => Ok(()),
            level => Err(PermissionError::InsufficientLevel {
                required: Self::MINIMUM_LEVEL,
                actual: level,
            }),
        }
    }

    fn log_activity(&self, message: &str, sender: &SenderView) -> String {
        format!(
            "Technical discussion: {} posted {} chars",
            sender.name,
            message.chars().count()
        )
    }

    fn post_process(&self, message: &str, sender: &SenderView) -> Vec<String> {
        collect_notices(&ENGAGEMENT, message, sender)
    }
}
