//! Keyword groups used by the engagement step

use regex_lite::Regex;
use crate::domain::entities::SenderView;

/// A named set of trigger words and the notices they earn.
///
/// Notice templates may contain `{name}`, replaced with the sender's name.
pub struct KeywordGroup {
    pub label: &'static str,
    pattern: Regex,
    notices: &'static [&'static str],
}

impl KeywordGroup {
    pub fn new(label: &'static str, pattern: &str, notices: &'static [&'static str]) -> Self {
        Self {
            label,
            pattern: Regex::new(pattern).expect("keyword pattern must compile"),
            notices,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn notices_for(&self, sender: &SenderView) -> Vec<String> {
        self.notices
            .iter()
            .map(|n| n.replace("{name}", &sender.name))
            .collect()
    }
}

/// Notices from every group the message matches, in group order.
/// Groups are independent; one message can hit several.
pub fn collect_notices(groups: &[KeywordGroup], message: &str, sender: &SenderView) -> Vec<String> {
    let mut notices = Vec::new();
    for group in groups.iter().filter(|g| g.matches(message)) {
        tracing::debug!("keyword group '{}' matched for {}", group.label, sender.name);
        notices.extend(group.notices_for(sender));
    }
    notices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PermissionLevel;

    #[test]
    fn test_notices_substitute_sender_name() {
        let group = KeywordGroup::new("greeting", r"(?i)hello", &["Hi {name}!", "Welcome."]);
        let sender = SenderView::new("Nate", PermissionLevel::Member);

        assert!(group.matches("HELLO there"));
        assert_eq!(group.notices_for(&sender), vec!["Hi Nate!", "Welcome."]);
    }

    #[test]
    fn test_collect_keeps_group_order() {
        let groups = vec![
            KeywordGroup::new("a", r"(?i)apple", &["A"]),
            KeywordGroup::new("b", r"(?i)banana", &["B"]),
        ];
        let sender = SenderView::new("Dom", PermissionLevel::Admin);

        assert_eq!(collect_notices(&groups, "banana and apple", &sender), vec!["A", "B"]);
        assert!(collect_notices(&groups, "cherry", &sender).is_empty());
    }
}
