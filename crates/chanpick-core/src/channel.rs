//! Channel catalog records.

use serde::{Deserialize, Serialize};

use crate::constants::UNCATEGORIZED;

/// One selectable channel from the catalog.
///
/// Records are produced by the external fetch step and are read-only here;
/// the selector never mutates or re-validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Stable channel identifier.
    pub channel_id: u64,
    /// Channel display name, without the leading `#`.
    pub channel_name: String,
    /// Identifier of the guild the channel belongs to.
    pub guild_id: u64,
    /// Guild display name.
    pub guild_name: String,
    /// Category label; `None` places the channel in the implicit
    /// "Uncategorized" bucket.
    #[serde(default)]
    pub category_name: Option<String>,
    /// Estimated message count. Used only for display and for the
    /// large-selection warning.
    #[serde(default)]
    pub estimated_messages: u64,
}

impl Channel {
    /// Category label with the `Uncategorized` sentinel substituted for
    /// `None`.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category_name.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(category: Option<&str>) -> Channel {
        Channel {
            channel_id: 1,
            channel_name: "general".into(),
            guild_id: 10,
            guild_name: "Test Guild".into(),
            category_name: category.map(String::from),
            estimated_messages: 0,
        }
    }

    #[test]
    fn labeled_category() {
        assert_eq!(channel(Some("News")).category_label(), "News");
    }

    #[test]
    fn missing_category_uses_sentinel() {
        assert_eq!(channel(None).category_label(), UNCATEGORIZED);
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{
            "channel_id": 42,
            "channel_name": "rules",
            "guild_id": 7,
            "guild_name": "G"
        }"#;
        let ch: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(ch.category_name, None);
        assert_eq!(ch.estimated_messages, 0);
    }

    #[test]
    fn deserializes_null_category() {
        let json = r#"{
            "channel_id": 42,
            "channel_name": "rules",
            "guild_id": 7,
            "guild_name": "G",
            "category_name": null,
            "estimated_messages": 120
        }"#;
        let ch: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(ch.category_label(), UNCATEGORIZED);
        assert_eq!(ch.estimated_messages, 120);
    }
}
