use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const PIN_REACTION: &str = "📌";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiConfig {
    pub pin: Emoji,
}

/// A reaction emoji, either a unicode glyph or a guild emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub name: String,
    pub id: Option<u64>,
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            pin: Emoji::unicode(PIN_REACTION),
        }
    }
}

impl Emoji {
    pub fn unicode(glyph: &str) -> Self {
        Self {
            name: glyph.to_string(),
            id: None,
        }
    }

    pub fn custom(name: &str, id: u64) -> Self {
        Self {
            name: name.to_string(),
            id: Some(id),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.id.is_some()
    }
}

impl From<(String, u64)> for Emoji {
    fn from(value: (String, u64)) -> Self {
        Self {
            name: value.0,
            id: Some(value.1),
        }
    }
}

impl Display for Emoji {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "<:{}:{}>", self.name, id),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Display for EmojiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pin Reaction: {}", self.pin)
    }
}
