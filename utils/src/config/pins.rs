use core::fmt;

use serde::{Deserialize, Serialize};

pub const PURPLE: u32 = 0x8F_4E_C6;
pub const ERROR_RED: u32 = 0xE7_4C_3C;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PinConfig {
    pub max_content_chars: usize,
    pub ellipsis: String,
    /// Shown as the content of a message with no text, e.g. attachments only.
    pub empty_content: String,
    pub request_colour: u32,
    pub error_colour: u32,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            max_content_chars: 250,
            ellipsis: "...".into(),
            empty_content: "*No text*".into(),
            request_colour: PURPLE,
            error_colour: ERROR_RED,
        }
    }
}

impl fmt::Display for PinConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max Content Chars: {}", self.max_content_chars)?;
        writeln!(f, "Ellipsis: {:?}", self.ellipsis)?;
        writeln!(f, "Empty Content: {:?}", self.empty_content)?;
        writeln!(f, "Request Colour: #{:06X}", self.request_colour)?;
        writeln!(f, "Error Colour: #{:06X}", self.error_colour)
    }
}
