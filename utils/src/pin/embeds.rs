use crate::config::{Emoji, PinConfig};
use crate::helper::truncate_content;

use super::error::PinError;
use super::models::{MessageInfo, UserInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub colour: u32,
    pub fields: Vec<EmbedField>,
    pub footer: Option<EmbedFooter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

impl Embed {
    pub fn new(title: impl Into<String>, colour: u32) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            colour,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer_from(mut self, user: &UserInfo) -> Self {
        self.footer = Some(EmbedFooter {
            text: user.name.clone(),
            icon_url: user.avatar_url.clone(),
        });
        self
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

pub fn request_embed(
    config: &PinConfig,
    emoji: &Emoji,
    requester: &UserInfo,
    target: &MessageInfo,
) -> Embed {
    let content = if target.content.trim().is_empty() {
        config.empty_content.clone()
    } else {
        truncate_content(&target.content, config.max_content_chars, &config.ellipsis).into_owned()
    };
    let mut embed = Embed::new("📌 Pin Request", config.request_colour)
        .description(format!(
            "{} wants to pin a message.\n\nClick the {} reaction below to pin this message.",
            requester.mention(),
            emoji
        ))
        .field("Content", content, false)
        .field("Author", target.author.mention(), true)
        .field("Message Link", format!("[Link]({})", target.link()), true);
    if target.attachments > 0 {
        embed = embed.field("Files Attached", target.attachments.to_string(), true);
    }
    embed
}

pub fn duplicate_embed(
    config: &PinConfig,
    request_link: &str,
    requester: Option<&UserInfo>,
    invoker: &UserInfo,
) -> Embed {
    let mut embed = Embed::new("📌 Pin Request Already Exists", config.error_colour)
        .description("A pin request for this message has already been created.")
        .field("Request Link", format!("[Link]({request_link})"), true);
    if let Some(requester) = requester {
        embed = embed.field("Requested By", requester.mention(), true);
    }
    embed.footer_from(invoker)
}

pub fn error_embed(config: &PinConfig, error: &PinError, invoker: &UserInfo) -> Embed {
    Embed::new("Error", config.error_colour)
        .description(error.to_string())
        .footer_from(invoker)
}
