//! `ChatClient` over serenity's HTTP client and cache.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::builder::{CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::cache::Cache;
use serenity::client::Context;
use serenity::http::Http;
use serenity::model::channel::{Message, ReactionType};
use serenity::model::id::{ChannelId, EmojiId, MessageId, UserId};
use serenity::model::user::User;
use tracing::debug;

use crate::config::Emoji;

use super::embeds::Embed;
use super::models::{Invocation, MessageInfo, UserInfo};
use super::traits::ChatClient;

#[derive(Clone)]
pub struct SerenityChat {
    http: Arc<Http>,
    cache: Option<Arc<Cache>>,
}

impl SerenityChat {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http, cache: None }
    }

    pub fn with_cache(mut self, cache: Arc<Cache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(Arc::clone(&ctx.http)).with_cache(Arc::clone(&ctx.cache))
    }

    fn cached_user(&self, user_id: UserId) -> Option<UserInfo> {
        let cache = self.cache.as_ref()?;
        let user = cache.user(user_id)?;
        Some(UserInfo::from(&*user))
    }
}

#[async_trait]
impl ChatClient for SerenityChat {
    async fn fetch_message(&self, channel_id: u64, message_id: u64) -> anyhow::Result<MessageInfo> {
        let message = ChannelId::new(channel_id)
            .message(&*self.http, MessageId::new(message_id))
            .await?;
        Ok(MessageInfo::from(&message))
    }

    async fn send_embed(&self, channel_id: u64, embed: &Embed) -> anyhow::Result<u64> {
        let builder = CreateMessage::new().embed(create_embed(embed));
        let message = ChannelId::new(channel_id)
            .send_message(&*self.http, builder)
            .await?;
        Ok(message.id.get())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> anyhow::Result<()> {
        ChannelId::new(channel_id)
            .delete_message(&*self.http, MessageId::new(message_id))
            .await?;
        Ok(())
    }

    async fn add_reaction(&self, channel_id: u64, message_id: u64, emoji: &Emoji) -> anyhow::Result<()> {
        self.http
            .create_reaction(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &reaction_type(emoji),
            )
            .await?;
        Ok(())
    }

    async fn get_user(&self, user_id: u64) -> Option<UserInfo> {
        if user_id == 0 {
            return None;
        }
        let user_id = UserId::new(user_id);
        if let Some(user) = self.cached_user(user_id) {
            return Some(user);
        }
        match self.http.get_user(user_id).await {
            Ok(user) => Some(UserInfo::from(&user)),
            Err(e) => {
                debug!(target: "PinCommand", "Could not resolve user {}: {}", user_id, e);
                None
            }
        }
    }
}

pub fn create_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new()
        .title(&embed.title)
        .description(&embed.description)
        .colour(embed.colour);
    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &embed.footer {
        let mut create_footer = CreateEmbedFooter::new(&footer.text);
        if let Some(icon_url) = &footer.icon_url {
            create_footer = create_footer.icon_url(icon_url);
        }
        builder = builder.footer(create_footer);
    }
    builder
}

pub fn reaction_type(emoji: &Emoji) -> ReactionType {
    match emoji.id {
        Some(id) => ReactionType::Custom {
            animated: false,
            id: EmojiId::new(id),
            name: Some(emoji.name.clone()),
        },
        None => ReactionType::Unicode(emoji.name.clone()),
    }
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name.clone(),
            bot: user.bot,
            avatar_url: Some(user.face()),
        }
    }
}

impl From<&Message> for MessageInfo {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.get(),
            channel_id: message.channel_id.get(),
            guild_id: message.guild_id.map(|id| id.get()),
            author: UserInfo::from(&message.author),
            content: message.content.clone(),
            pinned: message.pinned,
            attachments: message.attachments.len(),
        }
    }
}

impl From<&Message> for Invocation {
    fn from(message: &Message) -> Self {
        Self {
            message_id: message.id.get(),
            channel_id: message.channel_id.get(),
            guild_id: message.guild_id.map(|id| id.get()),
            author: UserInfo::from(&message.author),
            reply_to: message
                .message_reference
                .as_ref()
                .and_then(|reference| reference.message_id)
                .map(|id| id.get()),
        }
    }
}
