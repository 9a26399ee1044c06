use async_trait::async_trait;
use sockbot_db::db::{ClassChannel, ClassPin};

use crate::config::Emoji;
use crate::helper::message_link;

use super::embeds::Embed;
use super::events::BotEvent;
use super::models::{MessageInfo, UserInfo};

/// The chat platform, as seen by the pin command.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn fetch_message(&self, channel_id: u64, message_id: u64) -> anyhow::Result<MessageInfo>;

    /// Sends the embed and returns the id of the new message.
    async fn send_embed(&self, channel_id: u64, embed: &Embed) -> anyhow::Result<u64>;

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> anyhow::Result<()>;

    async fn add_reaction(&self, channel_id: u64, message_id: u64, emoji: &Emoji) -> anyhow::Result<()>;

    /// Resolves a user, `None` when the user is unknown to the bot.
    async fn get_user(&self, user_id: u64) -> Option<UserInfo>;

    fn message_link(&self, guild_id: Option<u64>, channel_id: u64, message_id: u64) -> String {
        message_link(guild_id, channel_id, message_id)
    }
}

#[async_trait]
pub trait ChannelRegistry: Send + Sync {
    async fn search_class_by_channel(&self, channel_id: u64) -> anyhow::Result<Option<ClassChannel>>;
}

#[async_trait]
pub trait PinStore: Send + Sync {
    async fn get_pin_from_user(&self, message_id: u64) -> anyhow::Result<Option<ClassPin>>;

    /// Returns `false` when a request for the same target message already exists.
    async fn insert_pin(&self, pin: &ClassPin) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait Messenger: Send + Sync {
    async fn publish(&self, event: BotEvent) -> anyhow::Result<()>;
}
