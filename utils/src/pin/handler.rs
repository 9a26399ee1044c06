use std::sync::Arc;

use anyhow::anyhow;
use sockbot_db::db::ClassPin;
use tracing::{debug, info, warn};

use crate::config::{Config, Emoji, EmojiConfig, PinConfig};
use crate::helper::MessageRef;

use super::embeds::{duplicate_embed, error_embed, request_embed};
use super::error::PinError;
use super::events::BotEvent;
use super::models::{Invocation, MessageInfo};
use super::store::DbStore;
use super::traits::{ChannelRegistry, ChatClient, Messenger, PinStore};

/// What a pin command ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinOutcome {
    /// A precondition failed and the user was shown the error.
    Rejected(PinError),
    /// A request for the target already existed; the user was pointed to it.
    Duplicate(ClassPin),
    /// A new request was posted and stored.
    Created(ClassPin),
}

pub struct PinRequestHandler {
    chat: Arc<dyn ChatClient>,
    classes: Arc<dyn ChannelRegistry>,
    pins: Arc<dyn PinStore>,
    messenger: Arc<dyn Messenger>,
    config: PinConfig,
    emoji: Emoji,
}

impl PinRequestHandler {
    pub fn new(
        chat: Arc<dyn ChatClient>,
        classes: Arc<dyn ChannelRegistry>,
        pins: Arc<dyn PinStore>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            chat,
            classes,
            pins,
            messenger,
            config: PinConfig::default(),
            emoji: EmojiConfig::default().pin,
        }
    }

    /// Builds a handler backed by the configured database.
    pub fn from_config(
        config: &Config,
        chat: Arc<dyn ChatClient>,
        messenger: Arc<dyn Messenger>,
    ) -> anyhow::Result<Self> {
        let store = Arc::new(DbStore::new(config.db()));
        Ok(Self::new(chat, store.clone(), store, messenger).with_config(config.pins()?, config.emojis()?))
    }

    pub fn with_config(mut self, config: PinConfig, emojis: EmojiConfig) -> Self {
        self.config = config;
        self.emoji = emojis.pin;
        self
    }

    /// Opens a pin request for `target`, or for the message the invocation
    /// replies to when no target is given.
    pub async fn handle(
        &self,
        invocation: &Invocation,
        target: Option<MessageInfo>,
    ) -> anyhow::Result<PinOutcome> {
        let target = match (target, invocation.reply_to) {
            (Some(target), _) => Some(target),
            (None, Some(reply_to)) => Some(
                self.chat
                    .fetch_message(invocation.channel_id, reply_to)
                    .await?,
            ),
            (None, None) => None,
        };
        let Some(target) = target else {
            return self.reject(invocation, PinError::MissingTarget).await;
        };

        if let Err(error) = self.validate(invocation, &target).await? {
            return self.reject(invocation, error).await;
        }

        if let Some(existing) = self.pins.get_pin_from_user(target.id).await? {
            return self.notify_duplicate(invocation, &target, existing).await;
        }

        self.open_request(invocation, &target).await
    }

    /// Fetches a message given as a command argument, then handles it. A
    /// reference without a channel is looked up in the invocation channel; one
    /// that cannot be fetched counts as no argument.
    pub async fn handle_ref(
        &self,
        invocation: &Invocation,
        reference: Option<MessageRef>,
    ) -> anyhow::Result<PinOutcome> {
        let target = match reference {
            Some(reference) => {
                let channel_id = reference.channel_id.unwrap_or(invocation.channel_id);
                match self.chat.fetch_message(channel_id, reference.message_id).await {
                    Ok(message) => Some(message),
                    Err(e) => {
                        debug!(
                            target: "PinCommand",
                            "Could not fetch message {} in {}: {}", reference.message_id, channel_id, e
                        );
                        None
                    }
                }
            }
            None => None,
        };
        self.handle(invocation, target).await
    }

    /// Runs the precondition checks in order, stopping at the first failure.
    async fn validate(
        &self,
        invocation: &Invocation,
        target: &MessageInfo,
    ) -> anyhow::Result<Result<(), PinError>> {
        if target.pinned {
            return Ok(Err(PinError::AlreadyPinned));
        }
        if target.author.bot {
            return Ok(Err(PinError::BotAuthor));
        }
        let Some(sent_channel) = self
            .classes
            .search_class_by_channel(invocation.channel_id)
            .await?
        else {
            return Ok(Err(PinError::NotAClassChannel));
        };
        let Some(message_channel) = self
            .classes
            .search_class_by_channel(target.channel_id)
            .await?
        else {
            return Ok(Err(PinError::TargetNotInClassChannel));
        };
        if sent_channel.channel_id != message_channel.channel_id {
            return Ok(Err(PinError::ChannelMismatch));
        }
        if sent_channel.class_archived {
            return Ok(Err(PinError::ChannelArchived));
        }
        Ok(Ok(()))
    }

    async fn reject(&self, invocation: &Invocation, error: PinError) -> anyhow::Result<PinOutcome> {
        debug!(
            target: "PinCommand",
            "Rejected pin request from {} in {}: {:?}", invocation.author.id, invocation.channel_id, error
        );
        let embed = error_embed(&self.config, &error, &invocation.author);
        let message_id = self.chat.send_embed(invocation.channel_id, &embed).await?;
        self.set_deletable(invocation, message_id).await?;
        Ok(PinOutcome::Rejected(error))
    }

    async fn notify_duplicate(
        &self,
        invocation: &Invocation,
        target: &MessageInfo,
        existing: ClassPin,
    ) -> anyhow::Result<PinOutcome> {
        let request_link =
            self.chat
                .message_link(target.guild_id, target.channel_id, existing.sockbot_message_id);
        let requester = self.chat.get_user(existing.pin_requester).await;
        let embed = duplicate_embed(&self.config, &request_link, requester.as_ref(), &invocation.author);

        let notice_id = self.chat.send_embed(invocation.channel_id, &embed).await?;
        self.chat
            .delete_message(invocation.channel_id, invocation.message_id)
            .await?;
        self.set_deletable(invocation, notice_id).await?;
        debug!(
            target: "PinCommand",
            "Pin request for message {} already exists as {}", target.id, existing.sockbot_message_id
        );
        Ok(PinOutcome::Duplicate(existing))
    }

    async fn open_request(
        &self,
        invocation: &Invocation,
        target: &MessageInfo,
    ) -> anyhow::Result<PinOutcome> {
        let embed = request_embed(&self.config, &self.emoji, &invocation.author, target);
        let request_id = self.chat.send_embed(target.channel_id, &embed).await?;
        self.chat
            .add_reaction(target.channel_id, request_id, &self.emoji)
            .await?;

        let pin = ClassPin::new(
            request_id,
            target.id,
            target.channel_id,
            target.author.id,
            invocation.author.id,
        );
        if !self.pins.insert_pin(&pin).await? {
            // Another request for the same message was stored first
            warn!(
                target: "PinCommand",
                "Lost race opening pin request for message {}, removing {}", target.id, request_id
            );
            self.chat.delete_message(target.channel_id, request_id).await?;
            let existing = self
                .pins
                .get_pin_from_user(target.id)
                .await?
                .ok_or_else(|| anyhow!("Pin request for message {} disappeared", target.id))?;
            return self.notify_duplicate(invocation, target, existing).await;
        }

        self.chat
            .delete_message(invocation.channel_id, invocation.message_id)
            .await?;
        info!(
            target: "PinCommand",
            "Opened pin request {} for message {} in {}", request_id, target.id, target.channel_id
        );
        Ok(PinOutcome::Created(pin))
    }

    async fn set_deletable(&self, invocation: &Invocation, message_id: u64) -> anyhow::Result<()> {
        self.messenger
            .publish(BotEvent::SetDeletable {
                channel_id: invocation.channel_id,
                message_id,
                author_id: invocation.author.id,
            })
            .await
    }
}
