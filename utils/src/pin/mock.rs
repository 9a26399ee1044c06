//! In-memory chat client for unit testing without a gateway connection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;

use crate::config::Emoji;

use super::embeds::Embed;
use super::models::{MessageInfo, UserInfo};
use super::traits::ChatClient;

/// A call made against the chat client, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Fetch { channel_id: u64, message_id: u64 },
    Send { channel_id: u64, message_id: u64, embed: Embed },
    Delete { channel_id: u64, message_id: u64 },
    React { channel_id: u64, message_id: u64, emoji: String },
}

/// Records every call and hands out increasing message ids for sent messages.
pub struct MockChat {
    messages: Mutex<HashMap<u64, MessageInfo>>,
    users: Mutex<HashMap<u64, UserInfo>>,
    actions: Mutex<Vec<ChatAction>>,
    next_id: AtomicU64,
}

impl MockChat {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(HashMap::new()),
            users: Mutex::new(HashMap::new()),
            actions: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(9_000),
        }
    }

    pub fn user(id: u64, bot: bool) -> UserInfo {
        UserInfo {
            id,
            name: format!("user{id}"),
            bot,
            avatar_url: None,
        }
    }

    pub fn insert_message(&self, message: MessageInfo) {
        self.messages.lock().unwrap().insert(message.id, message);
    }

    pub fn insert_user(&self, user: UserInfo) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    pub fn actions(&self) -> Vec<ChatAction> {
        self.actions.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.actions.lock().unwrap().clear();
    }

    /// (channel, embed, new message id) for every sent message.
    pub fn sent(&self) -> Vec<(u64, Embed, u64)> {
        self.actions()
            .into_iter()
            .filter_map(|action| match action {
                ChatAction::Send {
                    channel_id,
                    message_id,
                    embed,
                } => Some((channel_id, embed, message_id)),
                _ => None,
            })
            .collect()
    }

    pub fn deleted(&self) -> Vec<(u64, u64)> {
        self.actions()
            .into_iter()
            .filter_map(|action| match action {
                ChatAction::Delete {
                    channel_id,
                    message_id,
                } => Some((channel_id, message_id)),
                _ => None,
            })
            .collect()
    }

    pub fn reactions(&self) -> Vec<(u64, u64, String)> {
        self.actions()
            .into_iter()
            .filter_map(|action| match action {
                ChatAction::React {
                    channel_id,
                    message_id,
                    emoji,
                } => Some((channel_id, message_id, emoji)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, action: ChatAction) {
        self.actions.lock().unwrap().push(action);
    }
}

#[async_trait]
impl ChatClient for MockChat {
    async fn fetch_message(&self, channel_id: u64, message_id: u64) -> anyhow::Result<MessageInfo> {
        self.record(ChatAction::Fetch {
            channel_id,
            message_id,
        });
        self.messages
            .lock()
            .unwrap()
            .get(&message_id)
            .filter(|m| m.channel_id == channel_id)
            .cloned()
            .ok_or_else(|| anyhow!("Unknown Message {message_id} in {channel_id}"))
    }

    async fn send_embed(&self, channel_id: u64, embed: &Embed) -> anyhow::Result<u64> {
        let message_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.record(ChatAction::Send {
            channel_id,
            message_id,
            embed: embed.clone(),
        });
        Ok(message_id)
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> anyhow::Result<()> {
        self.record(ChatAction::Delete {
            channel_id,
            message_id,
        });
        Ok(())
    }

    async fn add_reaction(&self, channel_id: u64, message_id: u64, emoji: &Emoji) -> anyhow::Result<()> {
        self.record(ChatAction::React {
            channel_id,
            message_id,
            emoji: emoji.to_string(),
        });
        Ok(())
    }

    async fn get_user(&self, user_id: u64) -> Option<UserInfo> {
        self.users.lock().unwrap().get(&user_id).cloned()
    }
}
