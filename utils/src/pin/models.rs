use crate::helper::{mention, message_link};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub id: u64,
    pub name: String,
    pub bot: bool,
    pub avatar_url: Option<String>,
}

/// Snapshot of a chat message, taken when it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageInfo {
    pub id: u64,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
    pub author: UserInfo,
    pub content: String,
    pub pinned: bool,
    pub attachments: usize,
}

/// The message that invoked a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub message_id: u64,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
    pub author: UserInfo,
    /// Id of the message this invocation replies to, if any.
    pub reply_to: Option<u64>,
}

impl UserInfo {
    pub fn mention(&self) -> String {
        mention(self.id)
    }
}

impl MessageInfo {
    pub fn link(&self) -> String {
        message_link(self.guild_id, self.channel_id, self.id)
    }
}
