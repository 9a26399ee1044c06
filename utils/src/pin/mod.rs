//! The `pin` command: users propose a message for pinning and the bot posts
//! a request that others confirm by reacting to it.

mod embeds;
mod error;
mod events;
mod handler;
mod models;
mod store;
mod traits;

#[cfg(feature = "discord")]
pub mod discord;
#[cfg(test)]
pub(crate) mod mock;

pub use embeds::{duplicate_embed, error_embed, request_embed, Embed, EmbedField, EmbedFooter};
pub use error::PinError;
pub use events::{BotEvent, BroadcastMessenger};
pub use handler::{PinOutcome, PinRequestHandler};
pub use models::{Invocation, MessageInfo, UserInfo};
pub use store::DbStore;
pub use traits::{ChannelRegistry, ChatClient, Messenger, PinStore};

pub use sockbot_db::db::{ClassChannel, ClassPin};
pub use sockbot_db::SockbotDB;
