use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;

use super::traits::Messenger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotEvent {
    /// The message may be removed by its author reacting to it.
    SetDeletable {
        channel_id: u64,
        message_id: u64,
        author_id: u64,
    },
}

/// In-process event bus backed by a tokio broadcast channel.
#[derive(Debug, Clone)]
pub struct BroadcastMessenger {
    sender: broadcast::Sender<BotEvent>,
}

impl BroadcastMessenger {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BotEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastMessenger {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl Messenger for BroadcastMessenger {
    async fn publish(&self, event: BotEvent) -> anyhow::Result<()> {
        // Publishing with nobody listening is not an error
        if let Err(e) = self.sender.send(event) {
            debug!(target: "Messenger", "No subscribers for {:?}", e.0);
        }
        Ok(())
    }
}
