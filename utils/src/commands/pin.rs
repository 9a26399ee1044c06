use async_trait::async_trait;

use crate::helper::MessageRef;
use crate::pin::{Invocation, PinRequestHandler};

use super::{Command, CommandMeta};

const PIN_META: CommandMeta = CommandMeta {
    name: "pin",
    short_help: "Open a pin request.",
    long_help: "Open a request to get a message pinned in your class channel.",
    examples: &["pin https://discord.com/..."],
    case_insensitive: true,
};

pub struct PinCommand {
    handler: PinRequestHandler,
    meta: CommandMeta,
}

impl PinCommand {
    pub fn new(handler: PinRequestHandler) -> Self {
        Self {
            handler,
            meta: PIN_META,
        }
    }
}

#[async_trait]
impl Command for PinCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    async fn run(&self, invocation: &Invocation, args: &str) -> anyhow::Result<()> {
        // Unparseable arguments count as no target
        let reference = MessageRef::parse(args);
        self.handler.handle_ref(invocation, reference).await?;
        Ok(())
    }
}
