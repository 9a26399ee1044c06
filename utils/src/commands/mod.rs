mod pin;

pub use pin::PinCommand;

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use tracing::{debug, error};

use crate::pin::Invocation;

#[derive(Debug, Clone)]
pub struct CommandMeta {
    pub name: &'static str,
    pub short_help: &'static str,
    pub long_help: &'static str,
    pub examples: &'static [&'static str],
    pub case_insensitive: bool,
}

impl CommandMeta {
    pub fn matches(&self, name: &str) -> bool {
        if self.case_insensitive {
            self.name.eq_ignore_ascii_case(name)
        } else {
            self.name == name
        }
    }

    pub fn help(&self, prefix: &str) -> String {
        let mut help = format!("{}{}: {}\n{}", prefix, self.name, self.short_help, self.long_help);
        for example in self.examples {
            help.push_str(&format!("\n  {prefix}{example}"));
        }
        help
    }
}

#[async_trait]
pub trait Command: Send + Sync {
    fn meta(&self) -> &CommandMeta;

    /// `args` is everything after the command name, trimmed.
    async fn run(&self, invocation: &Invocation, args: &str) -> anyhow::Result<()>;
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C: Command + 'static>(&mut self, command: C) -> anyhow::Result<()> {
        let name = command.meta().name;
        if self.commands.iter().any(|c| c.meta().name.eq_ignore_ascii_case(name)) {
            return Err(anyhow!("Command {name} is already registered"));
        }
        self.commands.push(Arc::new(command));
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.iter().find(|c| c.meta().matches(name)).cloned()
    }

    pub fn metas(&self) -> impl Iterator<Item = &CommandMeta> {
        self.commands.iter().map(|c| c.meta())
    }

    /// Runs the command named in `content`. Returns `Ok(false)` when the
    /// content is not a known command.
    pub async fn dispatch(
        &self,
        prefix: &str,
        invocation: &Invocation,
        content: &str,
    ) -> anyhow::Result<bool> {
        let Some(rest) = content.strip_prefix(prefix) else {
            return Ok(false);
        };
        let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let Some(command) = self.find(name) else {
            return Ok(false);
        };

        debug!(
            target: "Commands",
            "{} invoked {} in {}", invocation.author.id, command.meta().name, invocation.channel_id
        );
        if let Err(e) = command.run(invocation, args.trim()).await {
            error!(target: "Commands", "Command {} failed: {}", command.meta().name, e);
            return Err(e);
        }
        Ok(true)
    }
}
