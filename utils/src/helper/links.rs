const DISCORD_HOSTS: [&str; 8] = [
    "discord.com",
    "www.discord.com",
    "ptb.discord.com",
    "canary.discord.com",
    "discordapp.com",
    "www.discordapp.com",
    "ptb.discordapp.com",
    "canary.discordapp.com",
];

/// Jump url of a message. `guild_id` is `None` for direct messages.
pub fn message_link(guild_id: Option<u64>, channel_id: u64, message_id: u64) -> String {
    match guild_id {
        Some(guild_id) => {
            format!("https://discord.com/channels/{guild_id}/{channel_id}/{message_id}")
        }
        None => format!("https://discord.com/channels/@me/{channel_id}/{message_id}"),
    }
}

pub fn mention(user_id: u64) -> String {
    format!("<@{user_id}>")
}

/// A message given as a command argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub channel_id: Option<u64>,
    pub message_id: u64,
}

impl MessageRef {
    /// Accepts a message link, `<channel>-<message>`, or a bare message id.
    pub fn parse(arg: &str) -> Option<Self> {
        let arg = arg.trim().trim_start_matches('<').trim_end_matches('>');
        if arg.is_empty() {
            return None;
        }
        if let Some(rest) = arg
            .strip_prefix("https://")
            .or_else(|| arg.strip_prefix("http://"))
        {
            return Self::parse_link(rest);
        }
        if let Some((channel, message)) = arg.split_once('-') {
            return Some(Self {
                channel_id: Some(parse_id(channel)?),
                message_id: parse_id(message)?,
            });
        }
        Some(Self {
            channel_id: None,
            message_id: parse_id(arg)?,
        })
    }

    fn parse_link(rest: &str) -> Option<Self> {
        let mut parts = rest.trim_end_matches('/').split('/');
        let host = parts.next()?;
        if !DISCORD_HOSTS.contains(&host) || parts.next()? != "channels" {
            return None;
        }
        let guild = parts.next()?;
        if guild != "@me" {
            parse_id(guild)?;
        }
        let channel_id = parse_id(parts.next()?)?;
        let message_id = parse_id(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            channel_id: Some(channel_id),
            message_id,
        })
    }
}

fn parse_id(s: &str) -> Option<u64> {
    s.parse::<u64>().ok().filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_link() {
        assert_eq!(
            message_link(Some(1), 2, 3),
            "https://discord.com/channels/1/2/3"
        );
        assert_eq!(message_link(None, 2, 3), "https://discord.com/channels/@me/2/3");
        assert_eq!(mention(55), "<@55>");
    }

    #[test]
    fn test_parse_link() {
        let expected = Some(MessageRef {
            channel_id: Some(222),
            message_id: 333,
        });
        assert_eq!(MessageRef::parse("https://discord.com/channels/111/222/333"), expected);
        assert_eq!(MessageRef::parse("https://ptb.discordapp.com/channels/111/222/333/"), expected);
        assert_eq!(MessageRef::parse("<https://canary.discord.com/channels/@me/222/333>"), expected);
        assert_eq!(MessageRef::parse("https://www.discord.com/channels/111/222/333"), expected);
        assert_eq!(MessageRef::parse("http://www.discordapp.com/channels/111/222/333"), expected);
        assert_eq!(message_link(Some(111), 222, 333).as_str(), "https://discord.com/channels/111/222/333");
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(
            MessageRef::parse("222-333"),
            Some(MessageRef {
                channel_id: Some(222),
                message_id: 333
            })
        );
        assert_eq!(
            MessageRef::parse(" 333 "),
            Some(MessageRef {
                channel_id: None,
                message_id: 333
            })
        );
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert_eq!(MessageRef::parse(""), None);
        assert_eq!(MessageRef::parse("hello"), None);
        assert_eq!(MessageRef::parse("0"), None);
        assert_eq!(MessageRef::parse("12-abc"), None);
        assert_eq!(MessageRef::parse("https://example.com/channels/1/2/3"), None);
        assert_eq!(MessageRef::parse("https://discord.com/channels/1/2"), None);
        assert_eq!(MessageRef::parse("https://discord.com/channels/1/2/3/4"), None);
    }
}
