/// Reasons a pin request is refused. The message is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PinError {
    #[error("Reply to a message or give the ID or link to a message.")]
    MissingTarget,
    #[error("The message given is already pinned.")]
    AlreadyPinned,
    #[error("Cannot pin a bot message.")]
    BotAuthor,
    #[error("Please use this command in a class channel only.")]
    NotAClassChannel,
    #[error("Cannot pin message from non-class channel.")]
    TargetNotInClassChannel,
    #[error("Open a pin request in the same channel that the message is in.")]
    ChannelMismatch,
    #[error("Cannot open a pin request in an archived channel.")]
    ChannelArchived,
}
