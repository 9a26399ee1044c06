mod links;
mod text;

pub use links::{mention, message_link, MessageRef};
pub use text::truncate_content;
