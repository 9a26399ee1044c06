use std::borrow::Cow;

/// Cuts `content` down to `max_chars` characters, appending `ellipsis` when
/// anything was removed.
pub fn truncate_content<'a>(content: &'a str, max_chars: usize, ellipsis: &str) -> Cow<'a, str> {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => Cow::Owned(format!("{}{}", &content[..idx], ellipsis)),
        None => Cow::Borrowed(content),
    }
}
