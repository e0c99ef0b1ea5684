//! Rendering - escaped markup for display regions the crate does not own.
//!
//! The embedding shell hands over regions as trait objects; the crate only
//! ever pushes whole markup strings into them. All record text is escaped so
//! embedded markup displays as literal text, never as structure.

use crate::guestbook::Message;

/// A display region that accepts whole markup replacements.
pub trait Region {
    fn set_markup(&mut self, markup: &str);
}

/// A text input field owned by the shell (author or body).
pub trait InputField {
    fn value(&self) -> String;
    fn clear(&mut self);
}

/// Shown in the message list while the collection is empty.
pub const EMPTY_PLACEHOLDER: &str = "No messages yet. Be the first to leave one!";

/// Escape text for literal display inside markup.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for the whole message list, newest first. Bodies keep their line
/// breaks as `<br>`; everything else in a record renders literally.
pub fn message_list_markup(messages: &[Message]) -> String {
    if messages.is_empty() {
        return format!("<p class=\"messages-empty\">{}</p>", EMPTY_PLACEHOLDER);
    }

    let mut out = String::new();
    for message in messages {
        out.push_str("<div class=\"message-item\">");
        out.push_str("<div class=\"message-author\">");
        out.push_str(&escape_text(&message.author));
        out.push_str("</div>");
        out.push_str("<div class=\"message-text\">");
        out.push_str(&escape_text(&message.body).replace('\n', "<br>"));
        out.push_str("</div>");
        out.push_str("</div>\n");
    }
    out
}
