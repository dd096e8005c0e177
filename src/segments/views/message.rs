//! Chat message bubble: user prompts and assistant responses.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use crate::conversation::{ConversationEntry, EntryType};

use super::{prefixed, wrapped, Body, TextView};

/// Rows of blank space under each message.
const BOTTOM_PADDING: usize = 1;

#[derive(Debug)]
pub struct MessageBody;

pub type MessageView = TextView<MessageBody>;

impl Body for MessageBody {
    const NAME: &'static str = "message";

    fn lines(entry: &ConversationEntry, width: u16) -> Vec<Line<'static>> {
        let content = entry.content();
        let mut lines = match entry.entry_type() {
            EntryType::Prompt => prefixed(
                "> ",
                content,
                width,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            _ if content.trim().is_empty() => {
                // Response still streaming in
                vec![Line::styled("...", Style::default().fg(Color::DarkGray))]
            }
            _ => wrapped(content, width, Style::default()),
        };
        lines.extend(std::iter::repeat_n(Line::default(), BOTTOM_PADDING));
        lines
    }
}
