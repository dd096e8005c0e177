//! Informational notes: thoughts, errors, and actions.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use crate::conversation::{ConversationEntry, EntryType};

use super::{prefixed, wrapped, Body, TextView};

#[derive(Debug)]
pub struct InfoBody;

pub type InfoView = TextView<InfoBody>;

impl Body for InfoBody {
    const NAME: &'static str = "info";

    fn lines(entry: &ConversationEntry, width: u16) -> Vec<Line<'static>> {
        let content = entry.content();
        match entry.entry_type() {
            EntryType::Thought => wrapped(
                content,
                width,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
            EntryType::Error => prefixed(
                "Error: ",
                content,
                width,
                Style::default().fg(Color::Red),
            ),
            EntryType::Action => prefixed("» ", content, width, Style::default().fg(Color::Cyan)),
            _ => wrapped(content, width, Style::default()),
        }
    }
}
