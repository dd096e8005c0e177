//! Conversation entries: one item in the ordered history.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::widget::ConversationWidget;

/// Logical type of an entry.
///
/// Serialized as a lowercase string. Anything this build does not
/// recognize lands in `Unknown` with the raw name preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryType {
    Deleted,
    Prompt,
    Response,
    Thought,
    Error,
    Action,
    Widget,
    Unknown(String),
}

impl EntryType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Deleted => "deleted",
            Self::Prompt => "prompt",
            Self::Response => "response",
            Self::Thought => "thought",
            Self::Error => "error",
            Self::Action => "action",
            Self::Widget => "widget",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for EntryType {
    fn from(raw: &str) -> Self {
        match raw {
            "deleted" => Self::Deleted,
            "prompt" => Self::Prompt,
            "response" => Self::Response,
            "thought" => Self::Thought,
            "error" => Self::Error,
            "action" => Self::Action,
            "widget" => Self::Widget,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for EntryType {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<EntryType> for String {
    fn from(kind: EntryType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single conversation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEntry {
    #[serde(rename = "type")]
    kind: EntryType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    content: String,
    #[serde(
        default,
        deserialize_with = "super::widget::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    widget: Option<ConversationWidget>,
}

impl ConversationEntry {
    /// A text entry (prompt, response, thought, error, action).
    pub fn text(kind: EntryType, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            widget: None,
        }
    }

    pub fn prompt(content: impl Into<String>) -> Self {
        Self::text(EntryType::Prompt, content)
    }

    pub fn response(content: impl Into<String>) -> Self {
        Self::text(EntryType::Response, content)
    }

    /// A widget entry carrying the given payload.
    pub fn widget(widget: ConversationWidget) -> Self {
        Self {
            kind: EntryType::Widget,
            content: String::new(),
            widget: Some(widget),
        }
    }

    pub fn entry_type(&self) -> &EntryType {
        &self.kind
    }

    /// The widget payload. Only meaningful for `EntryType::Widget`.
    pub fn widget_payload(&self) -> Option<&ConversationWidget> {
        match self.kind {
            EntryType::Widget => self.widget.as_ref(),
            _ => None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Append streamed text to the entry.
    pub fn append_content(&mut self, chunk: &str) {
        self.content.push_str(chunk);
    }

    /// Replace the widget payload.
    pub fn set_widget(&mut self, widget: ConversationWidget) {
        self.widget = Some(widget);
    }

    /// Tombstone the entry. Content and payload are dropped.
    pub fn mark_deleted(&mut self) {
        self.kind = EntryType::Deleted;
        self.content.clear();
        self.widget = None;
    }
}
