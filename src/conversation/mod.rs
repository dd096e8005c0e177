//! Conversation data model.
//!
//! The conversation owns its entries; views hold shared `EntryRef`s and
//! re-read them on every update. Everything here runs on the UI thread,
//! so entries live behind `Rc<RefCell<_>>` rather than a lock.

pub mod entry;
pub mod widget;

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{ConverseError, ConverseResult};

pub use entry::{ConversationEntry, EntryType};
pub use widget::{ConversationWidget, WidgetType};

/// Shared handle to an entry. Cloning is cheap and aliases the same entry.
pub type EntryRef = Rc<RefCell<ConversationEntry>>;

/// On-disk shape of a conversation file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConversationFile {
    #[serde(default)]
    entries: Vec<ConversationEntry>,
}

/// Ordered conversation history.
#[derive(Debug, Default)]
pub struct Conversation {
    entries: Vec<EntryRef>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a conversation from its JSON form (`{"entries": [...]}`).
    pub fn from_json(json: &str) -> ConverseResult<Self> {
        let file: ConversationFile = serde_json::from_str(json)?;
        let mut conversation = Self::new();
        for entry in file.entries {
            conversation.push(entry);
        }
        Ok(conversation)
    }

    /// Load a conversation file from disk.
    pub fn load(path: &Path) -> ConverseResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ConverseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize back to JSON.
    pub fn to_json(&self) -> ConverseResult<String> {
        let file = ConversationFile {
            entries: self.entries.iter().map(|e| e.borrow().clone()).collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Append an entry and return the shared handle to it.
    pub fn push(&mut self, entry: ConversationEntry) -> EntryRef {
        let entry = Rc::new(RefCell::new(entry));
        self.entries.push(Rc::clone(&entry));
        entry
    }

    /// Remove the entry at `index`, returning its handle.
    pub fn remove(&mut self, index: usize) -> Option<EntryRef> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&EntryRef> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[EntryRef] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "entries": [
            {"type": "prompt", "content": "Set a timer for pasta"},
            {"type": "action", "content": "Setting a timer"},
            {"type": "widget", "widget": {"type": "timer", "target_time": "2030-01-01T00:00:00Z", "name": "Pasta"}},
            {"type": "response", "content": "Done."},
            {"type": "sticker", "content": "?"}
        ]
    }"#;

    #[test]
    fn parse_sample_conversation() {
        let conversation = Conversation::from_json(SAMPLE).unwrap();
        assert_eq!(conversation.len(), 5);
        let widget = conversation.get(2).unwrap().borrow();
        assert_eq!(widget.entry_type(), &EntryType::Widget);
        assert_eq!(
            widget.widget_payload().map(ConversationWidget::widget_type),
            Some(WidgetType::Timer)
        );
        let unknown = conversation.get(4).unwrap().borrow();
        assert_eq!(unknown.entry_type(), &EntryType::Unknown("sticker".into()));
    }

    #[test]
    fn push_returns_shared_handle() {
        let mut conversation = Conversation::new();
        let handle = conversation.push(ConversationEntry::response("Hel"));
        handle.borrow_mut().append_content("lo");
        assert_eq!(conversation.get(0).unwrap().borrow().content(), "Hello");
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut conversation = Conversation::new();
        conversation.push(ConversationEntry::prompt("hi"));
        assert!(conversation.remove(3).is_none());
        assert!(conversation.remove(0).is_some());
        assert!(conversation.is_empty());
    }

    #[test]
    fn json_round_trip_keeps_unknown_names() {
        let conversation = Conversation::from_json(SAMPLE).unwrap();
        let json = conversation.to_json().unwrap();
        let back = Conversation::from_json(&json).unwrap();
        assert_eq!(back.len(), 5);
        assert_eq!(
            back.get(4).unwrap().borrow().entry_type(),
            &EntryType::Unknown("sticker".into())
        );
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = Conversation::load(Path::new("/nonexistent/convo.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/convo.json"));
    }

    #[test]
    fn malformed_widget_payload_does_not_fail_the_file() {
        let json = r#"{
            "entries": [
                {"type": "prompt", "content": "Start a timer"},
                {"type": "widget", "widget": {"type": "timer", "name": "Eggs"}},
                {"type": "widget", "widget": {"type": "number", "number": "4", "unit": "min"}}
            ]
        }"#;
        let conversation = Conversation::from_json(json).unwrap();
        assert_eq!(conversation.len(), 3);
        assert_eq!(
            conversation.get(1).unwrap().borrow().widget_payload(),
            Some(&ConversationWidget::Unknown)
        );
        assert_eq!(
            conversation
                .get(2)
                .unwrap()
                .borrow()
                .widget_payload()
                .map(ConversationWidget::widget_type),
            Some(WidgetType::Number)
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            Conversation::from_json("{not json"),
            Err(ConverseError::Json(_))
        ));
    }
}
