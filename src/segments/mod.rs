//! Conversation segments: one renderable row per conversation entry.
//!
//! A `Segment` classifies its entry once, builds the matching child view,
//! optionally puts the assistant label above it, and keeps its own frame
//! equal to the child's natural size plus the label. The list container
//! only ever talks to `Segment`; it never learns which view backs a row.
//!
//! ```text
//! ┌ segment layer ─────────────┐  origin = rect.origin
//! │ Assistant                  │  label (optional, label_height rows)
//! │ ┌ child view ────────────┐ │
//! │ │ self-sized content     │ │  child natural height
//! │ └────────────────────────┘ │
//! └────────────────────────────┘
//! ```
//!
//! Unrecognized entries never fail: they become an empty `None` segment and
//! a warning is logged.

pub mod child;
pub mod views;

use std::fmt;

use ratatui::layout::Rect;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::SegmentConfig;
use crate::conversation::{ConversationEntry, EntryRef, EntryType, WidgetType};
use crate::layer::{LayerId, LayerTree};

pub use child::SegmentChild;

/// Horizontal inset of the assistant label.
pub const LABEL_INSET_X: u16 = 1;

/// Which child view a segment wraps. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    None,
    Message,
    Info,
    WeatherSingleDay,
    WeatherCurrent,
    WeatherMultiDay,
    Timer,
    Number,
    Map,
}

impl SegmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Message => "message",
            Self::Info => "info",
            Self::WeatherSingleDay => "weather_single_day",
            Self::WeatherCurrent => "weather_current",
            Self::WeatherMultiDay => "weather_multi_day",
            Self::Timer => "timer",
            Self::Number => "number",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an entry could not be mapped to a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnrecognizedEntry {
    #[error("unknown entry type {0:?}")]
    EntryType(String),

    #[error("widget entry has no payload")]
    MissingWidget,

    #[error("unknown widget type")]
    WidgetType,

    #[error("map widgets are disabled on this display")]
    MapsDisabled,
}

/// Map an entry to its segment kind, or say why it has none.
pub fn try_classify(
    entry: &ConversationEntry,
    config: &SegmentConfig,
) -> Result<SegmentKind, UnrecognizedEntry> {
    match entry.entry_type() {
        EntryType::Deleted => Ok(SegmentKind::None),
        EntryType::Prompt | EntryType::Response => Ok(SegmentKind::Message),
        EntryType::Thought | EntryType::Error | EntryType::Action => Ok(SegmentKind::Info),
        EntryType::Widget => {
            let widget = entry
                .widget_payload()
                .ok_or(UnrecognizedEntry::MissingWidget)?;
            match widget.widget_type() {
                WidgetType::WeatherSingleDay => Ok(SegmentKind::WeatherSingleDay),
                WidgetType::WeatherCurrent => Ok(SegmentKind::WeatherCurrent),
                WidgetType::WeatherMultiDay => Ok(SegmentKind::WeatherMultiDay),
                WidgetType::Timer => Ok(SegmentKind::Timer),
                WidgetType::Number => Ok(SegmentKind::Number),
                WidgetType::Map if config.maps_enabled => Ok(SegmentKind::Map),
                WidgetType::Map => Err(UnrecognizedEntry::MapsDisabled),
                WidgetType::Unknown => Err(UnrecognizedEntry::WidgetType),
            }
        }
        EntryType::Unknown(raw) => Err(UnrecognizedEntry::EntryType(raw.clone())),
    }
}

/// Total classification: anything unrecognized becomes `None` with a warning.
pub fn classify(entry: &ConversationEntry, config: &SegmentConfig) -> SegmentKind {
    try_classify(entry, config).unwrap_or_else(|e| {
        warn!("{e}; rendering as empty segment");
        SegmentKind::None
    })
}

/// One conversation row: optional label over exactly one child view.
#[derive(Debug)]
#[must_use = "a Segment owns layers and must be destroyed"]
pub struct Segment {
    layer: LayerId,
    entry: EntryRef,
    child: SegmentChild,
    label: Option<LayerId>,
    label_height: u16,
}

impl Segment {
    /// Build a segment for `entry` in `rect`. The segment's layer is left
    /// detached; attach `segment.layer()` to a parent to display it.
    pub fn create(
        tree: &mut LayerTree,
        rect: Rect,
        entry: &EntryRef,
        assistant_label: bool,
        config: &SegmentConfig,
    ) -> Self {
        let layer = tree.create(rect);
        let kind = classify(&entry.borrow(), config);

        let mut child_frame = Rect::new(0, 0, rect.width, rect.height);
        let label = if assistant_label {
            let label = tree.create_text(
                Rect::new(
                    LABEL_INSET_X,
                    0,
                    rect.width.saturating_sub(LABEL_INSET_X),
                    config.label_height,
                ),
                config.assistant_name.as_str(),
            );
            tree.add_child(layer, label);
            child_frame.y = config.label_height;
            child_frame.height = rect.height.saturating_sub(config.label_height);
            Some(label)
        } else {
            None
        };

        let child = SegmentChild::create(kind, tree, child_frame, entry);
        if let Some(child_layer) = child.layer() {
            tree.add_child(layer, child_layer);
        }

        let segment = Self {
            layer,
            entry: EntryRef::clone(entry),
            child,
            label,
            label_height: if assistant_label { config.label_height } else { 0 },
        };
        segment.fit(tree, rect.x, rect.y);
        debug!(kind = %kind, layer = %layer, "segment created");
        segment
    }

    /// Re-render the child from the entry's current state and refit the
    /// frame around it. The origin is kept.
    pub fn update(&mut self, tree: &mut LayerTree) {
        self.child.update(tree);
        let origin = self.frame(tree);
        self.fit(tree, origin.x, origin.y);
    }

    /// Release the child view, then the label, then the segment layer.
    pub fn destroy(self, tree: &mut LayerTree) {
        debug!(kind = %self.kind(), layer = %self.layer, "destroying segment");
        self.child.destroy(tree);
        if let Some(label) = self.label {
            tree.destroy(label);
        }
        tree.destroy(self.layer);
    }

    /// The entry this segment renders.
    pub fn entry(&self) -> &EntryRef {
        &self.entry
    }

    pub fn kind(&self) -> SegmentKind {
        self.child.kind()
    }

    pub fn layer(&self) -> LayerId {
        self.layer
    }

    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }

    pub fn label_layer(&self) -> Option<LayerId> {
        self.label
    }

    pub fn child_layer(&self) -> Option<LayerId> {
        self.child.layer()
    }

    pub fn frame(&self, tree: &LayerTree) -> Rect {
        tree.frame(self.layer).unwrap_or_default()
    }

    /// Move the segment without changing its size.
    pub fn set_origin(&self, tree: &mut LayerTree, x: u16, y: u16) {
        let frame = self.frame(tree);
        tree.set_frame(self.layer, Rect { x, y, ..frame });
    }

    /// Size the segment layer to the child's natural size plus the label.
    /// An empty segment keeps its current width and has no child height.
    fn fit(&self, tree: &mut LayerTree, x: u16, y: u16) {
        let current = self.frame(tree);
        let (width, child_height) = match self.child.frame(tree) {
            Some(child) => (child.width, child.height),
            None => (current.width, 0),
        };
        let height = child_height.saturating_add(self.label_height);
        tree.set_frame(self.layer, Rect::new(x, y, width, height));
    }
}
