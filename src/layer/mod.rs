//! Layer tree: retained view hierarchy for the conversation display.
//!
//! An arena of rectangular layers. Each layer has a frame relative to its
//! parent, an ordered child list, and optional text content. Views own the
//! `LayerId`s they create and are responsible for destroying them; the tree
//! never destroys anything on its own.
//!
//! Ids are allocated from a counter and never reused, so a stale id simply
//! misses instead of aliasing a newer layer.

pub mod render;
pub mod wrap;

use std::collections::HashMap;
use std::fmt;

use ratatui::layout::Rect;
use ratatui::text::Text;
use tracing::warn;

/// Handle to a layer in a `LayerTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// What a layer draws on its own (children draw on top).
#[derive(Debug, Clone, Default)]
pub enum LayerContent {
    #[default]
    Empty,
    Text(Text<'static>),
}

/// One node in the tree.
#[derive(Debug, Clone)]
pub struct Layer {
    pub frame: Rect,
    pub content: LayerContent,
    parent: Option<LayerId>,
    children: Vec<LayerId>,
}

impl Layer {
    fn new(frame: Rect, content: LayerContent) -> Self {
        Self {
            frame,
            content,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena of layers.
#[derive(Debug, Default)]
pub struct LayerTree {
    layers: HashMap<LayerId, Layer>,
    next_id: u64,
}

impl LayerTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, layer: Layer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.insert(id, layer);
        id
    }

    /// Allocate an empty, detached layer.
    pub fn create(&mut self, frame: Rect) -> LayerId {
        self.insert(Layer::new(frame, LayerContent::Empty))
    }

    /// Allocate a detached layer that draws a single line of text.
    pub fn create_text(&mut self, frame: Rect, text: impl Into<String>) -> LayerId {
        let text = Text::raw(text.into());
        self.insert(Layer::new(frame, LayerContent::Text(text)))
    }

    /// Replace a layer's text content.
    pub fn set_text(&mut self, id: LayerId, text: Text<'static>) -> bool {
        match self.layers.get_mut(&id) {
            Some(layer) => {
                layer.content = LayerContent::Text(text);
                true
            }
            None => false,
        }
    }

    /// Plain text of a layer, lines joined with `\n`. Empty for non-text layers.
    pub fn text(&self, id: LayerId) -> Option<String> {
        let layer = self.layers.get(&id)?;
        Some(match &layer.content {
            LayerContent::Empty => String::new(),
            LayerContent::Text(text) => text
                .lines
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        })
    }

    /// Attach `child` as the last child of `parent`, detaching it first
    /// if it already has a parent.
    pub fn add_child(&mut self, parent: LayerId, child: LayerId) -> bool {
        let known = self.layers.contains_key(&parent) && self.layers.contains_key(&child);
        if parent == child || !known {
            warn!("add_child({parent}, {child}) on unknown or identical layers");
            return false;
        }
        self.remove_from_parent(child);
        if let Some(p) = self.layers.get_mut(&parent) {
            p.children.push(child);
        }
        if let Some(c) = self.layers.get_mut(&child) {
            c.parent = Some(parent);
        }
        true
    }

    /// Detach a layer from its parent. No-op for detached layers.
    pub fn remove_from_parent(&mut self, child: LayerId) {
        let Some(parent) = self.layers.get_mut(&child).and_then(|c| c.parent.take()) else {
            return;
        };
        if let Some(p) = self.layers.get_mut(&parent) {
            p.children.retain(|&id| id != child);
        }
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    pub fn frame(&self, id: LayerId) -> Option<Rect> {
        self.layers.get(&id).map(|l| l.frame)
    }

    pub fn set_frame(&mut self, id: LayerId, frame: Rect) -> bool {
        match self.layers.get_mut(&id) {
            Some(layer) => {
                layer.frame = frame;
                true
            }
            None => false,
        }
    }

    pub fn parent(&self, id: LayerId) -> Option<LayerId> {
        self.layers.get(&id).and_then(|l| l.parent)
    }

    pub fn children(&self, id: LayerId) -> &[LayerId] {
        self.layers
            .get(&id)
            .map(|l| l.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.layers.contains_key(&id)
    }

    /// Number of layers currently allocated.
    pub fn live_count(&self) -> usize {
        self.layers.len()
    }

    /// Release a layer. It is detached from its parent and its children are
    /// orphaned (not destroyed). Returns `false` if the id is unknown.
    pub fn destroy(&mut self, id: LayerId) -> bool {
        self.remove_from_parent(id);
        let Some(layer) = self.layers.remove(&id) else {
            warn!("destroy of unknown {id}");
            return false;
        };
        for child in layer.children {
            if let Some(c) = self.layers.get_mut(&child) {
                c.parent = None;
            }
        }
        true
    }
}
