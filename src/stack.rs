//! Segment stack: ordered segments for a whole conversation.
//!
//! Keeps one `Segment` per conversation entry under a root layer, stacked
//! top to bottom with no gaps. Scrolling is the caller's business: the
//! stack only knows its total content height.

use std::rc::Rc;

use ratatui::layout::Rect;
use tracing::debug;

use crate::config::SegmentConfig;
use crate::conversation::{Conversation, EntryRef, EntryType};
use crate::layer::{LayerId, LayerTree};
use crate::segments::{try_classify, Segment, SegmentKind};

#[derive(Debug)]
pub struct SegmentStack {
    root: LayerId,
    segments: Vec<Segment>,
    config: SegmentConfig,
}

impl SegmentStack {
    /// Create an empty stack whose root layer occupies `frame`.
    pub fn new(tree: &mut LayerTree, frame: Rect, config: SegmentConfig) -> Self {
        Self {
            root: tree.create(frame),
            segments: Vec::new(),
            config,
        }
    }

    /// Bring the segments in line with `conversation`.
    ///
    /// Segments are reused when their entry, label, and kind still match;
    /// everything else is destroyed and rebuilt. Order follows the
    /// conversation.
    pub fn sync(&mut self, tree: &mut LayerTree, conversation: &Conversation) {
        let area = tree.frame(self.root).unwrap_or_default();
        let mut old: Vec<Option<Segment>> = self.segments.drain(..).map(Some).collect();
        let mut next = Vec::with_capacity(conversation.len());

        for (index, entry) in conversation.entries().iter().enumerate() {
            let label = wants_label(conversation.entries(), index);
            let kind = try_classify(&entry.borrow(), &self.config).unwrap_or(SegmentKind::None);
            let reused = old.iter_mut().find_map(|slot| {
                let matches = slot.as_ref().is_some_and(|s| {
                    Rc::ptr_eq(s.entry(), entry) && s.has_label() == label && s.kind() == kind
                });
                if matches {
                    slot.take()
                } else {
                    None
                }
            });
            let segment = match reused {
                Some(segment) => segment,
                None => {
                    let segment = Segment::create(
                        tree,
                        Rect::new(0, 0, area.width, area.height),
                        entry,
                        label,
                        &self.config,
                    );
                    tree.add_child(self.root, segment.layer());
                    segment
                }
            };
            next.push(segment);
        }

        let mut stale = 0;
        for segment in old.into_iter().flatten() {
            segment.destroy(tree);
            stale += 1;
        }
        debug!(segments = next.len(), stale, "stack synced");
        self.segments = next;
        self.restack(tree);
    }

    /// Re-run update for the segment backing `entry`. Returns `false` if
    /// no segment renders that entry.
    pub fn update_entry(&mut self, tree: &mut LayerTree, entry: &EntryRef) -> bool {
        let Some(segment) = self
            .segments
            .iter_mut()
            .find(|s| Rc::ptr_eq(s.entry(), entry))
        else {
            return false;
        };
        segment.update(tree);
        self.restack(tree);
        true
    }

    /// Re-run update on every segment.
    pub fn update_all(&mut self, tree: &mut LayerTree) {
        for segment in &mut self.segments {
            segment.update(tree);
        }
        self.restack(tree);
    }

    /// Place segments top to bottom in order.
    pub fn restack(&self, tree: &mut LayerTree) {
        let mut y: u16 = 0;
        for segment in &self.segments {
            segment.set_origin(tree, 0, y);
            y = y.saturating_add(segment.frame(tree).height);
        }
    }

    /// Sum of all segment heights.
    pub fn content_height(&self, tree: &LayerTree) -> u16 {
        self.segments
            .iter()
            .fold(0u16, |acc, s| acc.saturating_add(s.frame(tree).height))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn root(&self) -> LayerId {
        self.root
    }

    /// Destroy every segment, then the root layer.
    pub fn destroy(self, tree: &mut LayerTree) {
        for segment in self.segments {
            segment.destroy(tree);
        }
        tree.destroy(self.root);
    }
}

/// Whether the entry at `index` opens an assistant turn: it is not a prompt
/// and the nearest earlier live entry is one.
pub fn wants_label(entries: &[EntryRef], index: usize) -> bool {
    let Some(entry) = entries.get(index) else {
        return false;
    };
    if matches!(
        entry.borrow().entry_type(),
        EntryType::Prompt | EntryType::Deleted
    ) {
        return false;
    }
    entries[..index]
        .iter()
        .rev()
        .map(|e| e.borrow().entry_type().clone())
        .find(|kind| *kind != EntryType::Deleted)
        .is_some_and(|kind| kind == EntryType::Prompt)
}
