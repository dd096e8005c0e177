//! Concrete child views: one per segment kind.
//!
//! Every view has the same shape (`ChildView`): build from a frame and an
//! entry, re-read the entry on update, release its layer on destroy. Views
//! are self-sizing: after `create` and `update` the layer frame holds the
//! view's natural size, which is what `Segment` reads back.
//!
//! All current views are text bodies laid out at the frame width, so they
//! share `TextView` and differ only in their `Body`.

pub mod info;
pub mod map;
pub mod message;
pub mod number;
pub mod timer;
pub mod weather;

use std::fmt;
use std::marker::PhantomData;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Text};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::conversation::{ConversationEntry, EntryRef};
use crate::layer::wrap::{center, wrap_text};
use crate::layer::{LayerId, LayerTree};

pub use info::InfoView;
pub use map::MapView;
pub use message::MessageView;
pub use number::NumberView;
pub use timer::TimerView;
pub use weather::{WeatherCurrentView, WeatherMultiDayView, WeatherSingleDayView};

/// Uniform lifecycle of a child view.
pub trait ChildView: Sized {
    /// Build the view at `frame` (relative to the parent) for `entry`.
    /// The returned view's layer is detached; the caller attaches it.
    fn create(tree: &mut LayerTree, frame: Rect, entry: &EntryRef) -> Self;

    /// Re-read the entry and re-layout. May change the view's height.
    fn update(&mut self, tree: &mut LayerTree);

    /// Release every layer the view owns.
    fn destroy(self, tree: &mut LayerTree);

    /// The view's root layer.
    fn layer(&self) -> LayerId;

    /// Natural frame after the last create/update.
    fn frame(&self, tree: &LayerTree) -> Rect {
        tree.frame(self.layer()).unwrap_or_default()
    }
}

/// The content of a text view, laid out at a given width.
pub trait Body {
    const NAME: &'static str;

    fn lines(entry: &ConversationEntry, width: u16) -> Vec<Line<'static>>;
}

/// A self-sizing layer whose height is the number of laid-out lines.
pub struct TextView<B: Body> {
    layer: LayerId,
    entry: EntryRef,
    _body: PhantomData<B>,
}

impl<B: Body> fmt::Debug for TextView<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextView")
            .field("body", &B::NAME)
            .field("layer", &self.layer)
            .finish()
    }
}

impl<B: Body> TextView<B> {
    fn relayout(&self, tree: &mut LayerTree) {
        let Some(frame) = tree.frame(self.layer) else {
            return;
        };
        let lines = B::lines(&self.entry.borrow(), frame.width);
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        tree.set_text(self.layer, Text::from(lines));
        tree.set_frame(self.layer, Rect { height, ..frame });
    }
}

impl<B: Body> ChildView for TextView<B> {
    fn create(tree: &mut LayerTree, frame: Rect, entry: &EntryRef) -> Self {
        let view = Self {
            layer: tree.create(frame),
            entry: EntryRef::clone(entry),
            _body: PhantomData,
        };
        view.relayout(tree);
        debug!(view = B::NAME, layer = %view.layer, "created");
        view
    }

    fn update(&mut self, tree: &mut LayerTree) {
        self.relayout(tree);
    }

    fn destroy(self, tree: &mut LayerTree) {
        debug!(view = B::NAME, layer = %self.layer, "destroyed");
        tree.destroy(self.layer);
    }

    fn layer(&self) -> LayerId {
        self.layer
    }
}

/// Wrap `text` to `width` and style every resulting row.
pub(crate) fn wrapped(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|row| Line::styled(row, style))
        .collect()
}

/// Wrap `text` to `width` and centre each resulting row.
pub(crate) fn centered(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .iter()
        .map(|row| Line::styled(center(row, width), style))
        .collect()
}

/// Wrap `text` with `prefix` on the first row and matching indent after.
pub(crate) fn prefixed(prefix: &str, text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    let prefix_width = prefix.width();
    let indent = " ".repeat(prefix_width);
    let inner = width.saturating_sub(u16::try_from(prefix_width).unwrap_or(u16::MAX));
    if inner == 0 {
        return wrapped(text, width, style);
    }
    wrap_text(text, inner)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let lead = if i == 0 { prefix } else { indent.as_str() };
            Line::styled(format!("{lead}{row}"), style)
        })
        .collect()
}
