//! `SegmentChild`: the closed sum of child views a segment can own.
//!
//! Exactly one alternative is live. Every operation is an exhaustive match,
//! so adding a kind without handling it everywhere fails to compile.

use ratatui::layout::Rect;

use crate::conversation::EntryRef;
use crate::layer::{LayerId, LayerTree};

use super::views::{
    ChildView, InfoView, MapView, MessageView, NumberView, TimerView, WeatherCurrentView,
    WeatherMultiDayView, WeatherSingleDayView,
};
use super::SegmentKind;

#[derive(Debug)]
pub enum SegmentChild {
    None,
    Message(MessageView),
    Info(InfoView),
    WeatherSingleDay(WeatherSingleDayView),
    WeatherCurrent(WeatherCurrentView),
    WeatherMultiDay(WeatherMultiDayView),
    Timer(TimerView),
    Number(NumberView),
    Map(MapView),
}

/// Run `$body` with `$view` bound to the live view, or `$none` for `None`.
macro_rules! with_view {
    ($child:expr, $view:ident => $body:expr, None => $none:expr) => {
        match $child {
            SegmentChild::None => $none,
            SegmentChild::Message($view) => $body,
            SegmentChild::Info($view) => $body,
            SegmentChild::WeatherSingleDay($view) => $body,
            SegmentChild::WeatherCurrent($view) => $body,
            SegmentChild::WeatherMultiDay($view) => $body,
            SegmentChild::Timer($view) => $body,
            SegmentChild::Number($view) => $body,
            SegmentChild::Map($view) => $body,
        }
    };
}

impl SegmentChild {
    /// Build the one view matching `kind`. `None` builds nothing.
    pub fn create(kind: SegmentKind, tree: &mut LayerTree, frame: Rect, entry: &EntryRef) -> Self {
        match kind {
            SegmentKind::None => Self::None,
            SegmentKind::Message => Self::Message(MessageView::create(tree, frame, entry)),
            SegmentKind::Info => Self::Info(InfoView::create(tree, frame, entry)),
            SegmentKind::WeatherSingleDay => {
                Self::WeatherSingleDay(WeatherSingleDayView::create(tree, frame, entry))
            }
            SegmentKind::WeatherCurrent => {
                Self::WeatherCurrent(WeatherCurrentView::create(tree, frame, entry))
            }
            SegmentKind::WeatherMultiDay => {
                Self::WeatherMultiDay(WeatherMultiDayView::create(tree, frame, entry))
            }
            SegmentKind::Timer => Self::Timer(TimerView::create(tree, frame, entry)),
            SegmentKind::Number => Self::Number(NumberView::create(tree, frame, entry)),
            SegmentKind::Map => Self::Map(MapView::create(tree, frame, entry)),
        }
    }

    /// The variant tag of the live alternative.
    pub fn kind(&self) -> SegmentKind {
        match self {
            Self::None => SegmentKind::None,
            Self::Message(_) => SegmentKind::Message,
            Self::Info(_) => SegmentKind::Info,
            Self::WeatherSingleDay(_) => SegmentKind::WeatherSingleDay,
            Self::WeatherCurrent(_) => SegmentKind::WeatherCurrent,
            Self::WeatherMultiDay(_) => SegmentKind::WeatherMultiDay,
            Self::Timer(_) => SegmentKind::Timer,
            Self::Number(_) => SegmentKind::Number,
            Self::Map(_) => SegmentKind::Map,
        }
    }

    pub fn layer(&self) -> Option<LayerId> {
        with_view!(self, view => Some(view.layer()), None => None)
    }

    pub fn update(&mut self, tree: &mut LayerTree) {
        with_view!(self, view => view.update(tree), None => ())
    }

    /// Natural frame of the live view; `None` for the empty variant.
    pub fn frame(&self, tree: &LayerTree) -> Option<Rect> {
        with_view!(self, view => Some(view.frame(tree)), None => None)
    }

    pub fn destroy(self, tree: &mut LayerTree) {
        with_view!(self, view => view.destroy(tree), None => ())
    }
}
