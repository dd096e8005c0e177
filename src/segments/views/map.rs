//! Map widget: framed placeholder with a centred pin.
//!
//! Tile rendering happens elsewhere; this view reserves a fixed-height
//! viewport, marks the pinned location, and prints coordinates and label.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::conversation::widget::MapWidget;
use crate::conversation::{ConversationEntry, ConversationWidget};

use super::{wrapped, Body, TextView};

/// Interior rows of the map viewport.
const VIEWPORT_ROWS: usize = 3;
/// Narrowest frame that can hold the viewport border.
const MIN_WIDTH: u16 = 3;

#[derive(Debug)]
pub struct MapBody;

pub type MapView = TextView<MapBody>;

impl Body for MapBody {
    const NAME: &'static str = "map";

    fn lines(entry: &ConversationEntry, width: u16) -> Vec<Line<'static>> {
        let Some(ConversationWidget::Map(map)) = entry.widget_payload() else {
            return Vec::new();
        };
        let mut lines = if width >= MIN_WIDTH {
            viewport(width)
        } else {
            Vec::new()
        };
        lines.extend(wrapped(
            &coordinates(map),
            width,
            Style::default().fg(Color::Gray),
        ));
        if let Some(label) = map.label.as_deref() {
            lines.extend(wrapped(label, width, Style::default().add_modifier(Modifier::BOLD)));
        }
        lines
    }
}

fn coordinates(map: &MapWidget) -> String {
    format!("{:.4}, {:.4} z{}", map.lat, map.lon, map.zoom)
}

fn viewport(width: u16) -> Vec<Line<'static>> {
    let inner = (width - 2) as usize;
    let border = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(VIEWPORT_ROWS + 2);
    lines.push(Line::styled(format!("┌{}┐", "─".repeat(inner)), border));
    for row in 0..VIEWPORT_ROWS {
        let mut spans = vec![Span::styled("│", border)];
        if row == VIEWPORT_ROWS / 2 {
            let left = inner.saturating_sub(1) / 2;
            let right = inner.saturating_sub(left + 1);
            spans.push(Span::raw(" ".repeat(left)));
            if inner > 0 {
                spans.push(Span::styled("◆", Style::default().fg(Color::Red)));
            }
            spans.push(Span::raw(" ".repeat(right)));
        } else {
            spans.push(Span::raw(" ".repeat(inner)));
        }
        spans.push(Span::styled("│", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::styled(format!("└{}┘", "─".repeat(inner)), border));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::views::test_support::{entry, layout};

    fn map(label: Option<&str>) -> ConversationEntry {
        ConversationEntry::widget(ConversationWidget::Map(MapWidget {
            lat: 59.91,
            lon: 10.75,
            zoom: 14,
            label: label.map(str::to_string),
        }))
    }

    #[test]
    fn viewport_and_coordinates() {
        let (frame, text) = layout::<MapView>(&entry(map(None)), 9);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "┌───────┐");
        assert_eq!(rows[2], "│   ◆   │");
        assert_eq!(rows[4], "└───────┘");
        // Coordinates wrap inside the frame instead of being clipped
        assert_eq!(rows[5..], ["59.9100,", "10.7500", "z14"]);
        assert_eq!(frame.height, 8);
    }

    #[test]
    fn label_adds_rows() {
        let (frame, text) = layout::<MapView>(&entry(map(Some("Opera house"))), 20);
        assert!(text.ends_with("Opera house"));
        assert_eq!(frame.height, 7);
    }

    #[test]
    fn too_narrow_for_viewport() {
        let (frame, text) = layout::<MapView>(&entry(map(None)), 2);
        assert!(!text.contains('┌'));
        assert!(text.lines().all(|row| row.chars().count() <= 2));
        assert_eq!(frame.height as usize, text.lines().count());
    }
}
