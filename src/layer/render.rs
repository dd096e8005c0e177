//! Draw a layer subtree into a ratatui `Buffer`.
//!
//! Frames are relative to the parent; children are clipped to the
//! parent's bounds. Text content is pre-wrapped by the views, so it is
//! drawn without further wrapping.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use super::{LayerContent, LayerId, LayerTree};

/// Draw `root` and all its descendants. `root`'s frame is interpreted
/// relative to `area`'s top-left corner, and everything is clipped to `area`.
pub fn draw(tree: &LayerTree, root: LayerId, area: Rect, buf: &mut Buffer) {
    let clip = area.intersection(buf.area);
    draw_layer(tree, root, (i32::from(area.x), i32::from(area.y)), clip, buf);
}

fn draw_layer(
    tree: &LayerTree,
    id: LayerId,
    origin: (i32, i32),
    clip: Rect,
    buf: &mut Buffer,
) {
    let Some(layer) = tree.get(id) else {
        return;
    };
    let abs_x = origin.0 + i32::from(layer.frame.x);
    let abs_y = origin.1 + i32::from(layer.frame.y);
    let Some(visible) = visible_rect(abs_x, abs_y, layer.frame.width, layer.frame.height, clip)
    else {
        return;
    };

    if let LayerContent::Text(text) = &layer.content {
        let skip_rows = (i32::from(visible.y) - abs_y).max(0) as u16;
        let skip_cols = (i32::from(visible.x) - abs_x).max(0) as u16;
        Paragraph::new(text.clone())
            .scroll((skip_rows, skip_cols))
            .render(visible, buf);
    }

    for &child in tree.children(id) {
        draw_layer(tree, child, (abs_x, abs_y), visible, buf);
    }
}

/// Intersect an absolute (possibly negative) rect with the clip region.
fn visible_rect(x: i32, y: i32, width: u16, height: u16, clip: Rect) -> Option<Rect> {
    let left = x.max(i32::from(clip.x));
    let top = y.max(i32::from(clip.y));
    let right = (x + i32::from(width)).min(i32::from(clip.right()));
    let bottom = (y + i32::from(height)).min(i32::from(clip.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Plain-text rows of a buffer, trailing spaces trimmed.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut skip = 0;
        for x in area.left()..area.right() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buf[(x, y)].symbol();
            skip = symbol.width().saturating_sub(1);
            line.push_str(symbol);
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}
