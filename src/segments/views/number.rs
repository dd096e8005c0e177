//! Number widget: one highlighted value with its unit underneath.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use crate::conversation::{ConversationEntry, ConversationWidget};

use super::{centered, Body, TextView};

#[derive(Debug)]
pub struct NumberBody;

pub type NumberView = TextView<NumberBody>;

impl Body for NumberBody {
    const NAME: &'static str = "number";

    fn lines(entry: &ConversationEntry, width: u16) -> Vec<Line<'static>> {
        let Some(ConversationWidget::Number(n)) = entry.widget_payload() else {
            return Vec::new();
        };
        let value_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mut lines = centered(&n.number, width, value_style);
        lines.extend(centered(&n.unit, width, Style::default().fg(Color::Gray)));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::widget::NumberWidget;
    use crate::segments::views::test_support::{entry, layout};

    fn number(value: &str, unit: &str) -> ConversationEntry {
        ConversationEntry::widget(ConversationWidget::Number(NumberWidget {
            number: value.into(),
            unit: unit.into(),
        }))
    }

    #[test]
    fn value_and_unit_centered() {
        let (frame, text) = layout::<NumberView>(&entry(number("42", "km")), 10);
        assert_eq!(text, "    42\n    km");
        assert_eq!(frame.height, 2);
    }

    #[test]
    fn unitless_number_is_one_row() {
        let (frame, _) = layout::<NumberView>(&entry(number("3.14159", "")), 10);
        assert_eq!(frame.height, 1);
    }
}
