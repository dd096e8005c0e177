//! Timer widget: countdown to the payload's target time.
//!
//! The countdown is computed against the wall clock on every update; the
//! owner decides how often to call update. At ordinary widths the view is
//! two rows: title and countdown.

use chrono::{DateTime, TimeDelta, Utc};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use crate::conversation::{ConversationEntry, ConversationWidget};

use super::{centered, Body, TextView};

#[derive(Debug)]
pub struct TimerBody;

pub type TimerView = TextView<TimerBody>;

impl Body for TimerBody {
    const NAME: &'static str = "timer";

    fn lines(entry: &ConversationEntry, width: u16) -> Vec<Line<'static>> {
        let Some(ConversationWidget::Timer(timer)) = entry.widget_payload() else {
            return Vec::new();
        };
        timer_lines(timer.name.as_deref(), timer.target_time, Utc::now(), width)
    }
}

fn timer_lines(
    name: Option<&str>,
    target: DateTime<Utc>,
    now: DateTime<Utc>,
    width: u16,
) -> Vec<Line<'static>> {
    let title = name.filter(|n| !n.is_empty()).unwrap_or("Timer");
    let remaining = format_remaining(target - now);
    let style = if remaining == "Done" {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let mut lines = centered(title, width, Style::default().add_modifier(Modifier::BOLD));
    lines.extend(centered(&remaining, width, style.add_modifier(Modifier::BOLD)));
    lines
}

/// `H:MM:SS` (or `MM:SS` under an hour) for a positive delta, else `Done`.
pub fn format_remaining(delta: TimeDelta) -> String {
    let total = delta.num_seconds();
    if total <= 0 {
        return "Done".into();
    }
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
