//! Weather widgets: single day, current conditions, multi-day forecast.
//!
//! If the entry's payload is no longer the expected kind the body is empty
//! rather than an error; the segment will be rebuilt by its owner.
//!
//! Table-like rows are kept on one line when they fit the frame. Otherwise
//! they break into wrapped parts so nothing is clipped.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::conversation::widget::{condition_name, temperature_unit, wind_unit};
use crate::conversation::{ConversationEntry, ConversationWidget};

use super::{centered, prefixed, wrapped, Body, TextView};

fn heading() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn temperature() -> Style {
    Style::default().fg(Color::Yellow)
}

fn fits(parts: &[&str], width: u16) -> bool {
    parts.iter().map(|p| p.width()).sum::<usize>() <= usize::from(width)
}

#[derive(Debug)]
pub struct WeatherSingleDayBody;

pub type WeatherSingleDayView = TextView<WeatherSingleDayBody>;

impl Body for WeatherSingleDayBody {
    const NAME: &'static str = "weather_single_day";

    fn lines(entry: &ConversationEntry, width: u16) -> Vec<Line<'static>> {
        let Some(ConversationWidget::WeatherSingleDay(w)) = entry.widget_payload() else {
            return Vec::new();
        };
        let unit = temperature_unit(&w.unit);
        let condition = condition_name(w.condition);
        let temps = format!("{}{unit} / {}{unit}", w.high, w.low);

        let mut lines = wrapped(&format!("{}, {}", w.day, w.location), width, heading());
        if fits(&[condition, "  ", &temps], width) {
            lines.push(Line::from(vec![
                Span::raw(format!("{condition}  ")),
                Span::styled(temps, temperature()),
            ]));
        } else {
            lines.extend(wrapped(condition, width, Style::default()));
            lines.extend(wrapped(&temps, width, temperature()));
        }
        lines.extend(wrapped(&w.summary, width, Style::default()));
        lines
    }
}

#[derive(Debug)]
pub struct WeatherCurrentBody;

pub type WeatherCurrentView = TextView<WeatherCurrentBody>;

impl Body for WeatherCurrentBody {
    const NAME: &'static str = "weather_current";

    fn lines(entry: &ConversationEntry, width: u16) -> Vec<Line<'static>> {
        let Some(ConversationWidget::WeatherCurrent(w)) = entry.widget_payload() else {
            return Vec::new();
        };
        let unit = temperature_unit(&w.unit);
        let description = if w.description.is_empty() {
            condition_name(w.condition)
        } else {
            w.description.as_str()
        };
        let mut lines = wrapped(&w.location, width, heading());
        lines.extend(centered(
            &format!("{}{unit}", w.temperature),
            width,
            temperature().add_modifier(Modifier::BOLD),
        ));
        lines.extend(wrapped(description, width, Style::default()));
        lines.extend(wrapped(
            &format!("Feels like {}{unit}", w.feels_like),
            width,
            Style::default(),
        ));
        lines.extend(wrapped(
            &format!("Wind {} {}", w.wind_speed, wind_unit(&w.wind_speed_unit)),
            width,
            Style::default(),
        ));
        lines
    }
}

#[derive(Debug)]
pub struct WeatherMultiDayBody;

pub type WeatherMultiDayView = TextView<WeatherMultiDayBody>;

/// Width of the day-name column in the forecast table.
const DAY_COLUMN: usize = 4;

impl Body for WeatherMultiDayBody {
    const NAME: &'static str = "weather_multi_day";

    fn lines(entry: &ConversationEntry, width: u16) -> Vec<Line<'static>> {
        let Some(ConversationWidget::WeatherMultiDay(w)) = entry.widget_payload() else {
            return Vec::new();
        };
        let mut lines = wrapped(&w.location, width, heading());
        for day in &w.days {
            let short: String = day.day.chars().take(3).collect();
            let name = format!("{short:<width$}", width = DAY_COLUMN);
            let temps = format!("{:>3}°/{:>3}°", day.high, day.low);
            let condition = condition_name(day.condition);

            if fits(&[&name, &temps, " ", condition], width) {
                lines.push(Line::from(vec![
                    Span::styled(name, heading()),
                    Span::styled(temps, temperature()),
                    Span::raw(format!(" {condition}")),
                ]));
            } else {
                // Condition moves under the temperatures, indented past the day
                lines.extend(wrapped(&format!("{name}{temps}"), width, temperature()));
                lines.extend(prefixed(
                    &" ".repeat(DAY_COLUMN),
                    condition,
                    width,
                    Style::default(),
                ));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::widget::{
        CurrentWeather, ForecastDay, MultiDayWeather, NumberWidget, SingleDayWeather,
    };
    use crate::segments::views::test_support::{entry, layout};

    fn single_day() -> ConversationEntry {
        ConversationEntry::widget(ConversationWidget::WeatherSingleDay(SingleDayWeather {
            location: "Oslo".into(),
            day: "Tuesday".into(),
            condition: 12,
            unit: "°C".into(),
            summary: "Rain in the afternoon".into(),
            high: 9,
            low: 2,
        }))
    }

    #[test]
    fn single_day_layout() {
        let (frame, text) = layout::<WeatherSingleDayView>(&entry(single_day()), 30);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "Tuesday, Oslo");
        assert_eq!(rows[1], "Rain  9°C / 2°C");
        assert_eq!(rows[2], "Rain in the afternoon");
        assert_eq!(frame.height, 3);
    }

    #[test]
    fn single_day_height_grows_when_narrow() {
        let (wide, _) = layout::<WeatherSingleDayView>(&entry(single_day()), 30);
        let (narrow, _) = layout::<WeatherSingleDayView>(&entry(single_day()), 10);
        assert!(narrow.height > wide.height);
    }

    #[test]
    fn current_conditions_layout() {
        let e = entry(ConversationEntry::widget(ConversationWidget::WeatherCurrent(
            CurrentWeather {
                location: "Paris".into(),
                condition: 32,
                temperature: 21,
                feels_like: 20,
                unit: "metric".into(),
                description: String::new(),
                wind_speed: 4,
                wind_speed_unit: "metric".into(),
            },
        )));
        let (frame, text) = layout::<WeatherCurrentView>(&e, 20);
        assert!(text.contains("21°C"));
        assert!(text.contains("Sunny"));
        assert!(text.contains("Feels like 20°C"));
        assert!(text.contains("Wind 4 m/s"));
        assert_eq!(frame.height, 5);
    }

    #[test]
    fn multi_day_one_row_per_day() {
        let e = entry(ConversationEntry::widget(ConversationWidget::WeatherMultiDay(
            MultiDayWeather {
                location: "Berlin".into(),
                days: vec![
                    ForecastDay { day: "Monday".into(), condition: 32, high: 20, low: 11 },
                    ForecastDay { day: "Tuesday".into(), condition: 26, high: 18, low: 10 },
                    ForecastDay { day: "Wednesday".into(), condition: 12, high: 15, low: 9 },
                ],
            },
        )));
        let (frame, text) = layout::<WeatherMultiDayView>(&e, 30);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(frame.height, 4);
        assert!(rows[1].starts_with("Mon"));
        assert!(rows[3].starts_with("Wed"));
        assert!(rows[3].ends_with("Rain"));
    }

    #[test]
    fn narrow_forecast_moves_condition_to_next_row() {
        let e = entry(ConversationEntry::widget(ConversationWidget::WeatherMultiDay(
            MultiDayWeather {
                location: "Berlin".into(),
                days: vec![ForecastDay { day: "Monday".into(), condition: 4, high: 20, low: 11 }],
            },
        )));
        let (frame, text) = layout::<WeatherMultiDayView>(&e, 20);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows, vec!["Berlin", "Mon  20°/ 11°", "    Thunderstorms"]);
        assert_eq!(frame.height, 3);
    }

    #[test]
    fn narrow_single_day_splits_condition_and_temperatures() {
        let (frame, text) = layout::<WeatherSingleDayView>(&entry(single_day()), 12);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "Tuesday,");
        assert_eq!(rows[1], "Oslo");
        assert_eq!(rows[2], "Rain");
        assert_eq!(rows[3], "9°C / 2°C");
        assert_eq!(frame.height, 6);
    }

    #[test]
    fn mismatched_payload_renders_empty() {
        let e = entry(ConversationEntry::widget(ConversationWidget::Number(NumberWidget {
            number: "1".into(),
            unit: String::new(),
        })));
        let (frame, text) = layout::<WeatherSingleDayView>(&e, 30);
        assert_eq!(frame.height, 0);
        assert!(text.is_empty());
    }
}
