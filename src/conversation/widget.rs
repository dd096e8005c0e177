//! Widget payloads embedded in conversation entries.
//!
//! The assistant can attach a live widget to a response instead of text.
//! Each payload is tagged by `"type"` on the wire. Tags this build does not
//! know deserialize to `ConversationWidget::Unknown`. Entries read through
//! `lenient` also turn a malformed payload of a known tag into `Unknown`, so
//! one bad widget does not fail the whole conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Weather summary for one day within the coming week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleDayWeather {
    pub location: String,
    pub day: String,
    pub condition: i32,
    pub unit: String,
    #[serde(default)]
    pub summary: String,
    pub high: i32,
    pub low: i32,
}

/// Weather right now at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location: String,
    pub condition: i32,
    pub temperature: i32,
    pub feels_like: i32,
    pub unit: String,
    #[serde(default)]
    pub description: String,
    pub wind_speed: i32,
    pub wind_speed_unit: String,
}

/// One day in a multi-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub condition: i32,
    pub high: i32,
    pub low: i32,
}

/// Forecast for the next few days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiDayWeather {
    pub location: String,
    #[serde(default)]
    pub days: Vec<ForecastDay>,
}

/// Countdown to a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerWidget {
    pub target_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A single highlighted value, e.g. a unit conversion result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberWidget {
    pub number: String,
    #[serde(default)]
    pub unit: String,
}

/// A pinned location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapWidget {
    pub lat: f64,
    pub lon: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn default_zoom() -> u8 {
    14
}

/// A widget payload carried by an `EntryType::Widget` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationWidget {
    WeatherSingleDay(SingleDayWeather),
    WeatherCurrent(CurrentWeather),
    WeatherMultiDay(MultiDayWeather),
    Timer(TimerWidget),
    Number(NumberWidget),
    Map(MapWidget),
    #[serde(other)]
    Unknown,
}

/// Deserialize an optional widget, downgrading a payload that does not
/// match its tag to `Unknown` with a warning.
pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Option<ConversationWidget>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match ConversationWidget::deserialize(&value) {
        Ok(widget) => Ok(Some(widget)),
        Err(e) => {
            warn!("malformed widget payload: {e}");
            Ok(Some(ConversationWidget::Unknown))
        }
    }
}

/// Payload-free descriptor of a widget's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetType {
    WeatherSingleDay,
    WeatherCurrent,
    WeatherMultiDay,
    Timer,
    Number,
    Map,
    Unknown,
}

impl ConversationWidget {
    pub fn widget_type(&self) -> WidgetType {
        match self {
            Self::WeatherSingleDay(_) => WidgetType::WeatherSingleDay,
            Self::WeatherCurrent(_) => WidgetType::WeatherCurrent,
            Self::WeatherMultiDay(_) => WidgetType::WeatherMultiDay,
            Self::Timer(_) => WidgetType::Timer,
            Self::Number(_) => WidgetType::Number,
            Self::Map(_) => WidgetType::Map,
            Self::Unknown => WidgetType::Unknown,
        }
    }
}

/// Display name for a weather icon code.
pub fn condition_name(code: i32) -> &'static str {
    match code {
        32 | 36 => "Sunny",
        31 => "Clear",
        33 | 34 => "Mostly sunny",
        29 | 30 => "Partly cloudy",
        26 | 27 | 28 => "Cloudy",
        19..=22 => "Fog",
        11 => "Drizzle",
        8 => "Freezing drizzle",
        12 | 40 => "Rain",
        10 => "Freezing rain",
        13..=16 | 42 | 43 => "Snow",
        39 | 45 => "Showers",
        41 | 46 => "Snow showers",
        3 | 4 | 37 | 38 | 47 => "Thunderstorms",
        17 | 35 => "Hail",
        _ => "Unknown",
    }
}

/// Display form of a temperature unit. Payloads normally carry the
/// symbol already (`"°C"`); bare unit-system names are mapped too.
pub fn temperature_unit(unit: &str) -> &str {
    match unit {
        "imperial" => "°F",
        "metric" | "uk hybrid" => "°C",
        other => other,
    }
}

/// Display form of a wind speed unit, mapped like `temperature_unit`.
pub fn wind_unit(unit: &str) -> &str {
    match unit {
        "imperial" | "uk hybrid" => "mph",
        "metric" => "m/s",
        other => other,
    }
}
