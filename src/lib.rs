#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod capabilities;
pub mod checklist;
pub mod content;
pub mod countdown;
pub mod event;
pub mod links;
pub mod model;
pub mod phrasebook;
pub mod player;
pub mod scroll;
pub mod weather;

pub use app::{App, ViewModel};
pub use capabilities::{Capabilities, Effect};
pub use event::Event;
pub use model::{Model, Screen};
pub use crux_core::App as CruxApp;

/// Key under which checked checklist item ids are persisted.
pub const CHECKLIST_STORAGE_KEY: &str = "takamatsu-trip-checklist";

// Open-Meteo forecast request for Takamatsu city.
pub const WEATHER_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
pub const WEATHER_LATITUDE: f64 = 34.3428;
pub const WEATHER_LONGITUDE: f64 = 134.0469;
pub const WEATHER_TIMEZONE: &str = "Asia/Tokyo";
pub const WEATHER_FORECAST_DAYS: u8 = 7;

/// 2026-02-02 08:45 KST, the group's departure from Incheon, as Unix
/// epoch milliseconds.
pub const DEPARTURE_TARGET_MS: u64 = 1_769_989_500_000;
pub const COUNTDOWN_INTERVAL_MS: u64 = 1_000;

pub const AUDIO_SOURCE_URL: &str =
    "https://assets.takamatsu-trip.app/audio/takamatsu-trip-2026.mp3";
pub const AUDIO_TITLE: &str = "다카마쓰 트립 2026";

pub const SPEECH_LANG: &str = "ja-JP";
pub const SPEECH_RATE: f32 = 0.8;
