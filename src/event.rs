use serde::{Deserialize, Serialize};

use crate::capabilities::{Instant, StorageResult};
use crate::model::{PhraseTab, Screen};
use crate::phrasebook::PhraseId;

/// Everything that can happen to the core, from the shell or from a
/// capability completing. HTTP results are `#[serde(skip)]` because they
/// only ever originate inside the core's own callbacks.
#[derive(Serialize, Deserialize, Debug)]
pub enum Event {
    // Onboarding and navigation
    StartJourney,
    TabSelected(Screen),
    ViewItinerary,

    // Itinerary and place detail sheet
    ActivityTapped {
        day_index: usize,
        activity_index: usize,
    },
    PlaceModalClosed,
    PlaceMapRequested,
    PlaceSearchRequested,

    // Scroll sync, driven by shell measurements
    DayOffsetsMeasured {
        offsets: Vec<f64>,
    },
    Scrolled {
        y: f64,
    },
    DaySelected {
        index: usize,
    },
    ScrollToTopRequested,

    // Checklist
    ChecklistLoaded(StorageResult),
    ChecklistToggled {
        id: String,
    },
    ChecklistSaved(StorageResult),

    // My page: countdown, weather, currency shortcut
    CountdownTicked(Instant),
    #[serde(skip)]
    WeatherFetched(Box<crux_http::Result<crux_http::Response<Vec<u8>>>>),
    CurrencyRatesRequested,

    // Phrasebook
    PhraseTabSelected(PhraseTab),
    PhraseCategorySelected {
        category: String,
    },
    PhraseSelected {
        id: PhraseId,
    },
    PhraseModalClosed,
    FavoriteToggled {
        id: PhraseId,
    },
    SpeakRequested {
        id: PhraseId,
    },
    TranslateRequested {
        id: PhraseId,
    },

    // Audio player
    PlayPauseToggled,
    SeekRequested {
        seconds: f64,
    },
    SkipForwardTapped,
    SkipBackwardTapped,
    DurationLoaded {
        seconds: f64,
    },
    PositionUpdated {
        seconds: f64,
    },
    PlaybackEnded,
    DownloadRequested,
    #[serde(skip)]
    DownloadFetched(Box<crux_http::Result<crux_http::Response<Vec<u8>>>>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_stays_small() {
        // Large payloads ride behind boxes or vecs, so the enum itself
        // should stay pocket sized.
        assert!(std::mem::size_of::<Event>() <= 64);
    }

    #[test]
    fn test_shell_events_round_trip_through_json() {
        let event = Event::ChecklistToggled { id: "3".to_string() };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, Event::ChecklistToggled { id } if id == "3"));

        let event = Event::Scrolled { y: 412.5 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(matches!(
            serde_json::from_str(&json).unwrap(),
            Event::Scrolled { y } if (y - 412.5).abs() < f64::EPSILON
        ));
    }
}
