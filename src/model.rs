use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content;
use crate::countdown::Countdown;
use crate::phrasebook::PhraseId;
use crate::player::PlayerState;
use crate::weather::WeatherDay;

/// The six screens of the app. `Onboarding` is only reachable as the
/// initial state; once completed it can never be re-entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Onboarding,
    Overview,
    Itinerary,
    Japanese,
    Checklist,
    MyPage,
}

/// Detail sheet content for a tapped itinerary entry. Only entries with an
/// image get one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub name: String,
    pub description: String,
    pub image: String,
    pub location: String,
    pub tags: Vec<String>,
}

impl PlaceDetail {
    /// `None` when the activity has no image; location falls back to the
    /// wider region, description to empty.
    #[must_use]
    pub fn from_activity(activity: &content::Activity) -> Option<Self> {
        let image = activity.image?;
        Some(Self {
            name: activity.title.to_string(),
            description: activity.description.unwrap_or_default().to_string(),
            image: image.to_string(),
            location: activity.location.unwrap_or("시코쿠").to_string(),
            tags: activity.tags.iter().map(ToString::to_string).collect(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItineraryState {
    /// Shell-measured top offsets of the day sections, in document order.
    pub day_offsets: Vec<f64>,
    pub active_day: usize,
    pub show_top_button: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    pub checked: BTreeSet<String>,
    pub loaded: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseTab {
    #[default]
    All,
    Favorites,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasebookState {
    pub tab: PhraseTab,
    pub selected_category: String,
    pub favorites: BTreeSet<PhraseId>,
    pub open_phrase: Option<PhraseId>,
}

impl Default for PhrasebookState {
    fn default() -> Self {
        Self {
            tab: PhraseTab::All,
            selected_category: content::DEFAULT_PHRASE_CATEGORY.to_string(),
            favorites: BTreeSet::new(),
            open_phrase: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum WeatherState {
    #[default]
    Loading,
    Ready(Vec<WeatherDay>),
    Unavailable,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MyPageState {
    pub countdown: Countdown,
    /// The 1-second tick loop only re-arms while this is set; it is cleared
    /// on leaving the screen so in-flight ticks die out.
    pub countdown_active: bool,
    pub weather: WeatherState,
    pub player: PlayerState,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub screen: Screen,
    pub onboarding_complete: bool,
    pub selected_place: Option<PlaceDetail>,
    pub itinerary: ItineraryState,
    pub checklist: ChecklistState,
    pub phrasebook: PhrasebookState,
    pub my_page: MyPageState,
}
