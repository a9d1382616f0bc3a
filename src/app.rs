//! The app core: event handling and view model construction for the six
//! screens. All state lives in [`Model`]; the shell only ever sees the
//! serialized [`ViewModel`].

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::capabilities::{Capabilities, StorageOutput};
use crate::content;
use crate::countdown::Countdown;
use crate::event::Event;
use crate::model::{
    Model, PhraseTab, PlaceDetail, Screen, WeatherState,
};
use crate::phrasebook::{self, PhraseId};
use crate::player::{format_time, PlayerState};
use crate::weather::{self, Condition};
use crate::{checklist, links, scroll};
use crate::{
    AUDIO_SOURCE_URL, AUDIO_TITLE, CHECKLIST_STORAGE_KEY, COUNTDOWN_INTERVAL_MS,
    DEPARTURE_TARGET_MS, SPEECH_LANG, SPEECH_RATE,
};

#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Self::Event, model: &mut Self::Model, caps: &Self::Capabilities) {
        match event {
            Event::StartJourney => {
                if model.onboarding_complete {
                    debug!("onboarding already complete, ignoring start");
                    return;
                }
                model.onboarding_complete = true;
                self.switch_screen(Screen::Overview, model, caps);
            }
            Event::TabSelected(screen) => {
                if !model.onboarding_complete {
                    warn!("tab selected before onboarding completed");
                    return;
                }
                if screen == Screen::Onboarding {
                    warn!("onboarding is not reachable via tabs");
                    return;
                }
                if screen == model.screen {
                    return;
                }
                self.switch_screen(screen, model, caps);
            }
            Event::ViewItinerary => {
                if !model.onboarding_complete {
                    return;
                }
                self.switch_screen(Screen::Itinerary, model, caps);
            }

            Event::ActivityTapped {
                day_index,
                activity_index,
            } => {
                let Some(activity) = content::activity(day_index, activity_index) else {
                    warn!(day_index, activity_index, "tapped activity out of range");
                    return;
                };
                // Entries without an image have no detail sheet.
                let Some(place) = PlaceDetail::from_activity(activity) else {
                    return;
                };
                model.selected_place = Some(place);
                caps.render.render();
            }
            Event::PlaceModalClosed => {
                if model.selected_place.take().is_some() {
                    caps.render.render();
                }
            }
            Event::PlaceMapRequested => {
                if let Some(place) = &model.selected_place {
                    caps.navigate.open_external(links::map_search_url(&place.location));
                } else {
                    warn!("map requested with no place open");
                }
            }
            Event::PlaceSearchRequested => {
                if let Some(place) = &model.selected_place {
                    caps.navigate.open_external(links::web_search_url(&place.name));
                } else {
                    warn!("search requested with no place open");
                }
            }

            Event::DayOffsetsMeasured { offsets } => {
                model.itinerary.day_offsets = offsets;
            }
            Event::Scrolled { y } => {
                if model.screen != Screen::Itinerary {
                    return;
                }
                let active = scroll::active_section(&model.itinerary.day_offsets, y);
                let show_top = scroll::show_top_button(y);
                if active != model.itinerary.active_day
                    || show_top != model.itinerary.show_top_button
                {
                    model.itinerary.active_day = active;
                    model.itinerary.show_top_button = show_top;
                    caps.render.render();
                }
            }
            Event::DaySelected { index } => {
                match scroll::section_scroll_target(&model.itinerary.day_offsets, index) {
                    Some(target) => caps.viewport.scroll_to(target, true),
                    None => warn!(index, "day selected before offsets were measured"),
                }
            }
            Event::ScrollToTopRequested => {
                caps.viewport.scroll_to(0.0, true);
            }

            Event::ChecklistLoaded(result) => {
                match result {
                    Ok(StorageOutput::Value(payload)) => {
                        let (checked, corrupt) = checklist::decode(payload.as_deref());
                        if corrupt {
                            warn!("stored checklist was unreadable, starting fresh");
                        }
                        model.checklist.checked = checked;
                    }
                    Ok(StorageOutput::Written(_)) => {
                        warn!("unexpected write acknowledgement for checklist read");
                    }
                    Err(err) => {
                        warn!(%err, "checklist read failed, starting unchecked");
                    }
                }
                model.checklist.loaded = true;
                caps.render.render();
            }
            Event::ChecklistToggled { id } => {
                if !checklist::toggle(&mut model.checklist.checked, &id) {
                    warn!(%id, "toggle for unknown checklist item");
                    return;
                }
                caps.storage.set(
                    CHECKLIST_STORAGE_KEY,
                    checklist::encode(&model.checklist.checked),
                    Event::ChecklistSaved,
                );
                caps.render.render();
            }
            Event::ChecklistSaved(result) => match result {
                Ok(StorageOutput::Written(true) | StorageOutput::Value(_)) => {}
                Ok(StorageOutput::Written(false)) => {
                    error!("storage backend refused the checklist write");
                }
                Err(err) => {
                    error!(%err, "checklist write failed");
                }
            },

            Event::CountdownTicked(instant) => {
                if !model.my_page.countdown_active || model.screen != Screen::MyPage {
                    return;
                }
                let remaining = Countdown::remaining(DEPARTURE_TARGET_MS, instant.now_ms);
                model.my_page.countdown = remaining;
                if remaining.departed {
                    // Frozen at zero; no further ticks needed.
                    model.my_page.countdown_active = false;
                } else {
                    caps.time
                        .notify_after(COUNTDOWN_INTERVAL_MS, Event::CountdownTicked);
                }
                caps.render.render();
            }
            Event::WeatherFetched(result) => {
                model.my_page.weather = match *result {
                    Ok(mut response) if response.status().is_success() => {
                        let body = response.take_body().unwrap_or_default();
                        match weather::parse_forecast(&body) {
                            Ok(days) => WeatherState::Ready(days),
                            Err(err) => {
                                error!(%err, "forecast body did not decode");
                                WeatherState::Unavailable
                            }
                        }
                    }
                    Ok(response) => {
                        error!(status = %response.status(), "forecast request rejected");
                        WeatherState::Unavailable
                    }
                    Err(err) => {
                        error!(%err, "forecast request failed");
                        WeatherState::Unavailable
                    }
                };
                caps.render.render();
            }
            Event::CurrencyRatesRequested => {
                caps.navigate.open_external(links::currency_rate_url());
            }

            Event::PhraseTabSelected(tab) => {
                if model.phrasebook.tab != tab {
                    model.phrasebook.tab = tab;
                    caps.render.render();
                }
            }
            Event::PhraseCategorySelected { category } => {
                if content::phrase_category(&category).is_none() {
                    warn!(%category, "unknown phrase category");
                    return;
                }
                model.phrasebook.selected_category = category;
                caps.render.render();
            }
            Event::PhraseSelected { id } => {
                if phrasebook::resolve(id).is_none() {
                    warn!(?id, "selected phrase out of range");
                    return;
                }
                model.phrasebook.open_phrase = Some(id);
                caps.render.render();
            }
            Event::PhraseModalClosed => {
                if model.phrasebook.open_phrase.take().is_some() {
                    caps.render.render();
                }
            }
            Event::FavoriteToggled { id } => {
                if phrasebook::toggle_favorite(&mut model.phrasebook.favorites, id) {
                    caps.render.render();
                } else {
                    warn!(?id, "favorite toggle out of range");
                }
            }
            Event::SpeakRequested { id } => {
                if let Some((_, phrase)) = phrasebook::resolve(id) {
                    caps.speech.speak(phrase.jp, SPEECH_LANG, SPEECH_RATE);
                }
            }
            Event::TranslateRequested { id } => {
                if let Some((_, phrase)) = phrasebook::resolve(id) {
                    caps.navigate.open_external(links::translate_url(phrase.jp));
                }
            }

            Event::PlayPauseToggled => {
                // Optimistic: flip state now, let the shell catch up.
                if model.my_page.player.toggle() {
                    caps.audio.play();
                } else {
                    caps.audio.pause();
                }
                caps.render.render();
            }
            Event::SeekRequested { seconds } => {
                let clamped = model.my_page.player.seek_to(seconds);
                caps.audio.seek(clamped);
                caps.render.render();
            }
            Event::SkipForwardTapped => {
                let position = model.my_page.player.skip_forward();
                caps.audio.seek(position);
                caps.render.render();
            }
            Event::SkipBackwardTapped => {
                let position = model.my_page.player.skip_backward();
                caps.audio.seek(position);
                caps.render.render();
            }
            Event::DurationLoaded { seconds } => {
                model.my_page.player.set_duration(seconds);
                caps.render.render();
            }
            Event::PositionUpdated { seconds } => {
                model.my_page.player.set_position(seconds);
                caps.render.render();
            }
            Event::PlaybackEnded => {
                model.my_page.player.ended();
                caps.render.render();
            }
            Event::DownloadRequested => {
                caps.http
                    .get(AUDIO_SOURCE_URL)
                    .send(|result| Event::DownloadFetched(Box::new(result)));
            }
            Event::DownloadFetched(result) => match *result {
                Ok(mut response) if response.status().is_success() => {
                    let data = response.take_body().unwrap_or_default();
                    caps.audio.save_file(format!("{AUDIO_TITLE}.mp3"), data);
                }
                Ok(response) => {
                    error!(status = %response.status(), "audio download rejected");
                }
                Err(err) => {
                    error!(%err, "audio download failed");
                }
            },
        }
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        ViewModel {
            screen: model.screen,
            onboarding_complete: model.onboarding_complete,
            tab_bar_visible: model.onboarding_complete,
            selected_place: model.selected_place.clone(),
            onboarding: (model.screen == Screen::Onboarding).then(onboarding_view),
            overview: (model.screen == Screen::Overview).then(overview_view),
            itinerary: (model.screen == Screen::Itinerary).then(|| itinerary_view(model)),
            phrasebook: (model.screen == Screen::Japanese).then(|| phrasebook_view(model)),
            checklist: (model.screen == Screen::Checklist).then(|| checklist_view(model)),
            my_page: (model.screen == Screen::MyPage).then(|| my_page_view(model)),
        }
    }
}

impl App {
    /// Shared screen-change machinery: leave hooks for the old screen,
    /// scroll reset, enter hooks for the new one, then a render.
    fn switch_screen(&self, screen: Screen, model: &mut Model, caps: &Capabilities) {
        if model.screen == Screen::MyPage {
            // Drop the tick loop and silence the player on the way out.
            model.my_page.countdown_active = false;
            model.my_page.player = PlayerState::default();
            caps.audio.pause();
        }
        model.screen = screen;
        model.selected_place = None;
        caps.viewport.reset();

        match screen {
            Screen::Checklist => {
                caps.storage.get(CHECKLIST_STORAGE_KEY, Event::ChecklistLoaded);
            }
            Screen::MyPage => {
                model.my_page.countdown_active = true;
                caps.time.now(Event::CountdownTicked);
                model.my_page.weather = WeatherState::Loading;
                caps.http
                    .get(links::weather_forecast_url())
                    .send(|result| Event::WeatherFetched(Box::new(result)));
                caps.audio.load(AUDIO_SOURCE_URL);
            }
            _ => {}
        }
        caps.render.render();
    }
}

// --- View model ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub screen: Screen,
    pub onboarding_complete: bool,
    pub tab_bar_visible: bool,
    pub selected_place: Option<PlaceDetail>,
    pub onboarding: Option<OnboardingView>,
    pub overview: Option<OverviewView>,
    pub itinerary: Option<ItineraryView>,
    pub phrasebook: Option<PhrasebookView>,
    pub checklist: Option<ChecklistView>,
    pub my_page: Option<MyPageView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingView {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub date_badge: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledView {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightView {
    pub day_label: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCardView {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewView {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub duration_label: String,
    pub region_label: String,
    pub quick_facts: Vec<LabeledView>,
    pub highlights: Vec<HighlightView>,
    pub info_cards: Vec<InfoCardView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryView {
    pub days: Vec<DayView>,
    pub active_day: usize,
    pub show_top_button: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayView {
    pub day: u8,
    pub date: String,
    pub highlight: String,
    pub activities: Vec<ActivityView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub time: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub location: Option<String>,
    /// Whether tapping this entry opens a detail sheet.
    pub has_detail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhrasebookView {
    pub tab: PhraseTab,
    pub categories: Vec<CategoryTabView>,
    pub selected_category: String,
    pub rows: Vec<PhraseRowView>,
    pub favorites_count: usize,
    pub open_phrase: Option<PhraseRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTabView {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRowView {
    pub id: PhraseId,
    pub kr: String,
    pub jp: String,
    pub roman: String,
    pub favorite: bool,
    /// Originating category, shown on the favorites tab.
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistView {
    pub items: Vec<ChecklistItemView>,
    pub checked_count: usize,
    pub total_count: usize,
    /// Fraction checked, in `[0, 1]`, for the progress bar.
    pub progress: f32,
    pub all_done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItemView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub important: bool,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyPageView {
    pub countdown: Countdown,
    pub weather: WeatherView,
    pub player: PlayerView,
    pub flights: Vec<FlightLegView>,
    pub hotel: Vec<LabeledView>,
    pub audio_blurb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "days")]
pub enum WeatherView {
    Loading,
    Ready(Vec<WeatherDayView>),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDayView {
    pub date: String,
    pub condition: Condition,
    pub max_temp: i32,
    pub min_temp: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub title: String,
    pub playing: bool,
    pub position_secs: f64,
    pub duration_secs: f64,
    pub position_label: String,
    pub duration_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLegView {
    pub label: String,
    pub value: String,
    pub detail: String,
}

fn onboarding_view() -> OnboardingView {
    OnboardingView {
        eyebrow: content::ONBOARDING_EYEBROW.to_string(),
        title: content::ONBOARDING_TITLE.to_string(),
        subtitle: content::ONBOARDING_SUBTITLE.to_string(),
        date_badge: content::ONBOARDING_DATE_BADGE.to_string(),
        cta_label: content::ONBOARDING_CTA_LABEL.to_string(),
    }
}

fn overview_view() -> OverviewView {
    OverviewView {
        hero_title: content::HERO_TITLE.to_string(),
        hero_subtitle: content::HERO_SUBTITLE.to_string(),
        duration_label: content::DURATION_LABEL.to_string(),
        region_label: content::REGION_LABEL.to_string(),
        quick_facts: content::QUICK_FACTS.iter().map(labeled_view).collect(),
        highlights: content::HIGHLIGHTS
            .iter()
            .map(|h| HighlightView {
                day_label: h.day_label.to_string(),
                title: h.title.to_string(),
                subtitle: h.subtitle.to_string(),
                image: h.image.to_string(),
            })
            .collect(),
        info_cards: content::INFO_CARDS
            .iter()
            .map(|c| InfoCardView {
                title: c.title.to_string(),
                body: c.body.to_string(),
            })
            .collect(),
    }
}

fn labeled_view(info: &content::LabeledInfo) -> LabeledView {
    LabeledView {
        label: info.label.to_string(),
        value: info.value.to_string(),
    }
}

fn itinerary_view(model: &Model) -> ItineraryView {
    ItineraryView {
        days: content::DAYS
            .iter()
            .map(|day| DayView {
                day: day.day,
                date: day.date.to_string(),
                highlight: day.highlight.to_string(),
                activities: day
                    .activities
                    .iter()
                    .map(|a| ActivityView {
                        time: a.time.to_string(),
                        title: a.title.to_string(),
                        description: a.description.map(ToString::to_string),
                        image: a.image.map(ToString::to_string),
                        tags: a.tags.iter().map(ToString::to_string).collect(),
                        location: a.location.map(ToString::to_string),
                        has_detail: a.image.is_some(),
                    })
                    .collect(),
            })
            .collect(),
        active_day: model.itinerary.active_day,
        show_top_button: model.itinerary.show_top_button,
    }
}

fn phrase_row(
    id: PhraseId,
    category: &content::PhraseCategory,
    phrase: &content::Phrase,
    favorite: bool,
) -> PhraseRowView {
    PhraseRowView {
        id,
        kr: phrase.kr.to_string(),
        jp: phrase.jp.to_string(),
        roman: phrase.roman.to_string(),
        favorite,
        category: category.name.to_string(),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn phrasebook_view(model: &Model) -> PhrasebookView {
    let favorites = &model.phrasebook.favorites;
    let rows = match model.phrasebook.tab {
        PhraseTab::All => {
            let selected = &model.phrasebook.selected_category;
            content::PHRASE_CATEGORIES
                .iter()
                .enumerate()
                .filter(|(_, category)| category.name == selected.as_str())
                .flat_map(|(ci, category)| {
                    category.phrases.iter().enumerate().map(move |(pi, phrase)| {
                        let id = PhraseId::new(ci as u8, pi as u8);
                        phrase_row(id, category, phrase, favorites.contains(&id))
                    })
                })
                .collect()
        }
        PhraseTab::Favorites => phrasebook::favorites_in_order(favorites)
            .into_iter()
            .map(|(id, category, phrase)| phrase_row(id, category, phrase, true))
            .collect(),
    };
    PhrasebookView {
        tab: model.phrasebook.tab,
        categories: content::PHRASE_CATEGORIES
            .iter()
            .map(|c| CategoryTabView {
                name: c.name.to_string(),
                icon: c.icon.to_string(),
            })
            .collect(),
        selected_category: model.phrasebook.selected_category.clone(),
        rows,
        favorites_count: favorites.len(),
        open_phrase: model.phrasebook.open_phrase.and_then(|id| {
            phrasebook::resolve(id)
                .map(|(category, phrase)| {
                    phrase_row(id, category, phrase, favorites.contains(&id))
                })
        }),
    }
}

fn checklist_view(model: &Model) -> ChecklistView {
    let checked = &model.checklist.checked;
    ChecklistView {
        items: content::CHECKLIST_ITEMS
            .iter()
            .map(|item| ChecklistItemView {
                id: item.id.to_string(),
                title: item.title.to_string(),
                description: item.description.to_string(),
                important: item.important,
                checked: checked.contains(item.id),
            })
            .collect(),
        checked_count: checked.len(),
        total_count: content::CHECKLIST_ITEMS.len(),
        progress: checklist::progress(checked),
        all_done: checklist::is_complete(checked),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn my_page_view(model: &Model) -> MyPageView {
    let player = &model.my_page.player;
    MyPageView {
        countdown: model.my_page.countdown,
        weather: match &model.my_page.weather {
            WeatherState::Loading => WeatherView::Loading,
            WeatherState::Unavailable => WeatherView::Unavailable,
            WeatherState::Ready(days) => WeatherView::Ready(
                days.iter()
                    .map(|day| WeatherDayView {
                        date: day.date.clone(),
                        condition: Condition::for_code(day.code),
                        max_temp: day.max_temp.round() as i32,
                        min_temp: day.min_temp.round() as i32,
                    })
                    .collect(),
            ),
        },
        player: PlayerView {
            title: AUDIO_TITLE.to_string(),
            playing: player.playing,
            position_secs: player.position_secs,
            duration_secs: player.duration_secs,
            position_label: format_time(player.position_secs),
            duration_label: format_time(player.duration_secs),
        },
        flights: content::FLIGHT_LEGS
            .iter()
            .map(|leg| FlightLegView {
                label: leg.label.to_string(),
                value: leg.value.to_string(),
                detail: leg.detail.to_string(),
            })
            .collect(),
        hotel: content::HOTEL_INFO.iter().map(labeled_view).collect(),
        audio_blurb: content::AUDIO_INFO_BLURB.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_populates_only_active_screen() {
        let app = App;
        let mut model = Model::default();
        let vm = crux_core::App::view(&app, &model);
        assert!(vm.onboarding.is_some());
        assert!(vm.overview.is_none());
        assert!(!vm.tab_bar_visible);

        model.onboarding_complete = true;
        model.screen = Screen::Checklist;
        let vm = crux_core::App::view(&app, &model);
        assert!(vm.onboarding.is_none());
        assert!(vm.checklist.is_some());
        assert!(vm.my_page.is_none());
        assert!(vm.tab_bar_visible);
    }

    #[test]
    fn test_checklist_view_counts() {
        let mut model = Model::default();
        model.checklist.checked.insert("1".to_string());
        model.checklist.checked.insert("4".to_string());
        let view = checklist_view(&model);
        assert_eq!(view.checked_count, 2);
        assert_eq!(view.total_count, 10);
        assert!(!view.all_done);
        assert!(view.items[0].checked);
        assert!(!view.items[1].checked);
    }

    #[test]
    fn test_phrasebook_view_all_tab_shows_selected_category() {
        let model = Model::default();
        let view = phrasebook_view(&model);
        assert_eq!(view.selected_category, "기본 표현");
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.rows[0].kr, "안녕하세요");
        assert_eq!(view.categories.len(), 7);
    }

    #[test]
    fn test_weather_view_rounds_temperatures() {
        let mut model = Model::default();
        model.my_page.weather = WeatherState::Ready(vec![crate::weather::WeatherDay {
            date: "2026-02-02".to_string(),
            max_temp: 8.6,
            min_temp: -0.4,
            code: 71,
        }]);
        let view = my_page_view(&model);
        let WeatherView::Ready(days) = view.weather else {
            panic!("expected forecast days");
        };
        assert_eq!(days[0].max_temp, 9);
        assert_eq!(days[0].min_temp, 0);
        assert_eq!(days[0].condition, Condition::Snow);
    }
}
