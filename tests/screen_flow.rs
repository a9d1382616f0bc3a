use crux_core::testing::AppTester;
use trip_core::capabilities::{NavigateOperation, ViewportOperation};
use trip_core::{App, Effect, Event, Model, Screen};

#[test]
fn test_onboarding_is_one_way() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    assert_eq!(model.screen, Screen::Onboarding);

    let update = app.update(Event::StartJourney, &mut model);
    assert_eq!(model.screen, Screen::Overview);
    assert!(model.onboarding_complete);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
    assert!(update
        .effects
        .iter()
        .any(|e| matches!(e, Effect::Viewport(_))));

    // Onboarding cannot be re-entered via tabs.
    let update = app.update(Event::TabSelected(Screen::Onboarding), &mut model);
    assert_eq!(model.screen, Screen::Overview);
    assert!(update.effects.is_empty());

    // A second start is a no-op.
    let update = app.update(Event::StartJourney, &mut model);
    assert_eq!(model.screen, Screen::Overview);
    assert!(update.effects.is_empty());
}

#[test]
fn test_tab_selection_before_onboarding_is_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::TabSelected(Screen::Checklist), &mut model);
    assert_eq!(model.screen, Screen::Onboarding);
    assert!(update.effects.is_empty());
}

#[test]
fn test_screen_change_resets_scroll() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(Event::StartJourney, &mut model);

    let update = app.update(Event::ViewItinerary, &mut model);
    assert_eq!(model.screen, Screen::Itinerary);

    let scroll = update
        .effects
        .iter()
        .find_map(|e| match e {
            Effect::Viewport(req) => Some(req.operation),
            _ => None,
        })
        .expect("screen change should reset the viewport");
    assert_eq!(
        scroll,
        ViewportOperation::ScrollTo {
            top: 0.0,
            smooth: false
        }
    );
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));

    // Re-selecting the current tab does nothing.
    let update = app.update(Event::TabSelected(Screen::Itinerary), &mut model);
    assert!(update.effects.is_empty());
}

#[test]
fn test_scroll_sync_tracks_active_day() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(Event::StartJourney, &mut model);
    app.update(Event::ViewItinerary, &mut model);

    app.update(
        Event::DayOffsetsMeasured {
            offsets: vec![0.0, 800.0, 1600.0, 2400.0],
        },
        &mut model,
    );

    // Probe point is scroll position plus 250.
    let update = app.update(Event::Scrolled { y: 700.0 }, &mut model);
    assert_eq!(model.itinerary.active_day, 1);
    assert!(model.itinerary.show_top_button);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));

    // Same computed state, no render.
    let update = app.update(Event::Scrolled { y: 705.0 }, &mut model);
    assert!(update.effects.is_empty());

    let update = app.update(Event::Scrolled { y: 100.0 }, &mut model);
    assert_eq!(model.itinerary.active_day, 0);
    assert!(!model.itinerary.show_top_button);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
}

#[test]
fn test_day_selection_scrolls_to_anchored_section() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(Event::StartJourney, &mut model);
    app.update(Event::ViewItinerary, &mut model);
    app.update(
        Event::DayOffsetsMeasured {
            offsets: vec![0.0, 800.0, 1600.0, 2400.0],
        },
        &mut model,
    );

    let update = app.update(Event::DaySelected { index: 2 }, &mut model);
    let scroll = update
        .effects
        .iter()
        .find_map(|e| match e {
            Effect::Viewport(req) => Some(req.operation),
            _ => None,
        })
        .expect("day selection should scroll");
    assert_eq!(
        scroll,
        ViewportOperation::ScrollTo {
            top: 1420.0,
            smooth: true
        }
    );

    // Out of range index produces no scroll.
    let update = app.update(Event::DaySelected { index: 9 }, &mut model);
    assert!(update.effects.is_empty());

    let update = app.update(Event::ScrollToTopRequested, &mut model);
    let scroll = update
        .effects
        .iter()
        .find_map(|e| match e {
            Effect::Viewport(req) => Some(req.operation),
            _ => None,
        })
        .unwrap();
    assert_eq!(
        scroll,
        ViewportOperation::ScrollTo {
            top: 0.0,
            smooth: true
        }
    );
}

#[test]
fn test_place_detail_sheet() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(Event::StartJourney, &mut model);
    app.update(Event::ViewItinerary, &mut model);

    let update = app.update(
        Event::ActivityTapped {
            day_index: 0,
            activity_index: 8,
        },
        &mut model,
    );
    let place = model.selected_place.as_ref().expect("detail sheet opens");
    assert_eq!(place.name, "곤피라궁 투어");
    assert_eq!(place.location, "곤피라궁");
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));

    let view = app.view(&model);
    assert!(view.selected_place.is_some());

    // Map deep link goes through the browser capability.
    let update = app.update(Event::PlaceMapRequested, &mut model);
    let NavigateOperation::OpenExternal { url } = update
        .effects
        .iter()
        .find_map(|e| match e {
            Effect::Navigate(req) => Some(req.operation.clone()),
            _ => None,
        })
        .expect("map request opens browser");
    assert!(url.starts_with("https://www.google.com/maps/search/"));

    let update = app.update(Event::PlaceModalClosed, &mut model);
    assert!(model.selected_place.is_none());
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));

    // Closing again is a no-op.
    let update = app.update(Event::PlaceModalClosed, &mut model);
    assert!(update.effects.is_empty());

    // Out of range taps are dropped.
    let update = app.update(
        Event::ActivityTapped {
            day_index: 7,
            activity_index: 0,
        },
        &mut model,
    );
    assert!(model.selected_place.is_none());
    assert!(update.effects.is_empty());
}

#[test]
fn test_view_sections_follow_screen() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let view = app.view(&model);
    assert!(view.onboarding.is_some());
    assert!(!view.tab_bar_visible);

    app.update(Event::StartJourney, &mut model);
    let view = app.view(&model);
    assert!(view.onboarding.is_none());
    let overview = view.overview.expect("overview populated");
    assert_eq!(overview.highlights.len(), 3);
    assert!(view.tab_bar_visible);

    app.update(Event::ViewItinerary, &mut model);
    let view = app.view(&model);
    assert!(view.overview.is_none());
    let itinerary = view.itinerary.expect("itinerary populated");
    assert_eq!(itinerary.days.len(), 4);
    assert_eq!(itinerary.days[0].activities.len(), 12);
}
