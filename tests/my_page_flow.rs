use crux_core::testing::AppTester;
use crux_http::testing::ResponseBuilder;
use trip_core::capabilities::{AudioOperation, Instant, TimeOperation};
use trip_core::model::WeatherState;
use trip_core::{App, Effect, Event, Model, Screen, DEPARTURE_TARGET_MS};

fn open_my_page(app: &AppTester<App, Effect>, model: &mut Model) -> Vec<Effect> {
    app.update(Event::StartJourney, model);
    app.update(Event::TabSelected(Screen::MyPage), model)
        .effects
        .into_iter()
        .collect()
}

#[test]
fn test_entering_my_page_starts_everything() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let effects = open_my_page(&app, &mut model);

    assert!(model.my_page.countdown_active);
    assert_eq!(model.my_page.weather, WeatherState::Loading);

    // Clock read for the first countdown tick.
    let time_op = effects
        .iter()
        .find_map(|e| match e {
            Effect::Time(req) => Some(req.operation),
            _ => None,
        })
        .expect("countdown needs the current time");
    assert_eq!(time_op, TimeOperation::Now);

    // Forecast request goes out immediately.
    let http_url = effects
        .iter()
        .find_map(|e| match e {
            Effect::Http(req) => Some(req.operation.url.clone()),
            _ => None,
        })
        .expect("forecast fetch starts on entry");
    assert!(http_url.starts_with("https://api.open-meteo.com/v1/forecast"));

    // Track is loaded so play can start instantly.
    assert!(effects.iter().any(|e| matches!(
        e,
        Effect::Audio(req) if matches!(req.operation, AudioOperation::Load { .. })
    )));
    assert!(effects.iter().any(|e| matches!(e, Effect::Render(_))));
}

#[test]
fn test_countdown_breaks_down_remaining_time() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_my_page(&app, &mut model);

    // 1 day, 1 hour, 1 minute and 1 second before departure.
    let now_ms = DEPARTURE_TARGET_MS - 90_061_000;
    let update = app.update(Event::CountdownTicked(Instant { now_ms }), &mut model);

    let countdown = model.my_page.countdown;
    assert_eq!(
        (
            countdown.days,
            countdown.hours,
            countdown.minutes,
            countdown.seconds
        ),
        (1, 1, 1, 1)
    );
    assert!(!countdown.departed);

    // The next tick is armed.
    let rearm = update
        .effects
        .iter()
        .find_map(|e| match e {
            Effect::Time(req) => Some(req.operation),
            _ => None,
        })
        .expect("running countdown re-arms");
    assert_eq!(rearm, TimeOperation::NotifyAfter { millis: 1_000 });
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
}

#[test]
fn test_countdown_freezes_at_departure() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_my_page(&app, &mut model);

    let update = app.update(
        Event::CountdownTicked(Instant {
            now_ms: DEPARTURE_TARGET_MS + 5_000,
        }),
        &mut model,
    );

    let countdown = model.my_page.countdown;
    assert!(countdown.departed);
    assert_eq!(countdown.days, 0);
    assert_eq!(countdown.seconds, 0);
    assert!(!model.my_page.countdown_active);

    // Frozen at zero, so no further ticks are armed.
    assert!(!update.effects.iter().any(|e| matches!(e, Effect::Time(_))));
}

#[test]
fn test_ticks_after_leaving_are_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_my_page(&app, &mut model);
    app.update(Event::TabSelected(Screen::Overview), &mut model);

    assert!(!model.my_page.countdown_active);

    let update = app.update(
        Event::CountdownTicked(Instant {
            now_ms: DEPARTURE_TARGET_MS - 60_000,
        }),
        &mut model,
    );
    assert!(update.effects.is_empty());
    assert_eq!(model.my_page.countdown.seconds, 0);
}

#[test]
fn test_forecast_response_reaches_the_view() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_my_page(&app, &mut model);

    let body = br#"{
        "daily": {
            "time": ["2026-02-02", "2026-02-03"],
            "temperature_2m_max": [8.6, 6.1],
            "temperature_2m_min": [-0.4, 1.2],
            "weathercode": [0, 71]
        }
    }"#;
    let response = ResponseBuilder::ok().body(body.to_vec()).build();
    let update = app.update(
        Event::WeatherFetched(Box::new(Ok(response))),
        &mut model,
    );
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));

    let WeatherState::Ready(days) = &model.my_page.weather else {
        panic!("forecast should be ready");
    };
    assert_eq!(days.len(), 2);

    let view = app.view(&model);
    let my_page = view.my_page.expect("my page populated");
    let trip_core::app::WeatherView::Ready(days) = my_page.weather else {
        panic!("view should carry the forecast");
    };
    assert_eq!(days[0].date, "2026-02-02");
    assert_eq!(days[0].max_temp, 9);
    assert_eq!(days[0].min_temp, 0);
}

#[test]
fn test_malformed_forecast_marks_weather_unavailable() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_my_page(&app, &mut model);

    let response = ResponseBuilder::ok().body(b"<html>".to_vec()).build();
    app.update(Event::WeatherFetched(Box::new(Ok(response))), &mut model);
    assert_eq!(model.my_page.weather, WeatherState::Unavailable);
}

#[test]
fn test_player_controls_drive_the_shell() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_my_page(&app, &mut model);
    app.update(Event::DurationLoaded { seconds: 245.0 }, &mut model);

    let update = app.update(Event::PlayPauseToggled, &mut model);
    assert!(model.my_page.player.playing);
    assert!(update.effects.iter().any(|e| matches!(
        e,
        Effect::Audio(req) if matches!(req.operation, AudioOperation::Play)
    )));

    // Seeks clamp to the track length.
    let update = app.update(Event::SeekRequested { seconds: 900.0 }, &mut model);
    let seek = update
        .effects
        .iter()
        .find_map(|e| match e {
            Effect::Audio(req) => Some(req.operation.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(seek, AudioOperation::Seek { seconds: 245.0 });

    let update = app.update(Event::SkipBackwardTapped, &mut model);
    let seek = update
        .effects
        .iter()
        .find_map(|e| match e {
            Effect::Audio(req) => Some(req.operation.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(seek, AudioOperation::Seek { seconds: 235.0 });

    app.update(Event::PositionUpdated { seconds: 240.0 }, &mut model);
    app.update(Event::PlaybackEnded, &mut model);
    assert!(!model.my_page.player.playing);
    assert!(model.my_page.player.position_secs.abs() < f64::EPSILON);

    let view = app.view(&model);
    let player = view.my_page.unwrap().player;
    assert_eq!(player.duration_label, "4:05");
    assert_eq!(player.position_label, "0:00");
}

#[test]
fn test_leaving_my_page_silences_the_player() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_my_page(&app, &mut model);
    app.update(Event::DurationLoaded { seconds: 245.0 }, &mut model);
    app.update(Event::PlayPauseToggled, &mut model);
    assert!(model.my_page.player.playing);

    let update = app.update(Event::TabSelected(Screen::Overview), &mut model);
    assert!(update.effects.iter().any(|e| matches!(
        e,
        Effect::Audio(req) if matches!(req.operation, AudioOperation::Pause)
    )));
    assert!(!model.my_page.player.playing);
    assert!(model.my_page.player.position_secs.abs() < f64::EPSILON);
}

#[test]
fn test_audio_download_saves_a_file() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_my_page(&app, &mut model);

    let update = app.update(Event::DownloadRequested, &mut model);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Http(_))));

    let bytes = vec![0x49, 0x44, 0x33, 0x04];
    let response = ResponseBuilder::ok().body(bytes.clone()).build();
    let update = app.update(Event::DownloadFetched(Box::new(Ok(response))), &mut model);

    let saved = update
        .effects
        .iter()
        .find_map(|e| match e {
            Effect::Audio(req) => Some(req.operation.clone()),
            _ => None,
        })
        .expect("downloaded bytes are handed to the shell");
    assert_eq!(
        saved,
        AudioOperation::SaveFile {
            filename: "다카마쓰 트립 2026.mp3".to_string(),
            data: bytes,
        }
    );
}
