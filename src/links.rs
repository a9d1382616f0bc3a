//! External URL construction: the weather endpoint and the deep links the
//! shell is asked to open in the system browser.

use url::Url;

use crate::{
    WEATHER_ENDPOINT, WEATHER_FORECAST_DAYS, WEATHER_LATITUDE, WEATHER_LONGITUDE,
    WEATHER_TIMEZONE,
};

/// Open-Meteo daily forecast request for Takamatsu.
#[must_use]
pub fn weather_forecast_url() -> String {
    // Static parts make this infallible; parse_with_params only sees
    // literals plus formatted numbers.
    Url::parse_with_params(
        WEATHER_ENDPOINT,
        &[
            ("latitude", WEATHER_LATITUDE.to_string()),
            ("longitude", WEATHER_LONGITUDE.to_string()),
            (
                "daily",
                "temperature_2m_max,temperature_2m_min,weathercode".to_string(),
            ),
            ("timezone", WEATHER_TIMEZONE.to_string()),
            ("forecast_days", WEATHER_FORECAST_DAYS.to_string()),
        ],
    )
    .map(String::from)
    .unwrap_or_else(|_| WEATHER_ENDPOINT.to_string())
}

/// Google Maps search for a place location.
#[must_use]
pub fn map_search_url(location: &str) -> String {
    build(
        "https://www.google.com/maps/search/",
        &[("api", "1"), ("query", location)],
    )
}

/// Plain Google search for a place name.
#[must_use]
pub fn web_search_url(query: &str) -> String {
    build("https://www.google.com/search", &[("q", query)])
}

/// Google Translate prefilled Japanese → Korean.
#[must_use]
pub fn translate_url(japanese_text: &str) -> String {
    build(
        "https://translate.google.com/",
        &[
            ("sl", "ja"),
            ("tl", "ko"),
            ("text", japanese_text),
            ("op", "translate"),
        ],
    )
}

/// Naver search for the live yen exchange rate.
#[must_use]
pub fn currency_rate_url() -> String {
    build(
        "https://search.naver.com/search.naver",
        &[("query", "엔화 환율")],
    )
}

fn build(base: &str, params: &[(&str, &str)]) -> String {
    Url::parse_with_params(base, params)
        .map(String::from)
        .unwrap_or_else(|_| base.to_string())
}
