//! Open-Meteo daily forecast handling: response decoding and the
//! weathercode-to-condition mapping used for the seven day strip.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub daily: DailySeries,
}

/// Parallel arrays, one entry per forecast day.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weathercode: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDay {
    pub date: String,
    pub max_temp: f64,
    pub min_temp: f64,
    pub code: i32,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WeatherError {
    #[error("forecast body is not valid JSON: {message}")]
    Malformed { message: String },

    #[error("forecast series lengths disagree")]
    SeriesLengthMismatch,

    #[error("forecast contains no days")]
    Empty,
}

/// Display condition for a WMO weathercode. Unknown codes out the top of
/// the table fall back to cloudy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Storm,
}

impl Condition {
    #[must_use]
    pub fn for_code(code: i32) -> Self {
        if code == 0 {
            Condition::Clear
        } else if code <= 3 {
            Condition::Cloudy
        } else if code <= 67 {
            Condition::Rain
        } else if code <= 77 {
            Condition::Snow
        } else if code <= 99 {
            Condition::Storm
        } else {
            Condition::Cloudy
        }
    }
}

/// Decode a raw forecast body into per-day entries.
pub fn parse_forecast(body: &[u8]) -> Result<Vec<WeatherDay>, WeatherError> {
    let response: ForecastResponse =
        serde_json::from_slice(body).map_err(|e| WeatherError::Malformed {
            message: e.to_string(),
        })?;
    let daily = response.daily;

    let len = daily.time.len();
    if len == 0 {
        return Err(WeatherError::Empty);
    }
    if daily.temperature_2m_max.len() != len
        || daily.temperature_2m_min.len() != len
        || daily.weathercode.len() != len
    {
        return Err(WeatherError::SeriesLengthMismatch);
    }

    Ok(daily
        .time
        .into_iter()
        .enumerate()
        .map(|(i, date)| WeatherDay {
            date,
            max_temp: daily.temperature_2m_max[i],
            min_temp: daily.temperature_2m_min[i],
            code: daily.weathercode[i],
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_bands() {
        assert_eq!(Condition::for_code(0), Condition::Clear);
        assert_eq!(Condition::for_code(1), Condition::Cloudy);
        assert_eq!(Condition::for_code(2), Condition::Cloudy);
        assert_eq!(Condition::for_code(3), Condition::Cloudy);
        assert_eq!(Condition::for_code(4), Condition::Rain);
        assert_eq!(Condition::for_code(61), Condition::Rain);
        assert_eq!(Condition::for_code(67), Condition::Rain);
        assert_eq!(Condition::for_code(68), Condition::Snow);
        assert_eq!(Condition::for_code(77), Condition::Snow);
        assert_eq!(Condition::for_code(78), Condition::Storm);
        assert_eq!(Condition::for_code(99), Condition::Storm);
        // Out-of-table codes fall back to cloudy.
        assert_eq!(Condition::for_code(100), Condition::Cloudy);
    }

    fn sample_body() -> Vec<u8> {
        serde_json::json!({
            "daily": {
                "time": ["2026-02-02", "2026-02-03"],
                "temperature_2m_max": [9.4, 11.2],
                "temperature_2m_min": [1.3, 2.8],
                "weathercode": [0, 61]
            }
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn test_parse_forecast() {
        let days = parse_forecast(&sample_body()).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2026-02-02");
        assert_eq!(days[0].code, 0);
        assert!((days[1].max_temp - 11.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_forecast_malformed() {
        assert!(matches!(
            parse_forecast(b"<html>not json</html>"),
            Err(WeatherError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_forecast_length_mismatch() {
        let body = serde_json::json!({
            "daily": {
                "time": ["2026-02-02", "2026-02-03"],
                "temperature_2m_max": [9.4],
                "temperature_2m_min": [1.3, 2.8],
                "weathercode": [0, 61]
            }
        })
        .to_string();
        assert_eq!(
            parse_forecast(body.as_bytes()),
            Err(WeatherError::SeriesLengthMismatch)
        );
    }

    #[test]
    fn test_parse_forecast_empty() {
        let body = serde_json::json!({
            "daily": {
                "time": [],
                "temperature_2m_max": [],
                "temperature_2m_min": [],
                "weathercode": []
            }
        })
        .to_string();
        assert_eq!(parse_forecast(body.as_bytes()), Err(WeatherError::Empty));
    }
}
