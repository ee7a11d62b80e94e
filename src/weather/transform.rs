//! OpenWeatherMap payloads → `WeatherData`.

use chrono::{DateTime, NaiveDate, SecondsFormat};

use super::types::{
    Condition, CurrentWeatherPayload, ForecastPayload, WeatherCurrent, WeatherData, WeatherHourly,
    WeatherToday,
};

/// Number of forecast steps exposed as `hourly` (3-hour steps → 24 h).
pub const HOURLY_STEPS: usize = 8;

/// Combine the two payloads. `None` when the current payload has no readings
/// or no condition entry.
pub fn build(
    current: &CurrentWeatherPayload,
    forecast: &ForecastPayload,
    today: NaiveDate,
) -> Option<WeatherData> {
    let readings = current.main?;
    let condition = current.weather.first()?;

    Some(WeatherData {
        current: WeatherCurrent {
            temp: readings.temp,
            description: condition.description.clone(),
            icon: condition.icon.clone(),
        },
        today: today_min_max(forecast, readings.temp_min, readings.temp_max, today),
        hourly: forecast
            .list
            .iter()
            .take(HOURLY_STEPS)
            .map(|item| WeatherHourly {
                time: iso_time(item.dt),
                temp: item.main.temp,
                icon: first_icon(&item.weather),
            })
            .collect(),
    })
}

/// Widen the current min/max with every forecast step dated `today` (UTC).
pub fn today_min_max(
    forecast: &ForecastPayload,
    current_min: f64,
    current_max: f64,
    today: NaiveDate,
) -> WeatherToday {
    let today = today.format("%Y-%m-%d").to_string();

    forecast
        .list
        .iter()
        .filter(|item| item.dt_txt.split(' ').next() == Some(today.as_str()))
        .fold(
            WeatherToday { min: current_min, max: current_max },
            |acc, item| WeatherToday {
                min: acc.min.min(item.main.temp_min),
                max: acc.max.max(item.main.temp_max),
            },
        )
}

fn iso_time(unix_secs: i64) -> String {
    DateTime::from_timestamp(unix_secs, 0)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

fn first_icon(conditions: &[Condition]) -> String {
    conditions.first().map(|c| c.icon.clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::types::{ForecastItem, Readings};
    use approx::assert_relative_eq;

    fn readings(temp: f64, min: f64, max: f64) -> Readings {
        Readings { temp, temp_min: min, temp_max: max }
    }

    fn item(dt: i64, dt_txt: &str, r: Readings, icon: Option<&str>) -> ForecastItem {
        ForecastItem {
            dt,
            main: r,
            weather: icon
                .map(|i| vec![Condition { description: String::new(), icon: i.into() }])
                .unwrap_or_default(),
            dt_txt: dt_txt.into(),
        }
    }

    fn current(temp: f64, min: f64, max: f64) -> CurrentWeatherPayload {
        CurrentWeatherPayload {
            main: Some(readings(temp, min, max)),
            weather: vec![Condition { description: "맑음".into(), icon: "01d".into() }],
        }
    }

    fn jan15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_today_min_max_only_counts_today() {
        let forecast = ForecastPayload {
            list: vec![
                item(1705320000, "2024-01-15 12:00:00", readings(5.0, -2.0, 6.0), None),
                item(1705330800, "2024-01-15 15:00:00", readings(7.0, 3.0, 17.5), None),
                item(1705406400, "2024-01-16 12:00:00", readings(0.0, -9.0, 30.0), None),
            ],
        };
        let t = today_min_max(&forecast, 10.0, 15.0, jan15());
        assert_relative_eq!(t.min, -2.0);
        assert_relative_eq!(t.max, 17.5);
    }

    #[test]
    fn test_today_min_max_no_forecast_keeps_current() {
        let t = today_min_max(&ForecastPayload::default(), 10.0, 15.0, jan15());
        assert_relative_eq!(t.min, 10.0);
        assert_relative_eq!(t.max, 15.0);
    }

    #[test]
    fn test_build_full() {
        let forecast = ForecastPayload {
            list: (0..10)
                .map(|i| {
                    item(
                        1705320000 + i * 10800,
                        "2024-01-16 00:00:00",
                        readings(10.0 + i as f64, 0.0, 0.0),
                        Some("02n"),
                    )
                })
                .collect(),
        };
        let data = build(&current(12.5, 10.0, 15.0), &forecast, jan15()).unwrap();

        assert_relative_eq!(data.current.temp, 12.5);
        assert_eq!(data.current.description, "맑음");
        assert_eq!(data.current.icon, "01d");
        assert_relative_eq!(data.today.min, 10.0);
        assert_relative_eq!(data.today.max, 15.0);
        assert_eq!(data.hourly.len(), HOURLY_STEPS);
        assert_eq!(data.hourly[0].time, "2024-01-15T12:00:00.000Z");
        assert_eq!(data.hourly[1].time, "2024-01-15T15:00:00.000Z");
        assert_relative_eq!(data.hourly[7].temp, 17.0);
        assert_eq!(data.hourly[0].icon, "02n");
    }

    #[test]
    fn test_build_missing_icon_is_empty() {
        let forecast = ForecastPayload {
            list: vec![item(1705320000, "2024-01-15 12:00:00", readings(1.0, 1.0, 1.0), None)],
        };
        let data = build(&current(1.0, 1.0, 1.0), &forecast, jan15()).unwrap();
        assert_eq!(data.hourly[0].icon, "");
    }

    #[test]
    fn test_build_without_main_is_none() {
        let payload = CurrentWeatherPayload { main: None, weather: vec![Condition::default()] };
        assert!(build(&payload, &ForecastPayload::default(), jan15()).is_none());
    }

    #[test]
    fn test_build_without_conditions_is_none() {
        let payload = CurrentWeatherPayload { main: Some(readings(1.0, 1.0, 1.0)), weather: vec![] };
        assert!(build(&payload, &ForecastPayload::default(), jan15()).is_none());
    }
}
