//! OpenWeatherMap current-weather client

use serde::Deserialize;

use crate::config::Config;
use crate::state::WeatherResult;

/// Units requested from the service; temperatures come back in °C.
pub const UNITS: &str = "metric";

/// Why a lookup failed. The widget shows all of these the same way.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("no weather found for '{0}'")]
    NotFound(String),
    #[error("weather service returned HTTP {0}")]
    Status(u16),
    #[error("weather request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected weather response: {0}")]
    Parse(String),
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: String,
    main: MainReadings,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

/// Decode a 2xx body. Only the first condition is kept.
pub fn parse_weather(body: &[u8]) -> Result<WeatherResult, LookupError> {
    let data: WeatherResponse =
        serde_json::from_slice(body).map_err(|e| LookupError::Parse(e.to_string()))?;
    let condition = data
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Parse("empty weather list".into()))?;

    Ok(WeatherResult {
        location_name: data.name,
        temperature_celsius: data.main.temp,
        condition_description: condition.description,
    })
}

// ============================================================================
// Client
// ============================================================================

/// Holds the resolved credential and a shared HTTP client.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(LookupError::Transport)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn weather_url(&self, city: &str) -> String {
        format!(
            "{}/data/2.5/weather?q={}&units={}&appid={}",
            self.base_url,
            urlencoding::encode(city),
            UNITS,
            urlencoding::encode(&self.api_key)
        )
    }

    /// One GET, no retry. Any non-2xx status fails regardless of body.
    pub async fn current_weather(&self, city: &str) -> Result<WeatherResult, LookupError> {
        tracing::debug!(city, base_url = %self.base_url, "requesting current weather");

        let response = self
            .http
            .get(self.weather_url(city))
            .send()
            .await
            .map_err(LookupError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::info!(city, status = status.as_u16(), "weather lookup rejected");
            return Err(if status == reqwest::StatusCode::NOT_FOUND {
                LookupError::NotFound(city.to_string())
            } else {
                LookupError::Status(status.as_u16())
            });
        }

        let body = response.bytes().await.map_err(LookupError::Transport)?;
        let result = parse_weather(&body)?;
        tracing::debug!(
            city,
            location = %result.location_name,
            temperature = result.temperature_celsius,
            "weather lookup succeeded"
        );
        Ok(result)
    }
}
