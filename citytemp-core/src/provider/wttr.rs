use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;

use crate::model::TemperatureRecord;

use super::{FetchFailure, TemperatureProvider};

const BASE_URL: &str = "https://wttr.in";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Provider backed by the keyless wttr.in JSON API (`?format=j1`).
///
/// wttr.in reports every value as a JSON string, including the numeric
/// fields, so extraction parses each one and treats an unparsable value the
/// same as a missing key.
#[derive(Debug, Clone)]
pub struct WttrProvider {
    http: Client,
}

impl WttrProvider {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for wttr.in")?;

        Ok(Self { http })
    }
}

#[async_trait]
impl TemperatureProvider for WttrProvider {
    async fn fetch(&self, city: &str) -> Result<TemperatureRecord, FetchFailure> {
        let url = format!("{BASE_URL}/{city}");

        let res = self
            .http
            .get(&url)
            .query(&[("format", "j1")])
            .send()
            .await
            .map_err(|e| network(city, e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| network(city, e.to_string()))?;

        if !status.is_success() {
            return Err(network(city, format!("status {status}")));
        }

        record_from_body(city, &body, Local::now().naive_local())
    }
}

/// Extract a record from a `format=j1` response body.
///
/// Current condition, humidity and wind come from `current_condition[0]`;
/// the day's min/max temperatures come from `weather[0]`.
fn record_from_body(
    city: &str,
    body: &str,
    fetched_at: NaiveDateTime,
) -> Result<TemperatureRecord, FetchFailure> {
    let report: WttrReport = serde_json::from_str(body).map_err(|e| parse(city, e.to_string()))?;

    let current = report
        .current_condition
        .first()
        .ok_or_else(|| parse(city, "empty current_condition array"))?;

    let today = report
        .weather
        .first()
        .ok_or_else(|| parse(city, "empty weather array"))?;

    let condition = current
        .weather_desc
        .first()
        .map(|d| d.value.clone())
        .ok_or_else(|| parse(city, "empty weatherDesc array"))?;

    Ok(TemperatureRecord {
        city: city.to_string(),
        min_temp_c: float_field(city, "mintempC", &today.mintemp_c)?,
        max_temp_c: float_field(city, "maxtempC", &today.maxtemp_c)?,
        condition,
        humidity_pct: int_field(city, "humidity", &current.humidity)?,
        wind_speed_kmh: float_field(city, "windspeedKmph", &current.windspeed_kmph)?,
        fetched_at,
    })
}

fn float_field(city: &str, field: &str, raw: &str) -> Result<f64, FetchFailure> {
    raw.trim()
        .parse()
        .map_err(|_| parse(city, format!("non-numeric {field}: {raw:?}")))
}

fn int_field(city: &str, field: &str, raw: &str) -> Result<u8, FetchFailure> {
    raw.trim()
        .parse()
        .map_err(|_| parse(city, format!("non-integer {field}: {raw:?}")))
}

fn network(city: &str, detail: impl Into<String>) -> FetchFailure {
    FetchFailure::Network { city: city.to_string(), detail: detail.into() }
}

fn parse(city: &str, detail: impl Into<String>) -> FetchFailure {
    FetchFailure::Parse { city: city.to_string(), detail: detail.into() }
}

#[derive(Debug, Deserialize)]
struct WttrReport {
    current_condition: Vec<WttrCurrent>,
    weather: Vec<WttrDay>,
}

#[derive(Debug, Deserialize)]
struct WttrCurrent {
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<WttrText>,
    humidity: String,
    #[serde(rename = "windspeedKmph")]
    windspeed_kmph: String,
}

#[derive(Debug, Deserialize)]
struct WttrText {
    value: String,
}

#[derive(Debug, Deserialize)]
struct WttrDay {
    #[serde(rename = "mintempC")]
    mintemp_c: String,
    #[serde(rename = "maxtempC")]
    maxtemp_c: String,
}
