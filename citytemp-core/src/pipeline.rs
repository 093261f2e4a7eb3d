use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::model::ResultSet;
use crate::provider::{FetchFailure, TemperatureProvider};

/// Throttle between consecutive requests, to stay polite to the source API.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Outcome of one full pipeline run.
///
/// Successful records keep city-list order; failed cities are collected
/// instead of aborting the run, so a run with zero successes yields an
/// empty result set rather than an error.
#[derive(Debug)]
pub struct RunReport {
    pub records: ResultSet,
    pub failures: Vec<FetchFailure>,
}

/// Sequential fetch driver: one request per city, fixed delay in between.
#[derive(Debug)]
pub struct Pipeline {
    provider: Box<dyn TemperatureProvider>,
    delay: Duration,
}

impl Pipeline {
    pub fn new(provider: Box<dyn TemperatureProvider>) -> Self {
        Self { provider, delay: DEFAULT_REQUEST_DELAY }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fetch every city in order, one request at a time.
    ///
    /// The returned future is long-running, roughly cities × (request
    /// latency + delay). Callers that service an interactive surface should
    /// spawn or await it off their event path.
    pub async fn run(&self, cities: &[String]) -> RunReport {
        let mut records = ResultSet::new();
        let mut failures = Vec::new();

        for (i, city) in cities.iter().enumerate() {
            info!(city = city.as_str(), "fetching");

            match self.provider.fetch(city).await {
                Ok(record) => {
                    info!(
                        city = city.as_str(),
                        min = record.min_temp_c,
                        max = record.max_temp_c,
                        "fetched"
                    );
                    records.push(record);
                }
                Err(failure) => {
                    warn!(city = city.as_str(), reason = failure.reason(), "fetch failed");
                    failures.push(failure);
                }
            }

            if i + 1 < cities.len() {
                sleep(self.delay).await;
            }
        }

        RunReport { records, failures }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemperatureRecord;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn record(city: &str) -> TemperatureRecord {
        TemperatureRecord {
            city: city.to_string(),
            min_temp_c: 20.0,
            max_temp_c: 30.0,
            condition: "Clear".to_string(),
            humidity_pct: 50,
            wind_speed_kmh: 10.0,
            fetched_at: NaiveDate::from_ymd_opt(2024, 5, 14)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    fn failure(city: &str) -> FetchFailure {
        FetchFailure::Network {
            city: city.to_string(),
            detail: "connection refused".to_string(),
        }
    }

    /// Returns canned outcomes per city; unknown cities count as network
    /// failures.
    #[derive(Debug)]
    struct ScriptedProvider {
        outcomes: HashMap<String, Result<TemperatureRecord, FetchFailure>>,
    }

    impl ScriptedProvider {
        fn new(
            outcomes: impl IntoIterator<Item = (&'static str, Result<TemperatureRecord, FetchFailure>)>,
        ) -> Self {
            let outcomes = outcomes
                .into_iter()
                .map(|(city, outcome)| (city.to_string(), outcome))
                .collect();
            Self { outcomes }
        }
    }

    #[async_trait]
    impl TemperatureProvider for ScriptedProvider {
        async fn fetch(&self, city: &str) -> Result<TemperatureRecord, FetchFailure> {
            self.outcomes
                .get(city)
                .cloned()
                .unwrap_or_else(|| Err(failure(city)))
        }
    }

    fn cities(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[tokio::test]
    async fn failures_are_skipped_and_success_order_is_preserved() {
        let provider = ScriptedProvider::new([
            ("New Delhi", Ok(record("New Delhi"))),
            ("Kolkata", Err(failure("Kolkata"))),
            ("Mumbai", Ok(record("Mumbai"))),
            ("Chennai", Err(failure("Chennai"))),
            ("Bangalore", Ok(record("Bangalore"))),
        ]);
        let pipeline = Pipeline::new(Box::new(provider)).with_delay(Duration::ZERO);

        let report = pipeline
            .run(&cities(&["New Delhi", "Kolkata", "Mumbai", "Chennai", "Bangalore"]))
            .await;

        let fetched: Vec<&str> = report.records.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(fetched, ["New Delhi", "Mumbai", "Bangalore"]);

        let failed: Vec<&str> = report.failures.iter().map(|f| f.city()).collect();
        assert_eq!(failed, ["Kolkata", "Chennai"]);
    }

    #[tokio::test]
    async fn all_failures_yield_empty_result_set() {
        let provider = ScriptedProvider::new([]);
        let pipeline = Pipeline::new(Box::new(provider)).with_delay(Duration::ZERO);

        let report = pipeline.run(&cities(&["Pune", "Gurgaon"])).await;

        assert!(report.records.is_empty());
        assert_eq!(report.failures.len(), 2);
    }

    #[tokio::test]
    async fn empty_city_list_is_a_no_op() {
        let provider = ScriptedProvider::new([]);
        let pipeline = Pipeline::new(Box::new(provider)).with_delay(Duration::ZERO);

        let report = pipeline.run(&[]).await;

        assert!(report.records.is_empty());
        assert!(report.failures.is_empty());
    }
}
