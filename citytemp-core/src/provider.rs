use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::TemperatureRecord;

pub mod wttr;

/// Why a single city's fetch produced no record.
///
/// These are recoverable per-city conditions: the pipeline logs them and
/// moves on to the next city, never aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// Timeout, DNS/connect error, failed body read, or non-2xx status.
    #[error("network failure for {city}: {detail}")]
    Network { city: String, detail: String },

    /// The response body was not the JSON shape we expect.
    #[error("could not parse response for {city}: {detail}")]
    Parse { city: String, detail: String },
}

impl FetchFailure {
    pub fn city(&self) -> &str {
        match self {
            FetchFailure::Network { city, .. } | FetchFailure::Parse { city, .. } => city,
        }
    }

    /// Short tag for log fields and failure counters.
    pub fn reason(&self) -> &'static str {
        match self {
            FetchFailure::Network { .. } => "network",
            FetchFailure::Parse { .. } => "parse",
        }
    }
}

/// A source of current temperature readings, one city at a time.
#[async_trait]
pub trait TemperatureProvider: Send + Sync + Debug {
    async fn fetch(&self, city: &str) -> Result<TemperatureRecord, FetchFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_exposes_city_and_reason() {
        let network = FetchFailure::Network {
            city: "Pune".to_string(),
            detail: "connection refused".to_string(),
        };
        let parse = FetchFailure::Parse {
            city: "Shimla".to_string(),
            detail: "empty weather array".to_string(),
        };

        assert_eq!(network.city(), "Pune");
        assert_eq!(network.reason(), "network");
        assert_eq!(parse.city(), "Shimla");
        assert_eq!(parse.reason(), "parse");
    }

    #[test]
    fn failure_message_names_the_city() {
        let failure = FetchFailure::Network {
            city: "Jaipur".to_string(),
            detail: "timed out".to_string(),
        };

        assert!(failure.to_string().contains("Jaipur"));
        assert!(failure.to_string().contains("timed out"));
    }
}
