use thiserror::Error;

/// Failures surfaced by the aggregation and export stages.
///
/// Per-city fetch problems are not represented here; those are
/// [`crate::provider::FetchFailure`] values, recovered locally by the
/// pipeline without aborting a run.
#[derive(Debug, Error)]
pub enum Error {
    /// Summarize or export was called before any city was fetched
    /// successfully.
    #[error("no data available; fetch at least one city first")]
    NoData,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
