//! Core library for the `citytemp` dashboard.
//!
//! This crate defines:
//! - The normalized temperature record and per-run result set
//! - The wttr.in fetcher behind a provider trait
//! - The sequential fetch pipeline with its request throttle
//! - Summary statistics and timestamped CSV/JSON export
//!
//! It is used by `citytemp-cli`, but can also be reused by other binaries or
//! front-ends driving the same pipeline.

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod stats;

pub use config::Config;
pub use error::Error;
pub use export::Exporter;
pub use model::{ResultSet, TemperatureRecord};
pub use pipeline::{Pipeline, RunReport};
pub use provider::{FetchFailure, TemperatureProvider, wttr::WttrProvider};
pub use stats::{Summary, summarize};
