use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::error::Error;
use crate::model::{ResultSet, TemperatureRecord};

/// Stem shared by both export formats; the timestamp keeps every run's
/// files distinct.
const FILE_STEM: &str = "temperature_data";

pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Writes run results as timestamped CSV/JSON files under one directory.
///
/// The directory is created on first export. Both formats serialize fully
/// in memory before touching the filesystem, so a failed write never leaves
/// a truncated file that still parses as valid output.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write a CSV export, rows sorted hottest-first.
    pub fn export_csv(&self, records: &ResultSet) -> Result<PathBuf, Error> {
        if records.is_empty() {
            return Err(Error::NoData);
        }

        let mut rows: Vec<&TemperatureRecord> = records.iter().collect();
        rows.sort_by(|a, b| b.max_temp_c.total_cmp(&a.max_temp_c));

        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in rows {
            writer.serialize(row)?;
        }
        let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;

        let path = self.fresh_path("csv")?;
        fs::write(&path, bytes)?;
        debug!(path = %path.display(), rows = records.len(), "wrote CSV export");

        Ok(path)
    }

    /// Write a JSON export: an array of objects in run order,
    /// pretty-printed; non-ASCII text stays literal.
    pub fn export_json(&self, records: &ResultSet) -> Result<PathBuf, Error> {
        if records.is_empty() {
            return Err(Error::NoData);
        }

        let body = serde_json::to_string_pretty(records)?;

        let path = self.fresh_path("json")?;
        fs::write(&path, body)?;
        debug!(path = %path.display(), rows = records.len(), "wrote JSON export");

        Ok(path)
    }

    fn fresh_path(&self, extension: &str) -> Result<PathBuf, Error> {
        fs::create_dir_all(&self.output_dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        Ok(self.output_dir.join(format!("{FILE_STEM}_{timestamp}.{extension}")))
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}
