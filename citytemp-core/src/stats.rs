use std::collections::BTreeMap;

use crate::error::Error;
use crate::model::TemperatureRecord;

/// Length of the top-hottest/top-coldest rankings.
pub const TOP_N: usize = 5;

/// Aggregate statistics over one run's records.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_max_temp_c: f64,
    pub mean_min_temp_c: f64,
    /// Coldest minimum to hottest maximum across all records.
    pub temperature_range: (f64, f64),
    pub hottest: TemperatureRecord,
    pub coldest: TemperatureRecord,
    /// Up to [`TOP_N`] records, hottest first; ties keep input order.
    pub top_hottest: Vec<TemperatureRecord>,
    /// Up to [`TOP_N`] records, coldest first; ties keep input order.
    pub top_coldest: Vec<TemperatureRecord>,
    /// Mean humidity per distinct condition string, highest mean first;
    /// equal means are ordered alphabetically by condition.
    pub avg_humidity_by_condition: Vec<(String, f64)>,
}

/// Compute summary statistics over a non-empty set of records.
///
/// A pure function of its input: calling it twice on the same records
/// yields identical summaries. Empty input is the caller's precondition
/// failure, reported as [`Error::NoData`].
pub fn summarize(records: &[TemperatureRecord]) -> Result<Summary, Error> {
    let first = records.first().ok_or(Error::NoData)?;

    let count = records.len();
    let mean_max_temp_c = records.iter().map(|r| r.max_temp_c).sum::<f64>() / count as f64;
    let mean_min_temp_c = records.iter().map(|r| r.min_temp_c).sum::<f64>() / count as f64;

    // Only a strictly better candidate replaces the current extreme, so the
    // first occurrence wins on ties.
    let mut hottest = first;
    let mut coldest = first;
    for r in &records[1..] {
        if r.max_temp_c > hottest.max_temp_c {
            hottest = r;
        }
        if r.min_temp_c < coldest.min_temp_c {
            coldest = r;
        }
    }

    let mut top_hottest = records.to_vec();
    top_hottest.sort_by(|a, b| b.max_temp_c.total_cmp(&a.max_temp_c));
    top_hottest.truncate(TOP_N);

    let mut top_coldest = records.to_vec();
    top_coldest.sort_by(|a, b| a.min_temp_c.total_cmp(&b.min_temp_c));
    top_coldest.truncate(TOP_N);

    // BTreeMap keeps groups alphabetical, so the stable sort below leaves
    // equal means in alphabetical order.
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for r in records {
        let entry = groups.entry(r.condition.as_str()).or_insert((0.0, 0));
        entry.0 += f64::from(r.humidity_pct);
        entry.1 += 1;
    }
    let mut avg_humidity_by_condition: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(condition, (sum, n))| (condition.to_string(), sum / n as f64))
        .collect();
    avg_humidity_by_condition.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(Summary {
        count,
        mean_max_temp_c,
        mean_min_temp_c,
        temperature_range: (coldest.min_temp_c, hottest.max_temp_c),
        hottest: hottest.clone(),
        coldest: coldest.clone(),
        top_hottest,
        top_coldest,
        avg_humidity_by_condition,
    })
}
