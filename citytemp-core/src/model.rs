use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One normalized temperature reading for a single city.
///
/// The serde field names are the human-facing column headers of the export
/// files, so a single derive drives both the CSV and the JSON output.
/// Records are immutable once built; reruns produce independent records and
/// nothing is merged or deduplicated across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "Min Temp (°C)")]
    pub min_temp_c: f64,

    /// Expected to be >= `min_temp_c`, but the source value is passed
    /// through unchecked.
    #[serde(rename = "Max Temp (°C)")]
    pub max_temp_c: f64,

    /// Free-text condition string as reported by the source API.
    #[serde(rename = "Current Condition")]
    pub condition: String,

    #[serde(rename = "Humidity (%)")]
    pub humidity_pct: u8,

    #[serde(rename = "Wind Speed (km/h)")]
    pub wind_speed_kmh: f64,

    /// Local time the reading was fetched.
    #[serde(rename = "Fetched At", with = "fetched_at_format")]
    pub fetched_at: NaiveDateTime,
}

/// Ordered collection of records from one pipeline run, in city-list order.
pub type ResultSet = Vec<TemperatureRecord>;

mod fetched_at_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> TemperatureRecord {
        TemperatureRecord {
            city: "Mumbai".to_string(),
            min_temp_c: 26.0,
            max_temp_c: 34.0,
            condition: "Sunny".to_string(),
            humidity_pct: 60,
            wind_speed_kmh: 12.0,
            fetched_at: NaiveDate::from_ymd_opt(2024, 5, 14)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn json_uses_export_column_names() {
        let json = serde_json::to_value(record()).unwrap();

        assert_eq!(json["City"], "Mumbai");
        assert_eq!(json["Min Temp (°C)"], 26.0);
        assert_eq!(json["Max Temp (°C)"], 34.0);
        assert_eq!(json["Current Condition"], "Sunny");
        assert_eq!(json["Humidity (%)"], 60);
        assert_eq!(json["Wind Speed (km/h)"], 12.0);
        assert_eq!(json["Fetched At"], "2024-05-14 09:30:00");
    }

    #[test]
    fn record_survives_json_round_trip() {
        let original = record();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: TemperatureRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        let json = serde_json::to_string(&record())
            .unwrap()
            .replace("2024-05-14 09:30:00", "yesterday-ish");

        assert!(serde_json::from_str::<TemperatureRecord>(&json).is_err());
    }
}
