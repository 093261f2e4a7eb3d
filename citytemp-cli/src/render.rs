//! Text rendering of run results: the all-cities table and the summary
//! statistics block.

use citytemp_core::{ResultSet, Summary, TemperatureRecord};

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";

/// All-cities table, hottest first.
pub fn table(records: &ResultSet) -> String {
    let mut rows: Vec<&TemperatureRecord> = records.iter().collect();
    rows.sort_by(|a, b| b.max_temp_c.total_cmp(&a.max_temp_c));

    let mut out = String::new();
    out.push_str(&format!("\n{RULE}\nALL CITIES DATA\n{RULE}\n"));
    out.push_str(&format!(
        "{:<15} {:>9} {:>9}  {:<22} {:>8} {:>12}\n",
        "City", "Min (°C)", "Max (°C)", "Condition", "Hum (%)", "Wind (km/h)"
    ));
    for r in rows {
        out.push_str(&format!(
            "{:<15} {:>9.1} {:>9.1}  {:<22} {:>8} {:>12.1}\n",
            r.city, r.min_temp_c, r.max_temp_c, r.condition, r.humidity_pct, r.wind_speed_kmh
        ));
    }
    out
}

/// Summary statistics block: totals, extremes, rankings, and humidity by
/// condition.
pub fn summary(summary: &Summary) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{RULE}\nTEMPERATURE SUMMARY\n{RULE}\n\n"));
    out.push_str(&format!("Total cities: {}\n", summary.count));
    out.push_str(&format!("Average Max Temperature: {:.1}°C\n", summary.mean_max_temp_c));
    out.push_str(&format!("Average Min Temperature: {:.1}°C\n", summary.mean_min_temp_c));

    out.push_str(&format!(
        "\nHottest City: {} ({}°C)\n",
        summary.hottest.city, summary.hottest.max_temp_c
    ));
    out.push_str(&format!(
        "Coldest City: {} ({}°C)\n",
        summary.coldest.city, summary.coldest.min_temp_c
    ));
    out.push_str(&format!(
        "Temperature Range: {}°C to {}°C\n",
        summary.temperature_range.0, summary.temperature_range.1
    ));

    out.push_str(&format!("\n{THIN_RULE}\nTop 5 Hottest Cities:\n{THIN_RULE}\n"));
    for (i, r) in summary.top_hottest.iter().enumerate() {
        out.push_str(&format!(
            "{}. {:<20} Max: {:>6.1}°C | Min: {:>6.1}°C\n",
            i + 1,
            r.city,
            r.max_temp_c,
            r.min_temp_c
        ));
    }

    out.push_str(&format!("\n{THIN_RULE}\nTop 5 Coldest Cities:\n{THIN_RULE}\n"));
    for (i, r) in summary.top_coldest.iter().enumerate() {
        out.push_str(&format!(
            "{}. {:<20} Min: {:>6.1}°C | Max: {:>6.1}°C\n",
            i + 1,
            r.city,
            r.min_temp_c,
            r.max_temp_c
        ));
    }

    out.push_str(&format!("\n{THIN_RULE}\nAverage Humidity by Condition:\n{THIN_RULE}\n"));
    for (condition, humidity) in &summary.avg_humidity_by_condition {
        out.push_str(&format!("{condition:<30} {humidity:>6.1}%\n"));
    }

    out.push_str(&format!("\n{RULE}\n"));
    out
}
