use std::{fs::File, io::Read, path::Path};

use chrono::{DateTime, Local};
use serde::Deserialize;

use crate::{core::series::WindSamples, prelude::*, quantity::speed::MetersPerSecond};

#[derive(Deserialize)]
struct Record {
    timestamp: DateTime<Local>,

    #[serde(alias = "wind_speed_ms")]
    wind_speed: MetersPerSecond,
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_wind_samples(path: &Path) -> Result<WindSamples> {
    let file =
        File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    let samples = parse_wind_samples(file)?;
    info!(n_samples = samples.len(), "loaded");
    Ok(samples)
}

/// Parse the `timestamp,wind_speed` CSV, requiring the rows to be chronological.
///
/// Wind speeds are not validated here: the estimator rejects them.
pub fn parse_wind_samples(reader: impl Read) -> Result<WindSamples> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut samples = WindSamples::new();
    for (index, record) in reader.deserialize::<Record>().enumerate() {
        let row = index + 1;
        let record = record.with_context(|| format!("failed to parse row #{row}"))?;
        if let Some((previous_timestamp, _)) = samples.last()
            && record.timestamp < *previous_timestamp
        {
            bail!(
                "row #{row} ({}) precedes the previous sample ({previous_timestamp})",
                record.timestamp,
            );
        }
        samples.push((record.timestamp, record.wind_speed));
    }
    Ok(samples)
}
