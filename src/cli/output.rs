use std::io::{Write, stdout};

use serde::Serialize;

use crate::prelude::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Table,

    /// Single pretty-printed JSON document.
    Json,

    /// Rows with a header, one per point.
    Csv,
}

pub fn print_json(value: &impl Serialize) -> Result {
    let mut stdout = stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("failed to write the JSON")?;
    writeln!(stdout)?;
    Ok(())
}

pub fn print_csv<R: Serialize>(rows: impl IntoIterator<Item = R>) -> Result {
    let mut writer = csv::Writer::from_writer(stdout().lock());
    for row in rows {
        writer.serialize(row).context("failed to write the CSV row")?;
    }
    writer.flush()?;
    Ok(())
}
