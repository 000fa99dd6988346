use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use vizcore_data::extract::{self, FeatureCollection, Row};

/// Destination of a JSON report: a file, or stdout when no path is given.
pub struct ReportWriter {
    writer: Box<dyn io::Write>,
    destination: String,
}

impl ReportWriter {
    pub fn create(output_path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = output_path else {
            return Ok(Self {
                writer: Box::new(io::stdout().lock()),
                destination: "stdout".to_owned(),
            });
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
            destination: path.display().to_string(),
        })
    }

    pub fn write_report<T>(mut self, report: &T) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer_pretty(&mut self.writer, report)
            .with_context(|| format!("Failed to write report to {}", self.destination))?;
        writeln!(self.writer)
            .and_then(|()| self.writer.flush())
            .with_context(|| format!("Failed to flush report to {}", self.destination))?;
        tracing::info!("Wrote report to {}", self.destination);
        Ok(())
    }
}

/// Write `report` as pretty JSON to `output_path`, or to stdout
pub fn save_report<T>(report: &T, output_path: Option<&Path>) -> anyhow::Result<()>
where
    T: Serialize,
{
    ReportWriter::create(output_path)?.write_report(report)
}

pub fn read_json_file<T>(kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let reader = File::open(path)
        .map(BufReader::new)
        .with_context(|| format!("Failed to open {kind} file: {}", path.display()))?;
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {kind} JSON file: {}", path.display()))
}

/// Read an array of row objects from a JSON file
pub fn read_rows_file(path: &Path) -> anyhow::Result<Vec<Row>> {
    read_json_file("rows", path)
}

/// Read a GeoJSON-like feature collection from a JSON file
pub fn read_features_file(path: &Path) -> anyhow::Result<FeatureCollection> {
    read_json_file("feature collection", path)
}

/// Read a numeric sample from a JSON file
///
/// Without `field` the file must hold an array of numbers (numeric strings
/// are accepted). With `field` it must hold an array of row objects and the
/// named column is extracted. Either way, unusable entries are dropped.
pub fn read_sample_file(path: &Path, field: Option<&str>) -> anyhow::Result<Vec<f64>> {
    let (total, values) = match field {
        Some(field) => {
            let rows = read_rows_file(path)?;
            (rows.len(), extract::extract_column(&rows, field))
        }
        None => {
            let values: Vec<Value> = read_json_file("sample", path)?;
            let sample = values.iter().filter_map(extract::parse_number).collect();
            (values.len(), sample)
        }
    };
    log_dropped("sample", total, values.len());
    Ok(values)
}

pub fn log_dropped(kind: &str, total: usize, kept: usize) {
    if kept < total {
        tracing::warn!(
            "Dropped {} of {} {} entries without a usable numeric value",
            total - kept,
            total,
            kind
        );
    } else {
        tracing::debug!("All {total} {kind} entries are usable");
    }
}
