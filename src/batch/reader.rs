// CSV batch input: one measurement per row, shared thresholds.

use std::io::Read;

use serde::Deserialize;

/// One row of a measurements CSV. `name` is optional; `value` and
/// `reference` are required headers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Measurement {
    #[serde(default)]
    pub name: Option<String>,
    pub value: f64,
    pub reference: f64,
}

impl Measurement {
    /// Display label for a row: its name, or its 1-based position.
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("row {}", index + 1),
        }
    }
}

/// Read every measurement row, failing on the first malformed one.
///
/// QA data entry must not silently drop measurements, so a row with a
/// missing column or an unparseable number fails the whole batch.
pub fn read_measurements<R: Read>(reader: R) -> Result<Vec<Measurement>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut measurements = Vec::new();
    for record in csv_reader.deserialize() {
        measurements.push(record?);
    }
    Ok(measurements)
}
