//! Serializable comparison report.

use crate::bench::workload::Measurement;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One measured point, field names as emitted in the JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchResult {
    /// Keys inserted or looked up
    pub data_count: usize,
    /// Chained load factor, percent
    pub bucket_addressing_load_factor: f64,
    /// Open-addressing load factor, percent
    pub open_addressing_load_factor: f64,
    /// Chained wall-clock time, milliseconds
    pub bucket_addressing_time: f64,
    /// Open-addressing wall-clock time, milliseconds
    pub open_addressing_time: f64,
    /// Longest chain in the chained map
    pub bucket_addressing_longest_chain: usize,
    /// Longest probe run in the open-addressing map
    pub open_addressing_longest_probe: usize,
}

impl From<Measurement> for BenchResult {
    fn from(m: Measurement) -> Self {
        Self {
            data_count: m.data_count,
            bucket_addressing_load_factor: m.chained_load_factor,
            open_addressing_load_factor: m.open_load_factor,
            bucket_addressing_time: m.chained_ms,
            open_addressing_time: m.open_ms,
            bucket_addressing_longest_chain: m.chained_longest_run,
            open_addressing_longest_probe: m.open_longest_run,
        }
    }
}

/// A named group of measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchCategory {
    /// Human readable category title
    pub bench_category: String,
    /// Measurements in run order
    pub results: Vec<BenchResult>,
}

impl BenchCategory {
    /// Empty category with the given title
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            bench_category: title.into(),
            results: Vec::new(),
        }
    }
}

/// Full report; serializes as a JSON array of categories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchReport {
    /// Categories in run order
    pub categories: Vec<BenchCategory>,
}

impl BenchReport {
    /// Render as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty-printed JSON followed by a newline
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Parse a report previously written with [`BenchReport::write_json`]
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BenchReport {
        let mut category = BenchCategory::new("Insertion with increasing load factors");
        category.results.push(BenchResult {
            data_count: 10_000,
            bucket_addressing_load_factor: 18.25,
            open_addressing_load_factor: 18.25,
            bucket_addressing_time: 1.5,
            open_addressing_time: 0.75,
            bucket_addressing_longest_chain: 4,
            open_addressing_longest_probe: 9,
        });
        BenchReport {
            categories: vec![category],
        }
    }

    #[test]
    fn test_json_shape() {
        let json = sample().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let categories = value.as_array().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(
            categories[0]["bench_category"],
            "Insertion with increasing load factors"
        );
        let result = &categories[0]["results"][0];
        assert_eq!(result["data_count"], 10_000);
        assert_eq!(result["open_addressing_time"], 0.75);
        assert_eq!(result["bucket_addressing_longest_chain"], 4);
    }

    #[test]
    fn test_write_and_parse() {
        let report = sample();
        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("]\n"));
        assert_eq!(BenchReport::from_json(&text).unwrap(), report);
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(BenchReport::default().to_json_pretty().unwrap(), "[]");
    }
}
