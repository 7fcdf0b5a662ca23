//! Append-only JSONL break history.
//!
//! One record per executed break, carrying the before/after gauge
//! snapshots. The history file is observability output, separate from the
//! protocol response channel.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::report::{BreakReport, GaugeSnapshot};

/// One line of the break history file.
#[derive(Debug, Clone, Serialize)]
pub struct BreakRecord {
    pub seq: u64,
    pub tool: String,
    pub headline: String,
    pub boss_noticed: bool,
    pub before: GaugeSnapshot,
    pub after: GaugeSnapshot,
}

impl BreakRecord {
    pub fn from_report(seq: u64, report: &BreakReport) -> Self {
        Self {
            seq,
            tool: report.tool.to_string(),
            headline: report.headline.to_string(),
            boss_noticed: report.boss_noticed,
            before: report.before,
            after: report.after,
        }
    }
}

/// Logger writing break records to a JSONL file.
pub struct BreakLogger {
    writer: Option<BufWriter<File>>,
    record_count: u64,
}

impl BreakLogger {
    /// Create a logger writing to the specified path.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            record_count: 0,
        })
    }

    /// Logger that counts but discards records.
    pub fn null() -> Self {
        Self {
            writer: None,
            record_count: 0,
        }
    }

    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Append one record for the given report.
    pub fn log(&mut self, report: &BreakReport) -> io::Result<()> {
        self.record_count += 1;
        if let Some(ref mut writer) = self.writer {
            let record = BreakRecord::from_report(self.record_count, report);
            let json = serde_json::to_string(&record)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Flush buffered records to disk.
    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for BreakLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("failed to flush break history: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BreakReport {
        BreakReport {
            tool: "coffee_mission",
            headline: "Espresso machine calibrated.",
            detail_lines: vec![],
            boss_noticed: true,
            stress_level: 20,
            boss_alert_level: 1,
            before: GaugeSnapshot {
                stress_level: 35.0,
                boss_alert_level: 0,
            },
            after: GaugeSnapshot {
                stress_level: 20.0,
                boss_alert_level: 1,
            },
        }
    }

    #[test]
    fn test_null_logger_counts_records() {
        let mut logger = BreakLogger::null();

        logger.log(&sample_report()).unwrap();
        logger.log(&sample_report()).unwrap();

        assert_eq!(logger.record_count(), 2);
    }

    #[test]
    fn test_records_written_as_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");

        let mut logger = BreakLogger::new(&path).unwrap();
        logger.log(&sample_report()).unwrap();
        logger.log(&sample_report()).unwrap();
        logger.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["seq"], 1);
        assert_eq!(first["tool"], "coffee_mission");
        assert_eq!(first["boss_noticed"], true);
        assert_eq!(first["after"]["boss_alert_level"], 1);
    }
}
