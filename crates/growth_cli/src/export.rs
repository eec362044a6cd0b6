//! CSV persistence of every computed step.

use anyhow::{Context, Result};
use growth_core::SimulationSample;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADER: [&str; 4] = ["Time", "Population", "GrowthRate", "PercentageOfK"];

pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl CsvSink<File> {
    pub fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        Self::new(file)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer
            .write_record(CSV_HEADER)
            .context("Failed to write CSV header")?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn record(&mut self, sample: &SimulationSample) -> Result<()> {
        self.writer
            .write_record([
                format!("{:.4}", sample.t),
                format!("{:.4}", sample.population),
                format!("{:.6}", sample.growth_rate),
                format!("{:.4}", sample.percent_of_k),
            ])
            .with_context(|| format!("Failed to write CSV row at t = {:.4}", sample.t))?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().context("Failed to flush CSV output")?;
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to finish CSV output: {}", e.error()))
    }
}
