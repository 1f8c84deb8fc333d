//! Line-at-a-time driver for [`Stage`]s.
//!
//! Reads newline-delimited TSV, hands each record to the stage and writes
//! the resulting records before reading the next line, so downstream
//! consumers see output as soon as it exists. The first bad record stops the
//! run with its 1-based line number.

use std::io::{BufRead, Write};

use kbner_core::tsv::columns;
use kbner_core::{Stage, TsvRecord};
use serde::Serialize;

use crate::Result;

/// How output records are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Tab-separated columns, `\N` for NULL (default)
    #[default]
    Tsv,
    /// One JSON object per line
    Jsonl,
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Input records read.
    pub records_in: usize,
    /// Output records written.
    pub records_out: usize,
}

impl RunStats {
    /// Accumulate another run's counters.
    pub fn add(&mut self, other: RunStats) {
        self.records_in += other.records_in;
        self.records_out += other.records_out;
    }
}

/// Write one record followed by a newline.
pub fn write_record<R, W>(writer: &mut W, record: &R, format: OutputFormat) -> Result<()>
where
    R: TsvRecord + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Tsv => writeln!(writer, "{}", record.to_tsv())?,
        OutputFormat::Jsonl => {
            serde_json::to_writer(&mut *writer, record)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Run `stage` over every line of `reader`.
///
/// # Errors
///
/// IO failures, and the first record the stage rejects, wrapped with its
/// line number.
pub fn run_stage<S, R, W>(stage: &S, reader: R, mut writer: W, format: OutputFormat) -> Result<RunStats>
where
    S: Stage + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut stats = RunStats::default();
    let mut out = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| kbner_core::Error::from(e).at_line(line_no))?;

        let cols = columns(&line, stage.columns()).map_err(|e| e.at_line(line_no))?;
        stage
            .process(&cols, &mut out)
            .map_err(|e| e.at_line(line_no))?;

        for record in out.drain(..) {
            write_record(&mut writer, &record, format)?;
            stats.records_out += 1;
        }
        writer.flush()?;
        stats.records_in += 1;
    }

    log::debug!(
        "{}: {} records in, {} out",
        stage.name(),
        stats.records_in,
        stats.records_out
    );
    Ok(stats)
}
