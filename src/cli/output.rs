//! Output formatting utilities for CLI commands

use std::io::{self, BufWriter, StdoutLock};

use crate::stream::RunStats;

/// Format error message for display
pub fn format_error(operation: &str, details: &str) -> String {
    format!("ERROR: {} - {}", operation, details)
}

/// Buffered, locked stdout; stages flush it after every input record.
pub fn stdout_writer() -> BufWriter<StdoutLock<'static>> {
    BufWriter::new(io::stdout().lock())
}

/// Log the end-of-run counters.
pub fn log_summary(command: &str, stats: RunStats) {
    log::info!(
        "{}: {} records in, {} records out",
        command,
        stats.records_in,
        stats.records_out
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line_names_the_operation() {
        assert_eq!(
            format_error("locations", "Missing file: cities.txt"),
            "ERROR: locations - Missing file: cities.txt"
        );
    }
}
