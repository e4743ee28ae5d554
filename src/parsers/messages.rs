use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::Message;
use crate::utils::validate_file_size;

/// Abort after this many bad lines in a row: a run this long means the input
/// is not line-delimited JSON at all.
const MAX_CONSECUTIVE_FAILURES: usize = 100;

/// Running tally of good and bad lines, used to tell scattered corruption
/// (tolerated) apart from a fundamentally broken file (rejected).
#[derive(Debug, Default)]
struct ParseTally {
    parsed: usize,
    failed: usize,
    failed_in_a_row: usize,
}

impl ParseTally {
    fn record_success(&mut self) {
        self.parsed += 1;
        self.failed_in_a_row = 0;
    }

    fn record_failure(&mut self) {
        self.failed += 1;
        self.failed_in_a_row += 1;
    }

    fn run_too_long(&self) -> bool {
        self.failed_in_a_row >= MAX_CONSECUTIVE_FAILURES
    }

    fn mostly_failures(&self) -> bool {
        self.failed * 2 > self.parsed + self.failed
    }
}

/// Read a messages.jsonl export, one JSON message per line.
///
/// A single damaged record is warned about on stderr and skipped, so it
/// cannot take the whole agenda down. The load is rejected outright when bad
/// lines are the majority or when a long unbroken run of them shows the file
/// is not JSONL; oversized files are refused before reading.
pub fn parse_messages_file(path: &Path) -> Result<Vec<Message>> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open messages file: {}", path.display()))?;
    // size check on the handle we will read from, not a second stat of the path
    validate_file_size(&file, path)?;

    let mut messages = Vec::new();
    let mut tally = ParseTally::default();

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line =
            line.with_context(|| format!("Read error in messages file: {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Message>(&line) {
            Ok(message) => {
                tally.record_success();
                messages.push(message);
            }
            Err(e) => {
                tally.record_failure();
                eprintln!("Warning: skipping message on line {}: {}", idx + 1, e);
                if tally.run_too_long() {
                    bail!(
                        "Giving up on {}: {} unparseable lines in a row",
                        path.display(),
                        tally.failed_in_a_row
                    );
                }
            }
        }
    }

    if tally.mostly_failures() {
        bail!(
            "Rejecting {}: {} of {} lines unparseable",
            path.display(),
            tally.failed,
            tally.parsed + tally.failed
        );
    }

    if tally.failed > 0 {
        eprintln!(
            "Loaded {} messages from {} ({} lines skipped)",
            messages.len(),
            path.display(),
            tally.failed
        );
    }

    Ok(messages)
}
