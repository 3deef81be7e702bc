//! Input checking
//!
//! Reads the whole input once, then streams findings to a writer in line
//! order. Findings go to the writer; logs go through `log`.

use std::borrow::Cow;
use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, Result};

use crate::parser::{parse_line, split_lines};
use crate::validation::{Summary, validate_line};

/// Check already-buffered text, writing one line per finding
pub fn check_text<W: Write>(content: &str, out: &mut W) -> io::Result<Summary> {
    let mut summary = Summary::default();

    for (line_num, line) in split_lines(content).enumerate() {
        let outcome = validate_line(line_num, &parse_line(line));
        for finding in outcome.findings() {
            writeln!(out, "{finding}")?;
        }
        summary.record(&outcome);
    }

    Ok(summary)
}

/// Read `input` to end-of-stream, then check it
pub fn check_reader<R: Read, W: Write>(mut input: R, out: &mut W) -> Result<Summary> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .context("failed to read standard input")?;
    log::debug!("read {} bytes of input", bytes.len());

    let content = decode(&bytes);
    let summary = check_text(&content, out).context("failed to write findings")?;
    out.flush().context("failed to write findings")?;

    Ok(summary)
}

/// Check standard input and report to standard output
pub fn run() -> Result<Summary> {
    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());

    let summary = check_reader(stdin, &mut stdout)?;
    log::info!(
        "checked {} lines: {} findings ({} empty, {} field count, {} numeric), {} comments",
        summary.lines,
        summary.findings,
        summary.empty,
        summary.field_count_mismatches,
        summary.numeric,
        summary.comments,
    );

    Ok(summary)
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let content = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = content {
        log::warn!("input is not valid UTF-8; invalid sequences were replaced");
    }
    content
}
