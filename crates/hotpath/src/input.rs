//! Reading path lists

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read one path per line from a file, or stdin when `file` is `None`
pub fn read_paths(file: Option<&Path>) -> Result<Vec<String>> {
    match file {
        Some(path) => {
            info!("Reading paths from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            parse_lines(BufReader::new(file))
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            info!("Reading paths from stdin");
            parse_lines(io::stdin().lock()).context("Failed to read stdin")
        }
    }
}

/// Collect non-blank lines, dropping line terminators only
///
/// Paths are otherwise kept verbatim; surrounding whitespace is part of the
/// path.
pub fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }
        paths.push(line.to_string());
    }
    debug!("Read {} paths", paths.len());
    Ok(paths)
}
