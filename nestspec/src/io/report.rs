//! Machine-readable JSON report of a finished run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::results::{Results, SpecResult};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    total: usize,
    passed: usize,
    failed: usize,
    ignored: usize,
    passes_run: usize,
    specs: &'a [SpecResult],
}

/// Serialize `results` to pretty-printed JSON with trailing newline.
pub fn write_report(path: &Path, results: &Results) -> Result<()> {
    let report = JsonReport {
        total: results.total_count(),
        passed: results.pass_count(),
        failed: results.fail_count(),
        ignored: results.ignore_count(),
        passes_run: results.passes_run(),
        specs: results.specs(),
    };
    let mut payload = serde_json::to_string_pretty(&report).context("serialize report json")?;
    payload.push('\n');
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(path, payload).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
