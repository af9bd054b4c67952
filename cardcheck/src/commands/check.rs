// cardcheck/src/commands/check.rs
//! Check command implementation for validating candidate card numbers.

use std::fs;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use serde::Serialize;

use cardcheck_core::{
    merge_configs, CompositeEngine, ValidationConfig, ValidationEngine, ValidationReport,
};

use crate::cli::CheckCommand;
use crate::ui::trace;

/// Summary of one `check` run, used by `main` for the exit-code policy.
pub struct CheckSummary {
    pub total: usize,
    pub invalid: usize,
}

/// JSON envelope for a single candidate in `--json-stdout` mode.
#[derive(Serialize)]
struct CandidateReport<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ns: Option<u128>,
    report: &'a ValidationReport,
}

/// The main operation runner for the `check` command.
pub fn run_check(cmd: &CheckCommand) -> Result<CheckSummary> {
    info!("Starting cardcheck operation.");

    let user_config = match &cmd.config {
        Some(path) => Some(ValidationConfig::load_from_file(path)?),
        None => None,
    };
    let config = merge_configs(
        ValidationConfig::load_defaults()?,
        user_config,
    );
    let engine =
        CompositeEngine::new(config).context("Failed to initialize the validation engine")?;

    let candidates = collect_candidates(cmd)?;
    debug!("Collected {} candidate(s) to validate.", candidates.len());

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    let mut summary = CheckSummary {
        total: 0,
        invalid: 0,
    };

    for candidate in &candidates {
        // Timing is a presentation concern, so the clock runs out here
        // rather than inside the engine.
        let started = Instant::now();
        let report = engine.validate(candidate);
        let elapsed_ns = started.elapsed().as_nanos();

        if summary.total > 0 && !cmd.json_stdout {
            writeln!(writer)?;
        }
        summary.total += 1;
        if !report.result.valid {
            summary.invalid += 1;
        }

        if cmd.json_stdout {
            let payload = CandidateReport {
                input: candidate,
                elapsed_ns: (!cmd.no_timing).then_some(elapsed_ns),
                report: &report,
            };
            serde_json::to_writer(&mut writer, &payload)?;
            writeln!(writer)?;
        } else {
            if !cmd.no_trace {
                trace::write_trace(&mut writer, &report, supports_color)?;
            }
            trace::write_verdict(&mut writer, &report, supports_color)?;
            if !cmd.no_timing {
                trace::write_timing(&mut writer, elapsed_ns)?;
            }
        }
    }

    info!(
        "Cardcheck operation completed: {} candidate(s), {} invalid.",
        summary.total, summary.invalid
    );
    Ok(summary)
}

/// Resolves the candidate list from the positional argument, an input
/// file, or stdin. Blank lines are skipped.
fn collect_candidates(cmd: &CheckCommand) -> Result<Vec<String>> {
    if let Some(number) = &cmd.number {
        return Ok(vec![number.clone()]);
    }

    let lines: Vec<String> = match &cmd.input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?
            .lines()
            .map(str::to_owned)
            .collect(),
        None => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<_>>()
            .context("Failed to read candidates from stdin")?,
    };

    Ok(lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect())
}
