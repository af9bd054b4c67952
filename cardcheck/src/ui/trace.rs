// cardcheck/src/ui/trace.rs
//! Renders a validation report as human-readable diagnostic lines.
//!
//! Every line is reconstructed from the structured stage trace; nothing is
//! recomputed here. Colors are applied only when the caller says the
//! destination supports them.

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;

use cardcheck_core::{Confidence, StageOutcome, ValidationReport};

fn pass_fail(passed: bool, colored: bool) -> String {
    match (passed, colored) {
        (true, true) => "PASS".green().to_string(),
        (false, true) => "FAIL".red().to_string(),
        (true, false) => "PASS".to_string(),
        (false, false) => "FAIL".to_string(),
    }
}

/// Writes one `[INFO]` line per recorded stage, in engine order.
pub fn write_trace(
    out: &mut impl Write,
    report: &ValidationReport,
    colored: bool,
) -> Result<()> {
    for outcome in &report.trace {
        match outcome {
            StageOutcome::Normalized { digit_count } => {
                writeln!(out, "[INFO] Input normalized ({digit_count} digits)")?;
            }
            StageOutcome::LengthGate {
                digit_count,
                min,
                max,
                passed,
            } => {
                if *passed {
                    writeln!(out, "[INFO] Length check passed ({digit_count} digits)")?;
                } else {
                    writeln!(
                        out,
                        "[INFO] Length check failed ({digit_count} digits, accepted {min}-{max})"
                    )?;
                }
            }
            StageOutcome::IssuerDetected { issuer } => {
                writeln!(out, "[INFO] Issuer pattern recognized: {issuer}")?;
            }
            StageOutcome::LuhnChecksum { passed } => {
                writeln!(out, "[INFO] Luhn checksum: {}", pass_fail(*passed, colored))?;
            }
            StageOutcome::EntropyScore {
                bits,
                threshold,
                passed,
            } => {
                writeln!(
                    out,
                    "[INFO] Entropy score: {bits:.4} bits/digit (threshold: {threshold}) {}",
                    pass_fail(*passed, colored)
                )?;
            }
            StageOutcome::RepetitionScan { passed } => {
                writeln!(
                    out,
                    "[INFO] Repetition analysis: {}",
                    pass_fail(*passed, colored)
                )?;
            }
        }
    }
    Ok(())
}

/// Writes the final `[RESULT]` verdict line.
pub fn write_verdict(
    out: &mut impl Write,
    report: &ValidationReport,
    colored: bool,
) -> Result<()> {
    let verdict = match (report.result.valid, report.result.confidence) {
        (true, Some(Confidence::High)) => "Card number is VALID",
        (true, _) => "Card number is VALID (low confidence)",
        (false, _) => "Card number is INVALID",
    };

    if colored {
        if report.result.valid {
            writeln!(out, "[RESULT] {}", verdict.green().bold())?;
        } else {
            writeln!(out, "[RESULT] {}", verdict.red().bold())?;
        }
    } else {
        writeln!(out, "[RESULT] {verdict}")?;
    }
    Ok(())
}

/// Writes the `[TIME]` line with the elapsed nanoseconds measured by the caller.
pub fn write_timing(out: &mut impl Write, elapsed_ns: u128) -> Result<()> {
    writeln!(out, "[TIME] Verification completed in {elapsed_ns} ns")?;
    Ok(())
}
