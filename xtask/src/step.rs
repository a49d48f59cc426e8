//! Shared runner for the cargo invocations behind each task.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::{Command, Output};
use std::time::Instant;

/// What to do when a step fails.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Print the output and abort the task.
    Abort,
    /// Print a warning and carry on.
    Warn,
}

/// Run `cargo <args>` and report the outcome under `label`.
///
/// Returns the captured output when the step passed, `None` when it failed
/// with [`OnFailure::Warn`].
pub fn cargo(label: &str, args: &[&str], on_failure: OnFailure) -> Result<Option<Output>> {
    println!("{}", format!("  {label}...").cyan());
    let start = Instant::now();

    let output = Command::new("cargo")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if output.status.success() {
        println!(
            "{}",
            format!("  ✓ {label} passed in {:.2}s", start.elapsed().as_secs_f64()).green()
        );
        println!();
        return Ok(Some(output));
    }

    match on_failure {
        OnFailure::Abort => {
            eprintln!("{}", format!("  ✗ {label} failed").red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stdout));
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("{label} failed");
        }
        OnFailure::Warn => {
            eprintln!("{}", format!("  ⚠ {label} reported problems").yellow().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            println!();
            Ok(None)
        }
    }
}

/// Print the closing line of a task.
pub fn finish(task: &str, start: Instant) {
    println!(
        "{}",
        format!("✓ {task} completed in {:.2}s", start.elapsed().as_secs_f64())
            .green()
            .bold()
    );
    println!();
}

/// Pull the passed/failed counts out of libtest output, summed over every
/// test binary.
pub fn test_summary(output: &Output) -> String {
    summarize(&String::from_utf8_lossy(&output.stdout))
}

fn summarize(stdout: &str) -> String {
    let (passed, failed) = stdout
        .lines()
        .filter_map(|line| line.split("test result:").nth(1))
        .fold((0u64, 0u64), |(passed, failed), summary| {
            (
                passed.saturating_add(count(summary, "passed")),
                failed.saturating_add(count(summary, "failed")),
            )
        });
    format!("({passed} passed, {failed} failed)")
}

/// `"ok. 5 passed; 0 failed"` with `what = "passed"` gives 5.
fn count(summary: &str, what: &str) -> u64 {
    summary
        .split(';')
        .filter_map(|part| {
            let mut words = part.split_whitespace().rev();
            if words.next() != Some(what) {
                return None;
            }
            words.next()?.parse::<u64>().ok()
        })
        .sum()
}
